pub mod hit_event;
pub mod tick_timer;
