pub mod hit_handling;
pub mod launcher;
