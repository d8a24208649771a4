pub mod actor;
pub mod barrage_class;
pub mod chunk;
