pub mod barrage_class;
