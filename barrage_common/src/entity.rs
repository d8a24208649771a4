pub mod actor;
pub mod block;
pub mod block_class;
pub mod chunk;
