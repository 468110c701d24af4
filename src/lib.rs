pub mod direction;
pub mod error;
pub mod logistics;
pub mod render;
pub mod square;
pub mod tables;
