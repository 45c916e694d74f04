pub mod error;
pub mod color;
pub mod buffer;
pub mod matcher;
