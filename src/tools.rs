pub mod geometry;
pub mod brush;
pub mod fill;
