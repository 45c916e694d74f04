pub mod state;
pub mod events;
pub mod engine;
