pub mod network;

pub use network::{Network, DEFAULT_LEARNING_RATE};
