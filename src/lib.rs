pub mod activation;
pub mod errors;
pub mod layers;
pub mod loss;
pub mod network;
pub mod params;
pub mod train;

// Convenience re-exports
pub use activation::Activation;
pub use errors::NetworkError;
pub use layers::Layer;
pub use loss::MseLoss;
pub use network::{Network, DEFAULT_LEARNING_RATE};
pub use params::{Biases, Weights};
pub use train::{train_network, TrainConfig};
