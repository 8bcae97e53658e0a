pub mod weights;
pub mod biases;

pub use weights::Weights;
pub use biases::Biases;
