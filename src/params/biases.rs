use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::errors::NetworkError;

/// A bias vector owned by one non-input layer; length equals the layer size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Biases {
    pub data: Vec<f64>,
}

impl Biases {
    /// Creates an all-zero vector of the given length.
    pub fn new(len: usize) -> Biases {
        Biases { data: vec![0.0; len] }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Replaces every entry with an independent uniform draw in `[-1, 1)`.
    pub fn fill_random(&mut self, rng: &mut impl Rng) -> &mut Biases {
        for entry in &mut self.data {
            *entry = rng.gen::<f64>() * 2.0 - 1.0;
        }
        self
    }

    /// Overwrites the vector element-wise from `data`; on length mismatch no
    /// entry is written.
    pub fn populate(&mut self, data: &[f64]) -> Result<&mut Biases, NetworkError> {
        if data.len() != self.data.len() {
            return Err(NetworkError::LengthMismatch {
                expected: self.data.len(),
                actual: data.len(),
            });
        }
        self.data.copy_from_slice(data);
        Ok(self)
    }
}
