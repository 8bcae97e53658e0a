use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::errors::NetworkError;

/// A weight matrix for one inter-layer connection.
///
/// `rows` is the downstream layer size, `cols` the upstream layer size, so
/// `data[output][input]` is the weight on the edge from `input` to `output`.
/// The engine only ever mutates entries in place; the shape is fixed at
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weights {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Weights {
    /// Creates an all-zero matrix with `output_height` rows of width
    /// `input_width`.
    pub fn new(input_width: usize, output_height: usize) -> Weights {
        Weights {
            rows: output_height,
            cols: input_width,
            data: vec![vec![0.0; input_width]; output_height],
        }
    }

    /// Replaces every entry with an independent uniform draw in `[0, 1)`.
    pub fn fill_random(&mut self, rng: &mut impl Rng) -> &mut Weights {
        for row in &mut self.data {
            for entry in row.iter_mut() {
                *entry = rng.gen::<f64>();
            }
        }
        self
    }

    /// Overwrites the matrix element-wise from `data`.
    ///
    /// The whole source shape is checked up front; on mismatch no entry is
    /// written.
    pub fn populate(&mut self, data: &[Vec<f64>]) -> Result<&mut Weights, NetworkError> {
        if data.len() != self.rows || data.iter().any(|row| row.len() != self.cols) {
            return Err(NetworkError::DimensionMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                actual_rows: data.len(),
                actual_cols: data.first().map_or(0, |row| row.len()),
            });
        }

        for (dst, src) in self.data.iter_mut().zip(data.iter()) {
            dst.copy_from_slice(src);
        }
        Ok(self)
    }
}
