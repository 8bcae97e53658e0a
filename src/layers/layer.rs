use crate::activation::Activation;
use crate::errors::NetworkError;
use crate::params::{Biases, Weights};

/// One stage of neurons in the chain.
///
/// A layer owns its activated values, its pre-activation values (z = Wx + b,
/// needed for the correct derivative during training), an optional outgoing
/// weight matrix and an optional incoming bias vector. Adjacency is not
/// stored here; the owning `Network` pairs neighbors up by index.
#[derive(Debug, Clone)]
pub struct Layer {
    pub size: usize,
    pub neurons: Vec<f64>,
    pub raw_neurons: Vec<f64>,
    pub weights: Option<Weights>,
    pub biases: Option<Biases>,
}

impl Layer {
    /// Creates a layer with the given neuron count and no parameters.
    pub fn new(size: usize) -> Layer {
        Layer {
            size,
            neurons: vec![0.0; size],
            raw_neurons: vec![0.0; size],
            weights: None,
            biases: None,
        }
    }

    /// Attaches an outgoing weight matrix. Every row must be as wide as this
    /// layer; the row count is checked against the downstream layer when the
    /// connection runs.
    pub fn add_weights(&mut self, weights: Weights) -> Result<&mut Layer, NetworkError> {
        if weights.cols != self.size {
            return Err(NetworkError::DimensionMismatch {
                expected_rows: weights.rows,
                expected_cols: self.size,
                actual_rows: weights.rows,
                actual_cols: weights.cols,
            });
        }
        self.weights = Some(weights);
        Ok(self)
    }

    /// Attaches the layer's bias vector; its length must match the layer size.
    pub fn add_biases(&mut self, biases: Biases) -> Result<&mut Layer, NetworkError> {
        if biases.len() != self.size {
            return Err(NetworkError::LengthMismatch {
                expected: self.size,
                actual: biases.len(),
            });
        }
        self.biases = Some(biases);
        Ok(self)
    }

    /// Overwrites the activated values; on length mismatch nothing is written.
    pub fn populate(&mut self, data: &[f64]) -> Result<&mut Layer, NetworkError> {
        if data.len() != self.size {
            return Err(NetworkError::LengthMismatch {
                expected: self.size,
                actual: data.len(),
            });
        }
        self.neurons.copy_from_slice(data);
        Ok(self)
    }

    /// Recomputes every activated value from the stored pre-activation value.
    pub fn apply(&mut self, activation: &Activation) -> &mut Layer {
        for (neuron, &raw) in self.neurons.iter_mut().zip(self.raw_neurons.iter()) {
            *neuron = activation.source(raw);
        }
        self
    }

    /// Runs the connection into `next`, writing its pre-activation values:
    /// `next.raw_neurons[r] = sum_c neurons[c] * weights[r][c] + next.biases[r]`.
    ///
    /// Activation is applied separately so that training can read the raw
    /// values afterwards.
    pub fn run_into(&self, next: &mut Layer) -> Result<(), NetworkError> {
        let weights = self.weights.as_ref().ok_or(NetworkError::MissingWeights)?;
        if weights.rows != next.size {
            return Err(NetworkError::DimensionMismatch {
                expected_rows: next.size,
                expected_cols: self.size,
                actual_rows: weights.rows,
                actual_cols: weights.cols,
            });
        }
        let biases = next.biases.as_ref().ok_or(NetworkError::MissingBiases)?;

        let raw: Vec<f64> = (0..next.size)
            .map(|r| {
                self.neurons
                    .iter()
                    .zip(weights.data[r].iter())
                    .map(|(neuron, weight)| neuron * weight)
                    .sum::<f64>()
                    + biases.data[r]
            })
            .collect();
        next.raw_neurons = raw;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_rejects_wrong_length_without_writing() {
        let mut layer = Layer::new(3);
        layer.populate(&[1.0, 2.0, 3.0]).unwrap();

        let err = layer.populate(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, NetworkError::LengthMismatch { expected: 3, actual: 2 });
        assert_eq!(layer.neurons, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn add_weights_rejects_wrong_row_width() {
        let mut layer = Layer::new(3);
        let err = layer.add_weights(Weights::new(2, 4)).unwrap_err();
        assert!(matches!(err, NetworkError::DimensionMismatch { .. }));
        assert!(layer.weights.is_none());

        layer.add_weights(Weights::new(3, 4)).unwrap();
        assert!(layer.weights.is_some());
    }

    #[test]
    fn add_biases_rejects_wrong_length() {
        let mut layer = Layer::new(3);
        let err = layer.add_biases(Biases::new(2)).unwrap_err();
        assert_eq!(err, NetworkError::LengthMismatch { expected: 3, actual: 2 });
        assert!(layer.biases.is_none());
    }

    #[test]
    fn run_into_computes_the_affine_transform() {
        let mut input = Layer::new(2);
        let mut output = Layer::new(2);

        let mut weights = Weights::new(2, 2);
        weights
            .populate(&[vec![1.0, 2.0], vec![3.0, 4.0]])
            .unwrap();
        input.add_weights(weights).unwrap();

        let mut biases = Biases::new(2);
        biases.populate(&[0.5, -0.5]).unwrap();
        output.add_biases(biases).unwrap();

        input.populate(&[1.0, 1.0]).unwrap();
        input.run_into(&mut output).unwrap();
        assert_eq!(output.raw_neurons, vec![3.5, 6.5]);

        output.apply(&Activation::Identity);
        assert_eq!(output.neurons, vec![3.5, 6.5]);
    }

    #[test]
    fn run_into_requires_weights_and_biases() {
        let mut input = Layer::new(1);
        let mut output = Layer::new(1);

        assert_eq!(
            input.run_into(&mut output).unwrap_err(),
            NetworkError::MissingWeights
        );

        input.add_weights(Weights::new(1, 1)).unwrap();
        assert_eq!(
            input.run_into(&mut output).unwrap_err(),
            NetworkError::MissingBiases
        );
    }

    #[test]
    fn run_into_checks_row_count_against_downstream_size() {
        let mut input = Layer::new(1);
        let mut output = Layer::new(2);
        input.add_weights(Weights::new(1, 1)).unwrap();
        output.add_biases(Biases::new(2)).unwrap();

        let err = input.run_into(&mut output).unwrap_err();
        assert!(matches!(err, NetworkError::DimensionMismatch { .. }));
    }
}
