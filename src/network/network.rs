use rand::Rng;

use crate::activation::Activation;
use crate::errors::NetworkError;
use crate::layers::Layer;
use crate::params::{Biases, Weights};

/// Learning rate used by [`Network::backpropagate_with_defaults`].
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

/// An ordered chain of layers sharing one activation.
///
/// The network owns its layers exclusively; neighbor lookups are done by
/// index, front to back. A meaningful forward or backward pass needs at
/// least two layers. The activation is fixed at construction and applied
/// uniformly to every non-input layer.
///
/// Lifecycle: build (`new` / `from_layers`), wire (`connect`, `add_weights`,
/// `add_biases`), then drive `populate -> run -> backpropagate` cycles as
/// often as wanted. Re-invoking `add_weights`/`add_biases` discards and
/// re-randomizes the parameters.
#[derive(Debug)]
pub struct Network {
    pub layers: Vec<Layer>,
    activation: Activation,
    connected: bool,
}

impl Network {
    /// Builds a network with one layer per entry of `sizes`.
    pub fn new(sizes: &[usize], activation: Activation) -> Network {
        Network::from_layers(sizes.iter().map(|&size| Layer::new(size)).collect(), activation)
    }

    /// Builds a network from pre-existing layers, reusing whatever neurons
    /// and parameters they already carry.
    pub fn from_layers(layers: Vec<Layer>, activation: Activation) -> Network {
        Network {
            layers,
            activation,
            connected: false,
        }
    }

    /// The activation shared by all non-input layers.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Wires the chain front to back. The layers are already adjacent by
    /// index, so this marks the topology as final; re-running it is a no-op.
    pub fn connect(&mut self) -> &mut Network {
        self.connected = true;
        self
    }

    /// Attaches a freshly randomized weight matrix of the correct shape to
    /// every layer except the last, drawing from `thread_rng`. Replaces any
    /// previously attached weights.
    pub fn add_weights(&mut self) -> &mut Network {
        self.add_weights_with(&mut rand::thread_rng())
    }

    /// Same as [`Network::add_weights`], with a caller-supplied generator.
    pub fn add_weights_with(&mut self, rng: &mut impl Rng) -> &mut Network {
        for i in 0..self.layers.len().saturating_sub(1) {
            let mut weights = Weights::new(self.layers[i].size, self.layers[i + 1].size);
            weights.fill_random(rng);
            self.layers[i].weights = Some(weights);
        }
        self
    }

    /// Attaches a freshly randomized bias vector to every layer except the
    /// first, drawing from `thread_rng`. Replaces any previously attached
    /// biases.
    pub fn add_biases(&mut self) -> &mut Network {
        self.add_biases_with(&mut rand::thread_rng())
    }

    /// Same as [`Network::add_biases`], with a caller-supplied generator.
    pub fn add_biases_with(&mut self, rng: &mut impl Rng) -> &mut Network {
        for layer in self.layers.iter_mut().skip(1) {
            let mut biases = Biases::new(layer.size);
            biases.fill_random(rng);
            layer.biases = Some(biases);
        }
        self
    }

    /// Writes the input into the first layer's neurons.
    pub fn populate(&mut self, data: &[f64]) -> Result<&mut Network, NetworkError> {
        let first = self.layers.first_mut().ok_or(NetworkError::NotConnected)?;
        first.populate(data)?;
        Ok(self)
    }

    /// Alias for [`Network::populate`].
    pub fn feed(&mut self, data: &[f64]) -> Result<&mut Network, NetworkError> {
        self.populate(data)
    }

    /// One full forward sweep, strictly left to right: each connection is
    /// run and the downstream layer activated before the next connection
    /// runs, since every layer's raw values depend on the previous layer's
    /// already-activated values. The input layer is left untouched.
    pub fn run(&mut self) -> Result<&mut Network, NetworkError> {
        if !self.connected {
            return Err(NetworkError::NotConnected);
        }
        let activation = self.activation;
        for i in 0..self.layers.len().saturating_sub(1) {
            let (left, right) = self.layers.split_at_mut(i + 1);
            left[i].run_into(&mut right[0])?;
            right[0].apply(&activation);
        }
        Ok(self)
    }

    /// The last layer's activated neurons, i.e. the network output.
    pub fn output(&self) -> &[f64] {
        self.layers.last().map_or(&[], |layer| layer.neurons.as_slice())
    }

    /// One full parameter-update sweep from the error between the output
    /// layer and `targets`.
    ///
    /// All deltas are computed from the pre-update parameters and forward
    /// results before any weight or bias changes, so the whole update is a
    /// pure function of the state at the start of the call. Each weight
    /// becomes `lr * delta_out * input_neuron + momentum * weight`, each
    /// bias `lr * delta + momentum * bias`: the momentum coefficient decays
    /// the current parameter value itself, it does not track a running
    /// velocity as textbook momentum would. In particular `momentum = 1.0`
    /// gives the plain additive gradient step, while `momentum = 0.0` makes
    /// every parameter a function of the latest deltas alone.
    ///
    /// `learning_rate` is meant to lie in `(0, 1]` and `momentum` in
    /// `[0, 1)`; values outside those ranges are accepted and only change
    /// convergence behavior.
    pub fn backpropagate(
        &mut self,
        targets: &[f64],
        learning_rate: f64,
        momentum: f64,
    ) -> Result<&mut Network, NetworkError> {
        if !self.connected {
            return Err(NetworkError::NotConnected);
        }
        let last = self.layers.last().ok_or(NetworkError::NotConnected)?;
        if targets.len() != last.size {
            return Err(NetworkError::LengthMismatch {
                expected: last.size,
                actual: targets.len(),
            });
        }

        // Every parameter must be present before the first mutation, so a
        // missing matrix cannot leave the network half-updated.
        let count = self.layers.len();
        for (i, layer) in self.layers.iter().enumerate() {
            if i + 1 < count && layer.weights.is_none() {
                return Err(NetworkError::MissingWeights);
            }
            if i > 0 && layer.biases.is_none() {
                return Err(NetworkError::MissingBiases);
            }
        }

        let deltas = self.calculate_deltas(targets)?;

        for l in 0..count {
            let layer = &mut self.layers[l];

            if l + 1 < count {
                if let Some(weights) = layer.weights.as_mut() {
                    for (r, row) in weights.data.iter_mut().enumerate() {
                        let delta = deltas[l + 1][r];
                        for (c, weight) in row.iter_mut().enumerate() {
                            *weight = learning_rate * delta * layer.neurons[c]
                                + momentum * *weight;
                        }
                    }
                }
            }

            if l > 0 {
                if let Some(biases) = layer.biases.as_mut() {
                    for (j, bias) in biases.data.iter_mut().enumerate() {
                        *bias = learning_rate * deltas[l][j] + momentum * *bias;
                    }
                }
            }
        }

        Ok(self)
    }

    /// [`Network::backpropagate`] with the stock hyperparameters: learning
    /// rate [`DEFAULT_LEARNING_RATE`] and a fresh uniform `[0, 1)` momentum
    /// draw per call.
    pub fn backpropagate_with_defaults(
        &mut self,
        targets: &[f64],
    ) -> Result<&mut Network, NetworkError> {
        let momentum = rand::thread_rng().gen::<f64>();
        self.backpropagate(targets, DEFAULT_LEARNING_RATE, momentum)
    }

    /// One delta per neuron of every non-input layer, computed from the
    /// output layer back to the front:
    ///
    /// - output layer: `(target - neuron) * derivative(raw)`
    /// - hidden layer: `(sum of downstream deltas through the outgoing
    ///   weights) * derivative(raw)`
    ///
    /// The downstream sum walks the same weight matrix the forward pass
    /// used, row = downstream neuron, column = this neuron.
    fn calculate_deltas(&self, targets: &[f64]) -> Result<Vec<Vec<f64>>, NetworkError> {
        let count = self.layers.len();
        let mut deltas = vec![Vec::new(); count];
        if count < 2 {
            return Ok(deltas);
        }

        let last = count - 1;
        let output = &self.layers[last];
        deltas[last] = output
            .neurons
            .iter()
            .zip(output.raw_neurons.iter())
            .enumerate()
            .map(|(j, (&neuron, &raw))| (targets[j] - neuron) * self.activation.derivative(raw))
            .collect();

        for l in (1..last).rev() {
            let layer = &self.layers[l];
            let weights = layer.weights.as_ref().ok_or(NetworkError::MissingWeights)?;
            let layer_deltas: Vec<f64> = (0..layer.size)
                .map(|j| {
                    let downstream: f64 = deltas[l + 1]
                        .iter()
                        .zip(weights.data.iter())
                        .map(|(&delta, row)| delta * row[j])
                        .sum();
                    downstream * self.activation.derivative(layer.raw_neurons[j])
                })
                .collect();
            deltas[l] = layer_deltas;
        }

        Ok(deltas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wired(sizes: &[usize], activation: Activation, seed: u64) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut network = Network::new(sizes, activation);
        network
            .connect()
            .add_weights_with(&mut rng)
            .add_biases_with(&mut rng);
        network
    }

    /// A [1, 1] network with weights [[2]] and bias [0.5], per-test activation.
    fn single_connection(activation: Activation) -> Network {
        let mut network = Network::new(&[1, 1], activation);
        network.connect();
        let mut weights = Weights::new(1, 1);
        weights.populate(&[vec![2.0]]).unwrap();
        network.layers[0].add_weights(weights).unwrap();
        let mut biases = Biases::new(1);
        biases.populate(&[0.5]).unwrap();
        network.layers[1].add_biases(biases).unwrap();
        network
    }

    #[test]
    fn wiring_attaches_correctly_shaped_parameters() {
        let network = wired(&[3, 4, 2], Activation::Sigmoid, 1);

        let w0 = network.layers[0].weights.as_ref().unwrap();
        assert_eq!((w0.rows, w0.cols), (4, 3));
        let w1 = network.layers[1].weights.as_ref().unwrap();
        assert_eq!((w1.rows, w1.cols), (2, 4));
        assert!(network.layers[2].weights.is_none());

        assert!(network.layers[0].biases.is_none());
        assert_eq!(network.layers[1].biases.as_ref().unwrap().len(), 4);
        assert_eq!(network.layers[2].biases.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn rewiring_replaces_parameters() {
        let mut network = wired(&[2, 2], Activation::Sigmoid, 1);
        let before = network.layers[0].weights.as_ref().unwrap().data.clone();

        let mut rng = StdRng::seed_from_u64(2);
        network.add_weights_with(&mut rng);
        let after = network.layers[0].weights.as_ref().unwrap().data.clone();
        assert_ne!(before, after);
    }

    #[test]
    fn forward_pass_is_deterministic() {
        let mut network = wired(&[2, 3, 1], Activation::Sigmoid, 42);
        network.populate(&[0.25, -0.75]).unwrap();

        network.run().unwrap();
        let first_raw = network.layers[1].raw_neurons.clone();
        let first_out = network.output().to_vec();

        network.run().unwrap();
        assert_eq!(network.layers[1].raw_neurons, first_raw);
        assert_eq!(network.output(), first_out.as_slice());
    }

    #[test]
    fn single_connection_identity_scenario() {
        let mut network = single_connection(Activation::Identity);
        network.populate(&[3.0]).unwrap().run().unwrap();

        assert_eq!(network.layers[1].raw_neurons, vec![6.5]);
        assert_eq!(network.output(), &[6.5]);
    }

    #[test]
    fn single_connection_sigmoid_scenario() {
        let mut network = single_connection(Activation::Sigmoid);
        network.populate(&[3.0]).unwrap().run().unwrap();

        assert_eq!(network.layers[1].raw_neurons, vec![6.5]);
        let expected = 1.0 / (1.0 + (-6.5f64).exp());
        assert!((network.output()[0] - expected).abs() < 1e-12);
        assert!((network.output()[0] - 0.99850).abs() < 1e-5);
    }

    #[test]
    fn identity_network_computes_the_affine_transform() {
        let mut network = Network::new(&[2, 2], Activation::Identity);
        network.connect();
        let mut weights = Weights::new(2, 2);
        weights.populate(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        network.layers[0].add_weights(weights).unwrap();
        let mut biases = Biases::new(2);
        biases.populate(&[0.5, -0.5]).unwrap();
        network.layers[1].add_biases(biases).unwrap();

        network.populate(&[1.0, 1.0]).unwrap().run().unwrap();
        assert_eq!(network.output(), &[3.5, 6.5]);
    }

    #[test]
    fn populate_rejects_wrong_length_without_mutation() {
        let mut network = wired(&[3, 2], Activation::Sigmoid, 1);
        network.populate(&[0.1, 0.2, 0.3]).unwrap();

        let err = network.populate(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, NetworkError::LengthMismatch { expected: 3, actual: 2 });
        assert_eq!(network.layers[0].neurons, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn run_requires_connect() {
        let mut network = Network::new(&[2, 1], Activation::Sigmoid);
        network.add_weights().add_biases();
        network.populate(&[1.0, 0.0]).unwrap();
        assert_eq!(network.run().unwrap_err(), NetworkError::NotConnected);
    }

    #[test]
    fn backpropagate_blends_gradient_and_decayed_parameter() {
        let mut network = single_connection(Activation::Identity);
        network.populate(&[3.0]).unwrap().run().unwrap();

        // delta = (7 - 6.5) * 1 = 0.5
        network.backpropagate(&[7.0], 0.1, 0.5).unwrap();

        let weight = network.layers[0].weights.as_ref().unwrap().data[0][0];
        let bias = network.layers[1].biases.as_ref().unwrap().data[0];
        // weight: 0.1 * 0.5 * 3 + 0.5 * 2 = 1.15
        assert!((weight - 1.15).abs() < 1e-12);
        // bias: 0.1 * 0.5 + 0.5 * 0.5 = 0.3
        assert!((bias - 0.3).abs() < 1e-12);
    }

    #[test]
    fn hidden_deltas_use_pre_update_weights() {
        let mut network = Network::new(&[1, 1, 1], Activation::Identity);
        network.connect();
        let mut w0 = Weights::new(1, 1);
        w0.populate(&[vec![2.0]]).unwrap();
        network.layers[0].add_weights(w0).unwrap();
        let mut w1 = Weights::new(1, 1);
        w1.populate(&[vec![3.0]]).unwrap();
        network.layers[1].add_weights(w1).unwrap();
        network.layers[1].add_biases(Biases::new(1)).unwrap();
        network.layers[2].add_biases(Biases::new(1)).unwrap();

        network.populate(&[1.0]).unwrap().run().unwrap();
        assert_eq!(network.output(), &[6.0]);

        // delta_out = (10 - 6) * 1 = 4; delta_hidden = 4 * 3 = 12.
        // Had the output weight been updated before the hidden delta was
        // computed, the hidden delta would come out as 4 * 8 = 32 instead.
        network.backpropagate(&[10.0], 1.0, 0.0).unwrap();

        assert!((network.layers[1].weights.as_ref().unwrap().data[0][0] - 8.0).abs() < 1e-12);
        assert!((network.layers[0].weights.as_ref().unwrap().data[0][0] - 12.0).abs() < 1e-12);
        assert!((network.layers[2].biases.as_ref().unwrap().data[0] - 4.0).abs() < 1e-12);
        assert!((network.layers[1].biases.as_ref().unwrap().data[0] - 12.0).abs() < 1e-12);
    }

    #[test]
    fn backpropagate_rejects_wrong_target_length_without_mutation() {
        let mut network = single_connection(Activation::Identity);
        network.populate(&[3.0]).unwrap().run().unwrap();

        let err = network.backpropagate(&[1.0, 2.0], 0.5, 0.0).unwrap_err();
        assert_eq!(err, NetworkError::LengthMismatch { expected: 1, actual: 2 });
        assert_eq!(network.layers[0].weights.as_ref().unwrap().data[0][0], 2.0);
        assert_eq!(network.layers[1].biases.as_ref().unwrap().data[0], 0.5);
    }

    #[test]
    fn backpropagate_with_defaults_updates_parameters() {
        let mut network = wired(&[2, 2, 1], Activation::Sigmoid, 5);
        network.populate(&[1.0, 0.0]).unwrap().run().unwrap();
        network.backpropagate_with_defaults(&[1.0]).unwrap();
    }
}
