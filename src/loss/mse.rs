pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²). Used for error reporting;
    /// the backpropagation deltas work from the raw per-neuron difference
    /// and do not go through this.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}
