use rand::Rng;

use crate::errors::NetworkError;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;

/// One pass over the samples: for each `(input, target)` pair the network is
/// populated, run forward and backpropagated once. Returns the mean squared
/// error over the pass, measured before each update.
///
/// `inputs` and `targets` must pair up one to one.
pub fn train_network(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<f64, NetworkError> {
    if inputs.len() != targets.len() {
        return Err(NetworkError::LengthMismatch {
            expected: inputs.len(),
            actual: targets.len(),
        });
    }
    if inputs.is_empty() {
        return Ok(0.0);
    }

    let mut rng = rand::thread_rng();
    let mut total_loss = 0.0;

    for (input, target) in inputs.iter().zip(targets.iter()) {
        network.populate(input)?.run()?;
        total_loss += MseLoss::loss(network.output(), target);

        let momentum = config.momentum.unwrap_or_else(|| rng.gen::<f64>());
        network.backpropagate(target, config.learning_rate, momentum)?;
    }

    Ok(total_loss / inputs.len() as f64)
}
