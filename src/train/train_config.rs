/// Hyperparameters for a `train_network` pass.
///
/// # Fields
/// - `learning_rate` — step scale for every weight/bias update; meant to lie
///   in `(0, 1]`
/// - `momentum`      — blend coefficient applied to the current parameter
///   value on update, meant to lie in `[0, 1)`. `None` draws a fresh uniform
///   `[0, 1)` value for every update, matching the engine's stock default.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub momentum: Option<f64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: crate::network::DEFAULT_LEARNING_RATE,
            momentum: None,
        }
    }
}

impl TrainConfig {
    pub fn new(learning_rate: f64, momentum: f64) -> Self {
        TrainConfig {
            learning_rate,
            momentum: Some(momentum),
        }
    }
}
