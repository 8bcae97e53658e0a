use laminar_nn::{Activation, Network, NetworkError, TrainConfig};

// The engine does not persist anything itself; the weight and bias matrices
// serialize with serde, so a caller can export them in whatever format it
// wants. This demo trains an AND gate briefly and dumps the parameters as
// JSON.
fn main() -> Result<(), NetworkError> {
    let mut network = Network::new(&[2, 2, 1], Activation::Sigmoid);
    network.connect().add_weights().add_biases();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![0.0], vec![0.0], vec![1.0]];

    let config = TrainConfig::new(0.8, 1.0);
    for _ in 0..1000 {
        laminar_nn::train_network(&mut network, &inputs, &targets, &config)?;
    }

    let params: Vec<_> = network
        .layers
        .iter()
        .map(|layer| (layer.weights.as_ref(), layer.biases.as_ref()))
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&params).expect("parameters serialize to JSON")
    );

    Ok(())
}
