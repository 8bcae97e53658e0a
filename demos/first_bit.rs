use laminar_nn::{Activation, Network, NetworkError};
use rand::Rng;

// A [3, 3, 3, 1] network is given a list of 3 random bits, such as
// [1, 0, 1], and is supposed to return the 1st value.
fn main() -> Result<(), NetworkError> {
    let mut rng = rand::thread_rng();

    let mut network = Network::new(&[3, 3, 3, 1], Activation::Sigmoid);
    network.connect().add_weights().add_biases();

    let random_bits = |rng: &mut rand::rngs::ThreadRng| -> Vec<f64> {
        (0..3).map(|_| if rng.gen::<bool>() { 1.0 } else { 0.0 }).collect()
    };

    let data: Vec<Vec<f64>> = (0..200).map(|_| random_bits(&mut rng)).collect();
    let test_data: Vec<Vec<f64>> = (0..50).map(|_| random_bits(&mut rng)).collect();

    println!("Training neural network...");
    for input in &data {
        network.populate(input)?;
        for _ in 0..50 {
            network.run()?.backpropagate(&[input[0]], 0.8, 1.0)?;
        }
    }
    println!("Done Training");
    println!("-------------");

    println!("Testing neural network...");
    let mut total_error = 0.0;
    for input in &test_data {
        network.populate(input)?.run()?;
        total_error += (input[0] - network.output()[0]).abs();
    }
    println!("Average error: {}", total_error / test_data.len() as f64);

    Ok(())
}
