use laminar_nn::{Activation, Network, NetworkError};
use rand::Rng;
use std::time::Instant;

// A [1, 4, 2, 1] network is given a temperature between 0 and 100 degrees
// celsius and expected to return the corresponding temperature in degrees
// fahrenheit. Inputs and targets are normalized by dividing by 212, the
// highest reachable temperature (100 C = 212 F).
fn main() -> Result<(), NetworkError> {
    let mut rng = rand::thread_rng();
    let t0 = Instant::now();

    let mut network = Network::new(&[1, 4, 2, 1], Activation::Identity);
    network.connect().add_weights().add_biases();

    let mut data: Vec<(f64, f64)> = (0..1000)
        .map(|_| {
            let celsius = rng.gen_range(0..=100) as f64;
            (celsius / 212.0, (celsius * 1.8 + 32.0) / 212.0)
        })
        .collect();
    let test_data = data.split_off(800);

    println!("Training neural network...");
    for &(input, expected) in &data {
        network.populate(&[input])?;
        for _ in 0..1000 {
            network.run()?.backpropagate(&[expected], 0.01, 1.0)?;
        }
    }
    println!("Done Training");
    println!("Took {} milliseconds", t0.elapsed().as_millis());
    println!("-------------");

    println!("Testing neural network...");
    let mut total_error = 0.0;
    for &(input, expected) in &test_data {
        network.populate(&[input])?.run()?;
        // De-normalize so the error reads in degrees fahrenheit.
        total_error += (expected - network.output()[0]).abs() * 212.0;
    }
    println!("Average error: {}", total_error / test_data.len() as f64);

    Ok(())
}
