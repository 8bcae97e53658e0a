// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example first_bit
fn main() {
    println!("laminar-nn: a minimal feedforward neural network engine in Rust.");
    println!("Run `cargo run --example first_bit` to see a training demo.");
}
