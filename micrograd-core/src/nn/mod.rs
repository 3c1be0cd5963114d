// micrograd-core/src/nn/mod.rs
// Neurons and layers built out of scalar value graphs.

pub mod init;
pub mod perceptron;

// Re-export common items
pub use perceptron::{Layer, Neuron};
