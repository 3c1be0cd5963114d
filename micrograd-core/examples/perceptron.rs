//! # Single-layer perceptron
//!
//! Builds a layer of three tanh neurons over two inputs, draws the weights
//! from a seeded uniform distribution, then runs one forward and backward
//! pass and prints every labelled valuation.
//!
//! `cargo run --example perceptron`

use micrograd_core::nn::init::{seeded_rng, uniform};
use micrograd_core::nn::Layer;
use micrograd_core::{Assignment, GraphValuation, MicrogradError, ValueGraph};

fn main() -> Result<(), MicrogradError> {
    let graph = ValueGraph::new();
    let inputs = graph.inputs(&["x0", "x1"]);
    let layer = Layer::new("hidden", &graph, 3, &inputs);

    let data = Assignment::try_create(&graph, [(&inputs[0], 0.5), (&inputs[1], -1.5)])?;
    let weights = layer.assign_from(uniform(-1.0, 1.0, seeded_rng(42)));
    let assignment = data.try_merge(&weights)?;
    println!(
        "Graph has {} nodes; assignment complete: {}",
        graph.len(),
        assignment.is_complete()
    );

    let valuation = GraphValuation::try_run(&assignment)?;

    for neuron in layer.neurons() {
        println!("--- {} ---", neuron.name());
        for weight in neuron.weights() {
            if let Some(v) = valuation.valuation(weight) {
                println!("  {:<14} {}", weight.label().unwrap_or_default(), v);
            }
        }
        for value in [neuron.linear(), neuron.output()] {
            if let Some(v) = valuation.valuation(value) {
                println!("  {:<14} {}", value.label().unwrap_or_default(), v);
            }
        }
    }

    for input in &inputs {
        if let Some(v) = valuation.valuation(input) {
            println!("{:<16} {}", input.label().unwrap_or_default(), v);
        }
    }

    Ok(())
}
