use crate::assignment::Assignment;
use crate::error::MicrogradError;
use crate::value::{Value, ValueGraph};

/// A single tanh neuron over a fixed set of inputs.
///
/// Builds one weight per input (`{name}.w{k}`), a bias (`{name}.bias`), the
/// pre-activation `{name}.linear` as one n-ary sum, and the output `{name}`.
#[derive(Debug, Clone)]
pub struct Neuron {
    name: String,
    graph: ValueGraph,
    weights: Vec<Value>,
    bias: Value,
    linear: Value,
    output: Value,
}

impl Neuron {
    /// # Panics
    /// If `inputs` is empty or the inputs do not belong to `graph`.
    pub fn new(name: &str, graph: &ValueGraph, inputs: &[Value]) -> Self {
        assert!(!inputs.is_empty(), "Neuron '{}' needs at least one input", name);

        let weights: Vec<Value> = (0..inputs.len())
            .map(|k| graph.input(&format!("{}.w{}", name, k)))
            .collect();
        let bias = graph.input(&format!("{}.bias", name));

        let mut terms = Vec::with_capacity(inputs.len() + 1);
        terms.push(bias.clone());
        terms.extend(weights.iter().zip(inputs).map(|(w, x)| w * x));
        let linear = graph.sum(&terms).with_label(&format!("{}.linear", name));
        let output = linear.tanh().with_label(name);

        Neuron {
            name: name.to_string(),
            graph: graph.clone(),
            weights,
            bias,
            linear,
            output,
        }
    }

    /// Binds the weights in order and the bias to 0.
    ///
    /// # Errors
    /// `WeightCountMismatch` if `weights` does not match the input count.
    pub fn try_assign(&self, weights: &[f64]) -> Result<Assignment, MicrogradError> {
        if weights.len() != self.weights.len() {
            return Err(MicrogradError::WeightCountMismatch {
                expected: self.weights.len(),
                actual: weights.len(),
            });
        }
        let bindings = self
            .weights
            .iter()
            .zip(weights.iter().copied())
            .chain(std::iter::once((&self.bias, 0.0)));
        Assignment::try_create(&self.graph, bindings)
    }

    pub fn assign(&self, weights: &[f64]) -> Assignment {
        self.try_assign(weights)
            .unwrap_or_else(|e| panic!("Neuron '{}' assignment failed: {}", self.name, e))
    }

    /// Draws one weight per input from `weighting`.
    pub fn assign_from(&self, mut weighting: impl FnMut() -> f64) -> Assignment {
        let weights: Vec<f64> = (0..self.weights.len()).map(|_| weighting()).collect();
        self.assign(&weights)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn linear(&self) -> &Value {
        &self.linear
    }

    pub fn output(&self) -> &Value {
        &self.output
    }
}

/// `n` neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    graph: ValueGraph,
    neurons: Vec<Neuron>,
    outputs: Vec<Value>,
}

impl Layer {
    /// Neurons are named `{name}.n{k}`.
    ///
    /// # Panics
    /// If `n` is zero or `inputs` is empty.
    pub fn new(name: &str, graph: &ValueGraph, n: usize, inputs: &[Value]) -> Self {
        assert!(n > 0, "Layer '{}' needs at least one neuron", name);
        assert!(!inputs.is_empty(), "Layer '{}' needs at least one input", name);
        let neurons: Vec<Neuron> = (0..n)
            .map(|k| Neuron::new(&format!("{}.n{}", name, k), graph, inputs))
            .collect();
        let outputs = neurons.iter().map(|neuron| neuron.output().clone()).collect();
        log::debug!("Layer '{}': {} neuron(s) over {} input(s)", name, n, inputs.len());
        Layer {
            name: name.to_string(),
            graph: graph.clone(),
            neurons,
            outputs,
        }
    }

    /// Merges the assignment of every neuron, drawing weights from
    /// `weighting` neuron by neuron.
    pub fn assign_from(&self, mut weighting: impl FnMut() -> f64) -> Assignment {
        let empty = Assignment::create(&self.graph, std::iter::empty());
        self.neurons
            .iter()
            .fold(empty, |acc, neuron| acc.merge(&neuron.assign_from(&mut weighting)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn outputs(&self) -> &[Value] {
        &self.outputs
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "perceptron_test.rs"]
mod tests;
