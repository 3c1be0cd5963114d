use micrograd_core::{Assignment, GraphValuation, Value, ValueGraph};

// Builds a graph with one input per label and binds each to its value.
// allow(dead_code): not every test binary uses every helper.
#[allow(dead_code)]
pub fn bound_inputs(bindings: &[(&str, f64)]) -> (ValueGraph, Vec<Value>, Assignment) {
    let g = ValueGraph::new();
    let labels: Vec<&str> = bindings.iter().map(|(label, _)| *label).collect();
    let inputs = g.inputs(&labels);
    let a = Assignment::create(&g, inputs.iter().zip(bindings.iter().map(|(_, v)| *v)));
    (g, inputs, a)
}

// Evaluates `a` and returns (value, gradient) of `target`.
#[allow(dead_code)]
pub fn evaluate(a: &Assignment, target: &Value) -> (f64, f64) {
    let gv = GraphValuation::run(a);
    let v = gv.valuation(target).expect("Target value should belong to the evaluated graph");
    (v.value, v.gradient)
}
