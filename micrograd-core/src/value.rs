// micrograd-core/src/value.rs

use crate::error::MicrogradError;
use crate::graph::Dag;
use crate::ident::NodeId;
use crate::ops::{Operator, ValueType};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

pub type ValueDag = Dag<ValueType>;

/// Shared handle to one value graph.
///
/// `ValueGraph` uses `Rc<RefCell<ValueDag>>` internally so that every [`Value`]
/// built from it can append new nodes to the same graph. Clones are cheap and
/// refer to the same graph; equality is identity of that graph.
#[derive(Clone, Default)]
pub struct ValueGraph {
    dag: Rc<RefCell<ValueDag>>,
}

impl ValueGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh unbound input. This is the only way entry nodes
    /// come into existence.
    ///
    /// # Errors
    /// `GraphBorrowed` if a guard from [`ValueGraph::dag`] is still alive.
    pub fn try_variable(&self, label: Option<&str>) -> Result<Value, MicrogradError> {
        let ident = self.dag_mut("variable")?.try_node(ValueType::Variable, &[], label)?;
        Ok(Value {
            graph: self.clone(),
            ident,
        })
    }

    pub fn variable(&self, label: Option<&str>) -> Value {
        self.try_variable(label)
            .unwrap_or_else(|e| panic!("Value operation failed: {}", e))
    }

    /// A labelled input.
    pub fn input(&self, label: &str) -> Value {
        self.variable(Some(label))
    }

    /// One labelled input per label, in order.
    pub fn inputs(&self, labels: &[&str]) -> Vec<Value> {
        labels.iter().map(|label| self.input(label)).collect()
    }

    /// Builds a single n-ary `Sum` node over all `values`.
    pub fn try_sum(&self, values: &[Value]) -> Result<Value, MicrogradError> {
        let operands: Vec<&Value> = values.iter().collect();
        self.try_operate(Operator::sum(), &operands)
    }

    pub fn sum(&self, values: &[Value]) -> Value {
        self.try_sum(values)
            .unwrap_or_else(|e| panic!("Value sum failed: {}", e))
    }

    /// Appends an operator node over `operands`, which must all belong to
    /// this graph.
    ///
    /// # Errors
    /// * `GraphMismatch` if an operand belongs to another graph.
    /// * `GraphBorrowed` if a guard from [`ValueGraph::dag`] is still alive.
    pub fn try_operate(&self, op: Operator, operands: &[&Value]) -> Result<Value, MicrogradError> {
        if operands.iter().any(|v| v.graph != *self) {
            return Err(MicrogradError::GraphMismatch {
                operation: op.to_string(),
            });
        }
        let pred: Vec<NodeId> = operands.iter().map(|v| v.ident).collect();
        let ident = self.dag_mut(&op.to_string())?.try_node(ValueType::Operator(op), &pred, None)?;
        Ok(Value {
            graph: self.clone(),
            ident,
        })
    }

    /// Read access to the underlying graph.
    ///
    /// While the returned guard is alive the graph cannot be extended or
    /// relabelled: the `try_*` builders return `GraphBorrowed` and their
    /// convenience forms panic. Drop the guard before building more values.
    pub fn dag(&self) -> Ref<'_, ValueDag> {
        self.dag.borrow()
    }

    fn dag_mut(&self, operation: &str) -> Result<RefMut<'_, ValueDag>, MicrogradError> {
        self.dag.try_borrow_mut().map_err(|_| MicrogradError::GraphBorrowed {
            operation: operation.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.dag.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.dag.borrow().is_empty()
    }
}

impl PartialEq for ValueGraph {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dag, &other.dag)
    }
}

impl Eq for ValueGraph {}

impl fmt::Debug for ValueGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueGraph({} nodes)", self.len())
    }
}

/// A node of a [`ValueGraph`] with arithmetic that extends the graph.
///
/// Two values are equal when they are the same node of the same graph.
/// Binary operations against an `f64` fold the scalar into the operator
/// (`Sum { bias }` or `Prod { coefficient }`) instead of creating a
/// constant node.
#[derive(Clone)]
pub struct Value {
    graph: ValueGraph,
    ident: NodeId,
}

impl Value {
    pub fn ident(&self) -> NodeId {
        self.ident
    }

    pub fn graph(&self) -> &ValueGraph {
        &self.graph
    }

    pub fn value_type(&self) -> ValueType {
        *self.graph.dag()[self.ident].data()
    }

    pub fn label(&self) -> Option<String> {
        self.graph.dag().label(self.ident).map(str::to_owned)
    }

    /// Sets the label of the underlying node and hands the value back.
    ///
    /// # Errors
    /// `GraphBorrowed` if a guard from [`ValueGraph::dag`] is still alive.
    pub fn try_with_label(self, label: &str) -> Result<Self, MicrogradError> {
        self.graph.dag_mut("label")?.set_label(self.ident, label);
        Ok(self)
    }

    pub fn with_label(self, label: &str) -> Self {
        self.try_with_label(label)
            .unwrap_or_else(|e| panic!("Value operation failed: {}", e))
    }

    fn unary(&self, op: Operator) -> Value {
        self.graph
            .try_operate(op, &[self])
            .unwrap_or_else(|e| panic!("Value operation failed: {}", e))
    }

    fn binary(&self, op: Operator, other: &Value) -> Value {
        self.graph
            .try_operate(op, &[self, other])
            .unwrap_or_else(|e| panic!("Value operation failed: {}", e))
    }

    /// `self + other` as one `Sum` node.
    pub fn try_add(&self, other: &Value) -> Result<Value, MicrogradError> {
        self.graph.try_operate(Operator::sum(), &[self, other])
    }

    /// `self * other` as one `Prod` node.
    pub fn try_mul(&self, other: &Value) -> Result<Value, MicrogradError> {
        self.graph.try_operate(Operator::prod(), &[self, other])
    }

    pub fn pow(&self, exponent: f64) -> Value {
        self.unary(Operator::Pow { exponent })
    }

    pub fn tanh(&self) -> Value {
        self.unary(Operator::Tanh)
    }

    pub fn exp(&self) -> Value {
        self.unary(Operator::Exp)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph && self.ident == other.ident
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.graph.dag) as usize).hash(state);
        self.ident.hash(state);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({}, {})", self.ident, self.value_type())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self.value_type())
    }
}

// --- Primitive operators on references ---

impl Add<&Value> for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        self.binary(Operator::sum(), rhs)
    }
}

impl Add<f64> for &Value {
    type Output = Value;

    fn add(self, rhs: f64) -> Value {
        self.unary(Operator::Sum { bias: rhs })
    }
}

impl Mul<&Value> for &Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        self.binary(Operator::prod(), rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        self.unary(Operator::Prod { coefficient: rhs })
    }
}

// --- Derived operators ---

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        self * -1.0
    }
}

impl Sub<&Value> for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        self + &(-rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;

    fn sub(self, rhs: f64) -> Value {
        self + -rhs
    }
}

impl Div<&Value> for &Value {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        self * &rhs.pow(-1.0)
    }
}

impl Div<f64> for &Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        self * (1.0 / rhs)
    }
}

impl Add<&Value> for f64 {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        rhs + self
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        rhs * self
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        &(-rhs) + self
    }
}

impl Div<&Value> for f64 {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        &rhs.pow(-1.0) * self
    }
}

// Owned operands forward to the reference implementations.
macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident, $op:tt) => {
        impl $imp<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                &self $op &rhs
            }
        }

        impl $imp<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                &self $op rhs
            }
        }

        impl $imp<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                self $op &rhs
            }
        }

        impl $imp<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                &self $op rhs
            }
        }

        impl $imp<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                self $op &rhs
            }
        }
    };
}

forward_owned_binop!(Add, add, +);
forward_owned_binop!(Mul, mul, *);
forward_owned_binop!(Sub, sub, -);
forward_owned_binop!(Div, div, /);

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        -&self
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
