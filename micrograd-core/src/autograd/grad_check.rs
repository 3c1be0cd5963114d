use crate::assignment::Assignment;
use crate::autograd::graph_valuation::GraphValuation;
use crate::error::MicrogradError;
use crate::ident::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for entry {ident}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        ident: NodeId,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for entry {ident}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        ident: NodeId,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for entry {ident}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { ident: NodeId, value: f64 },

    #[error("Graph evaluation failed during gradient check: {0}")]
    EvaluationError(MicrogradError),
}

impl From<MicrogradError> for GradCheckError {
    fn from(err: MicrogradError) -> Self {
        GradCheckError::EvaluationError(err)
    }
}

/// Step and acceptance threshold for [`check_gradients`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    /// Used both as absolute and relative tolerance.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

// Quantity differentiated by the backward pass: every root is seeded with 1,
// so the gradients are those of the sum of the roots.
fn objective(gv: &GraphValuation) -> f64 {
    gv.roots()
        .filter_map(|root| gv.get(root))
        .map(|v| v.value)
        .sum()
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// Every entry bound by `assignment` is perturbed by `±epsilon`, the graph
/// is re-evaluated, and \( (L^+ - L^-) / 2\epsilon \) is compared with the
/// gradient from the backward pass, where \( L \) is the sum of the roots.
pub fn check_gradients(assignment: &Assignment, config: &GradCheckConfig) -> Result<(), GradCheckError> {
    let base = GraphValuation::try_run(assignment)?;

    let mut bound: Vec<(NodeId, f64)> = assignment.iter().collect();
    bound.sort_by_key(|(ident, _)| *ident);

    for (ident, input) in bound {
        let analytical = base.get(ident).map(|v| v.gradient).unwrap_or(0.0);
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                ident,
                value: analytical,
            });
        }

        let loss_plus = objective(&GraphValuation::try_run(&assignment.rebind(ident, input + config.epsilon))?);
        let loss_minus = objective(&GraphValuation::try_run(&assignment.rebind(ident, input - config.epsilon))?);
        let numerical = (loss_plus - loss_minus) / (2.0 * config.epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                ident,
                loss_plus,
                loss_minus,
            });
        }

        log::debug!(
            "grad_check: entry {} analytical={} numerical={}",
            ident,
            analytical,
            numerical
        );

        if !approx::relative_eq!(
            analytical,
            numerical,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                ident,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }
    Ok(())
}
