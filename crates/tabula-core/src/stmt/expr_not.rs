use super::Expr;

use std::sync::Arc;

/// Negates a boolean expression, rendered as `(NOT expr)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    /// The expression to negate.
    pub expr: Arc<Expr>,
}

impl ExprNot {
    pub fn new(expr: Expr) -> ExprNot {
        ExprNot {
            expr: Arc::new(expr),
        }
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Expr::Not(value)
    }
}
