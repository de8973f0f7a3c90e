use super::Expr;

/// A name rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprSymbol {
    pub name: String,
}

impl ExprSymbol {
    pub fn new(name: impl Into<String>) -> ExprSymbol {
        ExprSymbol { name: name.into() }
    }
}

impl From<ExprSymbol> for Expr {
    fn from(value: ExprSymbol) -> Self {
        Expr::Symbol(value)
    }
}
