use std::fmt;

/// Infix operators.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Eq,
    Ne,
    Ge,
    Gt,
    And,
    Or,
}

impl BinaryOp {
    /// The SQL symbol of the operator.
    pub fn as_sql(self) -> &'static str {
        use BinaryOp::*;

        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Lt => "<",
            Le => "<=",
            Eq => "=",
            Ne => "<>",
            Ge => ">=",
            Gt => ">",
            And => "AND",
            Or => "OR",
        }
    }

    pub fn is_comparison(self) -> bool {
        use BinaryOp::*;

        matches!(self, Lt | Le | Eq | Ne | Ge | Gt)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
