use super::Expr;

use std::sync::Arc;

/// Member access, rendered as `term.member`.
///
/// When `term` renders as empty text only `member` is emitted, so qualified
/// and unqualified column references share one code path.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMember {
    pub term: Arc<Expr>,
    pub member: String,
}

impl ExprMember {
    pub fn new(term: Expr, member: impl Into<String>) -> ExprMember {
        ExprMember {
            term: Arc::new(term),
            member: member.into(),
        }
    }
}

impl From<ExprMember> for Expr {
    fn from(value: ExprMember) -> Self {
        Expr::Member(value)
    }
}
