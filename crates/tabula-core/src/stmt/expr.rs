use super::{ExprBinaryOp, ExprLiteral, ExprMember, ExprNot, ExprSymbol};
use crate::{driver::Flavor, Encode};

use std::fmt;

/// An expression used in `WHERE` and `SET` clauses.
///
/// Expressions are immutable trees. Sub-expressions are reference counted, so
/// cloning an `Expr` to reuse it under several parents is cheap.
#[derive(Clone, PartialEq)]
pub enum Expr {
    /// A name emitted verbatim, such as a column
    Symbol(ExprSymbol),

    /// A constant
    Literal(ExprLiteral),

    /// Infix operator
    BinaryOp(ExprBinaryOp),

    /// Logical negation
    Not(ExprNot),

    /// `term.member`
    Member(ExprMember),
}

/// References a column or other name.
pub fn sym(name: impl Into<String>) -> Expr {
    ExprSymbol::new(name).into()
}

/// A constant, serialized through its [`Encode`] implementation.
pub fn literal<T: Encode + ?Sized>(value: &T) -> Expr {
    ExprLiteral::new(value).into()
}

/// Accesses `member` of `term`, as in `t1.x`.
pub fn access(term: impl Into<Expr>, member: impl Into<String>) -> Expr {
    ExprMember::new(term.into(), member).into()
}

/// Negates `expr`.
pub fn not(expr: impl Into<Expr>) -> Expr {
    ExprNot::new(expr.into()).into()
}

impl Expr {
    /// Appends the SQL text of the expression to `dst`, with literals
    /// written as `flavor` reads them.
    pub fn append_sql(&self, flavor: Flavor, dst: &mut String) {
        match self {
            Expr::Symbol(expr) => dst.push_str(&expr.name),
            Expr::Literal(expr) => expr.value.append_sql(flavor, dst),
            Expr::BinaryOp(expr) => {
                dst.push('(');
                expr.lhs.append_sql(flavor, dst);
                dst.push(' ');
                dst.push_str(expr.op.as_sql());
                dst.push(' ');
                expr.rhs.append_sql(flavor, dst);
                dst.push(')');
            }
            Expr::Not(expr) => {
                dst.push_str("(NOT ");
                expr.expr.append_sql(flavor, dst);
                dst.push(')');
            }
            Expr::Member(expr) => {
                let start = dst.len();
                expr.term.append_sql(flavor, dst);
                if dst.len() != start {
                    dst.push('.');
                }
                dst.push_str(&expr.member);
            }
        }
    }

    /// Appends the SQL text of the expression to `dst`, string literals
    /// backslash escaped.
    pub fn append_query(&self, dst: &mut String) {
        self.append_sql(Flavor::Mysql, dst)
    }
}

/// Displays the same text as [`Expr::append_query`].
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dst = String::new();
        self.append_query(&mut dst);
        f.write_str(&dst)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(e) => fmt::Debug::fmt(e, f),
            Expr::Literal(e) => fmt::Debug::fmt(e, f),
            Expr::BinaryOp(e) => fmt::Debug::fmt(e, f),
            Expr::Not(e) => fmt::Debug::fmt(e, f),
            Expr::Member(e) => fmt::Debug::fmt(e, f),
        }
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}
