//! Operator overloads building [`Expr`] trees.
//!
//! Native values on either side are wrapped as literals. A native value on
//! the left picks the operator impl by its type, so an integer literal there
//! needs a suffix: every integer width implements the operators and an
//! unsuffixed `1` would be ambiguous.
//!
//! ```
//! use tabula_core::stmt::sym;
//!
//! assert_eq!((sym("x") + 1).to_string(), "(x + 1)");
//! assert_eq!((1i32 + sym("x")).to_string(), "(1 + x)");
//! assert_eq!((2.5f64 * sym("x")).to_string(), "(2.500000 * x)");
//! ```

use super::{not, BinaryOp, Expr};

use std::ops;

macro_rules! impl_binary_op {
    ( $( $trait:ident :: $method:ident => $op:ident; )* ) => {
        $(
            impl<R: Into<Expr>> ops::$trait<R> for Expr {
                type Output = Expr;

                fn $method(self, rhs: R) -> Expr {
                    Expr::binary_op(self, BinaryOp::$op, rhs)
                }
            }

            impl<R: Into<Expr>> ops::$trait<R> for &Expr {
                type Output = Expr;

                fn $method(self, rhs: R) -> Expr {
                    Expr::binary_op(self.clone(), BinaryOp::$op, rhs)
                }
            }
        )*
    };
}

impl_binary_op! {
    Add::add => Add;
    Sub::sub => Sub;
    Mul::mul => Mul;
    Div::div => Div;
    BitAnd::bitand => And;
    BitOr::bitor => Or;
}

macro_rules! impl_native_lhs {
    ( $( $ty:ty ),* ) => {
        $(
            impl ops::Add<Expr> for $ty {
                type Output = Expr;

                fn add(self, rhs: Expr) -> Expr {
                    Expr::binary_op(self, BinaryOp::Add, rhs)
                }
            }

            impl ops::Sub<Expr> for $ty {
                type Output = Expr;

                fn sub(self, rhs: Expr) -> Expr {
                    Expr::binary_op(self, BinaryOp::Sub, rhs)
                }
            }

            impl ops::Mul<Expr> for $ty {
                type Output = Expr;

                fn mul(self, rhs: Expr) -> Expr {
                    Expr::binary_op(self, BinaryOp::Mul, rhs)
                }
            }

            impl ops::Div<Expr> for $ty {
                type Output = Expr;

                fn div(self, rhs: Expr) -> Expr {
                    Expr::binary_op(self, BinaryOp::Div, rhs)
                }
            }
        )*
    };
}

impl_native_lhs!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, &str, String);

impl ops::BitAnd<Expr> for bool {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        Expr::and(self, rhs)
    }
}

impl ops::BitOr<Expr> for bool {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        Expr::or(self, rhs)
    }
}

impl ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        not(self)
    }
}

impl ops::Not for &Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        not(self.clone())
    }
}
