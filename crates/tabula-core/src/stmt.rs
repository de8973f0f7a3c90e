mod create_table;
pub use create_table::{create, CreateTable};

mod delete;
pub use delete::{delete, truncate, Delete};

mod expr;
pub use expr::{access, literal, not, sym, Expr};

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_literal;
pub use expr_literal::ExprLiteral;

mod expr_member;
pub use expr_member::ExprMember;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_symbol;
pub use expr_symbol::ExprSymbol;

mod insert;
pub use insert::{insert, upsert, Insert, Upsert};

mod op_binary;
pub use op_binary::BinaryOp;

mod ops;

mod query;
pub use query::{order_by, select_columns, Order, OrderBy, Query, Source};

mod select;
pub use select::{select, Select, Slot};

mod transaction;
pub use transaction::{commit, rollback, start_transaction, Commit, Rollback, StartTransaction};

mod update;
pub use update::{set, update, Assignment, Update};
