mod column;
pub use column::Column;

mod index;
pub use index::{Index, IntoColumnNames};

mod ty;
pub use ty::DataType;

mod visitor;
pub use visitor::DataTypeVisitor;
