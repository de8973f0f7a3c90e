pub mod serializer;
pub use serializer::{Serializer, Statement};
