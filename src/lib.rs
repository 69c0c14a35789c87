//! A variable-dimension `f64` vector with arithmetic, magnitude ordering,
//! text forms and zero-padded container access.

pub mod error;
pub mod operand;
pub mod vector;

pub use error::{ErrorKind, VectorError};
pub use operand::Operand;
pub use vector::{cross_product, dot_product, Vector};
