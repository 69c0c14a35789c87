use thiserror::Error;

/// Broad category of a [`VectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operator applied to an operand it does not accept, or an operator
    /// that vectors deliberately do not support.
    Type,
    /// Operation undefined for the vector's current state.
    Value,
    /// Negative index.
    Range,
    /// Division by a zero scalar.
    Arithmetic,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("unsupported operand type(s) for {operation}: 'Vector' and '{operand}'")]
    Unsupported {
        operation: &'static str,
        operand: &'static str,
    },
    #[error("vectors have no byte representation")]
    NoByteRepresentation,
    #[error("cross product is only defined up to 3 dimensions, got {lhs} and {rhs}")]
    CrossDimension { lhs: usize, rhs: usize },
    #[error("complex representation is only valid for 2D vectors, got {dimension}D")]
    NotPlanar { dimension: usize },
    #[error("index {index} out of vector range")]
    NegativeIndex { index: isize },
    #[error("division by zero is not allowed")]
    DivisionByZero,
}

impl VectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::Unsupported { .. }
            | VectorError::NoByteRepresentation
            | VectorError::CrossDimension { .. } => ErrorKind::Type,
            VectorError::NotPlanar { .. } => ErrorKind::Value,
            VectorError::NegativeIndex { .. } => ErrorKind::Range,
            VectorError::DivisionByZero => ErrorKind::Arithmetic,
        }
    }
}

#[test]
fn test_error_kinds() {
    let unsupported = VectorError::Unsupported {
        operation: "%",
        operand: "Vector",
    };
    assert_eq!(unsupported.kind(), ErrorKind::Type);
    assert_eq!(VectorError::NoByteRepresentation.kind(), ErrorKind::Type);
    assert_eq!(VectorError::CrossDimension { lhs: 4, rhs: 3 }.kind(), ErrorKind::Type);
    assert_eq!(VectorError::NotPlanar { dimension: 3 }.kind(), ErrorKind::Value);
    assert_eq!(VectorError::NegativeIndex { index: -1 }.kind(), ErrorKind::Range);
    assert_eq!(VectorError::DivisionByZero.kind(), ErrorKind::Arithmetic);
}

#[test]
fn test_error_messages() {
    let err = VectorError::Unsupported {
        operation: "/",
        operand: "Vector",
    };
    assert_eq!(
        err.to_string(),
        "unsupported operand type(s) for /: 'Vector' and 'Vector'"
    );
    assert_eq!(
        VectorError::NotPlanar { dimension: 3 }.to_string(),
        "complex representation is only valid for 2D vectors, got 3D"
    );
}
