use crate::vector::Vector;

/// Right-hand side of the division family of operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    Vector(&'a Vector),
}

impl Operand<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "float",
            Operand::Vector(_) => "Vector",
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand<'_> {
    fn from(value: f32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Scalar(value.into())
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(value: &'a Vector) -> Self {
        Operand::Vector(value)
    }
}

#[test]
fn test_operand_from() {
    let v = Vector::new([1, 2]);
    assert_eq!(Operand::from(2), Operand::Scalar(2.0));
    assert_eq!(Operand::from(0.5f32), Operand::Scalar(0.5));
    assert_eq!(Operand::from(&v).type_name(), "Vector");
    assert_eq!(Operand::from(1.5).type_name(), "float");
}
