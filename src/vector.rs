use core::fmt;
use std::{cmp::Ordering, ops, vec};

use anyhow::Result;
use log::{debug, trace};
use num_complex::Complex64;

use crate::{error::VectorError, operand::Operand};

/// A variable-dimension vector of `f64` components.
///
/// Reads past the last stored component yield `0.0` and writes past it grow
/// the storage, so operands of different dimension combine as if the shorter
/// one were zero-padded. Equality compares the stored components exactly,
/// while ordering compares magnitudes only: `[3, 4]` and `[4, 3]` are unequal
/// yet neither is less than the other. The ordering is therefore not
/// consistent with equality.
///
/// Text forms print components with `f64`'s `Debug` output, so edge values
/// read `1e16` and `NaN` rather than `1e+16` and `nan`.
#[derive(Clone, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

/// Sum of pairwise products over the overlapping components.
///
/// Unlike addition, which pads the shorter operand, this truncates to the
/// shorter operand.
pub fn dot_product(a: &Vector, b: &Vector) -> f64 {
    let mut sum = 0.0;
    for i in 0..a.dimension().min(b.dimension()) {
        sum += a.data[i] * b.data[i];
    }
    sum
}

/// 3D cross product, with both operands zero-padded to three components.
pub fn cross_product(a: &Vector, b: &Vector) -> Result<Vector, VectorError> {
    if a.dimension() > 3 || b.dimension() > 3 {
        debug!(
            "cross product rejected for dimensions {} and {}",
            a.dimension(),
            b.dimension()
        );
        return Err(VectorError::CrossDimension {
            lhs: a.dimension(),
            rhs: b.dimension(),
        });
    }
    Ok(Vector::from(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]))
}

impl Vector {
    /// Builds a vector from any numeric components, stored as `f64`.
    ///
    /// `T` must convert to `f64` without loss, which excludes `i64`, `u64`,
    /// `isize` and `usize`. `i64` and `usize` lists convert through `From`;
    /// the others can be collected after an `as f64` cast.
    pub fn new<T: Into<f64>>(data: impl Into<Vec<T>>) -> Self {
        Self {
            data: data.into().into_iter().map(Into::into).collect(),
        }
    }

    /// A zero-dimensional vector.
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Euclidean norm. Components are scaled by the largest one before
    /// squaring so tiny or huge values neither underflow nor overflow.
    pub fn magnitude(&self) -> f64 {
        if self.data.iter().any(|x| x.is_nan()) {
            return f64::NAN;
        }
        let largest = self.data.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        if largest == 0.0 || largest.is_infinite() {
            return largest;
        }
        let sum: f64 = self.data.iter().map(|x| (x / largest).powi(2)).sum();
        largest * sum.sqrt()
    }

    /// Unit vector pointing the same way. A zero vector yields a zero vector
    /// of the same dimension.
    pub fn direction(&self) -> Vector {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vector::from(vec![0.0; self.dimension()]);
        }
        self.data.iter().map(|x| x / mag).collect()
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn compare_magnitude(&self, other: &Vector) -> Option<Ordering> {
        self.magnitude().partial_cmp(&other.magnitude())
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// Truthiness: at least one component is non-zero.
    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Magnitude truncated toward zero.
    ///
    /// Saturates rather than failing: a NaN magnitude gives `0` and an
    /// infinite one gives `i64::MAX`.
    pub fn to_int(&self) -> i64 {
        self.magnitude() as i64
    }

    pub fn to_float(&self) -> f64 {
        self.magnitude()
    }

    /// Maps `(x, y)` to `x + yi`. Only 2D vectors convert.
    pub fn to_complex(&self) -> Result<Complex64, VectorError> {
        if self.dimension() != 2 {
            debug!("complex conversion rejected for {}D vector", self.dimension());
            return Err(VectorError::NotPlanar {
                dimension: self.dimension(),
            });
        }
        Ok(Complex64::new(self.data[0], self.data[1]))
    }

    /// Vectors have no byte form; this always fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, VectorError> {
        Err(VectorError::NoByteRepresentation)
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.data.iter().copied()
    }

    /// Stored value at `index`, or `0.0` past the end.
    pub fn component(&self, index: usize) -> f64 {
        self.data.get(index).copied().unwrap_or(0.0)
    }

    /// Writes `value` at `index`, growing and zero-filling as needed.
    pub fn set_component(&mut self, index: usize, value: impl Into<f64>) {
        self[index] = value.into();
    }

    /// Signed read. Negative indices are a range error.
    pub fn at(&self, index: isize) -> Result<f64, VectorError> {
        let index = to_unsigned(index)?;
        Ok(self.component(index))
    }

    /// Signed write. Negative indices are a range error.
    pub fn set(&mut self, index: isize, value: impl Into<f64>) -> Result<(), VectorError> {
        let index = to_unsigned(index)?;
        self.set_component(index, value);
        Ok(())
    }

    pub fn push(&mut self, value: impl Into<f64>) {
        self.data.push(value.into());
    }

    fn grow_to(&mut self, len: usize) {
        if len > self.data.len() {
            trace!("growing vector from {} to {} components", self.data.len(), len);
            self.data.resize(len, 0.0);
        }
    }

    /// Component-wise sum. The result has the larger dimension of the two.
    pub fn add(&self, other: &Vector) -> Vector {
        let mut result = if self.dimension() >= other.dimension() {
            self.clone()
        } else {
            other.clone()
        };
        for i in 0..result.dimension() {
            result.data[i] = self[i] + other[i];
        }
        result
    }

    pub fn subtract(&self, other: &Vector) -> Vector {
        self.add(&other.negate())
    }

    pub fn negate(&self) -> Vector {
        self.scale(-1.0)
    }

    pub fn identity(&self) -> Vector {
        self.clone()
    }

    pub fn scale(&self, factor: impl Into<f64>) -> Vector {
        let factor = factor.into();
        self.data.iter().map(|x| x * factor).collect()
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        dot_product(self, other)
    }

    pub fn cross(&self, other: &Vector) -> Result<Vector, VectorError> {
        cross_product(self, other)
    }

    pub fn div_scalar(&self, divisor: impl Into<f64>) -> Result<Vector, VectorError> {
        let divisor = divisor.into();
        if divisor == 0.0 {
            debug!("division of {:?} by zero", self);
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.data.iter().map(|x| x / divisor).collect())
    }

    /// True division. Only scalar divisors are accepted.
    pub fn divide<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector, VectorError> {
        match rhs.into() {
            Operand::Scalar(divisor) => self.div_scalar(divisor),
            operand @ Operand::Vector(_) => Err(unsupported("/", operand)),
        }
    }

    pub fn floor_divide<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector, VectorError> {
        Err(unsupported("//", rhs.into()))
    }

    pub fn modulo<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector, VectorError> {
        Err(unsupported("%", rhs.into()))
    }

    /// In-place scalar division. On error the vector is left untouched.
    pub fn try_div_assign(&mut self, divisor: impl Into<f64>) -> Result<(), VectorError> {
        let divisor = divisor.into();
        if divisor == 0.0 {
            debug!("in-place division of {:?} by zero", self);
            return Err(VectorError::DivisionByZero);
        }
        for x in &mut self.data {
            *x /= divisor;
        }
        Ok(())
    }
}

fn to_unsigned(index: isize) -> Result<usize, VectorError> {
    usize::try_from(index).map_err(|_| {
        debug!("negative index {}", index);
        VectorError::NegativeIndex { index }
    })
}

fn unsupported(operation: &'static str, operand: Operand<'_>) -> VectorError {
    debug!("unsupported operation {} with {}", operation, operand.type_name());
    VectorError::Unsupported {
        operation,
        operand: operand.type_name(),
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self { data: vec![0.0] }
    }
}

impl ops::Deref for Vector {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

// Wide integers convert with `as`, rounding above 2^53.
impl From<Vec<i64>> for Vector {
    fn from(data: Vec<i64>) -> Self {
        data.into_iter().map(|x| x as f64).collect()
    }
}

impl From<Vec<usize>> for Vector {
    fn from(data: Vec<usize>) -> Self {
        data.into_iter().map(|x| x as f64).collect()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Extend<f64> for Vector {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ops::Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        self.data.get(index).unwrap_or(&0.0)
    }
}

impl ops::IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.grow_to(index.saturating_add(1));
        &mut self.data[index]
    }
}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_magnitude(other)
    }
}

impl From<&Vector> for f64 {
    fn from(v: &Vector) -> Self {
        v.to_float()
    }
}

impl TryFrom<&Vector> for Complex64 {
    type Error = VectorError;

    fn try_from(v: &Vector) -> Result<Self, Self::Error> {
        v.to_complex()
    }
}

impl Vector {
    // Components go through the caller's formatter so `{:.2}` reaches each one.
    fn write_components(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Debug::fmt(x, f)?;
        }
        fmt::Result::Ok(())
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector([")?;
        self.write_components(f)?;
        f.write_str("])")
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        self.write_components(f)?;
        f.write_str(">")
    }
}

impl ops::Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Self) -> Self::Output {
        Vector::add(&self, &rhs)
    }
}

impl ops::Add<&Vector> for &Vector {
    type Output = Vector;
    fn add(self, rhs: &Vector) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl ops::Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl ops::Sub<&Vector> for &Vector {
    type Output = Vector;
    fn sub(self, rhs: &Vector) -> Self::Output {
        self.subtract(rhs)
    }
}

impl ops::Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl ops::Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl ops::Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

/// # Panics
/// Panics on a zero divisor; use [`Vector::div_scalar`] to get an error instead.
impl ops::Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Self::Output {
        &self / rhs
    }
}

impl ops::Div<f64> for &Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Self::Output {
        match self.div_scalar(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl ops::AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        for i in 0..self.dimension().max(rhs.dimension()) {
            self[i] += rhs[i];
        }
    }
}

impl ops::AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self += &rhs;
    }
}

impl ops::SubAssign<&Vector> for Vector {
    fn sub_assign(&mut self, rhs: &Vector) {
        for i in 0..self.dimension().max(rhs.dimension()) {
            self[i] -= rhs[i];
        }
    }
}

impl ops::SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self -= &rhs;
    }
}

impl ops::MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        for x in &mut self.data {
            *x *= rhs;
        }
    }
}

/// # Panics
/// Panics on a zero divisor; use [`Vector::try_div_assign`] to get an error instead.
impl ops::DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        if let Err(e) = self.try_div_assign(rhs) {
            panic!("{}", e);
        }
    }
}

#[cfg(test)]
fn v1() -> Vector {
    Vector::new([1, 2, 3])
}

#[cfg(test)]
fn v2() -> Vector {
    Vector::new([4, 5, 6])
}

#[cfg(test)]
fn assert_close(a: &Vector, b: &Vector) {
    assert_eq!(a.dimension(), b.dimension(), "{:?} vs {:?}", a, b);
    for (x, y) in a.iter().zip(b) {
        assert!((x - y).abs() < 1e-9, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_properties() {
    let v = v1();
    assert!((v.magnitude() - 14f64.sqrt()).abs() < 1e-12);
    assert_close(&v.direction().scale(v.magnitude()), &v);
    assert_eq!(v.dimension(), 3);
    assert_eq!(Vector::new([7, 8]).dimension(), 2);
}

#[test]
fn test_default_and_empty() {
    let v = Vector::default();
    assert_eq!(v, Vector::new([0.0]));
    assert_eq!(v.dimension(), 1);
    let e = Vector::empty();
    assert_eq!(e.dimension(), 0);
    assert!(e.is_empty());
    assert_eq!(e.magnitude(), 0.0);
    assert_eq!(e.to_string(), "<>");
    assert_eq!(format!("{:?}", e), "Vector([])");
}

#[test]
fn test_zero_direction() {
    let zero = Vector::new([0, 0, 0]);
    assert_eq!(zero.magnitude(), 0.0);
    assert_eq!(zero.direction(), Vector::new([0.0, 0.0, 0.0]));
}

#[test]
fn test_comparison() {
    assert_eq!(v1(), Vector::new([1.0, 2.0, 3.0]));
    assert_ne!(v1(), v2());
    assert!(v1() < v2());
    assert!(v1() <= v2());
    assert!(Vector::new([7, 8]) > Vector::new([1, 2]));
    assert!(Vector::new([7, 8]) >= Vector::new([1, 2]));
}

#[test]
fn test_equality_requires_same_dimension() {
    let padded = Vector::new([1, 2, 3, 0]);
    assert_ne!(v1(), padded);
    assert_eq!(v1()[3], padded[3]);
}

#[test]
fn test_ordering_by_magnitude_only() {
    let a = Vector::new([3, 4]);
    let b = Vector::new([4, 3]);
    assert_ne!(a, b);
    assert!(!(a < b));
    assert!(!(b < a));
    assert!(a <= b && a >= b);
    assert_eq!(a.compare_magnitude(&b), Some(Ordering::Equal));
}

#[test]
fn test_text_forms() {
    assert_eq!(format!("{:?}", v1()), "Vector([1.0, 2.0, 3.0])");
    assert_eq!(v2().to_string(), "<4.0, 5.0, 6.0>");
    assert_eq!(format!("{:.2}", v1()), "<1.00, 2.00, 3.00>");
    assert_eq!(Vector::new([0.5, -1.25]).to_string(), "<0.5, -1.25>");
    assert_eq!(Vector::new([1e16, f64::NAN]).to_string(), "<1e16, NaN>");
}

#[test]
fn test_conversions() -> Result<()> {
    assert!(v1().is_nonzero());
    assert!(!Vector::new([0, 0, 0]).is_nonzero());
    assert!(Vector::empty().is_zero());
    assert_eq!(v1().to_int(), 3);
    assert_eq!(v2().to_float(), v2().magnitude());
    assert_eq!(f64::from(&v2()), v2().magnitude());
    assert_eq!(Vector::new([7, 8]).to_complex()?, Complex64::new(7.0, 8.0));
    assert_eq!(Complex64::try_from(&Vector::new([7, 8]))?, Complex64::new(7.0, 8.0));
    Ok(())
}

#[test]
fn test_complex_requires_two_dimensions() {
    let err = v1().to_complex().unwrap_err();
    assert_eq!(err, VectorError::NotPlanar { dimension: 3 });
    assert_eq!(err.kind(), crate::error::ErrorKind::Value);
    assert!(Vector::default().to_complex().is_err());
}

#[test]
fn test_container_access() -> Result<()> {
    let mut v = v1();
    assert_eq!(v.len(), 3);
    assert_eq!(v.iter().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    assert_eq!(v[0], 1.0);
    assert_eq!(v[10], 0.0);
    assert_eq!(v.at(10)?, 0.0);
    assert_eq!(v.dimension(), 3);
    v[1] = 10.0;
    assert_eq!(v[1], 10.0);
    v.set(2, 7)?;
    assert_eq!(v, Vector::new([1, 10, 7]));
    Ok(())
}

#[test]
fn test_negative_index() {
    let mut v = v1();
    let err = v.at(-1).unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::Range);
    assert!(v.set(-1, 5).is_err());
    assert_eq!(v, v1());
}

#[cfg(test)]
#[test_log::test]
fn test_write_past_end_grows() {
    let mut v = v1();
    v[5] = 9.0;
    assert_eq!(v, Vector::new([1, 2, 3, 0, 0, 9]));
    v.set_component(6, 1);
    assert_eq!(v.dimension(), 7);
    v.push(2);
    v.extend([3.0, 4.0]);
    assert_eq!(v.dimension(), 10);
}

#[test]
fn test_iteration_restarts() {
    let v = v1();
    let first: Vec<f64> = (&v).into_iter().collect();
    let second: Vec<f64> = v.iter().collect();
    assert_eq!(first, second);
    assert_eq!(v.into_iter().sum::<f64>(), 6.0);
}

#[test]
fn test_arithmetic() -> Result<()> {
    assert_eq!(v1() + v2(), Vector::new([5, 7, 9]));
    assert_eq!(v1() - v2(), Vector::new([-3, -3, -3]));
    assert_eq!(v1() * 2.0, Vector::new([2, 4, 6]));
    assert_eq!(v1().dot(&v2()), 32.0);
    assert_eq!(v1().cross(&v2())?, Vector::new([-3, 6, -3]));
    assert_eq!(-v1(), Vector::new([-1, -2, -3]));
    assert_eq!(v1().identity(), v1());
    assert_eq!(&v1() / 2.0, Vector::new([0.5, 1.0, 1.5]));
    Ok(())
}

#[test]
fn test_addition_pads_dot_truncates() {
    let short = Vector::new([4, 5]);
    assert_eq!(&v1() + &short, Vector::new([5, 7, 3]));
    assert_eq!(&short + &v1(), Vector::new([5, 7, 3]));
    assert_eq!(&short - &v1(), Vector::new([3, 3, -3]));
    assert_eq!(dot_product(&v1(), &short), 14.0);
}

#[test]
fn test_add_negated_is_zero() {
    let v = v1();
    let zero = &v + &(&v * -1.0);
    assert_eq!(zero, Vector::new([0, 0, 0]));
    assert!(zero.is_zero());
}

#[test]
fn test_cross_product() -> Result<()> {
    let x = Vector::new([1, 0]);
    let y = Vector::new([0, 1]);
    assert_eq!(cross_product(&x, &y)?, Vector::new([0, 0, 1]));
    let err = Vector::new([1, 2, 3, 4]).cross(&v1()).unwrap_err();
    assert_eq!(err, VectorError::CrossDimension { lhs: 4, rhs: 3 });
    assert_eq!(err.kind(), crate::error::ErrorKind::Type);
    let err = v1().cross(&Vector::new([1, 2, 3, 4])).unwrap_err();
    assert_eq!(err, VectorError::CrossDimension { lhs: 3, rhs: 4 });
    Ok(())
}

#[test]
fn test_division_by_zero() {
    let err = v1().div_scalar(0).unwrap_err();
    assert_eq!(err, VectorError::DivisionByZero);
    assert_eq!(err.kind(), crate::error::ErrorKind::Arithmetic);
    assert!(v1().divide(0.0).is_err());
}

#[test]
#[should_panic]
fn test_division_by_zero_panic() {
    let _v = v1() / 0.0;
}

#[test]
fn test_disabled_operators() -> Result<()> {
    let v = v1();
    let zero = Vector::new([0, 0, 0]);
    for result in [v.divide(&zero), v.floor_divide(&zero), v.modulo(&zero), v.modulo(2)] {
        assert_eq!(result.unwrap_err().kind(), crate::error::ErrorKind::Type);
    }
    assert_eq!(
        v.floor_divide(2.0).unwrap_err(),
        VectorError::Unsupported {
            operation: "//",
            operand: "float",
        }
    );
    assert_eq!(v.to_bytes().unwrap_err(), VectorError::NoByteRepresentation);
    assert_eq!(v.divide(2)?.dimension(), 3);
    Ok(())
}

#[test]
fn test_inplace_operations() {
    let mut v = v1();
    v += Vector::new([1, 1, 1]);
    assert_eq!(v, Vector::new([2, 3, 4]));
    v -= Vector::new([1, 0, 1]);
    assert_eq!(v, Vector::new([1, 3, 3]));
    v *= 2.0;
    assert_eq!(v, Vector::new([2, 6, 6]));
    v /= 2.0;
    assert_eq!(v, Vector::new([1, 3, 3]));
    assert!(v.try_div_assign(0).is_err());
    assert_eq!(v, Vector::new([1, 3, 3]));
}

#[test]
fn test_inplace_add_pads() {
    let mut v = Vector::new([1]);
    v += &v1();
    assert_eq!(v, Vector::new([2, 2, 3]));
    v -= &Vector::new([0, 0, 0, 1]);
    assert_eq!(v, Vector::new([2, 2, 3, -1]));
}

#[test]
#[should_panic]
fn test_inplace_division_by_zero_panic() {
    let mut v = v1();
    v /= 0.0;
}

#[test]
fn test_random_vectors() {
    use rand::Rng;

    let mut rng = rand::rng();
    for _ in 0..200 {
        let dim = rng.random_range(1..8);
        let v: Vector = (0..dim).map(|_| rng.random_range(-100.0..100.0)).collect();
        let expected = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!(v.magnitude() >= 0.0);
        assert!((v.magnitude() - expected).abs() < 1e-9);
        if v.is_nonzero() {
            assert!((v.direction().magnitude() - 1.0).abs() < 1e-9);
        }
        assert!((&v + &-&v).is_zero());
        assert_eq!(v.dot(&v), v.iter().map(|x| x * x).sum::<f64>());
    }
}

#[test]
fn test_magnitude_extreme_components() {
    let tiny = Vector::new([1e-200, 0.0]);
    assert!(tiny.is_nonzero());
    assert!((tiny.magnitude() - 1e-200).abs() < 1e-212);
    assert_eq!(tiny.direction(), Vector::new([1.0, 0.0]));

    let huge = Vector::new([1e200, 1e200]);
    assert!(huge.magnitude().is_finite());
    assert!((huge.magnitude() / 1e200 - 2f64.sqrt()).abs() < 1e-12);
    assert!((huge.direction().magnitude() - 1.0).abs() < 1e-12);

    assert_eq!(Vector::new([f64::INFINITY, 1.0]).magnitude(), f64::INFINITY);
    assert!(Vector::new([f64::NAN, 1.0]).magnitude().is_nan());
}

#[test]
fn test_magnitude_exact_for_equal_norms() {
    assert_eq!(Vector::new([3, 4]).magnitude(), 5.0);
    assert_eq!(Vector::new([4, 3]).magnitude(), 5.0);
}

#[test]
fn test_to_int_saturates() {
    assert_eq!(Vector::new([f64::NAN]).to_int(), 0);
    assert_eq!(Vector::new([f64::INFINITY]).to_int(), i64::MAX);
    assert_eq!(Vector::new([-2.9]).to_int(), 2);
}

#[test]
fn test_from_wide_integers() {
    assert_eq!(Vector::from(vec![1i64, -2]), Vector::new([1.0, -2.0]));
    assert_eq!(Vector::from(vec![3usize, 4]), Vector::new([3, 4]));
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_write_at_max_index_fails_in_allocator() {
    let mut v = v1();
    v[usize::MAX] = 1.0;
}
