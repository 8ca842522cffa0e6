//! Operator overloads for component-wise arithmetic.
//!
//! `a * b` and `a / b` between two vectors are component-wise, not dot
//! products. `v * k` and `v / k` scale by an element. Compound assignment
//! operators are deliberately absent: vectors are only ever replaced.
//!
//! Integer elements follow Rust's overflow rules: `+`, `-`, `*` and unary `-`
//! panic on overflow in debug builds and wrap in release builds. Negating
//! the minimum value (`-Vector2D::new(i32::MIN, 0)`) is such an overflow.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Vector2D;
use crate::scalar::Scalar;

macro_rules! impl_componentwise {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl<T: Scalar> $trait for Vector2D<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Vector2D::new(self.x.$method(rhs.x), self.y.$method(rhs.y))
                }
            }
        )*
    };
}

impl_componentwise!(Add::add, Sub::sub, Mul::mul, Div::div);

impl<T: Scalar> Mul<T> for Vector2D<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.mul_scalar(rhs)
    }
}

impl<T: Scalar> Div<T> for Vector2D<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        self.div_scalar(rhs)
    }
}

/// Negates both components.
///
/// For integer elements the minimum value overflows (a panic in debug builds).
impl<T: Scalar> Neg for Vector2D<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}
