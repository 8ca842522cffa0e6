//! Conversions between [`Vector2D`] and tuples, arrays and `glam` vectors.

use glam::{DVec2, IVec2, Vec2};

use crate::vector::Vector2D;

impl<T> From<(T, T)> for Vector2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2D<T>> for (T, T) {
    fn from(v: Vector2D<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T> From<[T; 2]> for Vector2D<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2D<T>> for [T; 2] {
    fn from(v: Vector2D<T>) -> Self {
        [v.x, v.y]
    }
}

macro_rules! impl_glam {
    ($($glam:ty => $t:ty),* $(,)?) => {
        $(
            impl From<$glam> for Vector2D<$t> {
                #[inline]
                fn from(v: $glam) -> Self {
                    Self::new(v.x, v.y)
                }
            }

            impl From<Vector2D<$t>> for $glam {
                #[inline]
                fn from(v: Vector2D<$t>) -> Self {
                    <$glam>::new(v.x, v.y)
                }
            }
        )*
    };
}

impl_glam!(DVec2 => f64, Vec2 => f32, IVec2 => i32);
