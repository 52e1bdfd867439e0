//! Operator sugar for [`Matrix`].
//!
//! The named methods (`add`, `sub`, `matmul`, ...) are the checked,
//! `Result`-returning API. The `std::ops` impls below are thin sugar
//! over them and panic on shape mismatch, the same contract as slice
//! indexing. Value-consuming forms reuse the owned buffer instead of
//! allocating, which is how a temporary left operand avoids the copy.

use super::Matrix;
use num_traits::Num;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

const SHAPE_MSG: &str = "matrix operands must have compatible shapes";

impl<T: Num + Copy + Send + Sync> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics when the shapes differ; use [`Matrix::add`] to handle the
    /// mismatch instead.
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        Matrix::add(self, rhs).expect(SHAPE_MSG)
    }
}

impl<T: Num + Copy + Send + Sync> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self.add_in_place(rhs).expect(SHAPE_MSG);
        self
    }
}

impl<T: Num + Copy + Send + Sync> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, mut rhs: Matrix<T>) -> Matrix<T> {
        rhs.add_in_place(self).expect(SHAPE_MSG);
        rhs
    }
}

impl<T: Num + Copy + Send + Sync> Add<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, rhs: Matrix<T>) -> Matrix<T> {
        self.add_in_place(&rhs).expect(SHAPE_MSG);
        self
    }
}

impl<T: Num + Copy + Send + Sync> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics when the shapes differ; use [`Matrix::sub`] to handle the
    /// mismatch instead.
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        Matrix::sub(self, rhs).expect(SHAPE_MSG)
    }
}

impl<T: Num + Copy + Send + Sync> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self.sub_in_place(rhs).expect(SHAPE_MSG);
        self
    }
}

impl<T: Num + Copy + Send + Sync> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, mut rhs: Matrix<T>) -> Matrix<T> {
        rhs.rsub_in_place(self).expect(SHAPE_MSG);
        rhs
    }
}

impl<T: Num + Copy + Send + Sync> Sub<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, rhs: Matrix<T>) -> Matrix<T> {
        self.sub_in_place(&rhs).expect(SHAPE_MSG);
        self
    }
}

impl<T: Num + Copy + Send + Sync> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics unless `self.cols() == rhs.rows()`; use [`Matrix::matmul`]
    /// to handle the mismatch instead.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matmul(rhs).expect(SHAPE_MSG)
    }
}

impl<T: Num + Copy + Send + Sync> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self.matmul(&rhs).expect(SHAPE_MSG)
    }
}

impl<T: Num + Copy + Send + Sync> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matmul(rhs).expect(SHAPE_MSG)
    }
}

impl<T: Num + Copy + Send + Sync> Mul<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self.matmul(&rhs).expect(SHAPE_MSG)
    }
}

impl<T: Num + Neg<Output = T> + Copy + Send + Sync> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|v| -v)
    }
}

impl<T: Num + Neg<Output = T> + Copy + Send + Sync> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        self.map_inplace(|v| -v);
        self
    }
}

// Scalar on the right: M op s.

impl<T: Num + Copy + Send + Sync> Add<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, scalar: T) -> Matrix<T> {
        self.add_scalar(scalar)
    }
}

impl<T: Num + Copy + Send + Sync> Add<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, scalar: T) -> Matrix<T> {
        self.map_inplace(|v| v + scalar);
        self
    }
}

impl<T: Num + Copy + Send + Sync> Sub<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, scalar: T) -> Matrix<T> {
        self.sub_scalar(scalar)
    }
}

impl<T: Num + Copy + Send + Sync> Sub<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, scalar: T) -> Matrix<T> {
        self.map_inplace(|v| v - scalar);
        self
    }
}

impl<T: Num + Copy + Send + Sync> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.mul_scalar(scalar)
    }
}

impl<T: Num + Copy + Send + Sync> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, scalar: T) -> Matrix<T> {
        self.map_inplace(|v| v * scalar);
        self
    }
}

impl<T: Num + Copy + Send + Sync> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, scalar: T) -> Matrix<T> {
        self.div_scalar(scalar)
    }
}

impl<T: Num + Copy + Send + Sync> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(mut self, scalar: T) -> Matrix<T> {
        self.map_inplace(|v| v / scalar);
        self
    }
}

// Compound assignment.

impl<T: Num + Copy + Send + Sync> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        self.add_in_place(rhs).expect(SHAPE_MSG);
    }
}

impl<T: Num + Copy + Send + Sync> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        self.sub_in_place(rhs).expect(SHAPE_MSG);
    }
}

/// `*=` with a matrix reallocates through [`Matrix::matmul`].
impl<T: Num + Copy + Send + Sync> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = self.matmul(rhs).expect(SHAPE_MSG);
    }
}

impl<T: Num + Copy + Send + Sync> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, scalar: T) {
        self.map_inplace(|v| v + scalar);
    }
}

impl<T: Num + Copy + Send + Sync> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, scalar: T) {
        self.map_inplace(|v| v - scalar);
    }
}

impl<T: Num + Copy + Send + Sync> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.map_inplace(|v| v * scalar);
    }
}

impl<T: Num + Copy + Send + Sync> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, scalar: T) {
        self.map_inplace(|v| v / scalar);
    }
}

// Scalar on the left: s op M. Division is intentionally absent; there
// is no single sensible meaning for scalar / matrix.
macro_rules! commuted_scalar_ops {
    ($($t:ty),* $(,)?) => {$(
        impl Add<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn add(self, m: Matrix<$t>) -> Matrix<$t> {
                m + self
            }
        }

        impl Add<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn add(self, m: &Matrix<$t>) -> Matrix<$t> {
                m.add_scalar(self)
            }
        }

        impl Sub<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn sub(self, mut m: Matrix<$t>) -> Matrix<$t> {
                m.map_inplace(|v| self - v);
                m
            }
        }

        impl Sub<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn sub(self, m: &Matrix<$t>) -> Matrix<$t> {
                m.map(|v| self - v)
            }
        }

        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, m: Matrix<$t>) -> Matrix<$t> {
                m * self
            }
        }

        impl Mul<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, m: &Matrix<$t>) -> Matrix<$t> {
                m.mul_scalar(self)
            }
        }
    )*};
}

commuted_scalar_ops!(f32, f64, i32, i64);

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
