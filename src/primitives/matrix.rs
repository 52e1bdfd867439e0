//! Matrix type for 2D numeric data.

use crate::error::{Error, Result};
use num_traits::{AsPrimitive, Num, NumCast, One, Zero};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Element-count floor below which bulk loops stay single-threaded.
pub(crate) const DEFAULT_PAR_THRESHOLD: usize = 1024;

fn default_par_threshold() -> usize {
    DEFAULT_PAR_THRESHOLD
}

/// Orientation selector for vector-shaped results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// 1 x N row vector.
    Row,
    /// N x 1 column vector.
    Col,
}

/// A 2D dense matrix of numeric values (row-major storage).
///
/// The buffer is owned exclusively: cloning deep-copies it, moving
/// transfers it and leaves nothing behind. `rows == 0 && cols == 0`
/// with an empty buffer is the canonical empty state; a half-zero
/// shape never exists.
///
/// Bulk elementwise loops and reductions fan out across rayon workers
/// when the `parallel` feature is enabled and the element count exceeds
/// the per-instance [`par_threshold`](Matrix::par_threshold); smaller
/// matrices run single-threaded to avoid dispatch overhead.
///
/// # Examples
///
/// ```
/// use matriz::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    #[serde(skip, default = "default_par_threshold")]
    par_threshold: usize,
}

/// Structural equality: shapes first, then exact element-wise `==`.
///
/// Exact for every element type, floating point included; the parallel
/// threshold takes no part in it.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matrix<T> {
    /// Creates the canonical empty matrix (0 x 0, no buffer).
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
            par_threshold: DEFAULT_PAR_THRESHOLD,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total element count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when the matrix holds at least one element.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.data.is_empty()
    }

    /// True when (row, col) addresses an element of this matrix.
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// True for single-row or single-column matrices.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    /// True when row and column counts agree.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the underlying row-major data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Element-count floor below which bulk loops run single-threaded.
    #[must_use]
    pub fn par_threshold(&self) -> usize {
        self.par_threshold
    }

    /// Sets the single-threaded floor for this instance.
    pub fn set_par_threshold(&mut self, threshold: usize) {
        self.par_threshold = threshold;
    }

    /// Releases the buffer and resets both dimensions to zero.
    ///
    /// Returns `false` when the matrix is already empty.
    pub fn clear(&mut self) -> bool {
        if self.data.is_empty() {
            return false;
        }
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
        true
    }

    fn shape_str(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the data length differs
    /// from `rows * cols`, or when exactly one dimension is zero.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if (rows == 0) != (cols == 0) {
            return Err(Error::ShapeMismatch {
                expected: "both dimensions zero or both nonzero".to_string(),
                actual: format!("{rows}x{cols}"),
            });
        }
        if data.len() != rows * cols {
            return Err(Error::ShapeMismatch {
                expected: format!("{rows}x{cols} ({} elements)", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self::from_parts(rows, cols, data))
    }

    /// Internal constructor for buffers whose length is known to match.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            data,
            rows,
            cols,
            par_threshold: DEFAULT_PAR_THRESHOLD,
        }
    }

    /// Creates a matrix with every element set to `value`.
    ///
    /// A zero dimension collapses to the canonical empty matrix.
    #[must_use]
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        if rows == 0 || cols == 0 {
            return Self::new();
        }
        Self::from_parts(rows, cols, vec![value; rows * cols])
    }

    /// Creates a matrix from nested row literals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the rows are ragged.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self::new());
        };
        let cols = first.len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(Error::ShapeMismatch {
                    expected: format!("{cols} elements per row"),
                    actual: format!("{} elements", row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), cols, data)
    }

    /// Creates a 1 x N row vector from a flat literal.
    #[must_use]
    pub fn from_row(values: &[T]) -> Self {
        if values.is_empty() {
            return Self::new();
        }
        Self::from_parts(1, values.len(), values.to_vec())
    }

    /// Creates an N x 1 column vector from a flat literal.
    #[must_use]
    pub fn from_col(values: &[T]) -> Self {
        if values.is_empty() {
            return Self::new();
        }
        Self::from_parts(values.len(), 1, values.to_vec())
    }

    /// Gets the element at (row, col) without per-coordinate checks.
    ///
    /// This is the hot-path accessor; use [`get_or`](Matrix::get_or) or
    /// [`try_get`](Matrix::try_get) for checked access.
    ///
    /// # Panics
    ///
    /// Panics when the flat offset `row * cols + col` lands outside the
    /// buffer.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Mutable reference to the element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics when the flat offset lands outside the buffer.
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }

    /// Checked access: returns `default` when (row, col) is out of range.
    #[must_use]
    pub fn get_or(&self, row: usize, col: usize, default: T) -> T {
        if self.in_bounds(row, col) {
            self.data[row * self.cols + col]
        } else {
            default
        }
    }

    /// Checked access reporting the failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when (row, col) is out of range.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        if self.in_bounds(row, col) {
            Ok(self.data[row * self.cols + col])
        } else {
            Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Checked store: returns `false` without mutation when (row, col)
    /// is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        self.data[row * self.cols + col] = value;
        true
    }

    /// Extracts row `n` as a 1 x cols matrix; empty when out of range.
    #[must_use]
    pub fn get_row(&self, n: usize) -> Self {
        if n >= self.rows {
            return Self::new();
        }
        let start = n * self.cols;
        Self::from_parts(1, self.cols, self.data[start..start + self.cols].to_vec())
    }

    /// Extracts column `n` as a rows x 1 matrix; empty when out of range.
    #[must_use]
    pub fn get_col(&self, n: usize) -> Self {
        if n >= self.cols {
            return Self::new();
        }
        let data: Vec<T> = (0..self.rows)
            .map(|r| self.data[r * self.cols + n])
            .collect();
        Self::from_parts(self.rows, 1, data)
    }

    /// Overwrites row `n` from a vector-shaped source.
    ///
    /// The source may be a row vector or a column vector, as long as its
    /// element count equals this matrix's column count. Returns `false`
    /// without mutation on a shape mismatch or out-of-range index.
    pub fn set_row(&mut self, n: usize, other: &Self) -> bool {
        if n >= self.rows || !other.is_vector() || other.size() != self.cols {
            return false;
        }
        let start = n * self.cols;
        self.data[start..start + self.cols].copy_from_slice(&other.data);
        true
    }

    /// Overwrites column `n` from a vector-shaped source.
    ///
    /// Same contract as [`set_row`](Matrix::set_row), with the source
    /// length matched against the row count.
    pub fn set_col(&mut self, n: usize, other: &Self) -> bool {
        if n >= self.cols || !other.is_vector() || other.size() != self.rows {
            return false;
        }
        for (r, &v) in other.data.iter().enumerate() {
            self.data[r * self.cols + n] = v;
        }
        true
    }

    /// Result-shaped copy of self with a different buffer.
    pub(crate) fn with_data(&self, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self {
            data,
            rows: self.rows,
            cols: self.cols,
            par_threshold: self.par_threshold,
        }
    }
}

impl<T: Copy + 'static> Matrix<T> {
    /// Element-wise conversion to another numeric type.
    ///
    /// Uses `as`-cast semantics; narrowing is visible at the call site
    /// instead of hiding inside an assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::Matrix;
    ///
    /// let m = Matrix::from_vec(1, 2, vec![1.9_f64, -1.9]).expect("2 elements");
    /// let n = m.cast::<i32>();
    /// assert_eq!(n.as_slice(), &[1, -1]);
    /// ```
    #[must_use]
    pub fn cast<U>(&self) -> Matrix<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Matrix {
            data: self.data.iter().map(|v| v.as_()).collect(),
            rows: self.rows,
            cols: self.cols,
            par_threshold: self.par_threshold,
        }
    }
}

impl<T: Copy + Zero> Matrix<T> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }

    /// Reallocates the buffer to `rows * cols`, discarding contents.
    ///
    /// The fresh buffer is zero-filled. Returns `false` (no mutation)
    /// when the target equals the current shape or exactly one
    /// dimension is zero; a 0 x 0 target empties the matrix.
    pub fn resize(&mut self, rows: usize, cols: usize) -> bool {
        if rows == self.rows && cols == self.cols {
            return false;
        }
        if rows == 0 && cols == 0 {
            return self.clear();
        }
        if rows == 0 || cols == 0 {
            return false;
        }
        self.data = vec![T::zero(); rows * cols];
        self.rows = rows;
        self.cols = cols;
        true
    }
}

impl<T: Copy + Zero + One> Matrix<T> {
    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::one())
    }

    /// Creates a square matrix with `value` on the main diagonal and
    /// zeros elsewhere.
    #[must_use]
    pub fn diag(size: usize, value: T) -> Self {
        let mut out = Self::zeros(size, size);
        for i in 0..size {
            out.data[i * size + i] = value;
        }
        out
    }

    /// Creates the identity matrix.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        Self::diag(size, T::one())
    }
}

impl<T: Copy + Send + Sync> Matrix<T> {
    /// Fills an output buffer from a flat-index producer, fanning out
    /// across rayon workers above the parallel threshold.
    fn build<F>(&self, count: usize, producer: F) -> Vec<T>
    where
        F: Fn(usize) -> T + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if count > self.par_threshold {
                return (0..count).into_par_iter().map(producer).collect();
            }
        }
        (0..count).map(producer).collect()
    }

    /// Returns the transpose: shape swaps, element (i, j) moves to (j, i).
    #[must_use]
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        let data = self.build(self.size(), |k| {
            let (j, i) = (k / rows, k % rows);
            self.data[i * cols + j]
        });
        Self {
            data,
            rows: cols,
            cols: rows,
            par_threshold: self.par_threshold,
        }
    }

    /// Returns the cofactor minor: self with `row` and `col` removed.
    ///
    /// Degenerate policy: fewer than 2 rows or columns yields the empty
    /// matrix; an out-of-range index yields an unchanged copy of self.
    #[must_use]
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        if self.rows < 2 || self.cols < 2 {
            return Self::new();
        }
        if row >= self.rows || col >= self.cols {
            return self.clone();
        }
        let out_cols = self.cols - 1;
        let data = self.build((self.rows - 1) * out_cols, |k| {
            let (r, c) = (k / out_cols, k % out_cols);
            let src_r = if r < row { r } else { r + 1 };
            let src_c = if c < col { c } else { c + 1 };
            self.data[src_r * self.cols + src_c]
        });
        Self {
            data,
            rows: self.rows - 1,
            cols: out_cols,
            par_threshold: self.par_threshold,
        }
    }

    /// Extracts the main diagonal as a row or column vector.
    ///
    /// Only defined for square matrices; empty otherwise.
    #[must_use]
    pub fn diagonal(&self, axis: Axis) -> Self {
        if !self.is_square() || self.is_empty() {
            return Self::new();
        }
        let n = self.cols;
        let data = self.build(n, |i| self.data[i * n + i]);
        match axis {
            Axis::Row => Self::from_parts(1, n, data),
            Axis::Col => Self::from_parts(n, 1, data),
        }
    }

    /// Elementwise transform into a new matrix.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync,
    {
        self.with_data(self.build(self.size(), |k| f(self.data[k])))
    }

    /// Elementwise transform receiving the (row, col) position.
    #[must_use]
    pub fn map_indexed<F>(&self, f: F) -> Self
    where
        F: Fn(T, usize, usize) -> T + Send + Sync,
    {
        let cols = self.cols;
        self.with_data(
            self.build(self.size(), |k| f(self.data[k], k / cols, k % cols)),
        )
    }

    /// Elementwise transform in place, reusing the buffer.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: Fn(T) -> T + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if self.data.len() > self.par_threshold {
                self.data.par_iter_mut().for_each(|v| *v = f(*v));
                return;
            }
        }
        for v in &mut self.data {
            *v = f(*v);
        }
    }
}

impl<T: Num + Copy + Send + Sync> Matrix<T> {
    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::ShapeMismatch {
                expected: self.shape_str(),
                actual: other.shape_str(),
            });
        }
        Ok(())
    }

    /// Elementwise combination of two equal-shaped buffers.
    fn zip_with<F>(&self, other: &Self, f: F) -> Vec<T>
    where
        F: Fn(T, T) -> T + Send + Sync,
    {
        self.build(self.size(), |k| f(self.data[k], other.data[k]))
    }

    fn zip_in_place<F>(&mut self, other: &Self, f: F)
    where
        F: Fn(T, T) -> T + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if self.data.len() > self.par_threshold {
                self.data
                    .par_iter_mut()
                    .zip(&other.data)
                    .for_each(|(a, &b)| *a = f(*a, b));
                return;
            }
        }
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a = f(*a, b);
        }
    }

    /// Element-wise sum of two equal-shaped matrices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(self.with_data(self.zip_with(other, |a, b| a + b)))
    }

    /// Element-wise difference of two equal-shaped matrices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(self.with_data(self.zip_with(other, |a, b| a - b)))
    }

    /// In-place element-wise sum; used by the value-consuming operators.
    pub(crate) fn add_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other)?;
        self.zip_in_place(other, |a, b| a + b);
        Ok(())
    }

    /// In-place element-wise difference (`self = self - other`).
    pub(crate) fn sub_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other)?;
        self.zip_in_place(other, |a, b| a - b);
        Ok(())
    }

    /// In-place reversed difference (`self = other - self`).
    pub(crate) fn rsub_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other)?;
        self.zip_in_place(other, |a, b| b - a);
        Ok(())
    }

    /// Matrix product with the original's i-k-j loop order.
    ///
    /// Each output row accumulates serially over the shared dimension,
    /// so rounding is deterministic at any thread count; only the rows
    /// themselves fan out in parallel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] unless `self.cols == other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::ShapeMismatch {
                expected: format!("{} rows on the right operand", self.cols),
                actual: other.shape_str(),
            });
        }
        let (m, kdim, n) = (self.rows, self.cols, other.cols);
        let row_product = |i: usize| -> Vec<T> {
            let mut acc = vec![T::zero(); n];
            for k in 0..kdim {
                let a = self.data[i * kdim + k];
                let brow = &other.data[k * n..(k + 1) * n];
                for (out, &b) in acc.iter_mut().zip(brow) {
                    *out = *out + a * b;
                }
            }
            acc
        };
        #[cfg(feature = "parallel")]
        {
            if m * n > self.par_threshold {
                let data: Vec<T> = (0..m).into_par_iter().flat_map_iter(row_product).collect();
                return Ok(Self::from_parts(m, n, data));
            }
        }
        let mut data = Vec::with_capacity(m * n);
        for i in 0..m {
            data.extend(row_product(i));
        }
        Ok(Self::from_parts(m, n, data))
    }

    /// Adds a scalar to every element.
    #[must_use]
    pub fn add_scalar(&self, scalar: T) -> Self {
        self.map(|v| v + scalar)
    }

    /// Subtracts a scalar from every element.
    #[must_use]
    pub fn sub_scalar(&self, scalar: T) -> Self {
        self.map(|v| v - scalar)
    }

    /// Multiplies every element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.map(|v| v * scalar)
    }

    /// Divides every element by a scalar.
    #[must_use]
    pub fn div_scalar(&self, scalar: T) -> Self {
        self.map(|v| v / scalar)
    }

    /// Divides every element by `denom`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMatrix`] on an empty matrix.
    pub fn normalize(&self, denom: T) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::EmptyMatrix);
        }
        Ok(self.div_scalar(denom))
    }
}

impl<T: Num + Copy + PartialOrd + Send + Sync> Matrix<T> {
    /// Divides every element by the matrix maximum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMatrix`] on an empty matrix.
    pub fn normalize_max(&self) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::EmptyMatrix);
        }
        let mut max = self.data[0];
        for &v in &self.data[1..] {
            if max < v {
                max = v;
            }
        }
        Ok(self.div_scalar(max))
    }
}

impl<T: Num + NumCast + Copy> Matrix<T> {
    /// Creates a matrix whose flattened elements interpolate linearly
    /// from `start` to `stop`, both endpoints inclusive when the count
    /// exceeds one; a single cell holds `start`.
    #[must_use]
    pub fn linspace(rows: usize, cols: usize, start: T, stop: T) -> Self {
        let count = rows * cols;
        if count == 0 {
            return Self::new();
        }
        if count == 1 {
            return Self::from_elem(rows, cols, start);
        }
        let dt = stop - start;
        let denom = T::from(count - 1).unwrap_or_else(T::one);
        let data = (0..count)
            .map(|i| {
                let ti = T::from(i).unwrap_or_else(T::zero);
                start + (dt * ti) / denom
            })
            .collect();
        Self::from_parts(rows, cols, data)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

/// Human-readable tab-delimited grid, one row per line.
impl<T: fmt::Display + Copy> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let sep = if c + 1 == self.cols { '\n' } else { '\t' };
                write!(f, "{}{}", self.get(r, c), sep)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
