use std::{array, fmt};

use crate::{dot_product, Number, One, ShapeError, Vector, Zero};

mod ops;
mod row;

pub use row::*;

/// A row-major matrix with `R` rows, `C` columns, and element type `T`.
///
/// The elements are stored as `[[T; C]; R]`, which has the same layout as a flat `[T; R * C]`
/// array where the element at `(i, j)` lives at index `i * C + j`. [`Matrix::as_flat`] and
/// [`Matrix::as_flat_mut`] expose that flat view.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills a matrix from an array of rows.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::try_from_flat`] copies a row-major slice of the right length into a matrix.
/// - [`Matrix::ZERO`] has every element set to 0, and [`Matrix::IDENTITY`] has 1 on its diagonal
///   and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples. Indices are
/// 0-based, and indexing out of bounds panics, just like it does for slices.
///
/// ```
/// # use matrix_op::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Whole rows are accessed with [`Matrix::row`] / [`select_row`] and overwritten with
/// [`Matrix::replace_row`] / [`replace_row`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The number of rows (`R`).
    pub const ROWS: usize = R;
    /// The number of columns (`C`).
    pub const COLUMNS: usize = C;

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.as_flat(), &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Copies a row-major slice of `R * C` elements into a new [`Matrix`].
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::LengthMismatch`] if `flat` does not have exactly `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let mat = Matrix::<_, 2, 3>::try_from_flat(&data).unwrap();
    /// assert_eq!(mat[(1, 0)], 4.0);
    ///
    /// let err = Matrix::<f64, 3, 3>::try_from_flat(&data).unwrap_err();
    /// assert_eq!(err, ShapeError::LengthMismatch { expected: 9, found: 6 });
    /// ```
    pub fn try_from_flat(flat: &[T]) -> Result<Self, ShapeError>
    where
        T: Copy,
    {
        ShapeError::check_len(R * C, flat.len())?;
        Ok(Self::from_fn(|row, col| flat[row * C + col]))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns the elements of this matrix as a flat, row-major slice of length `R * C`.
    #[inline]
    pub fn as_flat(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements of this matrix as a flat, row-major mutable slice of length `R * C`.
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Swaps the rows and columns of this matrix, returning the result.
    ///
    /// This is the owned form of [`transpose`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(&self) -> Matrix<T, C, R>
    where
        T: Zero + Copy,
    {
        let mut out = Matrix::ZERO;
        transpose(self, &mut out);
        out
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. For non-square matrices
    /// the diagonal ends at the smaller of the two dimensions.
    ///
    /// If the matrix is square, multiplying any vector or conformant matrix with it returns that
    /// value unchanged. A non-square identity drops or zero-pads the trailing elements instead.
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; C]; R];
        let mut i = 0;
        while i < R && i < C {
            rows[i][i] = T::ONE;
            i += 1;
        }
        Self(rows)
    };
}

/// Transposes `a` into `a_tr`, so that `a_tr[(j, i)] == a[(i, j)]`.
///
/// Every element of `a_tr` is overwritten; its previous contents don't matter.
///
/// # Examples
///
/// ```
/// # use matrix_op::*;
/// let a = Matrix::from_rows([
///     [1.0, 2.0, 3.0],
///     [4.0, 5.0, 6.0],
/// ]);
/// let mut a_tr = Matrix::ZERO;
/// transpose(&a, &mut a_tr);
/// assert_eq!(a_tr, Matrix::from_rows([
///     [1.0, 4.0],
///     [2.0, 5.0],
///     [3.0, 6.0],
/// ]));
/// ```
pub fn transpose<T: Copy, const R: usize, const C: usize>(
    a: &Matrix<T, R, C>,
    a_tr: &mut Matrix<T, C, R>,
) {
    for (i, row) in a.0.iter().enumerate() {
        for (j, &elem) in row.iter().enumerate() {
            a_tr.0[j][i] = elem;
        }
    }
}

/// Computes the matrix-vector product `a * x` and stores it in `mul`.
///
/// Element `i` of the result is the [`dot_product`] of row `i` of `a` (as returned by
/// [`select_row`]) with `x`.
///
/// # Examples
///
/// ```
/// # use matrix_op::*;
/// let a = Matrix::from_rows([
///     [1.0, 4.0],
///     [2.0, 5.0],
///     [3.0, 6.0],
/// ]);
/// let x = Vector::from([1.0, -1.0]);
/// let mut mul = Vector::ZERO;
/// right_multiply(&a, &x, &mut mul);
/// assert_eq!(mul, [-3.0, -3.0, -3.0]);
/// ```
pub fn right_multiply<T: Number, const R: usize, const C: usize>(
    a: &Matrix<T, R, C>,
    x: &Vector<T, C>,
    mul: &mut Vector<T, R>,
) {
    for i in 0..R {
        mul[i] = dot_product(select_row(i, a), x);
    }
}

/// Computes the matrix product `a * b` and stores it in `mul`.
///
/// `mul` is zeroed before the products are accumulated into it, so its previous contents don't
/// matter. The accumulation iterates over the rows of `a`, then over the shared dimension, then
/// over the columns of `b`. Floating-point results may differ in the last bits from an
/// implementation that sums in a different order.
///
/// # Examples
///
/// ```
/// # use matrix_op::*;
/// let a = Matrix::from_rows([
///     [1.0, 2.0, 3.0],
///     [4.0, 5.0, 6.0],
/// ]);
/// let b = Matrix::from_rows([
///     [ 1.0,  2.0, 3.0],
///     [-1.0, -2.0, 3.0],
///     [ 1.0, -1.0, 3.0],
/// ]);
/// let mut mul = Matrix::ZERO;
/// multiply(&a, &b, &mut mul);
/// assert_eq!(mul, Matrix::from_rows([
///     [2.0, -5.0, 18.0],
///     [5.0, -8.0, 45.0],
/// ]));
/// ```
pub fn multiply<T: Number, const M: usize, const N: usize, const P: usize>(
    a: &Matrix<T, M, N>,
    b: &Matrix<T, N, P>,
    mul: &mut Matrix<T, M, P>,
) {
    mul.as_flat_mut().fill(T::ZERO);

    for i in 0..M {
        for k in 0..N {
            let a_ik = a.0[i][k];
            for j in 0..P {
                mul.0[i][j] = mul.0[i][j] + a_ik * b.0[k][j];
            }
        }
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows go through `Vector`'s `Debug` impl, which ignores `#`, so `{:#?}` prints one row
        // per line.
        f.debug_list().entries(self.rows()).finish()
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = ShapeError;

    fn try_from(flat: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_flat(flat)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn layout() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.as_flat(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(bytemuck::cast::<_, [i32; 6]>(mat), [1, 2, 3, 4, 5, 6]);
        assert_eq!(Matrix::<i32, 2, 3>::ROWS, 2);
        assert_eq!(Matrix::<i32, 2, 3>::COLUMNS, 3);
    }

    #[test]
    fn flat_mut() {
        let mut mat = Matrix::<i32, 2, 2>::ZERO;
        mat.as_flat_mut()[3] = 7;
        assert_eq!(mat[(1, 1)], 7);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Matrix::<f32, 2, 2>::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(
            format!("{:?}", Matrix::<f32, 2, 2>::IDENTITY),
            "[[1.0, 0.0], [0.0, 1.0]]"
        );
        assert_eq!(
            Matrix::<i32, 2, 3>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
        assert_eq!(Matrix::<i32, 2, 2>::default(), Matrix::ZERO);
    }

    #[test]
    fn identity_multiplication() {
        let x = Vector::from([3, -1, 7]);
        assert_eq!(Matrix::<i32, 3, 3>::IDENTITY * x, x);

        // Non-square identities truncate or zero-pad.
        assert_eq!(Matrix::<i32, 2, 3>::IDENTITY * x, [3, -1]);
        assert_eq!(Matrix::<i32, 4, 3>::IDENTITY * x, [3, -1, 7, 0]);
    }

    #[test]
    fn unsigned_elements() {
        let a: Matrix<u32, 2, 2> = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[5, 6], [7, 8]]);
        let mut mul = Matrix::ZERO;
        multiply(&a, &b, &mut mul);
        assert_eq!(mul, Matrix::from_rows([[19, 22], [43, 50]]));

        let mut out = Vector::ZERO;
        right_multiply(&a, &Vector::from([1, 1]), &mut out);
        assert_eq!(out, [3u32, 7]);
    }

    #[test]
    fn transpose_overwrites_output() {
        let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let mut a_tr = Matrix::from_fn(|_, _| -1);
        transpose(&a, &mut a_tr);
        assert_eq!(a_tr, Matrix::from_rows([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(a_tr.transpose(), a);
    }

    #[test]
    fn transpose_vectors() {
        let row = Matrix::from_rows([[1, 2, 3]]);
        let col: Matrix<i32, 3, 1> = row.transpose();
        assert_eq!(col, Matrix::from_rows([[1], [2], [3]]));
    }

    #[test]
    fn right_multiply_rows() {
        let a = Matrix::from_rows([[0, 1], [2, 3]]);
        let x = Vector::from([4, 5]);
        let mut mul = Vector::ZERO;
        right_multiply(&a, &x, &mut mul);
        assert_eq!(mul, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn multiply_overwrites_output() {
        let a = Matrix::from_rows([[1, 2], [3, 4], [5, 6], [7, 8]]);
        let b = Matrix::from_rows([[9, 10, 11], [12, 13, 14]]);

        let mut fresh = Matrix::ZERO;
        multiply(&a, &b, &mut fresh);

        let mut dirty = Matrix::from_fn(|row, col| (row * 100 + col) as i32);
        multiply(&a, &b, &mut dirty);

        assert_eq!(fresh, dirty);
        assert_eq!(fresh[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(fresh[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn multiply_non_square_output_stride() {
        // 1x2 * 2x4: the output row is wider than the left operand.
        let a = Matrix::from_rows([[1.0, 2.0]]);
        let b = Matrix::from_rows([[1.0, 0.0, 2.0, 0.5], [0.0, 1.0, 3.0, 0.25]]);
        let mut mul = Matrix::ZERO;
        multiply(&a, &b, &mut mul);
        assert_relative_eq!(mul, Matrix::from_rows([[1.0, 2.0, 8.0, 1.0]]));
    }

    #[test]
    fn try_from_flat() {
        let data = [1, 2, 3, 4, 5, 6];
        let mat: Matrix<i32, 3, 2> = data.as_slice().try_into().unwrap();
        assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4], [5, 6]]));

        assert_eq!(
            Matrix::<i32, 2, 2>::try_from(&data[..]),
            Err(ShapeError::LengthMismatch {
                expected: 4,
                found: 6
            })
        );
    }
}
