//! Row access.

use std::slice;

use crate::Vector;

use super::Matrix;

/// Returns a view of row `row_index` of `matrix`.
///
/// The returned [`Vector`] borrows the matrix storage directly, starting at flat index
/// `row_index * C`; no elements are copied.
///
/// # Panics
///
/// Panics if `row_index >= R`.
///
/// # Examples
///
/// ```
/// # use matrix_op::*;
/// let mat = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// assert_eq!(select_row(1, &mat), &Vector::from([4, 5, 6]));
/// ```
#[inline]
pub fn select_row<T, const R: usize, const C: usize>(
    row_index: usize,
    matrix: &Matrix<T, R, C>,
) -> &Vector<T, C> {
    Vector::from_array_ref(&matrix.0[row_index])
}

/// Overwrites row `row_index` of `matrix` with the contents of `row`.
///
/// All other rows are left untouched.
///
/// # Panics
///
/// Panics if `row_index >= R`.
///
/// # Examples
///
/// ```
/// # use matrix_op::*;
/// let mut mat = Matrix::<i32, 2, 3>::ZERO;
/// replace_row(0, &Vector::from([7, 8, 9]), &mut mat);
/// assert_eq!(mat, Matrix::from_rows([
///     [7, 8, 9],
///     [0, 0, 0],
/// ]));
/// ```
#[inline]
pub fn replace_row<T: Copy, const R: usize, const C: usize>(
    row_index: usize,
    row: &Vector<T, C>,
    matrix: &mut Matrix<T, R, C>,
) {
    matrix.0[row_index] = *row.as_array();
}

/// Iterator over the rows of a [`Matrix`], returned by [`Matrix::rows`].
#[derive(Clone)]
pub struct Rows<'a, T, const C: usize> {
    inner: slice::Iter<'a, [T; C]>,
}

impl<'a, T, const C: usize> Iterator for Rows<'a, T, C> {
    type Item = &'a Vector<T, C>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Vector::from_array_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, const C: usize> DoubleEndedIterator for Rows<'a, T, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Vector::from_array_ref)
    }
}

impl<'a, T, const C: usize> ExactSizeIterator for Rows<'a, T, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns a view of row `index`.
    ///
    /// This is the method form of [`select_row`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    #[inline]
    pub fn row(&self, index: usize) -> &Vector<T, C> {
        select_row(index, self)
    }

    /// Returns a mutable view of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let mut mat = Matrix::<i32, 2, 2>::ZERO;
    /// mat.row_mut(1)[0] = 5;
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 0],
    ///     [5, 0],
    /// ]));
    /// ```
    #[inline]
    pub fn row_mut(&mut self, index: usize) -> &mut Vector<T, C> {
        Vector::from_array_mut(&mut self.0[index])
    }

    /// Overwrites row `index` with `row`.
    ///
    /// This is the method form of [`replace_row`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    #[inline]
    pub fn replace_row(&mut self, index: usize, row: &Vector<T, C>)
    where
        T: Copy,
    {
        replace_row(index, row, self)
    }

    /// Returns an iterator over the rows of this matrix, from top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let sums: Vec<i32> = mat.rows().map(|row| row.as_slice().iter().sum()).collect();
    /// assert_eq!(sums, [3, 7]);
    /// ```
    #[inline]
    pub fn rows(&self) -> Rows<'_, T, C> {
        Rows {
            inner: self.0.iter(),
        }
    }
}
