use std::{array, fmt};

use bytemuck::TransparentWrapper;

use crate::{Number, ShapeError, Zero};

mod ops;

/// An `N`-element vector storing elements of type `T`.
///
/// A [`Vector`] is either a standalone vector or a view of a single matrix row (see
/// [`select_row`][crate::select_row]). It is `#[repr(transparent)]` over `[T; N]`, so a row of a
/// [`Matrix`][crate::Matrix] can be borrowed as a `&Vector` without copying.
///
/// # Construction
///
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - [`Vector::try_from_slice`] copies a slice of the right length into a vector.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}
// Safety: `Vector` is `#[repr(transparent)]` over `[T; N]`.
unsafe impl<T, const N: usize> TransparentWrapper<[T; N]> for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let v: Vector<usize, 3> = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, [100, 101, 102]);
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Copies the contents of `slice` into a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::LengthMismatch`] if `slice` does not have exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let v = Vector::<_, 2>::try_from_slice(&[1.0, -1.0]).unwrap();
    /// assert_eq!(v, [1.0, -1.0]);
    ///
    /// assert!(Vector::<f64, 3>::try_from_slice(&[1.0, -1.0]).is_err());
    /// ```
    pub fn try_from_slice(slice: &[T]) -> Result<Self, ShapeError>
    where
        T: Copy,
    {
        ShapeError::check_len(N, slice.len())?;
        Ok(Self::from_fn(|i| slice[i]))
    }

    /// Views a reference to an array as a reference to a [`Vector`], without copying.
    #[inline]
    pub fn from_array_ref(array: &[T; N]) -> &Self {
        Self::wrap_ref(array)
    }

    /// Views a mutable reference to an array as a mutable reference to a [`Vector`].
    #[inline]
    pub fn from_array_mut(array: &mut [T; N]) -> &mut Self {
        Self::wrap_mut(array)
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let v = Vector::from([1, 2, 3]).map(|i| i * 10);
    /// assert_eq!(v, [10, 20, 30]);
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Returns the number of elements (`N`).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if this is a zero-element vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// This is the method form of [`dot_product`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_op::*;
    /// let a = Vector::from([1, 3, -5]);
    /// let b = Vector::from([4, -2, -1]);
    /// assert_eq!(a.dot(&b), 3);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> T
    where
        T: Number,
    {
        dot_product(self, other)
    }
}

/// Computes the dot product `a[0] * b[0] + a[1] * b[1] + ... + a[N-1] * b[N-1]`.
///
/// The products are accumulated in index order, starting from [`Zero::ZERO`]. Both vectors have
/// the same length `N` by construction.
///
/// # Examples
///
/// ```
/// # use matrix_op::*;
/// let a = Vector::from([1.0, 2.0, 3.0]);
/// let b = Vector::from([4.0, 5.0, 6.0]);
/// assert_eq!(dot_product(&a, &b), 32.0);
/// ```
pub fn dot_product<T: Number, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    a.0.iter()
        .zip(&b.0)
        .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = ShapeError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_slice(slice)
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", elem)?;
        }
        write!(f, "]")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}
