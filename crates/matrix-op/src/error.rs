use thiserror::Error;

/// Error returned when a runtime-sized buffer is converted into a fixed-size [`Matrix`] or
/// [`Vector`].
///
/// The kernels themselves never fail; shapes are checked at compile time. This error only occurs
/// at the boundary where untyped slices enter the crate, eg. in [`Matrix::try_from_flat`].
///
/// [`Matrix`]: crate::Matrix
/// [`Vector`]: crate::Vector
/// [`Matrix::try_from_flat`]: crate::Matrix::try_from_flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeError {
    #[error("length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

impl ShapeError {
    pub(crate) fn check_len(expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::LengthMismatch { expected, found })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_len() {
        assert_eq!(ShapeError::check_len(6, 6), Ok(()));
        assert_eq!(
            ShapeError::check_len(6, 5),
            Err(ShapeError::LengthMismatch {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn display() {
        let err = ShapeError::LengthMismatch {
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: expected 4 elements, found 3"
        );
    }
}
