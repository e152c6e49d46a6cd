//! The reference inputs and the outputs they are expected to produce.
//!
//! All reference values are small integers, which are exactly representable in both [`f32`] and
//! [`f64`], so the outputs are compared for exact equality.

use matrix_op::{multiply, right_multiply, transpose, Matrix, Real, RealMatrix, RealVector, Vector};

/// Inputs fed to the kernels.
#[derive(Debug, Clone, Copy)]
pub struct Inputs {
    pub a: RealMatrix<2, 3>,
    pub b: RealMatrix<3, 3>,
    pub x: RealVector<2>,
}

impl Inputs {
    #[rustfmt::skip]
    pub fn reference() -> Self {
        Self {
            a: Matrix::from_rows([
                [1.0, 2.0, 3.0],
                [4.0, 5.0, 6.0],
            ]),
            b: Matrix::from_rows([
                [ 1.0,  2.0, 3.0],
                [-1.0, -2.0, 3.0],
                [ 1.0, -1.0, 3.0],
            ]),
            x: Vector::from([1.0, -1.0]),
        }
    }
}

/// Results of running the kernels on [`Inputs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outputs {
    /// `transpose(a)`
    pub a_tr: RealMatrix<3, 2>,
    /// `right_multiply(transpose(a), x)`
    pub mul: RealVector<3>,
    /// `multiply(a, b)`
    pub ab: RealMatrix<2, 3>,
}

impl Outputs {
    /// The precomputed results for [`Inputs::reference`].
    #[rustfmt::skip]
    pub fn expected() -> Self {
        Self {
            a_tr: Matrix::from_rows([
                [1.0, 4.0],
                [2.0, 5.0],
                [3.0, 6.0],
            ]),
            mul: Vector::from([-3.0, -3.0, -3.0]),
            ab: Matrix::from_rows([
                [2.0, -5.0, 18.0],
                [5.0, -8.0, 45.0],
            ]),
        }
    }

    /// Runs the kernels on `inputs`. The transposed matrix feeds into the matrix-vector product.
    pub fn compute(inputs: &Inputs) -> Self {
        let mut out = Self {
            a_tr: Matrix::ZERO,
            mul: Vector::ZERO,
            ab: Matrix::ZERO,
        };

        transpose(&inputs.a, &mut out.a_tr);
        log::trace!("a_tr={:?}", out.a_tr);

        right_multiply(&out.a_tr, &inputs.x, &mut out.mul);
        log::trace!("mul={:?}", out.mul);

        multiply(&inputs.a, &inputs.b, &mut out.ab);
        log::trace!("ab={:?}", out.ab);

        out
    }
}

/// Outcome of comparing [`Outputs`] element by element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub compared: usize,
    pub mismatched: usize,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.mismatched == 0
    }

    fn compare(&mut self, name: &str, actual: &[Real], expected: &[Real]) {
        debug_assert_eq!(actual.len(), expected.len());

        let before = self.mismatched;
        for (i, (actual, expected)) in actual.iter().zip(expected).enumerate() {
            self.compared += 1;
            if actual != expected {
                self.mismatched += 1;
                log::error!("{name}[{i}]: expected {expected}, got {actual}");
            }
        }

        if self.mismatched == before {
            log::info!("{name}: all {} elements match", actual.len());
        }
    }
}

/// Compares every element of `actual` against `expected`, logging each mismatch.
pub fn verify(actual: &Outputs, expected: &Outputs) -> Report {
    let mut report = Report::default();
    report.compare("transpose", actual.a_tr.as_flat(), expected.a_tr.as_flat());
    report.compare("right_multiply", actual.mul.as_slice(), expected.mul.as_slice());
    report.compare("multiply", actual.ab.as_flat(), expected.ab.as_flat());
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_outputs_match() {
        let actual = Outputs::compute(&Inputs::reference());
        let report = verify(&actual, &Outputs::expected());
        assert!(report.is_success());
        assert_eq!(report.compared, 6 + 3 + 6);
        assert_eq!(actual, Outputs::expected());
    }

    #[test]
    fn mismatches_are_counted() {
        let mut actual = Outputs::compute(&Inputs::reference());
        actual.mul[1] = 0.0;
        actual.ab[(1, 2)] = 44.0;

        let report = verify(&actual, &Outputs::expected());
        assert!(!report.is_success());
        assert_eq!(
            report,
            Report {
                compared: 15,
                mismatched: 2
            }
        );
    }
}
