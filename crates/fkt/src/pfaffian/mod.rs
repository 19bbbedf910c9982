//! Skew-symmetric adjacency matrix and its Pfaffian magnitude.
//!
//! `|Pf(A)| = sqrt(|det A|)`, and for a Pfaffian orientation `|Pf(A)|` is the
//! number of perfect matchings. Two ways to get there:
//! - Exact: the Pfaffian itself, by skew elimination over `Z/p` for several
//!   primes `p`, recombined with the CRT. No intermediate grows past a word,
//!   so the size limit is the count itself (`u128`).
//! - Float: `nalgebra` LU, product of the `U` diagonal, square root, rounded
//!   to nearest. Only trusted up to `2^53`.

use std::fmt;

mod modular;

use nalgebra::DMatrix;
use tracing::{debug, trace};

use crate::cfg::{FktCfg, PfaffianMethod, FLOAT_EXACT_MAX, PIVOT_EPS};
use crate::error::FktError;
use crate::matching::OrientedGraph;
use modular::{add_mod, inv_mod, magnitude_from_residues, moduli_for, mul_mod, sub_mod};

/// `A[i][j] = +1` for an arc `i → j`, `-1` for `j → i`, `0` otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkewAdjacencyMatrix {
    n: usize,
    entries: Vec<i8>, // row-major
}

impl SkewAdjacencyMatrix {
    pub fn from_oriented(oriented: &OrientedGraph) -> Self {
        let n = oriented.vertex_count();
        let mut entries = vec![0i8; n * n];
        for (u, v) in oriented.arcs() {
            entries[u * n + v] = 1;
            entries[v * n + u] = -1;
        }
        Self { n, entries }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> i8 {
        self.entries[i * self.n + j]
    }

    pub fn is_skew_symmetric(&self) -> bool {
        (0..self.n).all(|i| (0..self.n).all(|j| self.get(i, j) == -self.get(j, i)))
    }

    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.n, self.n, |i, j| f64::from(self.get(i, j)))
    }
}

impl fmt::Display for SkewAdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            write!(f, "[")?;
            for j in 0..self.n {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>2}", self.get(i, j))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Exact `|Pf(A)|`.
///
/// `|det A| <= prod_i |row_i|` (Hadamard), so `|Pf A| <= prod_i nnz_i^(1/4)`.
/// The Pfaffian is computed modulo enough primes to exceed twice that bound
/// and then reconstructed; `ArithmeticOverflow` means it exceeds `u128`.
pub fn pfaffian_exact(matrix: &SkewAdjacencyMatrix) -> Result<u128, FktError> {
    let n = matrix.dim();
    if n % 2 == 1 {
        return Ok(0);
    }
    let bound_bits: f64 = (0..n)
        .map(|i| {
            let nnz = (0..n).filter(|&j| matrix.get(i, j) != 0).count();
            (nnz.max(1) as f64).log2() / 4.0
        })
        .sum();
    let moduli = moduli_for(bound_bits + 2.0);
    let residues: Vec<u64> = moduli.iter().map(|&p| pfaffian_mod(matrix, p)).collect();
    trace!(dim = n, bound_bits, moduli = moduli.len(), "pfaffian_residues");
    magnitude_from_residues(&residues, &moduli).ok_or(FktError::ArithmeticOverflow { dim: n })
}

/// `Pf(A) mod p` by skew-symmetric elimination.
///
/// With the pivot block `[[0, a], [-a, 0]]` at rows `k, k+1`,
/// `Pf(A) = a * Pf(S)` for the Schur complement
/// `S[i][l] = A[i][l] - (A[i][k+1] A[k][l] - A[i][k] A[k+1][l]) / a`.
/// Swapping row and column `k+1` with `j` negates the Pfaffian.
fn pfaffian_mod(matrix: &SkewAdjacencyMatrix, p: u64) -> u64 {
    let n = matrix.dim();
    let mut a: Vec<Vec<u64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| match matrix.get(i, j) {
                    0 => 0,
                    x if x > 0 => 1,
                    _ => p - 1,
                })
                .collect()
        })
        .collect();
    let mut pf = 1 % p;
    for k in (0..n).step_by(2) {
        let Some(j) = (k + 1..n).find(|&j| a[k][j] != 0) else {
            return 0;
        };
        if j != k + 1 {
            a.swap(k + 1, j);
            for row in a.iter_mut() {
                row.swap(k + 1, j);
            }
            pf = sub_mod(0, pf, p);
        }
        let pivot = a[k][k + 1];
        pf = mul_mod(pf, pivot, p);
        let inv = inv_mod(pivot, p);
        for i in k + 2..n {
            let u = mul_mod(a[i][k + 1], inv, p);
            let w = mul_mod(a[i][k], inv, p);
            if u == 0 && w == 0 {
                continue;
            }
            for l in k + 2..n {
                let drop = mul_mod(u, a[k][l], p);
                let back = mul_mod(w, a[k + 1][l], p);
                a[i][l] = add_mod(sub_mod(a[i][l], drop, p), back, p);
            }
        }
    }
    pf
}

/// Determinant magnitude from a floating-point LU factorization.
pub fn determinant_lu(matrix: &SkewAdjacencyMatrix) -> f64 {
    if matrix.dim() == 0 {
        return 1.0;
    }
    let lu = matrix.to_dmatrix().lu();
    let u = lu.u();
    if u.diagonal().iter().any(|d| d.abs() < PIVOT_EPS) {
        return 0.0;
    }
    u.diagonal().iter().product::<f64>().abs()
}

/// `|Pf(A)|` using the configured method.
pub fn pfaffian_magnitude(matrix: &SkewAdjacencyMatrix, cfg: FktCfg) -> Result<u128, FktError> {
    let value = match cfg.method {
        PfaffianMethod::Exact => pfaffian_exact(matrix)?,
        PfaffianMethod::FloatLu => {
            round_pfaffian(determinant_lu(matrix).sqrt(), matrix.dim(), cfg.round_tol)?
        }
    };
    debug!(dim = matrix.dim(), method = ?cfg.method, value, "pfaffian");
    Ok(value)
}

/// Round a floating-point Pfaffian to the count it stands for.
fn round_pfaffian(pf: f64, dim: usize, tol: f64) -> Result<u128, FktError> {
    if !pf.is_finite() || pf > FLOAT_EXACT_MAX {
        return Err(FktError::ArithmeticOverflow { dim });
    }
    let rounded = pf.round();
    if (pf - rounded).abs() > tol {
        return Err(FktError::inconsistent(format!(
            "Pfaffian {pf} is not within {tol} of an integer"
        )));
    }
    Ok(rounded as u128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::ROUND_TOL;

    fn from_arcs(n: usize, arcs: &[(usize, usize)]) -> SkewAdjacencyMatrix {
        let mut entries = vec![0i8; n * n];
        for &(u, v) in arcs {
            entries[u * n + v] = 1;
            entries[v * n + u] = -1;
        }
        SkewAdjacencyMatrix { n, entries }
    }

    const P: u64 = (1 << 61) - 1;

    #[test]
    fn empty_matrix_has_unit_pfaffian() {
        let m = from_arcs(0, &[]);
        assert_eq!(pfaffian_exact(&m), Ok(1));
        assert_eq!(pfaffian_magnitude(&m, FktCfg::default()), Ok(1));
        assert_eq!(pfaffian_magnitude(&m, FktCfg::float_lu()), Ok(1));
    }

    #[test]
    fn odd_dimension_is_singular() {
        let m = from_arcs(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(m.is_skew_symmetric());
        assert_eq!(pfaffian_exact(&m), Ok(0));
        assert_eq!(pfaffian_magnitude(&m, FktCfg::float_lu()), Ok(0));
    }

    #[test]
    fn two_by_two_and_four_by_four() {
        let m = from_arcs(2, &[(1, 0)]);
        assert_eq!(pfaffian_exact(&m), Ok(1));
        assert_eq!(pfaffian_mod(&m, P), P - 1);
        // Pf = a01 a23 - a02 a13 + a03 a12 = 1 - 1 + 1 = 1 for this K4 orientation.
        let k4 = from_arcs(4, &[(0, 1), (2, 3), (0, 2), (1, 3), (0, 3), (1, 2)]);
        assert_eq!(pfaffian_mod(&k4, P), 1);
        assert_eq!(pfaffian_exact(&k4), Ok(1));
        // Pfaffian orientation of K4: 0→1, 1→2, 2→0, 0→3, 1→3, 2→3 gives Pf = 3.
        let pf = from_arcs(4, &[(0, 1), (1, 2), (2, 0), (0, 3), (1, 3), (2, 3)]);
        assert_eq!(pfaffian_mod(&pf, P), 3);
        assert_eq!(pfaffian_magnitude(&pf, FktCfg::default()), Ok(3));
        assert_eq!(pfaffian_magnitude(&pf, FktCfg::float_lu()), Ok(3));
    }

    #[test]
    fn zero_leading_pivot_is_swapped() {
        // 0 has no arc to 1: Pf = -a02 a13 = -1 after one exchange.
        let m = from_arcs(4, &[(0, 2), (1, 3)]);
        assert_eq!(pfaffian_mod(&m, P), P - 1);
        assert_eq!(pfaffian_exact(&m), Ok(1));
    }

    #[test]
    fn isolated_row_gives_zero() {
        let m = from_arcs(4, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(pfaffian_exact(&m), Ok(0));
        assert_eq!(pfaffian_magnitude(&m, FktCfg::float_lu()), Ok(0));
    }

    #[test]
    fn rounding_accepts_near_integers() {
        assert_eq!(round_pfaffian(36.000_001, 8, ROUND_TOL), Ok(36));
        assert_eq!(round_pfaffian(6727.996, 36, ROUND_TOL), Ok(6728));
        assert_eq!(round_pfaffian(FLOAT_EXACT_MAX, 100, ROUND_TOL), Ok(1 << 53));
    }

    #[test]
    fn rounding_far_from_an_integer_is_inconsistent() {
        let err = round_pfaffian(2.3, 4, ROUND_TOL).unwrap_err();
        assert!(matches!(err, FktError::InternalConsistency { .. }), "{err:?}");
        // Large values are held to the same absolute tolerance.
        let err = round_pfaffian(600_000.5, 40, ROUND_TOL).unwrap_err();
        assert!(matches!(err, FktError::InternalConsistency { .. }), "{err:?}");
    }

    #[test]
    fn rounding_beyond_f64_integers_overflows() {
        assert_eq!(
            round_pfaffian(1e17, 64, ROUND_TOL),
            Err(FktError::ArithmeticOverflow { dim: 64 })
        );
        assert_eq!(
            round_pfaffian(f64::INFINITY, 64, ROUND_TOL),
            Err(FktError::ArithmeticOverflow { dim: 64 })
        );
        assert_eq!(
            round_pfaffian(f64::NAN, 64, ROUND_TOL),
            Err(FktError::ArithmeticOverflow { dim: 64 })
        );
    }

    #[test]
    fn display_prints_rows() {
        let m = from_arcs(2, &[(0, 1)]);
        assert_eq!(m.to_string(), "[ 0  1]\n[-1  0]\n");
    }
}
