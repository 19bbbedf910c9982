//! Pipeline configuration and numeric tolerances.
//!
//! Policy
//! - Tolerances are fixed constants; only the Pfaffian method is a real
//!   choice a caller makes.

/// Largest distance to the nearest integer accepted when rounding a
/// floating-point Pfaffian.
pub(crate) const ROUND_TOL: f64 = 1e-2;
/// Above `2^53` neighbouring integers are no longer distinct `f64` values.
pub(crate) const FLOAT_EXACT_MAX: f64 = 9_007_199_254_740_992.0;
/// Pivot magnitude below which a float LU column counts as zero.
pub(crate) const PIVOT_EPS: f64 = 1e-12;

/// How the Pfaffian magnitude is obtained from the skew-symmetric matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PfaffianMethod {
    /// Skew elimination modulo word-size primes, recombined by CRT.
    #[default]
    Exact,
    /// LU factorization in `f64`, square root of `|det|`, round-to-nearest.
    FloatLu,
}

/// Pipeline configuration.
#[derive(Clone, Copy, Debug)]
pub struct FktCfg {
    pub method: PfaffianMethod,
    /// Absolute rounding tolerance for [`PfaffianMethod::FloatLu`].
    pub round_tol: f64,
}

impl Default for FktCfg {
    fn default() -> Self {
        Self {
            method: PfaffianMethod::Exact,
            round_tol: ROUND_TOL,
        }
    }
}

impl FktCfg {
    pub fn float_lu() -> Self {
        Self {
            method: PfaffianMethod::FloatLu,
            ..Self::default()
        }
    }
}
