//! Word-size modular arithmetic for the exact Pfaffian.
//!
//! Moduli are primes just below `2^62`, so sums of two residues fit in
//! `u64` and products fit in `u128`. A value known to satisfy `|x| < M/2`,
//! with `M` the product of the moduli, is recovered from its residues by
//! Garner's mixed-radix reconstruction.

/// Moduli are searched downwards from here.
const MODULUS_START: u64 = (1 << 62) - 1;
/// Deterministic Miller–Rabin witnesses for every `u64`.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

pub(crate) fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(p)) as u64
}

pub(crate) fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    let s = a + b;
    if s >= p {
        s - p
    } else {
        s
    }
}

pub(crate) fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        a + p - b
    }
}

pub(crate) fn pow_mod(mut base: u64, mut exp: u64, p: u64) -> u64 {
    let mut acc = 1 % p;
    base %= p;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, p);
        }
        base = mul_mod(base, base, p);
        exp >>= 1;
    }
    acc
}

/// Inverse of a non-zero residue modulo the prime `p`.
pub(crate) fn inv_mod(a: u64, p: u64) -> u64 {
    pow_mod(a, p - 2, p)
}

pub(crate) fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for w in WITNESSES {
        if n % w == 0 {
            return n == w;
        }
    }
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    'witness: for w in WITNESSES {
        let mut x = pow_mod(w, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Descending primes below `2^62` whose product exceeds `2^bits`.
pub(crate) fn moduli_for(bits: f64) -> Vec<u64> {
    let mut moduli = Vec::new();
    let mut covered = 0.0;
    let mut candidate = MODULUS_START;
    while moduli.is_empty() || covered <= bits {
        if is_prime(candidate) {
            covered += (candidate as f64).log2();
            moduli.push(candidate);
        }
        candidate -= 2;
    }
    moduli
}

/// `|x|` from `x mod p_i`, given `|x| < M/2`. `None` when `|x|` exceeds `u128`.
pub(crate) fn magnitude_from_residues(residues: &[u64], moduli: &[u64]) -> Option<u128> {
    let mut digits: Vec<u64> = Vec::with_capacity(moduli.len());
    for (i, (&r, &p)) in residues.iter().zip(moduli).enumerate() {
        let mut value = 0;
        let mut radix = 1;
        for (&c, &q) in digits.iter().zip(&moduli[..i]) {
            value = add_mod(value, mul_mod(c, radix, p), p);
            radix = mul_mod(radix, q, p);
        }
        digits.push(mul_mod(sub_mod(r % p, value, p), inv_mod(radix, p), p));
    }
    // x and M - x: the smaller one is |x| because |x| < M/2.
    let direct = horner(&digits, moduli);
    let complement: Vec<u64> = digits.iter().zip(moduli).map(|(&c, &p)| p - 1 - c).collect();
    let negated = horner(&complement, moduli).and_then(|v| v.checked_add(1));
    match (direct, negated) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// `c_0 + p_0 (c_1 + p_1 (c_2 + ...))` with overflow detection.
fn horner(digits: &[u64], moduli: &[u64]) -> Option<u128> {
    let mut acc: u128 = 0;
    for (&c, &p) in digits.iter().zip(moduli).rev() {
        acc = acc.checked_mul(u128::from(p))?.checked_add(u128::from(c))?;
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residues_of(x: u128, negative: bool, moduli: &[u64]) -> Vec<u64> {
        moduli
            .iter()
            .map(|&p| {
                let r = (x % u128::from(p)) as u64;
                if negative {
                    sub_mod(0, r, p)
                } else {
                    r
                }
            })
            .collect()
    }

    #[test]
    fn primality_matches_known_values() {
        assert!(is_prime(2));
        assert!(is_prime(97));
        assert!(is_prime((1 << 61) - 1));
        assert!(!is_prime(1));
        assert!(!is_prime(561));
        // Strong pseudoprime to bases 2, 3, 5 and 7.
        assert!(!is_prime(3_215_031_751));
        assert!(!is_prime((1 << 61) + 1));
    }

    #[test]
    fn moduli_cover_the_requested_bits() {
        let one = moduli_for(0.0);
        assert_eq!(one.len(), 1);
        let many = moduli_for(200.0);
        assert_eq!(many.len(), 4);
        assert!(many.windows(2).all(|w| w[0] > w[1]));
        assert!(many.iter().all(|&p| is_prime(p) && p < (1 << 62)));
    }

    #[test]
    fn reconstructs_signed_values() {
        let moduli = moduli_for(130.0);
        for x in [0u128, 1, 36, 258_584_046_368, u128::from(u64::MAX) * 3, u128::MAX] {
            assert_eq!(magnitude_from_residues(&residues_of(x, false, &moduli), &moduli), Some(x));
            assert_eq!(magnitude_from_residues(&residues_of(x, true, &moduli), &moduli), Some(x));
        }
    }

    #[test]
    fn values_beyond_u128_are_reported() {
        let moduli = moduli_for(140.0);
        let residues: Vec<u64> = moduli.iter().map(|&p| pow_mod(2, 130, p)).collect();
        assert_eq!(magnitude_from_residues(&residues, &moduli), None);
        let negated: Vec<u64> = residues.iter().zip(&moduli).map(|(&r, &p)| sub_mod(0, r, p)).collect();
        assert_eq!(magnitude_from_residues(&negated, &moduli), None);
    }

    #[test]
    fn inverse_round_trips() {
        let p = (1 << 61) - 1;
        for a in [1u64, 2, 12345, p - 1] {
            assert_eq!(mul_mod(a, inv_mod(a, p), p), 1);
        }
    }
}
