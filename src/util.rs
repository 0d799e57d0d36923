//! Number theoretic helpers consumed by the ring constructor

use num_integer::Roots;

/// Test whether `n` has no repeated prime factor.
///
/// Zero is not squarefree, while `1` and `-1` are. Trial division runs up to
/// the cube root of `|n|`; whatever cofactor remains after that has at most
/// two prime factors, so it is squarefree unless it is a perfect square.
pub fn is_squarefree(n: i64) -> bool {
    let mut m = n.unsigned_abs();
    if m == 0 {
        return false;
    }

    let mut p = 2u64;
    while (p as u128) * (p as u128) * (p as u128) <= m as u128 {
        if m % p == 0 {
            m /= p;
            if m % p == 0 {
                return false;
            }
        }
        p += 1;
    }

    let root = m.sqrt();
    !(m > 1 && root * root == m)
}
