//! Binomial upper tail with a real-valued trial count.
//!
//! `P(X > k)` for `X ~ Binomial(n, p)` equals the regularized incomplete
//! beta function `I_p(k + 1, n - k)`. That identity is defined for any real
//! `n > k`, which is what lets a fractional total weight be used as the
//! trial count without rounding.

use statrs::function::beta::beta_reg;

/// Survival function `P(X > k)`.
///
/// `k` is floored first, so `survival(w - 1.0, n, p)` is `P(X >= w)` for
/// integral `w`. Out-of-support arguments resolve to the limiting values:
/// `k < 0` gives 1, `k >= n` gives 0. `p` is expected in `[0, 1]`.
#[must_use]
pub fn survival(k: f64, n: f64, p: f64) -> f64 {
    let k = k.floor();
    if k < 0.0 {
        return 1.0;
    }
    if k >= n {
        return 0.0;
    }
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    beta_reg(k + 1.0, n - k, p)
}

/// One-sided p-value `P(X >= observed)`.
#[must_use]
pub fn upper_tail_p_value(observed: f64, n: f64, p: f64) -> f64 {
    survival(observed - 1.0, n, p)
}
