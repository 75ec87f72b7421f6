//! Scalar helpers shared by the decomposition routines

/// Compute `sqrt(a^2 + b^2)` without destructive underflow or overflow.
pub fn pythag(a: f64, b: f64) -> f64 {
    let absa = a.abs();
    let absb = b.abs();
    if absa > absb {
        let ratio = absb / absa;
        absa * (1.0 + ratio * ratio).sqrt()
    } else if absb == 0.0 {
        0.0
    } else {
        let ratio = absa / absb;
        absb * (1.0 + ratio * ratio).sqrt()
    }
}

/// Magnitude of `a` with the sign of `b`; `b >= 0` counts as positive.
pub fn sign(a: f64, b: f64) -> f64 {
    if b >= 0.0 { a.abs() } else { -a.abs() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pythag() {
        assert_abs_diff_eq!(pythag(3.0, 4.0), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pythag(-3.0, 4.0), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pythag(0.0, 0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pythag_extreme_magnitudes() {
        // Naive sqrt(a^2 + b^2) would overflow here
        let big = 1e200;
        assert_abs_diff_eq!(pythag(big, big), big * 2.0_f64.sqrt(), epsilon = 1e185);
        assert_abs_diff_eq!(pythag(big, 0.0), big, epsilon = 0.0);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.0, 2.0), 3.0);
        assert_eq!(sign(3.0, -2.0), -3.0);
        assert_eq!(sign(-3.0, 2.0), 3.0);
        // Zero counts as positive
        assert_eq!(sign(-3.0, 0.0), 3.0);
    }
}
