//! Golub-Kahan-Reinsch SVD
//!
//! Householder bidiagonalization followed by implicit-shift QR iteration
//! on the bidiagonal form. The input matrix is reduced in place and holds
//! the left factor U on return.

use crate::utils::{pythag, sign};
use crate::{Matrix, Vector};

/// Ceiling on QR passes per singular value.
const MAX_ITERATIONS: usize = 400;

/// Pass at which the non-convergence warning fires. Iteration continues
/// to the full ceiling afterwards.
const WARN_ITERATION: usize = 199;

/// Configuration for the SVD engine
#[derive(Debug, Clone)]
pub struct SvdConfig {
    /// Maximum number of QR passes per singular value
    pub max_iterations: usize,
}

impl Default for SvdConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
        }
    }
}

/// Error types for the SVD engine
#[derive(Debug, thiserror::Error)]
pub enum SvdError {
    #[error("matrix is empty")]
    EmptyMatrix,

    #[error("unable to allocate scratch vector of length {len}")]
    ScratchAllocation { len: usize },
}

/// Result of SVD decomposition: `A = U * diag(w) * V^T`
#[derive(Debug, Clone)]
pub struct SvdResult {
    /// Left singular vectors (m × n), occupying the input buffer
    pub u: Matrix,
    /// Singular values (n), non-negative but not sorted
    pub w: Vector,
    /// Right singular vectors V, not V^T (n × n)
    pub v: Matrix,
}

/// Compute the SVD of `a` in place: `A = U * diag(w) * V^T`.
///
/// On entry `a` is an m × n matrix, `w` an n-vector and `v` an n × n
/// matrix; `w` and `v` are overwritten unconditionally. On return `a`
/// holds U, `w` the singular values and `v` the matrix V (not V^T).
///
/// Singular values come back non-negative but in the order the iteration
/// produces them, not sorted. The classical algorithm assumes m >= n for
/// full correctness; wide inputs are accepted and run with the same
/// guards as the reference routine.
///
/// If the QR iteration fails to settle within the pass budget a warning
/// is logged and the routine keeps the best values obtained so far; this
/// is not reported as an error. Callers needing a guarantee should check
/// the result with [`crate::utils::validate_svd`].
pub fn svdcmp(a: &mut Matrix, w: &mut Vector, v: &mut Matrix) -> Result<(), SvdError> {
    svdcmp_with(a, w, v, &SvdConfig::default())
}

/// [`svdcmp`] with an explicit configuration.
pub fn svdcmp_with(
    a: &mut Matrix,
    w: &mut Vector,
    v: &mut Matrix,
    config: &SvdConfig,
) -> Result<(), SvdError> {
    let m = a.nrows();
    let n = a.ncols();
    if m == 0 || n == 0 {
        return Err(SvdError::EmptyMatrix);
    }
    assert_eq!(w.len(), n, "singular value buffer must have length n");
    assert_eq!(v.nrows(), n, "V buffer must be n x n");
    assert_eq!(v.ncols(), n, "V buffer must be n x n");

    let mut rv1 = Vec::new();
    rv1.try_reserve_exact(n)
        .map_err(|_| SvdError::ScratchAllocation { len: n })?;
    rv1.resize(n, 0.0f64);

    let mut g = 0.0;
    let mut scale = 0.0;
    let mut anorm = 0.0f64;

    // Householder reduction to bidiagonal form. The diagonal lands in w,
    // the superdiagonal in rv1; anorm tracks max(|w[i]| + |rv1[i]|) and
    // serves as the negligibility scale for the iteration below.
    for i in 0..n {
        let l = i + 1;
        rv1[i] = scale * g;
        g = 0.0;
        scale = 0.0;
        if i < m {
            for k in i..m {
                scale += a[[k, i]].abs();
            }
            if scale != 0.0 {
                let mut s = 0.0;
                for k in i..m {
                    a[[k, i]] /= scale;
                    s += a[[k, i]] * a[[k, i]];
                }
                let f = a[[i, i]];
                g = -sign(s.sqrt(), f);
                let h = f * g - s;
                a[[i, i]] = f - g;
                for j in l..n {
                    let mut s = 0.0;
                    for k in i..m {
                        s += a[[k, i]] * a[[k, j]];
                    }
                    let f = s / h;
                    for k in i..m {
                        a[[k, j]] += f * a[[k, i]];
                    }
                }
                for k in i..m {
                    a[[k, i]] *= scale;
                }
            }
        }
        w[i] = scale * g;
        g = 0.0;
        scale = 0.0;
        if i < m && i != n - 1 {
            for k in l..n {
                scale += a[[i, k]].abs();
            }
            if scale != 0.0 {
                let mut s = 0.0;
                for k in l..n {
                    a[[i, k]] /= scale;
                    s += a[[i, k]] * a[[i, k]];
                }
                let f = a[[i, l]];
                g = -sign(s.sqrt(), f);
                let h = f * g - s;
                a[[i, l]] = f - g;
                for k in l..n {
                    rv1[k] = a[[i, k]] / h;
                }
                for j in l..m {
                    let mut s = 0.0;
                    for k in l..n {
                        s += a[[j, k]] * a[[i, k]];
                    }
                    for k in l..n {
                        a[[j, k]] += s * rv1[k];
                    }
                }
                for k in l..n {
                    a[[i, k]] *= scale;
                }
            }
        }
        anorm = anorm.max(w[i].abs() + rv1[i].abs());
    }

    // Accumulation of right-hand transformations. g and l carry over from
    // one column to the next; neither is read on the first pass.
    g = 0.0;
    let mut l = 0usize;
    for i in (0..n).rev() {
        if i < n - 1 {
            if g != 0.0 {
                // Double division avoids possible underflow
                for j in l..n {
                    v[[j, i]] = (a[[i, j]] / a[[i, l]]) / g;
                }
                for j in l..n {
                    let mut s = 0.0;
                    for k in l..n {
                        s += a[[i, k]] * v[[k, j]];
                    }
                    for k in l..n {
                        v[[k, j]] += s * v[[k, i]];
                    }
                }
            }
            for j in l..n {
                v[[i, j]] = 0.0;
                v[[j, i]] = 0.0;
            }
        }
        v[[i, i]] = 1.0;
        g = rv1[i];
        l = i;
    }

    // Accumulation of left-hand transformations, in place in a.
    for i in (0..m.min(n)).rev() {
        let l = i + 1;
        g = w[i];
        for j in l..n {
            a[[i, j]] = 0.0;
        }
        if g != 0.0 {
            g = 1.0 / g;
            for j in l..n {
                let mut s = 0.0;
                for k in l..m {
                    s += a[[k, i]] * a[[k, j]];
                }
                let f = (s / a[[i, i]]) * g;
                for k in i..m {
                    a[[k, j]] += f * a[[k, i]];
                }
            }
            for j in i..m {
                a[[j, i]] *= g;
            }
        } else {
            for j in i..m {
                a[[j, i]] = 0.0;
            }
        }
        a[[i, i]] += 1.0;
    }

    // Diagonalization of the bidiagonal form: for each singular value,
    // iterate implicit-shift QR until the off-diagonal decouples.
    for k in (0..n).rev() {
        for its in 0..config.max_iterations {
            // Test for splitting. rv1[l] is zeroed at the end of every
            // pass, so the scan always terminates at l = 0 at the latest.
            let mut flag = true;
            let mut l = k;
            let mut nm = 0usize;
            loop {
                if l == 0 || rv1[l].abs() + anorm == anorm {
                    flag = false;
                    break;
                }
                nm = l - 1;
                if w[nm].abs() + anorm == anorm {
                    break;
                }
                l -= 1;
            }

            if flag {
                // Cancellation of rv1[l] when w[l-1] is negligible
                let mut c = 0.0;
                let mut s = 1.0;
                for i in l..=k {
                    let f = s * rv1[i];
                    rv1[i] *= c;
                    if f.abs() + anorm == anorm {
                        break;
                    }
                    g = w[i];
                    let mut h = pythag(f, g);
                    w[i] = h;
                    h = 1.0 / h;
                    c = g * h;
                    s = -f * h;
                    for j in 0..m {
                        let y = a[[j, nm]];
                        let z = a[[j, i]];
                        a[[j, nm]] = y * c + z * s;
                        a[[j, i]] = z * c - y * s;
                    }
                }
            }

            let mut z = w[k];
            if l == k {
                // Convergence; make the singular value non-negative
                if z < 0.0 {
                    w[k] = -z;
                    for j in 0..n {
                        v[[j, k]] = -v[[j, k]];
                    }
                }
                break;
            }
            if its == WARN_ITERATION {
                log::warn!("no convergence in {} svdcmp iterations", WARN_ITERATION);
            }

            // Shift from the trailing 2x2 minor
            let mut x = w[l];
            nm = k - 1;
            let mut y = w[nm];
            g = rv1[nm];
            let mut h = rv1[k];
            let mut f = ((y - z) * (y + z) + (g - h) * (g + h)) / (2.0 * h * y);
            g = pythag(f, 1.0);
            f = ((x - z) * (x + z) + h * ((y / (f + sign(g, f))) - h)) / x;

            // QR chase: paired Givens rotations update a and v in lock-step
            let mut c = 1.0;
            let mut s = 1.0;
            for j in l..=nm {
                let i = j + 1;
                g = rv1[i];
                y = w[i];
                h = s * g;
                g = c * g;
                z = pythag(f, h);
                rv1[j] = z;
                c = f / z;
                s = h / z;
                f = x * c + g * s;
                g = g * c - x * s;
                h = y * s;
                y *= c;
                for jj in 0..n {
                    x = v[[jj, j]];
                    z = v[[jj, i]];
                    v[[jj, j]] = x * c + z * s;
                    v[[jj, i]] = z * c - x * s;
                }
                z = pythag(f, h);
                w[j] = z;
                // Rotation can be arbitrary if z = 0
                if z != 0.0 {
                    z = 1.0 / z;
                    c = f * z;
                    s = h * z;
                }
                f = c * g + s * y;
                x = c * y - s * g;
                for jj in 0..m {
                    y = a[[jj, j]];
                    z = a[[jj, i]];
                    a[[jj, j]] = y * c + z * s;
                    a[[jj, i]] = z * c - y * s;
                }
            }
            rv1[l] = 0.0;
            rv1[k] = f;
            w[k] = x;
        }
    }

    Ok(())
}

/// Compute the SVD, consuming the input matrix.
///
/// The buffer moved in as `a` is returned as the `u` field of the result;
/// no copy is made. Use [`svd_copy`] to keep the original.
pub fn svd(a: Matrix) -> Result<SvdResult, SvdError> {
    let n = a.ncols();
    let mut u = a;
    let mut w = Vector::zeros(n);
    let mut v = Matrix::zeros((n, n));
    svdcmp(&mut u, &mut w, &mut v)?;
    Ok(SvdResult { u, w, v })
}

/// Compute the SVD of `a` without mutating it (clones internally).
pub fn svd_copy(a: &Matrix) -> Result<SvdResult, SvdError> {
    svd(a.clone())
}
