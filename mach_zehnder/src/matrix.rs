//! Fixed-size 2x2 complex linear algebra.
//!
//! Every operator in the interferometer acts on exactly two modes, so
//! matrices are stored inline as `[m00, m01, m10, m11]` (row-major) and
//! vectors as `[v0, v1]`. No heap allocation, no general dense-matrix
//! machinery.

use num_complex::Complex;

/// A 2x2 complex matrix stored as [row0col0, row0col1, row1col0, row1col1].
pub type Matrix2x2 = [Complex<f64>; 4];

/// A two-component complex vector, one amplitude per mode.
pub type Vector2 = [Complex<f64>; 2];

/// The 2x2 identity.
pub fn identity() -> Matrix2x2 {
    let zero = Complex::new(0.0, 0.0);
    let one = Complex::new(1.0, 0.0);
    [one, zero, zero, one]
}

/// Matrix product `a · b`.
#[inline]
pub fn mat_mul(a: &Matrix2x2, b: &Matrix2x2) -> Matrix2x2 {
    [
        a[0] * b[0] + a[1] * b[2],
        a[0] * b[1] + a[1] * b[3],
        a[2] * b[0] + a[3] * b[2],
        a[2] * b[1] + a[3] * b[3],
    ]
}

/// Matrix-vector product `m · v`.
#[inline]
pub fn apply(m: &Matrix2x2, v: &Vector2) -> Vector2 {
    [m[0] * v[0] + m[1] * v[1], m[2] * v[0] + m[3] * v[1]]
}

/// Multiply every entry by a complex scalar.
pub fn scale(m: &Matrix2x2, factor: Complex<f64>) -> Matrix2x2 {
    [m[0] * factor, m[1] * factor, m[2] * factor, m[3] * factor]
}

/// Conjugate transpose (Hermitian adjoint).
pub fn dagger(m: &Matrix2x2) -> Matrix2x2 {
    [m[0].conj(), m[2].conj(), m[1].conj(), m[3].conj()]
}

/// Check `U · U† = I` entrywise within `tolerance`.
pub fn is_unitary(m: &Matrix2x2, tolerance: f64) -> bool {
    let product = mat_mul(m, &dagger(m));
    product
        .iter()
        .zip(identity().iter())
        .all(|(p, e)| (p - e).norm() <= tolerance)
}

/// Largest entrywise distance between two matrices.
pub fn max_distance(a: &Matrix2x2, b: &Matrix2x2) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}
