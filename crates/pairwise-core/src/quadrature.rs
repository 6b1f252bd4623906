//! Numerical quadrature
//!
//! Composite Simpson integration, plus a log-domain transform for integrals
//! over (0, inf) whose integrands decay polynomially at infinity and
//! essentially vanish near zero (the Bayes-factor integrands and the
//! chi-scale mixing integral of the studentized range distribution).

/// Composite Simpson rule over [a, b] with `steps` subintervals
/// (rounded up to the next even number).
pub fn simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, steps: usize) -> f64 {
    let n = if steps % 2 == 0 { steps } else { steps + 1 };
    let h = (b - a) / n as f64;
    let mut acc = f(a) + f(b);
    for i in 1..n {
        let x = a + h * i as f64;
        acc += if i % 2 == 0 { 2.0 * f(x) } else { 4.0 * f(x) };
    }
    acc * h / 3.0
}

/// Integral of `f` over (0, inf) via the substitution g = exp(u):
/// int f(g) dg = int f(e^u) e^u du, evaluated over u in [u_lo, u_hi].
///
/// The default window [-30, 30] covers g from ~1e-13 to ~1e13, ample for
/// integrands with an essential singularity exp(-c/g) at zero and
/// polynomial decay at infinity.
pub fn integrate_half_line<F: Fn(f64) -> f64>(f: F, steps: usize) -> f64 {
    const U_LO: f64 = -30.0;
    const U_HI: f64 = 30.0;
    simpson(|u| f(u.exp()) * u.exp(), U_LO, U_HI, steps)
}
