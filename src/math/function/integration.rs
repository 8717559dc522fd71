use log::trace;

use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;

/// Trapezoidal quadrature of `f` over `[left_x, right_x]` with a fixed `step`.
///
/// Each sub-interval is `[x1, min(x1 + step, right_x)]`, so the last one is
/// shorter than `step` whenever the interval length is not a multiple of it.
///
/// # Errors
/// * `InvalidArgument` if `step` is not a positive finite number, is too small
///   to advance `x`, or `left_x > right_x`
/// * `DomainViolation` if `[left_x, right_x]` leaves the domain of `f`
pub fn integrate<F>(f: &F, left_x: f64, right_x: f64, step: f64) -> Result<f64, FunctionError> where
    F: Function + ?Sized {
    if !(step > 0.0) || !step.is_finite() {
        return Err(FunctionError::InvalidArgument(
            format!("integration step must be positive and finite, got {}", step)
        ));
    }
    if !(left_x <= right_x) {
        return Err(FunctionError::InvalidArgument(
            format!("integration bounds out of order: [{}, {}]", left_x, right_x)
        ));
    }
    FunctionError::check_domain(left_x, right_x, f.left_domain_border(), f.right_domain_border())?;

    let mut integral = 0.0;
    let mut x1 = left_x;
    let mut y1 = f.value(x1);
    let mut steps = 0usize;
    while x1 < right_x {
        let x2 = (x1 + step).min(right_x);
        if x2 <= x1 {
            return Err(FunctionError::InvalidArgument(
                format!("integration step {} vanishes next to x = {}", step, x1)
            ));
        }
        let y2 = f.value(x2);
        integral += (y1 + y2) / 2.0 * (x2 - x1);
        x1 = x2;
        y1 = y2;
        steps += 1;
    }
    trace!("integrated over [{}, {}] in {} trapezoids", left_x, right_x, steps);
    Ok(integral)
}
