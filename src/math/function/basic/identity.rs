use crate::math::function::function::Function;

/// `f(x) = x` over the whole real line; the usual inner argument of
/// `Power` when a bare power of x is needed.
pub struct Identity;

impl Identity {
    pub fn new() -> Identity {
        Identity
    }
}

impl Function for Identity {
    fn left_domain_border(&self) -> f64 {
        -f64::MAX
    }

    fn right_domain_border(&self) -> f64 {
        f64::MAX
    }

    fn value(&self, x: f64) -> f64 {
        x
    }
}
