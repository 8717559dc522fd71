use crate::math::function::function::Function;

/// Logarithm to an arbitrary base, defined on `[0, f64::MAX]`.
pub struct Log {
    base: f64
}

impl Log {
    pub fn new(base: f64) -> Log {
        Log { base }
    }

    pub fn natural() -> Log {
        Log::new(std::f64::consts::E)
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

impl Function for Log {
    fn left_domain_border(&self) -> f64 {
        0.0
    }

    fn right_domain_border(&self) -> f64 {
        f64::MAX
    }

    fn value(&self, x: f64) -> f64 {
        x.ln() / self.base.ln()
    }
}
