use std::sync::Arc;

use crate::math::function::function::Function;

/// `f(x)^power` on the domain of `f`.
pub struct Power {
    f: Arc<dyn Function>,
    power: f64
}

impl Power {
    pub fn new(f: Arc<dyn Function>, power: f64) -> Power {
        Power { f, power }
    }

    pub fn power(&self) -> f64 {
        self.power
    }
}

impl Function for Power {
    fn left_domain_border(&self) -> f64 {
        self.f.left_domain_border()
    }

    fn right_domain_border(&self) -> f64 {
        self.f.right_domain_border()
    }

    fn value(&self, x: f64) -> f64 {
        self.f.value(x).powf(self.power)
    }
}
