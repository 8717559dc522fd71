use std::sync::Arc;

use crate::math::function::function::Function;

/// `f1(x) * f2(x)` on the intersection of both domains, same policy as `Sum`.
pub struct Mult {
    f1: Arc<dyn Function>,
    f2: Arc<dyn Function>
}

impl Mult {
    pub fn new(f1: Arc<dyn Function>, f2: Arc<dyn Function>) -> Mult {
        Mult { f1, f2 }
    }
}

impl Function for Mult {
    fn left_domain_border(&self) -> f64 {
        self.f1.left_domain_border().max(self.f2.left_domain_border())
    }

    fn right_domain_border(&self) -> f64 {
        self.f1.right_domain_border().min(self.f2.right_domain_border())
    }

    fn value(&self, x: f64) -> f64 {
        self.f1.value(x) * self.f2.value(x)
    }
}
