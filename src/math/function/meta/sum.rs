use std::sync::Arc;

use crate::math::function::function::Function;

/// `f1(x) + f2(x)` on the intersection of both domains.
///
/// Disjoint domains give `left_domain_border() > right_domain_border()`,
/// an empty domain that nothing can be tabulated or integrated over.
pub struct Sum {
    f1: Arc<dyn Function>,
    f2: Arc<dyn Function>
}

impl Sum {
    pub fn new(f1: Arc<dyn Function>, f2: Arc<dyn Function>) -> Sum {
        Sum { f1, f2 }
    }
}

impl Function for Sum {
    fn left_domain_border(&self) -> f64 {
        self.f1.left_domain_border().max(self.f2.left_domain_border())
    }

    fn right_domain_border(&self) -> f64 {
        self.f1.right_domain_border().min(self.f2.right_domain_border())
    }

    fn value(&self, x: f64) -> f64 {
        self.f1.value(x) + self.f2.value(x)
    }
}
