use crate::math::function::function::Function;

pub struct Exp;

impl Exp {
    pub fn new() -> Exp {
        Exp
    }
}

impl Function for Exp {
    fn left_domain_border(&self) -> f64 {
        -f64::MAX
    }

    fn right_domain_border(&self) -> f64 {
        f64::MAX
    }

    fn value(&self, x: f64) -> f64 {
        x.exp()
    }
}
