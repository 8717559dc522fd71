use crate::math::function::function::Function;

pub struct Sin;

pub struct Cos;

impl Sin {
    pub fn new() -> Sin {
        Sin
    }
}

impl Cos {
    pub fn new() -> Cos {
        Cos
    }
}

impl Function for Sin {
    fn left_domain_border(&self) -> f64 {
        -f64::MAX
    }

    fn right_domain_border(&self) -> f64 {
        f64::MAX
    }

    fn value(&self, x: f64) -> f64 {
        x.sin()
    }
}

impl Function for Cos {
    fn left_domain_border(&self) -> f64 {
        -f64::MAX
    }

    fn right_domain_border(&self) -> f64 {
        f64::MAX
    }

    fn value(&self, x: f64) -> f64 {
        x.cos()
    }
}
