use std::sync::Arc;

use crate::math::function::function::Function;

/// Moves `f` by `shift_x` along the abscissa and by `shift_y` along the ordinate.
pub struct Shift {
    f: Arc<dyn Function>,
    shift_x: f64,
    shift_y: f64
}

impl Shift {
    pub fn new(f: Arc<dyn Function>, shift_x: f64, shift_y: f64) -> Shift {
        Shift { f, shift_x, shift_y }
    }

    pub fn shift_x(&self) -> f64 {
        self.shift_x
    }

    pub fn shift_y(&self) -> f64 {
        self.shift_y
    }
}

impl Function for Shift {
    fn left_domain_border(&self) -> f64 {
        self.f.left_domain_border() + self.shift_x
    }

    fn right_domain_border(&self) -> f64 {
        self.f.right_domain_border() + self.shift_x
    }

    fn value(&self, x: f64) -> f64 {
        self.f.value(x - self.shift_x) + self.shift_y
    }
}
