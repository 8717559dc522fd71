use std::sync::Arc;

use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;

/// Stretches `f` by `scale_x` along the abscissa and by `scale_y` along the ordinate.
///
/// A negative `scale_x` mirrors the domain: the original right border becomes
/// the new left border.
pub struct Scale {
    f: Arc<dyn Function>,
    scale_x: f64,
    scale_y: f64
}

impl Scale {
    pub fn new(f: Arc<dyn Function>, scale_x: f64, scale_y: f64) -> Result<Scale, FunctionError> {
        if scale_x == 0.0 || scale_x.is_nan() {
            return Err(FunctionError::InvalidArgument(
                format!("abscissa scale factor must be non-zero, got {}", scale_x)
            ));
        }
        Ok(Scale { f, scale_x, scale_y })
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }
}

impl Function for Scale {
    fn left_domain_border(&self) -> f64 {
        if self.scale_x > 0.0 {
            self.f.left_domain_border() * self.scale_x
        } else {
            self.f.right_domain_border() * self.scale_x
        }
    }

    fn right_domain_border(&self) -> f64 {
        if self.scale_x > 0.0 {
            self.f.right_domain_border() * self.scale_x
        } else {
            self.f.left_domain_border() * self.scale_x
        }
    }

    fn value(&self, x: f64) -> f64 {
        self.f.value(x / self.scale_x) * self.scale_y
    }
}
