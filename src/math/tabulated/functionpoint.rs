use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{
    Deserialize,
    Serialize
};

/// Absolute tolerance used by `FunctionPoint` equality on both coordinates.
pub const POINT_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct FunctionPoint {
    x: f64,
    y: f64
}

impl FunctionPoint {
    pub fn new(x: f64, y: f64) -> FunctionPoint {
        FunctionPoint { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Linear interpolation through `lhs_pt` and `rhs_pt` at `x`.
    pub fn interpolate(lhs_pt: &FunctionPoint, rhs_pt: &FunctionPoint, x: f64) -> f64 {
        lhs_pt.y + (x - lhs_pt.x) * (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }

    /// Folds the bit patterns of both coordinates into one word.
    ///
    /// `-0.0` is normalised to `0.0` first so the two zeros, which compare
    /// equal, also hash equal.
    pub fn hash_code(&self) -> u64 {
        let x_bits = (self.x + 0.0).to_bits();
        let y_bits = (self.y + 0.0).to_bits();
        (x_bits ^ (x_bits >> 32)) ^ (y_bits ^ (y_bits >> 32))
    }
}

impl PartialEq for FunctionPoint {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < POINT_EPSILON && (self.y - other.y).abs() < POINT_EPSILON
    }
}

impl Hash for FunctionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl From<(f64, f64)> for FunctionPoint {
    fn from((x, y): (f64, f64)) -> Self {
        FunctionPoint::new(x, y)
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}
