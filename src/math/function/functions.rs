use std::sync::Arc;

use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;
use crate::math::function::integration;
use crate::math::function::meta::composition::Composition;
use crate::math::function::meta::mult::Mult;
use crate::math::function::meta::power::Power;
use crate::math::function::meta::scale::Scale;
use crate::math::function::meta::shift::Shift;
use crate::math::function::meta::sum::Sum;

// ─────────────────────────────────────────────────────────────────────────────
// Shorthands for building the function algebra behind `Arc<dyn Function>`
// ─────────────────────────────────────────────────────────────────────────────

pub fn shift(f: Arc<dyn Function>, shift_x: f64, shift_y: f64) -> Arc<dyn Function> {
    Arc::new(Shift::new(f, shift_x, shift_y))
}

pub fn scale(f: Arc<dyn Function>, scale_x: f64, scale_y: f64) -> Result<Arc<dyn Function>, FunctionError> {
    Ok(Arc::new(Scale::new(f, scale_x, scale_y)?))
}

pub fn power(f: Arc<dyn Function>, power: f64) -> Arc<dyn Function> {
    Arc::new(Power::new(f, power))
}

pub fn sum(f1: Arc<dyn Function>, f2: Arc<dyn Function>) -> Arc<dyn Function> {
    Arc::new(Sum::new(f1, f2))
}

pub fn mult(f1: Arc<dyn Function>, f2: Arc<dyn Function>) -> Arc<dyn Function> {
    Arc::new(Mult::new(f1, f2))
}

pub fn composition(outer: Arc<dyn Function>, inner: Arc<dyn Function>) -> Arc<dyn Function> {
    Arc::new(Composition::new(outer, inner))
}

pub fn integrate<F>(f: &F, left_x: f64, right_x: f64, step: f64) -> Result<f64, FunctionError> where
    F: Function + ?Sized {
    integration::integrate(f, left_x, right_x, step)
}
