use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::functionerror::FunctionError;
use crate::math::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::math::tabulated::functionpoint::FunctionPoint;
use crate::math::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::math::tabulated::tabulatedfunction::TabulatedFunction;

/// Creates tabulated functions of one backend, mirroring the three
/// constructors every backend offers.
pub trait TabulatedFunctionFactory: Send + Sync {
    fn create_tabulated_function(&self,
                                 left_x: f64,
                                 right_x: f64,
                                 points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError>;

    fn create_tabulated_function_from_values(&self,
                                             left_x: f64,
                                             right_x: f64,
                                             values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError>;

    fn create_tabulated_function_from_points(&self,
                                             points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError>;
}

pub struct ArrayTabulatedFunctionFactory;

impl ArrayTabulatedFunctionFactory {
    pub fn new() -> ArrayTabulatedFunctionFactory {
        ArrayTabulatedFunctionFactory
    }
}

impl TabulatedFunctionFactory for ArrayTabulatedFunctionFactory {
    fn create_tabulated_function(&self,
                                 left_x: f64,
                                 right_x: f64,
                                 points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(ArrayTabulatedFunction::new(left_x, right_x, points_count)?))
    }

    fn create_tabulated_function_from_values(&self,
                                             left_x: f64,
                                             right_x: f64,
                                             values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(ArrayTabulatedFunction::from_values(left_x, right_x, values)?))
    }

    fn create_tabulated_function_from_points(&self,
                                             points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(ArrayTabulatedFunction::from_points(points)?))
    }
}

pub struct LinkedListTabulatedFunctionFactory;

impl LinkedListTabulatedFunctionFactory {
    pub fn new() -> LinkedListTabulatedFunctionFactory {
        LinkedListTabulatedFunctionFactory
    }
}

impl TabulatedFunctionFactory for LinkedListTabulatedFunctionFactory {
    fn create_tabulated_function(&self,
                                 left_x: f64,
                                 right_x: f64,
                                 points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(LinkedListTabulatedFunction::new(left_x, right_x, points_count)?))
    }

    fn create_tabulated_function_from_values(&self,
                                             left_x: f64,
                                             right_x: f64,
                                             values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(LinkedListTabulatedFunction::from_values(left_x, right_x, values)?))
    }

    fn create_tabulated_function_from_points(&self,
                                             points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        Ok(Box::new(LinkedListTabulatedFunction::from_points(points)?))
    }
}

/// The built-in backends and their public identifiers, `"array"` and `"linked-list"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    Array,
    LinkedList
}

impl BackendKind {
    pub const ALL: [BackendKind; 2] = [BackendKind::Array, BackendKind::LinkedList];

    pub fn identifier(&self) -> &'static str {
        match self {
            BackendKind::Array => "array",
            BackendKind::LinkedList => "linked-list"
        }
    }

    pub fn factory(&self) -> Arc<dyn TabulatedFunctionFactory> {
        match self {
            BackendKind::Array => Arc::new(ArrayTabulatedFunctionFactory::new()),
            BackendKind::LinkedList => Arc::new(LinkedListTabulatedFunctionFactory::new())
        }
    }
}

impl Default for BackendKind {
    fn default() -> Self {
        BackendKind::Array
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for BackendKind {
    type Err = FunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackendKind::ALL
            .into_iter()
            .find(|kind| kind.identifier() == s)
            .ok_or_else(|| FunctionError::BackendInstantiation(s.to_owned()))
    }
}
