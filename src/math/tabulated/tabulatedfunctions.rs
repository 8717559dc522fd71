use std::sync::Arc;

use log::{debug, trace};

use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::function::function::Function;
use crate::math::function::functionerror::FunctionError;
use crate::math::tabulated::backendmanager::BackendManager;
use crate::math::tabulated::functionpoint::FunctionPoint;
use crate::math::tabulated::tabulatedfunction::{
    TabulatedFunction,
    evenly_spaced_abscissas
};
use crate::math::tabulated::tabulatedfunctionfactory::{
    BackendKind,
    TabulatedFunctionFactory
};

/// Creates tabulated functions through a swappable current factory, or
/// through any backend registered by name.
///
/// Changing the current factory only affects functions created afterwards.
/// The built-in backends are registered under their `BackendKind`
/// identifiers; more names can be added with `register_backend` or from JSON
/// through `backend_manager()`.
pub struct TabulatedFunctions {
    factory: Arc<dyn TabulatedFunctionFactory>,
    backend_manager: Manager<Arc<dyn TabulatedFunctionFactory>>
}

impl TabulatedFunctions {
    /// A registry whose current backend is the array backend.
    pub fn new() -> TabulatedFunctions {
        TabulatedFunctions::with_backend(BackendKind::default())
    }

    pub fn with_backend(kind: BackendKind) -> TabulatedFunctions {
        TabulatedFunctions {
            factory: kind.factory(),
            backend_manager: BackendManager::new()
        }
    }

    pub fn tabulated_function_factory(&self) -> Arc<dyn TabulatedFunctionFactory> {
        self.factory.clone()
    }

    /// Replaces the current factory. A null factory cannot be expressed, so
    /// this cannot fail.
    pub fn set_tabulated_function_factory(&mut self, factory: Arc<dyn TabulatedFunctionFactory>) {
        debug!("current tabulated function factory replaced");
        self.factory = factory;
    }

    pub fn set_backend(&mut self, kind: BackendKind) {
        debug!("current tabulated function backend set to '{}'", kind);
        self.factory = kind.factory();
    }

    /// Makes the backend registered under `name` current.
    pub fn set_backend_by_name(&mut self, name: &str) -> Result<(), FunctionError> {
        self.factory = self.backend_factory(name)?;
        debug!("current tabulated function backend set to '{}'", name);
        Ok(())
    }

    pub fn backend_manager(&self) -> &Manager<Arc<dyn TabulatedFunctionFactory>> {
        &self.backend_manager
    }

    pub fn register_backend(&self, name: &str, factory: Arc<dyn TabulatedFunctionFactory>) {
        debug!("tabulated function backend '{}' registered", name);
        self.backend_manager.insert(name.to_owned(), factory);
    }

    /// Factory registered under `name`; `BackendInstantiation` if there is none.
    pub fn backend_factory(&self, name: &str) -> Result<Arc<dyn TabulatedFunctionFactory>, FunctionError> {
        self.backend_manager
            .get(name)
            .map_err(|_| FunctionError::BackendInstantiation(name.to_owned()))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Creation through the current factory
    // ─────────────────────────────────────────────────────────────────────

    pub fn create_tabulated_function(&self,
                                     left_x: f64,
                                     right_x: f64,
                                     points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.factory.create_tabulated_function(left_x, right_x, points_count)
    }

    pub fn create_tabulated_function_from_values(&self,
                                                 left_x: f64,
                                                 right_x: f64,
                                                 values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.factory.create_tabulated_function_from_values(left_x, right_x, values)
    }

    pub fn create_tabulated_function_from_points(&self,
                                                 points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.factory.create_tabulated_function_from_points(points)
    }

    /// Samples `f` at `points_count` evenly spaced abscissas of `[left_x, right_x]`.
    ///
    /// # Errors
    /// * `InvalidArgument` unless `left_x < right_x` and `points_count >= 2`
    /// * `DomainViolation` if `[left_x, right_x]` leaves the domain of `f`
    pub fn tabulate<F>(&self,
                       f: &F,
                       left_x: f64,
                       right_x: f64,
                       points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> where
        F: Function + ?Sized {
        let values = sample(f, left_x, right_x, points_count)?;
        self.create_tabulated_function_from_values(left_x, right_x, &values)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Creation through a backend chosen by name
    // ─────────────────────────────────────────────────────────────────────

    pub fn create_tabulated_function_of(&self,
                                        backend: &str,
                                        left_x: f64,
                                        right_x: f64,
                                        points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.backend_factory(backend)?.create_tabulated_function(left_x, right_x, points_count)
    }

    pub fn create_tabulated_function_from_values_of(&self,
                                                    backend: &str,
                                                    left_x: f64,
                                                    right_x: f64,
                                                    values: &[f64]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.backend_factory(backend)?.create_tabulated_function_from_values(left_x, right_x, values)
    }

    pub fn create_tabulated_function_from_points_of(&self,
                                                    backend: &str,
                                                    points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, FunctionError> {
        self.backend_factory(backend)?.create_tabulated_function_from_points(points)
    }

    /// `tabulate` into the backend registered under `backend`.
    pub fn tabulate_of<F>(&self,
                          backend: &str,
                          f: &F,
                          left_x: f64,
                          right_x: f64,
                          points_count: usize) -> Result<Box<dyn TabulatedFunction>, FunctionError> where
        F: Function + ?Sized {
        let factory = self.backend_factory(backend)?;
        let values = sample(f, left_x, right_x, points_count)?;
        factory.create_tabulated_function_from_values(left_x, right_x, &values)
    }
}

impl Default for TabulatedFunctions {
    fn default() -> Self {
        TabulatedFunctions::new()
    }
}

fn sample<F>(f: &F, left_x: f64, right_x: f64, points_count: usize) -> Result<Vec<f64>, FunctionError> where
    F: Function + ?Sized {
    let abscissas = evenly_spaced_abscissas(left_x, right_x, points_count)?;
    FunctionError::check_domain(left_x, right_x, f.left_domain_border(), f.right_domain_border())?;
    trace!("tabulating {} points over [{}, {}]", points_count, left_x, right_x);
    Ok(abscissas.into_iter().map(|x| f.value(x)).collect())
}
