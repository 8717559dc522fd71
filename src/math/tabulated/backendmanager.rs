use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};
use crate::math::tabulated::tabulatedfunctionfactory::{
    BackendKind,
    TabulatedFunctionFactory
};

#[derive(Deserialize)]
struct BackendJsonProp {
    backend: BackendKind
}

/// `{"name": "vec", "backend": "array"}` registers the array backend under `vec`.
fn get_backend_factory_from_json(json_value: serde_json::Value) -> Result<Arc<dyn TabulatedFunctionFactory>, ManagerError> {
    let json_prop: BackendJsonProp = parse_json_value(json_value)?;
    Ok(json_prop.backend.factory())
}


pub struct BackendManager;


impl BackendManager {
    /// A manager pre-loaded with every `BackendKind` under its identifier.
    pub fn new() -> Manager<Arc<dyn TabulatedFunctionFactory>> {
        let manager = Manager::new(get_backend_factory_from_json);
        for kind in BackendKind::ALL {
            manager.insert(kind.identifier().to_owned(), kind.factory());
        }
        manager
    }
}
