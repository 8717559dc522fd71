use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use log::info;
use serde::Deserialize;

use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};
use crate::manager::manager::IManager;
use crate::math::tabulated::tabulatedfunctions::TabulatedFunctions;


/// ```json
/// {
///     "backend": "linked-list",
///     "backends": [ { "name": "vec", "backend": "array" } ]
/// }
/// ```
///
/// `backends` registers extra names before `backend` is resolved, so the
/// current backend may be given by one of those names.
#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    backend: Option<String>,
    #[serde(default)]
    backends: Vec<serde_json::Value>
}

pub struct Configuration {
    tabulated_functions_cell: RefCell<TabulatedFunctions>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            tabulated_functions_cell: RefCell::new(TabulatedFunctions::new())
        }
    }

    /// Panics if the registry is already borrowed; release the returned guard
    /// before loading more configuration.
    pub fn tabulated_functions(&self) -> RefMut<'_, TabulatedFunctions> {
        self.tabulated_functions_cell.borrow_mut()
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)?;
        info!("configuration loaded from {}", file_path);
        Ok(())
    }

    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        let mut tabulated_functions = self.tabulated_functions_cell.try_borrow_mut()?;
        tabulated_functions.backend_manager().insert_obj_from_json_vec(&json_prop.backends)?;
        if let Some(backend) = json_prop.backend {
            tabulated_functions.set_backend_by_name(&backend)?;
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
