use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::{
    Serialize,
    Deserialize
};

use super::managererror::{ManagerError, parse_json_value};

#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &String {
        &self.name
    }
}


/// Name-keyed registry of objects built from JSON definitions.
pub trait IManager<V: ?Sized> {
    fn map(&self) -> RefMut<'_, HashMap<String, Arc<V>>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    fn insert(&self, name: impl Into<String>, obj: Arc<V>) {
        self.map().insert(name.into(), obj);
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// Accepts either a single definition or an array of them.
    fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}


pub struct Manager<V: ?Sized> {
    map_cell: RefCell<HashMap<String, Arc<V>>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<Arc<V>, ManagerError>
}

impl <V: ?Sized> Manager<V> {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<Arc<V>, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }
}

impl <V: ?Sized> IManager<V> for Manager<V> {
    fn map(&self) -> RefMut<'_, HashMap<String, Arc<V>>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.map().insert(named_object.name().to_owned(), v);
        Ok(())
    }
}
