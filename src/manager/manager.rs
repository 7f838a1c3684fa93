use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use super::managererror::{ManagerError, parse_json_value};
use super::namedobject::NamedJsonObject;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn insert(&self, name: String, v: V) {
        self.map().insert(name, v);
    }

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
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


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        debug!(name = named_object.name(), "registered object");
        self.insert(named_object.name().to_owned(), v);
        Ok(())
    }
}
