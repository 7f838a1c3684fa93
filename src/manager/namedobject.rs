use serde::{
    Serialize,
    Deserialize
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
