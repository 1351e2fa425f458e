use serde::{Deserialize, Serialize};

use crate::model::Id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: Id,
    pub name: String,
}

impl Country {
    pub fn new(name: String) -> Self {
        Self { id: 0, name }
    }
}
