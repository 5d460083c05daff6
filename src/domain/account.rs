use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A financial account transactions are booked against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub off_budget: bool,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            off_budget: false,
        }
    }

    pub fn off_budget(name: impl Into<String>) -> Self {
        Self {
            off_budget: true,
            ..Self::new(name)
        }
    }
}
