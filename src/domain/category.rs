use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorises transactions for budgeting and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub group_id: Uuid,
    #[serde(default)]
    pub is_income: bool,
    #[serde(default)]
    pub hidden: bool,
}

impl Category {
    pub fn new(name: impl Into<String>, group_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            group_id,
            is_income: false,
            hidden: false,
        }
    }
}

/// A named collection of categories sharing a visibility flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryGroup {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CategoryGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            hidden: false,
            categories: Vec::new(),
        }
    }

    /// Adds a member category, stamping it with this group's id.
    pub fn with_category(mut self, mut category: Category) -> Self {
        category.group_id = self.id;
        self.categories.push(category);
        self
    }
}
