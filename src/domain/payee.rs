use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A counterparty; transfer payees point at the receiving account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payee {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_account: Option<Uuid>,
}

impl Payee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transfer_account: None,
        }
    }
}
