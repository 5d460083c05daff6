use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which signed aggregate bucket a fetch returns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Assets,
    Debts,
}

impl AggregateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AggregateKind::Assets => "assets",
            AggregateKind::Debts => "debts",
        }
    }
}

/// One pre-aggregated sum per (interval bucket, account, payee,
/// category) combination, produced by the external query layer.
///
/// Rows from the assets bucket carry positive amounts and rows from the
/// debts bucket negative ones; the engine never mixes the two buckets
/// before recalculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawAggregateRow {
    /// Calendar-specific bucket key ("2024", "2024-01" or "2024-01-15").
    pub date: String,
    pub category: Option<Uuid>,
    #[serde(default)]
    pub category_hidden: bool,
    #[serde(default)]
    pub category_income: bool,
    pub category_group: Option<Uuid>,
    #[serde(default)]
    pub category_group_hidden: bool,
    pub account: Option<Uuid>,
    #[serde(default)]
    pub account_off_budget: bool,
    pub payee: Option<Uuid>,
    pub transfer_account: Option<Uuid>,
    /// Signed amount in minor currency units.
    pub amount: i64,
}
