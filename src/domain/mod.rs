//! Reference data, raw aggregate rows, and report result models.

pub mod account;
pub mod category;
pub mod payee;
pub mod report;
pub mod rows;
pub mod target;

pub use account::Account;
pub use category::{Category, CategoryGroup};
pub use payee::Payee;
pub use report::{
    BalanceType, BudgetCarryoverReport, BudgetMonthEntity, DataEntity, GraphType, GroupedEntity,
    IntervalEntity, LegendEntity, SortBy,
};
pub use rows::{AggregateKind, RawAggregateRow};
pub use target::{GroupBy, GroupTarget, UncategorizedKind};

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the reference data a report is computed
/// against. Supplied by the caller per invocation and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub category_groups: Vec<CategoryGroup>,
    #[serde(default)]
    pub payees: Vec<Payee>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl ReferenceData {
    /// Iterates every category across all groups.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.category_groups
            .iter()
            .flat_map(|group| group.categories.iter())
    }
}
