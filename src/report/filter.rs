use serde::{Deserialize, Serialize};

use crate::domain::{BalanceType, GroupTarget, GroupedEntity, RawAggregateRow, UncategorizedKind};

/// Visibility switches applied while scrubbing raw rows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisibilityFlags {
    #[serde(default)]
    pub show_off_budget: bool,
    #[serde(default)]
    pub show_hidden_categories: bool,
    #[serde(default)]
    pub show_uncategorized: bool,
}

/// Scrubs raw rows for one group target.
///
/// Runs in full for every target being recalculated; the pseudo-group
/// dispatch depends on the target, so results are never cached across
/// targets.
pub fn filter_hidden_items<'a>(
    target: &GroupTarget,
    rows: &'a [RawAggregateRow],
    flags: VisibilityFlags,
    category_grouping: bool,
) -> Vec<&'a RawAggregateRow> {
    rows.iter()
        .filter(|row| {
            flags.show_hidden_categories || (!row.category_hidden && !row.category_group_hidden)
        })
        .filter(|row| flags.show_off_budget || !row.account_off_budget)
        .filter(|row| flags.show_uncategorized || row.category.is_some() || row.account_off_budget)
        .filter(|row| !category_grouping || matches_uncategorized(target, row))
        .collect()
}

/// Pseudo-group membership under category-based grouping. A row with a
/// real category and an on-budget account belongs to real targets only.
fn matches_uncategorized(target: &GroupTarget, row: &RawAggregateRow) -> bool {
    match target.uncategorized {
        None => row.category.is_some() && !row.account_off_budget,
        Some(UncategorizedKind::OffBudget) => row.account_off_budget,
        Some(UncategorizedKind::Transfer) => {
            !row.account_off_budget && row.transfer_account.is_some()
        }
        Some(UncategorizedKind::Other) => {
            !row.account_off_budget && row.transfer_account.is_none()
        }
        Some(UncategorizedKind::All) => true,
    }
}

/// Whether a recalculated group survives empty-row suppression.
pub fn keep_group(show_empty: bool, group: &GroupedEntity, balance_type: BalanceType) -> bool {
    if show_empty {
        return true;
    }
    match balance_type {
        BalanceType::TotalTotals => {
            group.total_debts != 0 || group.total_assets != 0 || group.total_totals != 0
        }
        other => group.balance(other) != 0,
    }
}
