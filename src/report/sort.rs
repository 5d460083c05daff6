use std::cmp::Ordering;

use crate::domain::{BalanceType, GroupedEntity, SortBy};

/// Compares two groups under the report's sort semantics.
///
/// Debt-oriented metrics are stored as negative sums, so ascending and
/// descending swap to keep "largest spender first" the intuitive
/// default regardless of sign convention.
pub fn compare(
    a: &GroupedEntity,
    b: &GroupedEntity,
    balance_type: BalanceType,
    sort_by: SortBy,
) -> Ordering {
    let sort_by = if balance_type.is_debt_oriented() {
        match sort_by {
            SortBy::Asc => SortBy::Desc,
            SortBy::Desc => SortBy::Asc,
            other => other,
        }
    } else {
        sort_by
    };
    match sort_by {
        SortBy::Asc => a.balance(balance_type).cmp(&b.balance(balance_type)),
        SortBy::Desc => b.balance(balance_type).cmp(&a.balance(balance_type)),
        SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        // Budget ordering is resolved upstream; the comparator
        // preserves the incoming order on purpose.
        SortBy::Budget => Ordering::Equal,
    }
}

/// Stable-sorts groups and their nested categories with one comparator,
/// so equal keys keep their relative input order at both levels.
pub fn sort_groups(groups: &mut [GroupedEntity], balance_type: BalanceType, sort_by: SortBy) {
    groups.sort_by(|a, b| compare(a, b, balance_type, sort_by));
    for group in groups.iter_mut() {
        group
            .categories
            .sort_by(|a, b| compare(a, b, balance_type, sort_by));
    }
}
