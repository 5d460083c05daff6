use crate::domain::{GroupBy, GroupTarget, ReferenceData, UncategorizedKind};
use crate::report::filter::VisibilityFlags;

/// Display names for the synthetic category buckets.
const UNCATEGORIZED: &str = "Uncategorized";
const TRANSFERS: &str = "Transfers";
const OFF_BUDGET: &str = "Off Budget";

/// Pseudo-targets appended under category-based grouping.
fn pseudo_targets(flags: VisibilityFlags) -> Vec<GroupTarget> {
    let mut targets = Vec::new();
    if flags.show_uncategorized {
        targets.push(GroupTarget::pseudo(UNCATEGORIZED, UncategorizedKind::Other));
        targets.push(GroupTarget::pseudo(TRANSFERS, UncategorizedKind::Transfer));
        if flags.show_off_budget {
            targets.push(GroupTarget::pseudo(OFF_BUDGET, UncategorizedKind::OffBudget));
        }
    }
    targets
}

/// Flat targets for the custom orchestrator, in reference-data order.
///
/// Interval grouping carries the report entirely in the interval series
/// and its legend; it resolves to no targets of its own. An empty list
/// is a valid "nothing to show" state, not an error.
pub fn group_targets(
    reference: &ReferenceData,
    group_by: GroupBy,
    flags: VisibilityFlags,
) -> Vec<GroupTarget> {
    match group_by {
        GroupBy::Category => {
            let mut targets: Vec<GroupTarget> = reference
                .category_groups
                .iter()
                .filter(|group| flags.show_hidden_categories || !group.hidden)
                .flat_map(|group| group.categories.iter())
                .filter(|category| flags.show_hidden_categories || !category.hidden)
                .map(|category| GroupTarget::real(category.id, &category.name))
                .collect();
            targets.extend(pseudo_targets(flags));
            targets
        }
        GroupBy::Group => grouped_targets(reference, flags)
            .into_iter()
            .map(|(group, _)| group)
            .collect(),
        GroupBy::Payee => reference
            .payees
            .iter()
            .map(|payee| GroupTarget::real(payee.id, &payee.name))
            .collect(),
        GroupBy::Account => reference
            .accounts
            .iter()
            .map(|account| GroupTarget::real(account.id, &account.name))
            .collect(),
        GroupBy::Interval => Vec::new(),
    }
}

/// Two-level targets for the grouped orchestrator: each category group
/// paired with its member categories, plus one synthetic bucket that
/// gathers everything without a real category.
pub fn grouped_targets(
    reference: &ReferenceData,
    flags: VisibilityFlags,
) -> Vec<(GroupTarget, Vec<GroupTarget>)> {
    let mut targets: Vec<(GroupTarget, Vec<GroupTarget>)> = reference
        .category_groups
        .iter()
        .filter(|group| flags.show_hidden_categories || !group.hidden)
        .map(|group| {
            let children = group
                .categories
                .iter()
                .filter(|category| flags.show_hidden_categories || !category.hidden)
                .map(|category| GroupTarget::real(category.id, &category.name))
                .collect();
            (GroupTarget::real(group.id, &group.name), children)
        })
        .collect();
    if flags.show_uncategorized {
        targets.push((
            GroupTarget::pseudo(UNCATEGORIZED, UncategorizedKind::All),
            pseudo_targets(flags),
        ));
    }
    targets
}
