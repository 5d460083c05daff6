use uuid::Uuid;

use crate::domain::{GroupBy, GroupTarget, GroupedEntity, IntervalEntity, RawAggregateRow};
use crate::report::filter::{self, VisibilityFlags};

/// Accumulator threaded through the interval fold. Each step returns a
/// fresh value, which keeps per-group recalculation free of shared
/// state and safe to fan out.
#[derive(Debug, Clone, Copy, Default)]
struct Running {
    total_assets: i64,
    total_debts: i64,
    net_assets: i64,
    net_debts: i64,
    previous_total: Option<i64>,
}

impl Running {
    /// Folds one bucket's sums into the next accumulator value and the
    /// bucket's interval entity.
    fn advance(self, bucket: &str, assets: i64, debts: i64) -> (Running, IntervalEntity) {
        let bucket_total = assets + debts;
        let change = match self.previous_total {
            Some(previous) => bucket_total - previous,
            None => 0,
        };
        let bucket_net_assets = bucket_total.max(0);
        let bucket_net_debts = bucket_total.min(0);
        let next = Running {
            total_assets: self.total_assets + assets,
            total_debts: self.total_debts + debts,
            net_assets: self.net_assets + bucket_net_assets,
            net_debts: self.net_debts + bucket_net_debts,
            previous_total: Some(bucket_total),
        };
        let entity = IntervalEntity {
            interval_start_date: bucket.to_string(),
            total_assets: assets,
            total_debts: debts,
            net_assets: bucket_net_assets,
            net_debts: bucket_net_debts,
            total_totals: bucket_total,
            change,
        };
        (next, entity)
    }
}

/// Recalculates one target into a grouped entity without nested
/// categories.
///
/// Asset and debt rows are scrubbed per target and summed per bucket in
/// interval order. Amounts stay in minor currency units throughout;
/// conversion to a decimal representation is a presentation concern.
pub fn recalculate(
    target: &GroupTarget,
    intervals: &[String],
    asset_rows: &[RawAggregateRow],
    debt_rows: &[RawAggregateRow],
    group_by: GroupBy,
    flags: VisibilityFlags,
) -> GroupedEntity {
    let category_grouping = group_by.is_category_based();
    let assets = filter::filter_hidden_items(target, asset_rows, flags, category_grouping);
    let debts = filter::filter_hidden_items(target, debt_rows, flags, category_grouping);

    let seed = (Running::default(), Vec::with_capacity(intervals.len()));
    let (totals, interval_data) = intervals.iter().fold(seed, |(acc, mut series), bucket| {
        let bucket_assets = sum_bucket(&assets, bucket, target, group_by);
        let bucket_debts = sum_bucket(&debts, bucket, target, group_by);
        let (next, entity) = acc.advance(bucket, bucket_assets, bucket_debts);
        series.push(entity);
        (next, series)
    });

    GroupedEntity {
        id: target.id,
        name: target.name.clone(),
        total_assets: totals.total_assets,
        total_debts: totals.total_debts,
        net_assets: totals.net_assets,
        net_debts: totals.net_debts,
        total_totals: totals.total_assets + totals.total_debts,
        interval_data,
        categories: Vec::new(),
    }
}

fn sum_bucket(
    rows: &[&RawAggregateRow],
    bucket: &str,
    target: &GroupTarget,
    group_by: GroupBy,
) -> i64 {
    rows.iter()
        .filter(|row| row.date == bucket && matches_group(row, target, group_by))
        .map(|row| row.amount)
        .sum()
}

/// Joins a row to its target on the grouping dimension's id field.
fn matches_group(row: &RawAggregateRow, target: &GroupTarget, group_by: GroupBy) -> bool {
    let key: Option<Uuid> = match group_by {
        GroupBy::Category => row.category,
        GroupBy::Group => row.category_group,
        GroupBy::Payee => row.payee,
        GroupBy::Account => row.account,
        // The whole-report series joins every row to the interval
        // sequence itself.
        GroupBy::Interval => return true,
    };
    key == target.id
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn row(date: &str, category: Uuid, amount: i64) -> RawAggregateRow {
        RawAggregateRow {
            date: date.into(),
            category: Some(category),
            category_hidden: false,
            category_income: false,
            category_group: None,
            category_group_hidden: false,
            account: Some(Uuid::new_v4()),
            account_off_budget: false,
            payee: None,
            transfer_account: None,
            amount,
        }
    }

    fn months() -> Vec<String> {
        vec!["2024-01".into(), "2024-02".into(), "2024-03".into()]
    }

    #[test]
    fn totals_equal_the_sum_of_interval_data() {
        let category = Uuid::new_v4();
        let target = GroupTarget::real(category, "Groceries");
        let assets = vec![row("2024-01", category, 500), row("2024-03", category, 250)];
        let debts = vec![row("2024-01", category, -300), row("2024-02", category, -100)];

        let group = recalculate(
            &target,
            &months(),
            &assets,
            &debts,
            GroupBy::Category,
            VisibilityFlags::default(),
        );

        assert_eq!(group.total_assets, 750);
        assert_eq!(group.total_debts, -400);
        assert_eq!(group.total_totals, 350);
        assert_eq!(
            group.total_assets,
            group.interval_data.iter().map(|i| i.total_assets).sum::<i64>()
        );
        assert_eq!(
            group.total_debts,
            group.interval_data.iter().map(|i| i.total_debts).sum::<i64>()
        );
        assert_eq!(
            group.total_totals,
            group.interval_data.iter().map(|i| i.total_totals).sum::<i64>()
        );
    }

    #[test]
    fn sign_invariant_holds_per_interval() {
        let category = Uuid::new_v4();
        let target = GroupTarget::real(category, "Rent");
        let assets = vec![row("2024-02", category, 80)];
        let debts = vec![row("2024-01", category, -900)];

        let group = recalculate(
            &target,
            &months(),
            &assets,
            &debts,
            GroupBy::Category,
            VisibilityFlags::default(),
        );

        for interval in &group.interval_data {
            assert!(interval.total_assets >= 0);
            assert!(interval.total_debts <= 0);
            assert!(interval.net_assets >= 0);
            assert!(interval.net_debts <= 0);
        }
        assert!(group.total_assets >= 0);
        assert!(group.total_debts <= 0);
    }

    #[test]
    fn change_tracks_bucket_over_bucket_difference() {
        let category = Uuid::new_v4();
        let target = GroupTarget::real(category, "Utilities");
        let debts = vec![
            row("2024-01", category, -100),
            row("2024-02", category, -250),
        ];

        let group = recalculate(
            &target,
            &months(),
            &[],
            &debts,
            GroupBy::Category,
            VisibilityFlags::default(),
        );

        let changes: Vec<i64> = group.interval_data.iter().map(|i| i.change).collect();
        assert_eq!(changes, vec![0, -150, 250]);
    }

    #[test]
    fn empty_interval_sequence_produces_zeroed_entity() {
        let target = GroupTarget::real(Uuid::new_v4(), "Nothing");
        let group = recalculate(
            &target,
            &[],
            &[],
            &[],
            GroupBy::Category,
            VisibilityFlags::default(),
        );
        assert!(group.interval_data.is_empty());
        assert_eq!(group.total_assets, 0);
        assert_eq!(group.total_debts, 0);
        assert_eq!(group.total_totals, 0);
    }

    #[test]
    fn rows_outside_the_target_are_ignored() {
        let mine = Uuid::new_v4();
        let other = Uuid::new_v4();
        let target = GroupTarget::real(mine, "Mine");
        let debts = vec![row("2024-01", mine, -40), row("2024-01", other, -60)];

        let group = recalculate(
            &target,
            &months(),
            &[],
            &debts,
            GroupBy::Category,
            VisibilityFlags::default(),
        );
        assert_eq!(group.total_debts, -40);
    }
}
