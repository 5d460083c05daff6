use rayon::prelude::*;
use tracing::debug;

use crate::domain::{DataEntity, GroupBy, GroupTarget, GroupedEntity, ReferenceData};
use crate::errors::ReportError;
use crate::report::custom::{fetch_rows, ReportRequest};
use crate::report::legend::{self, ColorPalette};
use crate::report::recalculate::recalculate;
use crate::report::{filter, intervals, sort, targets};
use crate::source::{AggregateSource, ConditionCompiler};

/// Computes a two-level category-group report: one entity per group
/// with its member categories nested underneath.
///
/// Groups recalculate independently and fan out; within one group the
/// nested categories are again data-independent.
pub fn create_grouped_report(
    source: &dyn AggregateSource,
    compiler: &dyn ConditionCompiler,
    reference: &ReferenceData,
    request: &ReportRequest,
    palette: &ColorPalette,
) -> Result<DataEntity, ReportError> {
    let week_start = intervals::week_start_from_index(request.first_day_of_week_index)?;
    let buckets = request
        .interval
        .range_inclusive(request.start, request.end, week_start);
    let rows = fetch_rows(source, compiler, request, week_start)?;
    let flags = request.visibility();

    let level_targets = targets::grouped_targets(reference, flags);
    debug!(
        groups = level_targets.len(),
        buckets = buckets.len(),
        "recalculating grouped report"
    );

    let mut data: Vec<GroupedEntity> = level_targets
        .par_iter()
        .map(|(group_target, children)| {
            let mut entity = recalculate(
                group_target,
                &buckets,
                &rows.assets,
                &rows.debts,
                GroupBy::Group,
                flags,
            );
            entity.categories = children
                .par_iter()
                .map(|child| {
                    recalculate(
                        child,
                        &buckets,
                        &rows.assets,
                        &rows.debts,
                        GroupBy::Category,
                        flags,
                    )
                })
                .filter(|category| {
                    filter::keep_group(request.show_empty, category, request.balance_type)
                })
                .collect();
            entity
        })
        .collect();
    data.retain(|group| filter::keep_group(request.show_empty, group, request.balance_type));
    sort::sort_groups(&mut data, request.balance_type, request.sort_by);

    let overall = recalculate(
        &GroupTarget::report_wide(),
        &buckets,
        &rows.assets,
        &rows.debts,
        GroupBy::Interval,
        flags,
    );
    let legend = legend::build_legend(
        &overall.interval_data,
        &data,
        GroupBy::Group,
        request.graph_type,
        request.balance_type,
        palette,
    );

    Ok(DataEntity {
        data,
        interval_data: overall.interval_data,
        legend,
        start_date: request.start.format("%Y-%m-%d").to_string(),
        end_date: request.end.format("%Y-%m-%d").to_string(),
        total_assets: overall.total_assets,
        total_debts: overall.total_debts,
        net_assets: overall.net_assets,
        net_debts: overall.net_debts,
        total_totals: overall.total_totals,
    })
}
