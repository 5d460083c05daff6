use chrono::{NaiveDate, Weekday};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    AggregateKind, BalanceType, DataEntity, GraphType, GroupBy, GroupTarget, RawAggregateRow,
    ReferenceData, SortBy,
};
use crate::errors::ReportError;
use crate::report::filter::{self, VisibilityFlags};
use crate::report::intervals::{self, Interval};
use crate::report::legend::{self, ColorPalette};
use crate::report::recalculate::recalculate;
use crate::report::{sort, targets};
use crate::source::{
    self, AggregateQuery, AggregateSource, ConditionCompiler, ConditionsOp, RuleCondition,
};

/// One report definition. Persisted elsewhere; handed in fresh each
/// time the report is (re)computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
    /// 0-6, Sunday-based; only Weekly bucketing reads it.
    #[serde(default)]
    pub first_day_of_week_index: u8,
    pub group_by: GroupBy,
    pub balance_type: BalanceType,
    pub sort_by: SortBy,
    pub graph_type: GraphType,
    #[serde(default)]
    pub show_empty: bool,
    #[serde(default)]
    pub show_off_budget: bool,
    #[serde(default)]
    pub show_hidden_categories: bool,
    #[serde(default)]
    pub show_uncategorized: bool,
    #[serde(default)]
    pub conditions: Vec<RuleCondition>,
    #[serde(default)]
    pub conditions_op: ConditionsOp,
}

impl ReportRequest {
    pub(crate) fn visibility(&self) -> VisibilityFlags {
        VisibilityFlags {
            show_off_budget: self.show_off_budget,
            show_hidden_categories: self.show_hidden_categories,
            show_uncategorized: self.show_uncategorized,
        }
    }
}

/// Raw asset and debt rows fetched once per computation.
pub(crate) struct FetchedRows {
    pub assets: Vec<RawAggregateRow>,
    pub debts: Vec<RawAggregateRow>,
}

/// Compiles conditions and performs both signed fetches, remapping
/// weekly row dates onto the generated bucket keys.
pub(crate) fn fetch_rows(
    source: &dyn AggregateSource,
    compiler: &dyn ConditionCompiler,
    request: &ReportRequest,
    week_start: Weekday,
) -> Result<FetchedRows, ReportError> {
    let conditions = source::compilable_conditions(&request.conditions);
    let filters = compiler.compile(&conditions)?;

    let fetch = |kind: AggregateKind| -> Result<Vec<RawAggregateRow>, ReportError> {
        let rows = source.fetch(&AggregateQuery {
            kind,
            start: request.start,
            end: request.end,
            interval: request.interval,
            conditions_op: request.conditions_op,
            filters: &filters,
        })?;
        request.interval.remap_row_dates(rows, week_start)
    };
    let assets = fetch(AggregateKind::Assets)?;
    let debts = fetch(AggregateKind::Debts)?;
    debug!(
        assets = assets.len(),
        debts = debts.len(),
        "fetched aggregate rows"
    );
    Ok(FetchedRows { assets, debts })
}

/// Computes a flat custom report grouped on a single dimension.
///
/// Group recalculations are independent, so they fan out across a
/// thread pool and gather back in target order; the result is
/// deterministic for identical inputs.
pub fn create_custom_report(
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

    let group_targets = targets::group_targets(reference, request.group_by, flags);
    debug!(
        targets = group_targets.len(),
        buckets = buckets.len(),
        "recalculating custom report"
    );

    let mut data: Vec<_> = group_targets
        .par_iter()
        .map(|target| {
            recalculate(
                target,
                &buckets,
                &rows.assets,
                &rows.debts,
                request.group_by,
                flags,
            )
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
        request.group_by,
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
