use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AggregateKind, BudgetCarryoverReport, BudgetMonthEntity, RawAggregateRow};
use crate::errors::ReportError;
use crate::report::intervals::Interval;
use crate::source::{
    self, AggregateQuery, AggregateSource, BudgetedSource, CompiledFilters, ConditionCompiler,
    ConditionsOp, RuleCondition,
};

/// Budget-analysis definition over a month range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAnalysisRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub conditions: Vec<RuleCondition>,
    #[serde(default)]
    pub conditions_op: ConditionsOp,
}

/// Composes budgeted-vs-spent balances across months with running
/// carry-over.
///
/// This is a strict left-to-right fold: each month's balance seeds the
/// next month's carry-over, so months are never computed independently
/// of their predecessors.
pub fn create_budget_carryover_report(
    source: &dyn AggregateSource,
    budgets: &dyn BudgetedSource,
    compiler: &dyn ConditionCompiler,
    request: &BudgetAnalysisRequest,
) -> Result<BudgetCarryoverReport, ReportError> {
    let conditions = source::compilable_conditions(&request.conditions);
    let category_conditions: Vec<RuleCondition> = conditions
        .iter()
        .filter(|condition| condition.is_category_condition())
        .cloned()
        .collect();
    let budget_filters = compiler.compile(&category_conditions)?;
    let spent_filters = compiler.compile(&conditions)?;

    let months = Interval::Monthly.range_inclusive(request.start, request.end, Weekday::Sun);
    let spent_by_month = fetch_spent_by_month(source, request, &spent_filters)?;
    debug!(months = months.len(), "composing budget carry-over");

    let mut entities = Vec::with_capacity(months.len());
    let mut carryover = 0i64;
    let mut total_budgeted = 0i64;
    let mut total_spent = 0i64;
    for month in &months {
        let budgeted: i64 = budgets
            .fetch_budgeted(month, &budget_filters)?
            .iter()
            .map(|row| row.amount)
            .sum();
        let spent = spent_by_month.get(month).copied().unwrap_or(0);
        // Spent sums are negative, hence the addition.
        let balance = carryover + budgeted + spent;
        entities.push(BudgetMonthEntity {
            month: month.clone(),
            total_budgeted: budgeted,
            total_spent: spent,
            balance,
        });
        carryover = balance;
        total_budgeted += budgeted;
        total_spent += spent;
    }

    Ok(BudgetCarryoverReport {
        end_balance: entities.last().map(|entity| entity.balance).unwrap_or(0),
        months: entities,
        start_date: request.start.format("%Y-%m-%d").to_string(),
        end_date: request.end.format("%Y-%m-%d").to_string(),
        total_budgeted,
        total_spent,
    })
}

/// Fetches both signed aggregates once for the whole range and sums
/// spending per month, with income categories and off-budget accounts
/// excluded.
fn fetch_spent_by_month(
    source: &dyn AggregateSource,
    request: &BudgetAnalysisRequest,
    filters: &CompiledFilters,
) -> Result<HashMap<String, i64>, ReportError> {
    let mut spent = HashMap::new();
    for kind in [AggregateKind::Assets, AggregateKind::Debts] {
        let rows = source.fetch(&AggregateQuery {
            kind,
            start: request.start,
            end: request.end,
            interval: Interval::Monthly,
            conditions_op: request.conditions_op,
            filters,
        })?;
        for row in rows.iter().filter(|row| counts_as_spending(row)) {
            *spent.entry(row.date.clone()).or_insert(0) += row.amount;
        }
    }
    Ok(spent)
}

fn counts_as_spending(row: &RawAggregateRow) -> bool {
    !row.category_income && !row.account_off_budget
}
