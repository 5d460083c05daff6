use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The metric driving empty-row filtering, sorting, and coloring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BalanceType {
    TotalAssets,
    TotalDebts,
    NetAssets,
    NetDebts,
    TotalTotals,
    TotalBudgeted,
}

impl BalanceType {
    /// Debt-oriented metrics store their magnitudes as negative sums.
    pub fn is_debt_oriented(self) -> bool {
        matches!(self, BalanceType::TotalDebts | BalanceType::NetDebts)
    }
}

/// Group ordering requested by the report definition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Asc,
    Desc,
    Name,
    Budget,
}

/// The view a report feeds; only the legend cares about the distinction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GraphType {
    #[serde(rename = "TableGraph")]
    Table,
    #[serde(rename = "BarGraph")]
    Bar,
    #[serde(rename = "StackedBarGraph")]
    StackedBar,
    #[serde(rename = "LineGraph")]
    Line,
    #[serde(rename = "AreaGraph")]
    Area,
    #[serde(rename = "DonutGraph")]
    Donut,
}

/// One bucket's result for a single group or for the whole report.
///
/// Interval entities are emitted in the chronological order of the
/// generated bucket sequence; consumers chart them positionally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntervalEntity {
    pub interval_start_date: String,
    pub total_assets: i64,
    pub total_debts: i64,
    pub net_assets: i64,
    pub net_debts: i64,
    pub total_totals: i64,
    /// Difference to the previous bucket's total; 0 for the first.
    pub change: i64,
}

/// Per-target result over the whole interval sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupedEntity {
    pub id: Option<Uuid>,
    pub name: String,
    pub total_assets: i64,
    pub total_debts: i64,
    pub net_assets: i64,
    pub net_debts: i64,
    pub total_totals: i64,
    pub interval_data: Vec<IntervalEntity>,
    /// Nested per-category results; populated only by the grouped
    /// orchestrator.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<GroupedEntity>,
}

impl GroupedEntity {
    /// Reads the chosen balance metric.
    ///
    /// Budgeted amounts live on the budget-analysis entities, never on
    /// plain groups, so that metric reads as zero here.
    pub fn balance(&self, balance_type: BalanceType) -> i64 {
        match balance_type {
            BalanceType::TotalAssets => self.total_assets,
            BalanceType::TotalDebts => self.total_debts,
            BalanceType::NetAssets => self.net_assets,
            BalanceType::NetDebts => self.net_debts,
            BalanceType::TotalTotals => self.total_totals,
            BalanceType::TotalBudgeted => 0,
        }
    }
}

/// Legend entry for one displayed group or interval bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegendEntity {
    pub id: Option<Uuid>,
    pub name: String,
    pub color: String,
}

/// Top-level result of one report computation. Produced fresh per
/// invocation and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataEntity {
    pub data: Vec<GroupedEntity>,
    pub interval_data: Vec<IntervalEntity>,
    pub legend: Vec<LegendEntity>,
    pub start_date: String,
    pub end_date: String,
    pub total_assets: i64,
    pub total_debts: i64,
    pub net_assets: i64,
    pub net_debts: i64,
    pub total_totals: i64,
}

/// One month of budgeted-vs-spent composition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetMonthEntity {
    pub month: String,
    pub total_budgeted: i64,
    /// Spent sums are negative; the balance adds them.
    pub total_spent: i64,
    pub balance: i64,
}

/// Result of the budget carry-over variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCarryoverReport {
    pub months: Vec<BudgetMonthEntity>,
    pub start_date: String,
    pub end_date: String,
    pub total_budgeted: i64,
    pub total_spent: i64,
    /// The last month's balance, carry-over included.
    pub end_balance: i64,
}
