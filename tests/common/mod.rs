#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;
use uuid::Uuid;

use report_core::domain::{AggregateKind, BalanceType, GraphType, GroupBy, RawAggregateRow, SortBy};
use report_core::errors::ReportError;
use report_core::report::{Interval, ReportRequest};
use report_core::source::{
    AggregateQuery, AggregateSource, BudgetedRow, BudgetedSource, CompiledFilters,
    ConditionCompiler, RuleCondition,
};

/// In-memory stand-in for the external query layer.
#[derive(Default)]
pub struct StaticSource {
    pub assets: Vec<RawAggregateRow>,
    pub debts: Vec<RawAggregateRow>,
    pub budgeted: HashMap<String, Vec<BudgetedRow>>,
}

impl AggregateSource for StaticSource {
    fn fetch(&self, query: &AggregateQuery<'_>) -> Result<Vec<RawAggregateRow>, ReportError> {
        Ok(match query.kind {
            AggregateKind::Assets => self.assets.clone(),
            AggregateKind::Debts => self.debts.clone(),
        })
    }
}

impl BudgetedSource for StaticSource {
    fn fetch_budgeted(
        &self,
        month: &str,
        _filters: &CompiledFilters,
    ) -> Result<Vec<BudgetedRow>, ReportError> {
        Ok(self.budgeted.get(month).cloned().unwrap_or_default())
    }
}

/// Reflects conditions into opaque JSON payloads and records each call
/// so tests can assert what reached the compiler.
#[derive(Default)]
pub struct RecordingCompiler {
    pub calls: Mutex<Vec<Vec<RuleCondition>>>,
}

impl ConditionCompiler for RecordingCompiler {
    fn compile(&self, conditions: &[RuleCondition]) -> Result<CompiledFilters, ReportError> {
        self.calls.lock().unwrap().push(conditions.to_vec());
        let filters = conditions
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()?;
        Ok(CompiledFilters { filters })
    }
}

/// Builder for raw aggregate rows with on-budget defaults.
pub struct RowBuilder {
    row: RawAggregateRow,
}

impl RowBuilder {
    pub fn new(date: &str, amount: i64) -> Self {
        Self {
            row: RawAggregateRow {
                date: date.into(),
                category: None,
                category_hidden: false,
                category_income: false,
                category_group: None,
                category_group_hidden: false,
                account: None,
                account_off_budget: false,
                payee: None,
                transfer_account: None,
                amount,
            },
        }
    }

    pub fn category(mut self, category: Uuid, group: Uuid) -> Self {
        self.row.category = Some(category);
        self.row.category_group = Some(group);
        self
    }

    pub fn income(mut self) -> Self {
        self.row.category_income = true;
        self
    }

    pub fn hidden_category(mut self) -> Self {
        self.row.category_hidden = true;
        self
    }

    pub fn account(mut self, account: Uuid) -> Self {
        self.row.account = Some(account);
        self
    }

    pub fn off_budget(mut self) -> Self {
        self.row.account_off_budget = true;
        self
    }

    pub fn payee(mut self, payee: Uuid) -> Self {
        self.row.payee = Some(payee);
        self
    }

    pub fn transfer(mut self, account: Uuid) -> Self {
        self.row.transfer_account = Some(account);
        self
    }

    pub fn build(self) -> RawAggregateRow {
        self.row
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A monthly bar-graph request with everything else at its quietest.
pub fn monthly_request(start: NaiveDate, end: NaiveDate, group_by: GroupBy) -> ReportRequest {
    ReportRequest {
        start,
        end,
        interval: Interval::Monthly,
        first_day_of_week_index: 0,
        group_by,
        balance_type: BalanceType::TotalDebts,
        sort_by: SortBy::Desc,
        graph_type: GraphType::Bar,
        show_empty: false,
        show_off_budget: false,
        show_hidden_categories: false,
        show_uncategorized: false,
        conditions: Vec::new(),
        conditions_op: Default::default(),
    }
}
