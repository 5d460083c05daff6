//! Contracts with the external query and condition-compilation layer.
//!
//! The engine owns no store of its own: raw aggregate rows and budgeted
//! sums arrive through these traits, already grouped, and the engine
//! only composes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{AggregateKind, RawAggregateRow};
use crate::errors::ReportError;
use crate::report::intervals::Interval;

/// Boolean combinator applied across compiled filters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConditionsOp {
    #[default]
    And,
    Or,
}

impl ConditionsOp {
    /// Wire key understood by the query layer.
    pub fn as_key(self) -> &'static str {
        match self {
            ConditionsOp::And => "$and",
            ConditionsOp::Or => "$or",
        }
    }
}

/// A user-authored rule condition, prior to compilation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleCondition {
    pub field: String,
    pub op: String,
    pub value: Value,
    /// Conditions carrying a custom name are display-only and are
    /// dropped before compilation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

impl RuleCondition {
    pub fn new(field: impl Into<String>, op: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            op: op.into(),
            value,
            custom_name: None,
        }
    }

    /// The budget-analysis variant compiles only these for its
    /// budgeted-sum fetches.
    pub fn is_category_condition(&self) -> bool {
        self.field == "category"
    }
}

/// Opaque filter predicates produced by the condition compiler and
/// handed back to the query layer untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompiledFilters {
    pub filters: Vec<Value>,
}

/// Compiles rule conditions into query-layer predicates.
pub trait ConditionCompiler {
    fn compile(&self, conditions: &[RuleCondition]) -> Result<CompiledFilters, ReportError>;
}

/// Parameters of one grouped aggregate fetch.
#[derive(Debug, Clone)]
pub struct AggregateQuery<'a> {
    pub kind: AggregateKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
    pub conditions_op: ConditionsOp,
    pub filters: &'a CompiledFilters,
}

/// Per-interval, per-account, per-payee, per-category sums.
///
/// Implementations must exclude a split-transaction parent whenever any
/// of its child sub-transactions independently matches the filters; the
/// engine's totals rely on that no-double-counting invariant.
pub trait AggregateSource {
    fn fetch(&self, query: &AggregateQuery<'_>) -> Result<Vec<RawAggregateRow>, ReportError>;
}

/// Budgeted-per-category sum for one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetedRow {
    pub category: Option<Uuid>,
    pub amount: i64,
}

/// Month-keyed budget allocations for the carry-over variant.
pub trait BudgetedSource {
    fn fetch_budgeted(
        &self,
        month: &str,
        filters: &CompiledFilters,
    ) -> Result<Vec<BudgetedRow>, ReportError>;
}

/// Drops conditions carrying a custom name; only the rest compile.
pub fn compilable_conditions(conditions: &[RuleCondition]) -> Vec<RuleCondition> {
    conditions
        .iter()
        .filter(|condition| condition.custom_name.is_none())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn custom_named_conditions_are_dropped() {
        let mut named = RuleCondition::new("payee", "is", json!("abc"));
        named.custom_name = Some("My filter".into());
        let plain = RuleCondition::new("category", "is", json!("def"));

        let compilable = compilable_conditions(&[named, plain.clone()]);
        assert_eq!(compilable, vec![plain]);
    }

    #[test]
    fn conditions_op_maps_to_wire_keys() {
        assert_eq!(ConditionsOp::And.as_key(), "$and");
        assert_eq!(ConditionsOp::Or.as_key(), "$or");
    }
}
