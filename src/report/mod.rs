//! The aggregation engine: interval bucketing, hidden-item filtering,
//! recalculation, empty-row suppression, sorting, and legend assembly.

pub mod budget;
pub mod custom;
pub mod filter;
pub mod grouped;
pub mod intervals;
pub mod legend;
pub mod recalculate;
pub mod sort;
pub mod targets;

pub use budget::BudgetAnalysisRequest;
pub use custom::ReportRequest;
pub use filter::VisibilityFlags;
pub use intervals::Interval;
pub use legend::ColorPalette;

use crate::domain::{BudgetCarryoverReport, DataEntity, ReferenceData};
use crate::errors::ReportError;
use crate::source::{AggregateSource, BudgetedSource, ConditionCompiler};

/// Entry points for report computation. Every call is a pure function
/// of its inputs: identical rows, reference data, and request produce
/// identical output.
pub struct ReportService;

impl ReportService {
    /// Computes a flat custom report grouped on a single dimension.
    pub fn custom(
        source: &dyn AggregateSource,
        compiler: &dyn ConditionCompiler,
        reference: &ReferenceData,
        request: &ReportRequest,
        palette: &ColorPalette,
    ) -> Result<DataEntity, ReportError> {
        custom::create_custom_report(source, compiler, reference, request, palette)
    }

    /// Computes a two-level category-group report.
    pub fn grouped(
        source: &dyn AggregateSource,
        compiler: &dyn ConditionCompiler,
        reference: &ReferenceData,
        request: &ReportRequest,
        palette: &ColorPalette,
    ) -> Result<DataEntity, ReportError> {
        grouped::create_grouped_report(source, compiler, reference, request, palette)
    }

    /// Composes budgeted-vs-spent balances across months with running
    /// carry-over.
    pub fn budget_carryover(
        source: &dyn AggregateSource,
        budgets: &dyn BudgetedSource,
        compiler: &dyn ConditionCompiler,
        request: &BudgetAnalysisRequest,
    ) -> Result<BudgetCarryoverReport, ReportError> {
        budget::create_budget_carryover_report(source, budgets, compiler, request)
    }
}
