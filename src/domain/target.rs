use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The dimension a report is grouped on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    Group,
    Payee,
    Account,
    Interval,
}

impl GroupBy {
    /// Category-based groupings resolve pseudo-targets for rows that
    /// lack a real category.
    pub fn is_category_based(self) -> bool {
        matches!(self, GroupBy::Category | GroupBy::Group)
    }
}

/// Synthetic buckets for rows without a real category under
/// category-based grouping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UncategorizedKind {
    OffBudget,
    Transfer,
    Other,
    All,
}

/// The unit being reported on: a category, category group, payee, or
/// account, or one of the synthetic uncategorized buckets.
///
/// Computed once per report request from reference data and immutable
/// for the duration of one computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupTarget {
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncategorized: Option<UncategorizedKind>,
}

impl GroupTarget {
    /// Target backed by a real reference-data entity.
    pub fn real(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            uncategorized: None,
        }
    }

    /// Synthetic target for one of the uncategorized buckets.
    pub fn pseudo(name: impl Into<String>, kind: UncategorizedKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            uncategorized: Some(kind),
        }
    }

    /// Target matching every row, used for the whole-report interval
    /// series.
    pub fn report_wide() -> Self {
        Self {
            id: None,
            name: "All".into(),
            uncategorized: None,
        }
    }
}
