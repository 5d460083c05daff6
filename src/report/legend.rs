use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::{BalanceType, GraphType, GroupBy, GroupedEntity, IntervalEntity, LegendEntity};

/// Injected palette: an ordered qualitative cycle plus two semantic
/// tokens for debt and asset coloring. The engine never reads theme
/// state; callers supply whatever their presentation layer resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorPalette {
    pub qualitative: Vec<String>,
    pub debt: String,
    pub asset: String,
}

static DEFAULT_PALETTE: Lazy<ColorPalette> = Lazy::new(|| ColorPalette {
    qualitative: [
        "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C9CBCF", "#7BC225",
        "#E7E9ED", "#536DFE",
    ]
    .iter()
    .map(|color| color.to_string())
    .collect(),
    debt: "#FF6384".into(),
    asset: "#36A2EB".into(),
});

impl Default for ColorPalette {
    fn default() -> Self {
        DEFAULT_PALETTE.clone()
    }
}

impl ColorPalette {
    /// Qualitative color for an ordinal position, cycling past the end.
    pub fn qualitative_at(&self, index: usize) -> &str {
        if self.qualitative.is_empty() {
            return &self.asset;
        }
        &self.qualitative[index % self.qualitative.len()]
    }
}

/// Assigns one legend entry per interval bucket or per sorted group.
///
/// Donut charts always color from the cyclic palette so slices encode
/// identity. Interval-grouped line and bar views instead encode
/// sign/polarity per bucket, which makes losses read as the debt token.
pub fn build_legend(
    interval_data: &[IntervalEntity],
    groups: &[GroupedEntity],
    group_by: GroupBy,
    graph_type: GraphType,
    balance_type: BalanceType,
    palette: &ColorPalette,
) -> Vec<LegendEntity> {
    if group_by == GroupBy::Interval {
        interval_data
            .iter()
            .enumerate()
            .map(|(index, bucket)| {
                let color = if graph_type == GraphType::Donut {
                    palette.qualitative_at(index)
                } else {
                    semantic_color(bucket, balance_type, palette)
                };
                LegendEntity {
                    id: None,
                    name: bucket.interval_start_date.clone(),
                    color: color.to_string(),
                }
            })
            .collect()
    } else {
        groups
            .iter()
            .enumerate()
            .map(|(index, group)| LegendEntity {
                id: group.id,
                name: group.name.clone(),
                color: palette.qualitative_at(index).to_string(),
            })
            .collect()
    }
}

/// Sign/metric color for one bucket of an interval-grouped view,
/// decided per bucket rather than per report.
fn semantic_color<'a>(
    bucket: &IntervalEntity,
    balance_type: BalanceType,
    palette: &'a ColorPalette,
) -> &'a str {
    if balance_type.is_debt_oriented() {
        return &palette.debt;
    }
    match balance_type {
        BalanceType::TotalTotals if bucket.total_totals < 0 => &palette.debt,
        _ => &palette.asset,
    }
}
