use serde::{Deserialize, Serialize};

use crate::domain::{Money, PaymentCategory};

use super::{Result, WalletError};

/// Spending grouped by payment category. Failed payments are excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    /// Sorted by total descending, then by category name
    pub categories: Vec<CategorySummary>,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: PaymentCategory,
    pub total: Money,
    pub count: i64,
    pub average: Money,
    /// Share of the report total, 0.0..=100.0
    pub percentage: f64,
}

impl CategoryReport {
    /// Build a report from per-category `(total, count)` aggregates.
    pub(crate) fn from_aggregates(
        aggregates: impl IntoIterator<Item = (PaymentCategory, Money, i64)>,
    ) -> Result<Self> {
        let mut categories: Vec<CategorySummary> = aggregates
            .into_iter()
            .map(|(category, total, count)| CategorySummary {
                category,
                total,
                count,
                average: if count > 0 { total / count } else { 0 },
                percentage: 0.0,
            })
            .collect();

        let total = categories
            .iter()
            .try_fold(0, |total: Money, c| total.checked_add(c.total))
            .ok_or(WalletError::TotalOverflow)?;
        if total > 0 {
            for summary in &mut categories {
                summary.percentage = summary.total as f64 / total as f64 * 100.0;
            }
        }

        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(Self { categories, total })
    }
}
