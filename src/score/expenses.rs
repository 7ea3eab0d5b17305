use crate::types::config::ExpenseConfig;
use crate::types::records::ExpenseItem;
use crate::types::report::{CategoryTotal, ExpenseSummary};
use std::collections::HashMap;

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Copy)]
pub struct ExpenseAggregator {
    top_categories: usize,
}

impl ExpenseAggregator {
    pub fn new(config: &ExpenseConfig) -> Self {
        Self {
            top_categories: config.top_categories,
        }
    }

    /// `total` covers every category, not only the ones kept in `categories`.
    pub fn summarize(&self, items: &[ExpenseItem]) -> ExpenseSummary {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        let mut total = 0.0;
        for item in items {
            if !(item.amount.is_finite() && item.amount > 0.0) {
                continue;
            }
            let category = match item.category.trim() {
                "" => UNCATEGORIZED,
                category => category,
            };
            *totals.entry(category).or_insert(0.0) += item.amount;
            total += item.amount;
        }

        let mut categories: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
            })
            .collect();
        categories.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });
        categories.truncate(self.top_categories);

        ExpenseSummary { total, categories }
    }
}

impl Default for ExpenseAggregator {
    fn default() -> Self {
        Self::new(&ExpenseConfig::default())
    }
}
