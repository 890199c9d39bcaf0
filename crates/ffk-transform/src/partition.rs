//! First-match-wins category partitioning.
//!
//! Rules are evaluated in priority order. A row claimed by one rule is never
//! offered to a later rule, so the subsets are pairwise disjoint and, with a
//! trailing catch-all, cover every row.

use tracing::warn;

use ffk_model::{Categorized, CategoryRule};

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySubset<T> {
    pub label: String,
    pub rows: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    /// One subset per rule, in rule order.
    pub subsets: Vec<CategorySubset<T>>,
    /// Rows no rule claimed. Empty when the last rule is a catch-all.
    pub unclaimed: Vec<T>,
}

impl<T> Partition<T> {
    pub fn total_rows(&self) -> usize {
        self.subsets.iter().map(|s| s.rows.len()).sum::<usize>() + self.unclaimed.len()
    }
}

pub fn partition<T: Categorized>(rows: Vec<T>, rules: &[CategoryRule]) -> Partition<T> {
    let mut assignment: Vec<Option<usize>> = vec![None; rows.len()];
    for (rule_idx, rule) in rules.iter().enumerate() {
        for (slot, row) in assignment.iter_mut().zip(&rows) {
            if slot.is_none() && rule.matcher.matches(row.category_field()) {
                *slot = Some(rule_idx);
            }
        }
    }

    let mut subsets: Vec<CategorySubset<T>> = rules
        .iter()
        .map(|rule| CategorySubset {
            label: rule.label.clone(),
            rows: Vec::new(),
        })
        .collect();
    let mut unclaimed = Vec::new();
    for (row, slot) in rows.into_iter().zip(assignment) {
        match slot {
            Some(idx) => subsets[idx].rows.push(row),
            None => unclaimed.push(row),
        }
    }
    if !unclaimed.is_empty() {
        warn!(unclaimed = unclaimed.len(), "rows matched no category");
    }
    Partition { subsets, unclaimed }
}
