//! Profile entities

use super::category::ProfileCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Synthesized text per category, filled in one category at a time (Entity)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProfile {
    sections: BTreeMap<ProfileCategory, String>,
}

impl CategoryProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: ProfileCategory, text: impl Into<String>) {
        self.sections.insert(category, text.into());
    }

    pub fn get(&self, category: ProfileCategory) -> Option<&str> {
        self.sections.get(&category).map(String::as_str)
    }

    pub fn contains(&self, category: ProfileCategory) -> bool {
        self.sections.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether every category of [`ProfileCategory::ALL`] has text
    pub fn is_complete(&self) -> bool {
        ProfileCategory::ALL.iter().all(|c| self.contains(*c))
    }

    /// Render the final document: each category heading followed by its
    /// text, in the fixed category order, separated by blank lines.
    pub fn render(&self) -> String {
        ProfileCategory::ALL
            .iter()
            .filter_map(|category| {
                self.get(*category)
                    .map(|text| format!("{}\n{}", category.display_name(), text.trim()))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
