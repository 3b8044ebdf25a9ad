//! Pipeline phases used for progress reporting.

use crate::profile::category::ProfileCategory;

/// A phase of the profiling pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// One analysis request per chunk
    Analysis,
    /// Extraction, synthesis and reformat for one category
    Category(ProfileCategory),
    /// Final freeform synthesis
    Synthesis,
}

impl Phase {
    pub fn display_name(&self) -> String {
        match self {
            Phase::Analysis => "Chunk Analysis".to_string(),
            Phase::Category(category) => format!("Category: {}", category.display_name()),
            Phase::Synthesis => "Synthesis".to_string(),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}
