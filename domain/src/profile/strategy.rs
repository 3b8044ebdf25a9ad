//! Synthesis strategy selection

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How per-chunk analyses are combined into the final profile
///
/// - **Freeform** (default): one synthesis request over every analysis
/// - **CategoryWise**: per-category extraction, synthesis and bullet reformat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SynthesisStrategy {
    #[default]
    Freeform,
    CategoryWise,
}

impl SynthesisStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SynthesisStrategy::Freeform => "freeform",
            SynthesisStrategy::CategoryWise => "category-wise",
        }
    }
}

impl std::fmt::Display for SynthesisStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SynthesisStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "freeform" | "free-form" => Ok(SynthesisStrategy::Freeform),
            "category-wise" | "categorywise" | "category" | "categories" => {
                Ok(SynthesisStrategy::CategoryWise)
            }
            _ => Err(DomainError::UnknownStrategy(s.to_string())),
        }
    }
}
