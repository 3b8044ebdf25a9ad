//! Profile categories

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A section of the final profile (Value Object)
///
/// The order of [`ProfileCategory::ALL`] is the order of the final document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileCategory {
    CommunicationStyle,
    PersonalityTraits,
    InterestsAndHobbies,
    PoliticalIdeology,
    ValuesAndBeliefs,
    OtherNotes,
    Summary,
}

impl ProfileCategory {
    pub const ALL: [ProfileCategory; 7] = [
        ProfileCategory::CommunicationStyle,
        ProfileCategory::PersonalityTraits,
        ProfileCategory::InterestsAndHobbies,
        ProfileCategory::PoliticalIdeology,
        ProfileCategory::ValuesAndBeliefs,
        ProfileCategory::OtherNotes,
        ProfileCategory::Summary,
    ];

    /// Heading used in prompts and in the final document
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileCategory::CommunicationStyle => "Communication Style",
            ProfileCategory::PersonalityTraits => "Personality Traits & Attitudes",
            ProfileCategory::InterestsAndHobbies => "Interests & Hobbies",
            ProfileCategory::PoliticalIdeology => "Political Ideology",
            ProfileCategory::ValuesAndBeliefs => "Values and Beliefs",
            ProfileCategory::OtherNotes => "Other Notes",
            ProfileCategory::Summary => "Summary",
        }
    }

    /// Stable identifier for file names and checkpoints
    pub fn slug(&self) -> &'static str {
        match self {
            ProfileCategory::CommunicationStyle => "communication-style",
            ProfileCategory::PersonalityTraits => "personality-traits",
            ProfileCategory::InterestsAndHobbies => "interests-and-hobbies",
            ProfileCategory::PoliticalIdeology => "political-ideology",
            ProfileCategory::ValuesAndBeliefs => "values-and-beliefs",
            ProfileCategory::OtherNotes => "other-notes",
            ProfileCategory::Summary => "summary",
        }
    }

    /// Summary is written as prose; every other category as bullets
    pub fn is_prose(&self) -> bool {
        matches!(self, ProfileCategory::Summary)
    }
}

impl std::fmt::Display for ProfileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for ProfileCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileCategory::ALL
            .into_iter()
            .find(|c| c.slug() == s || c.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}
