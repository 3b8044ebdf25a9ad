//! Profile domain.
//!
//! - [`category::ProfileCategory`]: the fixed, ordered category list
//! - [`entities::CategoryProfile`]: category texts built one at a time
//! - [`strategy::SynthesisStrategy`]: how chunk analyses are combined

pub mod category;
pub mod entities;
pub mod strategy;
