//! Prompt domain
//!
//! Instruction and directive templates for every stage of the profiling flow.

mod template;

pub use template::{
    CATEGORY_PLACEHOLDER, CHUNK_SEPARATOR, PromptTemplate, USERNAME_PLACEHOLDER,
};
