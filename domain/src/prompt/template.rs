//! Prompt templates for the profiling flow
//!
//! Templates use two placeholders: `_USERNAME_` for the profiled user and
//! `_CATEGORY_` for a profile category name.

use crate::profile::category::ProfileCategory;

/// Placeholder replaced by the profiled username
pub const USERNAME_PLACEHOLDER: &str = "_USERNAME_";

/// Placeholder replaced by a category display name
pub const CATEGORY_PLACEHOLDER: &str = "_CATEGORY_";

/// Separator between comments in a chunk and between analyses
pub const CHUNK_SEPARATOR: &str = "\n-----\n";

const CATEGORY_LIST: &str = "- Communication Style
- Personality Traits & Attitudes
- Interests & Hobbies
- Political Ideology
- Values and Beliefs
- Other Notes
(Skip any categories where insufficient data exists)";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Substitute `_USERNAME_` in `template`
    pub fn for_user(template: &str, username: &str) -> String {
        template.replace(USERNAME_PLACEHOLDER, username)
    }

    /// Substitute both placeholders in `template`
    pub fn for_user_category(template: &str, username: &str, category: ProfileCategory) -> String {
        template
            .replace(USERNAME_PLACEHOLDER, username)
            .replace(CATEGORY_PLACEHOLDER, category.display_name())
    }

    /// System prompt for every full-size profiling session
    pub fn profiler_system() -> &'static str {
        "You are a professional psychological profiler. You are impartial and analytical and will \
         give both positive and negative observations however you deem appropriate. You will never \
         state that it is impossible to create a psychological profile, but will do the best you \
         can with the information you have available."
    }

    /// Directive sent after a chunk of comments
    pub fn chunk_analysis(username: &str) -> String {
        let template = format!(
            "You will take the above collection of comments for redditor _USERNAME_, which are all \
             replies to conversations and are individually lacking in any context, and build a \
             complete psychological profile in extensive detail of this redditor. Exhaustively \
             detail all aspects of the redditor's psychological profile that can be gleaned using \
             this data, bullet pointing your observations in the following categories and closing \
             with a summary:\n{}",
            CATEGORY_LIST
        );
        Self::for_user(&template, username)
    }

    /// User turn that frames the fabricated assistant turn in freeform synthesis
    pub fn synthesis_setup(username: &str) -> String {
        Self::for_user(
            "Analyze all of the comments for redditor _USERNAME_. For each set of comments \
             analyzed, produce a psychological profile of the user, separating each profile with \
             \"-----\".",
            username,
        )
    }

    /// Final directive of freeform synthesis
    pub fn synthesis_execution(username: &str) -> String {
        let template = format!(
            "Good, now take all of these analyses and synthesize/combine them into a single \
             comprehensive, highly detailed and organized psychological profile of this \
             redditor, _USERNAME_. Bullet point your observations in the following categories and \
             close with a summary:\n{}",
            CATEGORY_LIST
        );
        Self::for_user(&template, username)
    }

    /// System prompt for the lightweight extraction and reformat sessions
    pub fn editor_system() -> &'static str {
        "You are a precise editor. You copy and reformat text exactly as instructed and never add \
         commentary of your own."
    }

    /// Directive that pulls one category's content out of a chunk analysis
    pub fn category_extraction(username: &str, category: ProfileCategory) -> String {
        let format_rule = if category.is_prose() {
            "Write it as prose paragraphs, without bullet points."
        } else {
            "Format every observation as a bullet starting with \"- \"."
        };
        let template = format!(
            "From the psychological profile of redditor _USERNAME_ above, extract verbatim only \
             the content that belongs to the _CATEGORY_ category. Do not include any other \
             category, heading or commentary. {} If the profile contains nothing for _CATEGORY_, \
             reply with an empty message.",
            format_rule
        );
        Self::for_user_category(&template, username, category)
    }

    /// Directive that merges the per-chunk extractions of one category
    pub fn category_synthesis(username: &str, category: ProfileCategory) -> String {
        let format_rule = if category.is_prose() {
            "Write the result as a concise prose summary."
        } else {
            "Write the result as a list of observations."
        };
        let template = format!(
            "The text above contains several partial evaluations of the _CATEGORY_ of redditor \
             _USERNAME_, separated by \"-----\". Synthesize them into one combined, comprehensive \
             evaluation of _CATEGORY_, merging duplicates and resolving contradictions. {} Do not \
             repeat the category name as a heading.",
            format_rule
        );
        Self::for_user_category(&template, username, category)
    }

    /// Directive that forces bullet formatting on a synthesized category
    pub fn bullet_reformat(category: ProfileCategory) -> String {
        Self::for_user_category(
            "Reformat the text above strictly as a list of bullet points, one observation per \
             line, each line starting with \"- \". Keep the wording. Do not add a heading, an \
             introduction or a conclusion about _CATEGORY_.",
            "",
            category,
        )
    }
}
