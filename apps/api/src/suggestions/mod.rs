pub mod change_set;
pub mod handlers;
pub mod merge;
pub mod payload;
pub mod rewrite;

pub use change_set::ChangeSet;
pub use merge::{merge_suggestions, merge_value, MergeOutcome};
pub use payload::{EntryRewrite, SkillsSuggestion, SuggestionPayload};
