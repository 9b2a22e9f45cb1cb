pub mod activity;
pub mod suggestion;

pub use activity::ActivityRecord;
pub use suggestion::{ActivitySuggestion, AdviceSuggestion, Price, QuoteSuggestion, Suggestion};
