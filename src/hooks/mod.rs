pub mod use_debounced;
pub mod use_fetch;
pub mod use_history;
pub mod use_keywords;
pub mod use_occurrences;
pub mod use_samples;
pub mod use_view;
