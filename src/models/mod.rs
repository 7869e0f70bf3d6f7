pub mod error;
pub mod history;
pub mod keyword;
pub mod occurrences;
pub mod sample;
pub mod selection;
