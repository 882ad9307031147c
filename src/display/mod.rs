//! Terminal output formatting
//!
//! Formatting lives apart from the data it renders so ledger and taxonomy
//! stay presentation-free. Everything returns plain strings; callers print.

pub mod account;
pub mod category;
pub mod ledger;

/// Truncate a string to `max` characters, ellipsizing if it was longer
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
