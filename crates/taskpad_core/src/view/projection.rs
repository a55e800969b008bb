//! Display projection over the task collection.
//!
//! # Responsibility
//! - Derive the search-filtered, display-ordered task sequence.
//! - Stay pure: no side effects, no store access, recompute on demand.
//!
//! # Invariants
//! - Filtering is case-insensitive over title and description.
//! - Sorting is stable; equal keys keep their input order.
//! - Unrecognized sort keywords fall back to `newest`.

use crate::model::task::Task;
use std::cmp::Ordering;

/// Display ordering selected by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// `created_at` descending; the default.
    Newest,
    /// `created_at` ascending.
    Oldest,
    /// Title ascending, case-insensitively.
    Alphabetical,
    /// Title descending, case-insensitively.
    AlphabeticalDesc,
    /// High priority first.
    Priority,
    /// Low priority first.
    PriorityDesc,
    /// Completed tasks first.
    CompletedFirst,
    /// Incomplete tasks first.
    IncompleteFirst,
}

impl SortKey {
    /// Parses a UI keyword, falling back to [`SortKey::Newest`] for anything
    /// unrecognized.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "oldest" => Self::Oldest,
            "alphabetical" => Self::Alphabetical,
            "alphabetical-desc" => Self::AlphabeticalDesc,
            "priority" => Self::Priority,
            "priority-desc" => Self::PriorityDesc,
            "completed" => Self::CompletedFirst,
            "incomplete" => Self::IncompleteFirst,
            _ => Self::Newest,
        }
    }

    /// UI keyword for this sort key.
    pub fn as_keyword(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Alphabetical => "alphabetical",
            Self::AlphabeticalDesc => "alphabetical-desc",
            Self::Priority => "priority",
            Self::PriorityDesc => "priority-desc",
            Self::CompletedFirst => "completed",
            Self::IncompleteFirst => "incomplete",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Newest
    }
}

/// Derives the displayed task sequence from the full collection.
///
/// Tasks are retained when `search_term` (trimmed, case-insensitively) is
/// empty or appears as a substring of the title or description, then stably
/// sorted by `sort_key`.
pub fn project(tasks: &[Task], search_term: &str, sort_key: SortKey) -> Vec<Task> {
    let needle = search_term.trim().to_lowercase();

    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| needle.is_empty() || matches_search(task, &needle))
        .cloned()
        .collect();

    visible.sort_by(|a, b| compare(sort_key, a, b));
    visible
}

fn matches_search(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

fn compare(sort_key: SortKey, a: &Task, b: &Task) -> Ordering {
    match sort_key {
        SortKey::Newest => b.created_at_ms.cmp(&a.created_at_ms),
        SortKey::Oldest => a.created_at_ms.cmp(&b.created_at_ms),
        SortKey::Alphabetical => compare_titles(a, b),
        SortKey::AlphabeticalDesc => compare_titles(b, a),
        SortKey::Priority => b.priority.rank().cmp(&a.priority.rank()),
        SortKey::PriorityDesc => a.priority.rank().cmp(&b.priority.rank()),
        SortKey::CompletedFirst => b.completed.cmp(&a.completed),
        SortKey::IncompleteFirst => a.completed.cmp(&b.completed),
    }
}

// Stand-in for locale collation: Unicode-lowercase ordering keeps "apple"
// and "Apple" adjacent without pulling in a collation dependency.
fn compare_titles(a: &Task, b: &Task) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::SortKey;

    #[test]
    fn parse_accepts_every_keyword() {
        for key in [
            SortKey::Newest,
            SortKey::Oldest,
            SortKey::Alphabetical,
            SortKey::AlphabeticalDesc,
            SortKey::Priority,
            SortKey::PriorityDesc,
            SortKey::CompletedFirst,
            SortKey::IncompleteFirst,
        ] {
            assert_eq!(SortKey::parse(key.as_keyword()), key);
        }
    }

    #[test]
    fn parse_falls_back_to_newest() {
        assert_eq!(SortKey::parse("by-color"), SortKey::Newest);
        assert_eq!(SortKey::parse(""), SortKey::Newest);
        assert_eq!(SortKey::parse("  OLDEST "), SortKey::Oldest);
    }
}
