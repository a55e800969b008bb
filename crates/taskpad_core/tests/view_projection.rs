use taskpad_core::{project, Priority, SortKey, Task, TaskId};

fn task(
    id: TaskId,
    title: &str,
    description: &str,
    completed: bool,
    priority: Priority,
    created_at_ms: i64,
) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: description.to_string(),
        completed,
        priority,
        created_at_ms,
        updated_at_ms: created_at_ms,
    }
}

fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(|task| task.id).collect()
}

#[test]
fn empty_search_and_newest_returns_all_by_created_desc() {
    let tasks = vec![
        task(1, "a", "", false, Priority::Medium, 100),
        task(2, "b", "", false, Priority::Medium, 300),
        task(3, "c", "", false, Priority::Medium, 200),
    ];

    let view = project(&tasks, "", SortKey::Newest);
    assert_eq!(ids(&view), vec![2, 3, 1]);
}

#[test]
fn newest_breaks_created_ties_by_input_order() {
    let tasks = vec![
        task(1, "a", "", false, Priority::Medium, 500),
        task(2, "b", "", false, Priority::Medium, 500),
        task(3, "c", "", false, Priority::Medium, 500),
    ];

    let view = project(&tasks, "", SortKey::Newest);
    assert_eq!(ids(&view), vec![1, 2, 3]);
}

#[test]
fn oldest_orders_ascending() {
    let tasks = vec![
        task(1, "a", "", false, Priority::Medium, 300),
        task(2, "b", "", false, Priority::Medium, 100),
        task(3, "c", "", false, Priority::Medium, 200),
    ];

    let view = project(&tasks, "", SortKey::Oldest);
    assert_eq!(ids(&view), vec![2, 3, 1]);
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let tasks = vec![
        task(1, "Buy MILK", "", false, Priority::Medium, 100),
        task(2, "errands", "pick up milk crates", false, Priority::Medium, 200),
        task(3, "unrelated", "nothing here", false, Priority::Medium, 300),
    ];

    let view = project(&tasks, "milk", SortKey::Newest);
    assert_eq!(ids(&view), vec![2, 1]);
}

#[test]
fn search_term_is_trimmed_before_matching() {
    let tasks = vec![task(1, "Buy milk", "", false, Priority::Medium, 100)];

    let view = project(&tasks, "   MILK  ", SortKey::Newest);
    assert_eq!(ids(&view), vec![1]);
}

#[test]
fn search_without_match_returns_empty() {
    let tasks = vec![
        task(1, "Buy milk", "whole", false, Priority::Medium, 100),
        task(2, "Walk dog", "around the block", false, Priority::Medium, 200),
    ];

    assert!(project(&tasks, "zzz-no-match", SortKey::Newest).is_empty());
    assert!(project(&tasks, "zzz-no-match", SortKey::Priority).is_empty());
}

#[test]
fn alphabetical_orders_case_insensitively() {
    let tasks = vec![
        task(1, "banana", "", false, Priority::Medium, 100),
        task(2, "Apple", "", false, Priority::Medium, 200),
        task(3, "cherry", "", false, Priority::Medium, 300),
    ];

    let ascending = project(&tasks, "", SortKey::Alphabetical);
    assert_eq!(ids(&ascending), vec![2, 1, 3]);

    let descending = project(&tasks, "", SortKey::AlphabeticalDesc);
    assert_eq!(ids(&descending), vec![3, 1, 2]);
}

#[test]
fn priority_places_high_before_medium_before_low() {
    let tasks = vec![
        task(1, "a", "", false, Priority::Low, 100),
        task(2, "b", "", false, Priority::High, 200),
        task(3, "c", "", false, Priority::Medium, 300),
        task(4, "d", "", false, Priority::High, 400),
    ];

    let view = project(&tasks, "", SortKey::Priority);
    assert_eq!(ids(&view), vec![2, 4, 3, 1]);

    let reversed = project(&tasks, "", SortKey::PriorityDesc);
    assert_eq!(ids(&reversed), vec![1, 3, 2, 4]);
}

#[test]
fn completion_keys_partition_stably() {
    let tasks = vec![
        task(1, "a", "", false, Priority::Medium, 100),
        task(2, "b", "", true, Priority::Medium, 200),
        task(3, "c", "", false, Priority::Medium, 300),
        task(4, "d", "", true, Priority::Medium, 400),
    ];

    let completed_first = project(&tasks, "", SortKey::CompletedFirst);
    assert_eq!(ids(&completed_first), vec![2, 4, 1, 3]);

    let incomplete_first = project(&tasks, "", SortKey::IncompleteFirst);
    assert_eq!(ids(&incomplete_first), vec![1, 3, 2, 4]);
}

#[test]
fn unrecognized_sort_keyword_behaves_like_newest() {
    let tasks = vec![
        task(1, "a", "", false, Priority::Medium, 100),
        task(2, "b", "", false, Priority::Medium, 300),
    ];

    let fallback = project(&tasks, "", SortKey::parse("by-color"));
    assert_eq!(ids(&fallback), ids(&project(&tasks, "", SortKey::Newest)));
}

#[test]
fn projection_does_not_mutate_input() {
    let tasks = vec![
        task(1, "a", "", false, Priority::Medium, 100),
        task(2, "b", "", false, Priority::Medium, 300),
    ];
    let before = tasks.clone();

    let _ = project(&tasks, "a", SortKey::Alphabetical);
    assert_eq!(tasks, before);
}
