//! CLI demo entry point.
//!
//! # Responsibility
//! - Drive `taskpad_core` end-to-end from a minimal executable: seed demo
//!   data, then list, create, toggle, search and delete.
//! - Stand in for the excluded presentation layer during local checks.

use std::time::Duration;

use log::info;
use taskpad_core::{
    LatencyProfile, Priority, SimulatedTaskStore, SortKey, StoreTuning, TaskDraft, TodoService,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_dir = std::env::temp_dir().join("taskpad-logs");
    if let Err(err) = taskpad_core::init_logging(taskpad_core::default_log_level(), &log_dir) {
        eprintln!("logging disabled: {err}");
    }
    println!("taskpad_core version={}", taskpad_core::core_version());

    let store = match demo_store() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("demo seed failed: {err}");
            return;
        }
    };
    let mut service = TodoService::new(store);
    info!("event=demo_started module=cli");

    service.refresh().await;
    print_view(&service, "", SortKey::Newest, "initial list");

    match service
        .add_task(
            "Write weekly review",
            "Summarize progress and blockers for the team.",
            Priority::High,
        )
        .await
    {
        Ok(task) => println!("created id={} title={:?}", task.id, task.title),
        Err(err) => println!("create failed: {err}"),
    }

    if let Some(first) = service.tasks().first().map(|task| task.id) {
        service.toggle_completed(first).await;
    }

    print_view(&service, "review", SortKey::Newest, "search `review`");
    print_view(&service, "", SortKey::Priority, "by priority");

    if let Some(last) = service.tasks().last().map(|task| task.id) {
        service.remove_task(last).await;
    }
    print_view(&service, "", SortKey::Newest, "after delete");

    for notice in service.drain_notices() {
        println!("notice [{:?}] {}", notice.kind, notice.message);
    }
    if let Some(banner) = service.error_banner() {
        println!("error banner: {banner}");
    }
    println!(
        "done: {} of {} completed",
        service.completed_count(),
        service.tasks().len()
    );
}

/// Store with short latency so the demo stays snappy; random faults stay on
/// so the error path shows up from time to time.
fn demo_store() -> taskpad_core::StoreResult<SimulatedTaskStore> {
    let tuning = StoreTuning {
        latency: LatencyProfile {
            list: Duration::from_millis(80),
            create: Duration::from_millis(60),
            update: Duration::from_millis(50),
            delete: Duration::from_millis(40),
        },
        ..StoreTuning::default()
    };
    SimulatedTaskStore::preloaded(tuning, demo_drafts())
}

fn demo_drafts() -> Vec<TaskDraft> {
    vec![
        TaskDraft::new(
            "Complete the todo app core",
            "State synchronization, projection and orchestration.",
        )
        .with_priority(Priority::High),
        TaskDraft::new(
            "Review module layering",
            "Keep the store contract free of presentation concerns.",
        ),
        TaskDraft::new(
            "Tidy error messages",
            "Every failure path should read well in the banner.",
        )
        .with_priority(Priority::Low),
    ]
}

fn print_view(
    service: &TodoService<SimulatedTaskStore>,
    search_term: &str,
    sort_key: SortKey,
    label: &str,
) {
    println!("-- {label} ({})", sort_key.as_keyword());
    for task in service.visible_tasks(search_term, sort_key) {
        let mark = if task.completed { "x" } else { " " };
        println!(
            "  [{mark}] #{} {} ({})",
            task.id, task.title, task.priority
        );
    }
}
