//! Tests for the pure filter/sort pipeline.

use chrono::{Duration, TimeZone, Utc};

use crate::store::models::{FilterOptions, Priority, SortOption, Task, TaskStatus};
use crate::store::query::{filter_tasks, sort_tasks};

fn make_task(id: &str, title: &str) -> Task {
    let created = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        status: TaskStatus::Todo,
        completed: false,
        created_at: created,
        start_date: created,
        due_date: None,
        priority: Priority::Medium,
        category_id: None,
        recurrence: None,
    }
}

#[test]
fn empty_filter_keeps_every_task() {
    let tasks = vec![make_task("a", "One"), make_task("b", "Two")];

    let result = filter_tasks(&tasks, &FilterOptions::default());
    assert_eq!(result.len(), 2);
}

#[test]
fn completed_clause_matches_exactly() {
    let mut done = make_task("a", "Done");
    done.completed = true;
    let tasks = vec![done, make_task("b", "Open")];

    let options = FilterOptions {
        completed: Some(true),
        ..FilterOptions::default()
    };

    let result = filter_tasks(&tasks, &options);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

#[test]
fn all_present_clauses_must_match() {
    let mut matching = make_task("a", "Write report");
    matching.completed = true;
    matching.priority = Priority::High;
    matching.category_id = Some("work".to_string());

    // Fails only the category clause.
    let mut near_miss = make_task("b", "Write summary");
    near_miss.completed = true;
    near_miss.priority = Priority::High;
    near_miss.category_id = Some("personal".to_string());

    let tasks = vec![matching, near_miss];
    let options = FilterOptions {
        completed: Some(true),
        priority: Some(Priority::High),
        category_id: Some("work".to_string()),
        search_query: "write".to_string(),
    };

    let result = filter_tasks(&tasks, &options);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

#[test]
fn adding_a_clause_never_grows_the_result() {
    let mut high = make_task("a", "Alpha");
    high.priority = Priority::High;
    let mut low = make_task("b", "Beta");
    low.priority = Priority::Low;
    let tasks = vec![high, low, make_task("c", "Alpine")];

    let loose = FilterOptions {
        search_query: "al".to_string(),
        ..FilterOptions::default()
    };
    let tight = FilterOptions {
        priority: Some(Priority::High),
        search_query: "al".to_string(),
        ..FilterOptions::default()
    };

    let loose_result = filter_tasks(&tasks, &loose);
    let tight_result = filter_tasks(&tasks, &tight);

    assert!(tight_result.len() <= loose_result.len());
    for task in &tight_result {
        assert!(loose_result.iter().any(|t| t.id == task.id));
    }
}

#[test]
fn search_is_case_insensitive_on_title() {
    let tasks = vec![make_task("a", "Buy GROCERIES"), make_task("b", "Call mom")];

    let options = FilterOptions {
        search_query: "groceries".to_string(),
        ..FilterOptions::default()
    };

    let result = filter_tasks(&tasks, &options);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

#[test]
fn search_ignores_description() {
    let mut task = make_task("a", "Errand");
    task.description = "buy groceries".to_string();

    let options = FilterOptions {
        search_query: "groceries".to_string(),
        ..FilterOptions::default()
    };

    let result = filter_tasks(&[task], &options);
    assert!(result.is_empty());
}

#[test]
fn filter_does_not_mutate_input() {
    let tasks = vec![make_task("a", "One")];
    let before = tasks.clone();

    let _ = filter_tasks(
        &tasks,
        &FilterOptions {
            completed: Some(true),
            ..FilterOptions::default()
        },
    );

    assert_eq!(tasks, before);
}

#[test]
fn due_date_sort_puts_absent_last() {
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    let mut a = make_task("a", "Fifth");
    a.due_date = Some(base + Duration::days(5));
    let b = make_task("b", "No deadline");
    let mut c = make_task("c", "Third");
    c.due_date = Some(base + Duration::days(3));

    let sorted = sort_tasks(&[a, b, c], SortOption::DueDate);
    let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn due_date_sort_keeps_insertion_order_among_absent() {
    let tasks = vec![
        make_task("a", "First"),
        make_task("b", "Second"),
        make_task("c", "Third"),
    ];

    let sorted = sort_tasks(&tasks, SortOption::DueDate);
    let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn priority_sort_is_descending_with_stable_ties() {
    let mut low = make_task("low", "L");
    low.priority = Priority::Low;
    let mut high_one = make_task("h1", "H1");
    high_one.priority = Priority::High;
    let mut high_two = make_task("h2", "H2");
    high_two.priority = Priority::High;

    let sorted = sort_tasks(&[low, high_one, high_two], SortOption::Priority);
    let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["h1", "h2", "low"]);
}

#[test]
fn created_at_sort_is_most_recent_first() {
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    let mut old = make_task("old", "Old");
    old.created_at = base;
    let mut new = make_task("new", "New");
    new.created_at = base + Duration::days(1);

    let sorted = sort_tasks(&[old, new], SortOption::CreatedAt);
    let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["new", "old"]);
}

#[test]
fn alphabetical_sort_ignores_case() {
    let tasks = vec![
        make_task("b", "banana"),
        make_task("a", "Apple"),
        make_task("c", "cherry"),
    ];

    let sorted = sort_tasks(&tasks, SortOption::Alphabetical);
    let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn sorting_twice_yields_identical_output() {
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    let mut tasks = Vec::new();
    for (i, title) in ["Gamma", "alpha", "Beta", "alpha", "delta"]
        .into_iter()
        .enumerate()
    {
        let mut task = make_task(&format!("t{}", i), title);
        task.priority = if i % 2 == 0 {
            Priority::High
        } else {
            Priority::Low
        };
        task.created_at = base + Duration::hours(i as i64);
        tasks.push(task);
    }

    for option in [
        SortOption::DueDate,
        SortOption::Priority,
        SortOption::CreatedAt,
        SortOption::Alphabetical,
    ] {
        let once = sort_tasks(&tasks, option);
        let twice = sort_tasks(&once, option);
        assert_eq!(once, twice, "{} sort must be idempotent", option);
    }
}

#[test]
fn equal_keys_retain_relative_input_order() {
    // Same title (case aside), same priority, same timestamps: every
    // comparator sees these as ties.
    let mut first = make_task("first", "Same");
    first.priority = Priority::Medium;
    let mut second = make_task("second", "same");
    second.priority = Priority::Medium;

    for option in [
        SortOption::DueDate,
        SortOption::Priority,
        SortOption::CreatedAt,
        SortOption::Alphabetical,
    ] {
        let sorted = sort_tasks(&[first.clone(), second.clone()], option);
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"], "{} sort must be stable", option);
    }
}

#[test]
fn sort_does_not_mutate_input() {
    let tasks = vec![make_task("b", "Bravo"), make_task("a", "Alpha")];
    let before = tasks.clone();

    let _ = sort_tasks(&tasks, SortOption::Alphabetical);
    assert_eq!(tasks, before);
}
