//! Shared formatting utilities for the dashboard views.

use chrono::{DateTime, Utc};
use shared_types::{TaskPriority, TaskStatus};

/// Format a timestamp as "Jan 20, 2026".
pub fn format_date_human(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Distance from `at` to `now` in words, e.g. "3 hours ago".
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let (count, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// Human label for a task status (e.g. "in-progress" → "In Progress").
pub fn status_label(status: TaskStatus) -> String {
    status
        .as_str()
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "badge badge-success",
        TaskStatus::InProgress => "badge badge-info",
        TaskStatus::Pending => "badge badge-warning",
        TaskStatus::Overdue => "badge badge-destructive",
    }
}

pub fn priority_class(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::High => "priority priority-high",
        TaskPriority::Medium => "priority priority-medium",
        TaskPriority::Low => "priority priority-low",
    }
}

/// Avatar initials: first letter of the first two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
