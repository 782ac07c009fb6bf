pub mod hod;
pub mod sub_department;
pub mod team_member;

use crate::format_helpers::{
    format_date_human, format_relative, initials, priority_class, status_class, status_label,
};
use crate::routes::Route;
use crate::toast::Toasts;
use crate::use_portal;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdDownload, LdRefreshCw};
use dioxus_free_icons::Icon;
use portal::views::{export_snapshot, show_task_details, StatTile};
use portal::Notifier;
use shared_types::{Activity, AppError, Department, Role, Task};
use std::rc::Rc;

/// File name offered for the HOD snapshot export.
const EXPORT_FILE_NAME: &str = "dashboard-export.json";

/// Role-adaptive dashboard. Owns the provider for the stored role and hands
/// each role view a plain copy of the current state.
#[component]
pub fn Dashboard() -> Element {
    let portal = use_portal();
    let toasts = use_context::<Toasts>();

    let provider = use_hook(|| match portal.dashboard() {
        Ok(provider) => Some(Rc::new(provider)),
        Err(e) => {
            tracing::warn!(error = %e, "no dashboard for this session");
            None
        }
    });
    let Some(provider) = provider else {
        navigator().push(Route::SignIn {});
        return rsx! {};
    };

    let mut state = use_signal(|| provider.state());

    let loader = provider.clone();
    use_future(move || {
        let provider = loader.clone();
        async move {
            if let Err(e) = provider.load().await {
                tracing::debug!(error = %e, "dashboard load failed");
            }
            state.set(provider.state());
        }
    });

    let refresher = provider.clone();
    let on_refresh = move |_: ()| {
        if let Err(e) = refresher.refresh() {
            tracing::debug!(error = %e, "dashboard refresh failed");
        }
        state.set(refresher.state());
    };

    let exporter = provider.clone();
    let on_export = move |_: ()| {
        let current = exporter.state();
        let Some(stats) = current.stats.as_ref() else {
            return;
        };
        match export_snapshot(stats, &current.departments, &toasts).and_then(|json| download_script(&json)) {
            Ok(script) => {
                spawn(async move {
                    if let Err(e) = document::eval(&script).await {
                        tracing::warn!(error = ?e, "export download failed");
                    }
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                toasts.error("Failed to export dashboard data");
            }
        }
    };

    let current = state();
    match provider.role() {
        Role::HeadOfDepartment => rsx! {
            hod::HodDashboard { state: current, on_refresh, on_export }
        },
        Role::SubDepartmentAdmin => rsx! {
            sub_department::SubDepartmentDashboard { state: current, on_refresh }
        },
        Role::TeamMember => rsx! {
            team_member::TeamMemberDashboard { state: current, on_refresh }
        },
    }
}

/// Script that hands `json` to the browser as a file download.
fn download_script(json: &str) -> Result<String, AppError> {
    let body = serde_json::to_string(json)?;
    Ok(format!(
        "const blob = new Blob([{body}], {{ type: \"application/json\" }});\
         const url = URL.createObjectURL(blob);\
         const link = document.createElement(\"a\");\
         link.href = url;\
         link.download = \"{EXPORT_FILE_NAME}\";\
         link.click();\
         URL.revokeObjectURL(url);"
    ))
}

/// Page title row with Refresh and, for roles that may export, Export.
#[component]
fn DashboardHeader(
    title: String,
    subtitle: String,
    on_refresh: EventHandler<()>,
    #[props(default)] on_export: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "dashboard-header",
            div {
                h2 { class: "dashboard-title", "{title}" }
                p { class: "dashboard-subtitle", "{subtitle}" }
            }
            div { class: "dashboard-actions",
                button {
                    class: "button button-outline",
                    r#type: "button",
                    onclick: move |_| on_refresh.call(()),
                    Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 16, height: 16 }
                    "Refresh"
                }
                if let Some(on_export) = on_export {
                    button {
                        class: "button",
                        r#type: "button",
                        onclick: move |_| on_export.call(()),
                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                        "Export"
                    }
                }
            }
        }
    }
}

/// Grid of skeleton placeholders shown during the initial load.
#[component]
fn LoadingSkeletons(count: usize) -> Element {
    rsx! {
        div { class: "skeleton-grid",
            for _ in 0..count {
                div { class: "skeleton skeleton-tile" }
            }
            div { class: "skeleton skeleton-panel" }
        }
    }
}

#[component]
fn LoadError(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "card dashboard-error",
            div { class: "card-header",
                h3 { class: "card-title", "Error" }
                p { class: "card-description", "{message}" }
            }
            button {
                class: "button",
                r#type: "button",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}

/// Row of headline tiles.
#[component]
fn StatGrid(tiles: Vec<StatTile>) -> Element {
    rsx! {
        div { class: "stats-grid",
            for tile in tiles {
                div { class: "card stat-card {tile.tone.css_class()}",
                    span { class: "stat-label", "{tile.label}" }
                    div { class: "stat-value-row",
                        span { class: "stat-value", "{tile.value}" }
                        if let Some(up) = tile.trend_up {
                            span { class: "stat-trend stat-trend-up", "+{up}%" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentActivity(title: String, activities: Vec<Activity>) -> Element {
    let now = Utc::now();

    rsx! {
        div { class: "card activity-card",
            div { class: "card-header",
                h3 { class: "card-title", "{title}" }
            }
            ul { class: "activity-list",
                for activity in activities {
                    li { key: "{activity.id}", class: "activity-item",
                        span { class: "avatar", "{initials(&activity.user.name)}" }
                        div { class: "activity-body",
                            p {
                                strong { "{activity.user.name}" }
                                " {activity.action}"
                            }
                            if let Some(details) = activity.details.as_ref() {
                                p { class: "activity-details", "{details}" }
                            }
                            p { class: "activity-meta",
                                "{activity.user.role} · {format_relative(activity.timestamp, now)}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Task list; `show_details` adds a Details button per task.
#[component]
fn UpcomingTasks(tasks: Vec<Task>, #[props(default)] show_details: bool) -> Element {
    let toasts = use_context::<Toasts>();

    rsx! {
        div { class: "card tasks-card",
            div { class: "card-header",
                h3 { class: "card-title", "Upcoming Tasks" }
            }
            ul { class: "task-list",
                for task in tasks {
                    li { key: "{task.id}", class: "task-item",
                        div { class: "task-main",
                            span { class: priority_class(task.priority), "{task.priority.as_str()}" }
                            span { class: "task-title", "{task.title}" }
                        }
                        div { class: "task-meta",
                            span { class: status_class(task.status), "{status_label(task.status)}" }
                            span { class: "task-due", "Due {format_date_human(task.due_date)}" }
                            if let Some(assignee) = task.assignee.as_ref() {
                                span { class: "task-assignee", "{assignee}" }
                            }
                            if show_details {
                                button {
                                    class: "button button-ghost button-sm",
                                    r#type: "button",
                                    onclick: {
                                        let task = task.clone();
                                        move |_| show_task_details(&task, &toasts)
                                    },
                                    "Details"
                                    Icon::<LdChevronDown> { icon: LdChevronDown, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DepartmentList(departments: Vec<Department>) -> Element {
    rsx! {
        div { class: "card departments-card",
            div { class: "card-header",
                h3 { class: "card-title", "Sub-department Performance" }
            }
            ul { class: "department-list",
                for dept in departments {
                    li { key: "{dept.id}", class: "department-item",
                        div { class: "department-row",
                            span { class: "department-name", "{dept.name}" }
                            span { class: "department-progress", "{dept.progress}%" }
                        }
                        div { class: "progress",
                            div { class: "progress-indicator", style: "width: {dept.progress}%;" }
                        }
                        p { class: "department-meta", "{dept.head} · {dept.members} members" }
                    }
                }
            }
        }
    }
}
