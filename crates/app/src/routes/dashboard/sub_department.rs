use super::{DashboardHeader, LoadError, LoadingSkeletons, RecentActivity, StatGrid, UpcomingTasks};
use crate::toast::Toasts;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClipboardList, LdFileText};
use dioxus_free_icons::Icon;
use portal::views::{summarize, REPORTS_MODULE_NOTICE, TASKS_MODULE_NOTICE};
use portal::{DashboardState, Notifier};
use shared_types::Role;

#[component]
pub fn SubDepartmentDashboard(state: DashboardState, on_refresh: EventHandler<()>) -> Element {
    let toasts = use_context::<Toasts>();

    if state.loading && state.stats.is_none() {
        return rsx! { LoadingSkeletons { count: 4 } };
    }
    let Some(stats) = state.stats.as_ref() else {
        return rsx! {
            LoadError { message: state.error.clone().unwrap_or_default(), on_retry: on_refresh }
        };
    };

    let view = summarize(Role::SubDepartmentAdmin, stats, &state.departments);

    rsx! {
        div { class: "dashboard-page",
            DashboardHeader {
                title: view.heading.to_string(),
                subtitle: "Track your team's tasks and progress",
                on_refresh,
            }
            StatGrid { tiles: view.tiles }
            div { class: "card progress-card",
                div { class: "progress-label-row",
                    span { class: "progress-label", "Department Progress" }
                    span { class: "progress-value", "{stats.department_progress}%" }
                }
                div { class: "progress",
                    div {
                        class: "progress-indicator",
                        style: "width: {stats.department_progress}%;",
                    }
                }
                p { class: "progress-meta",
                    "{stats.completed_tasks} of {stats.total_tasks} tasks completed"
                }
            }
            div { class: "dashboard-columns",
                RecentActivity { title: "Recent Activity", activities: stats.recent_activity.clone() }
                UpcomingTasks { tasks: stats.upcoming_tasks.clone() }
            }
            div { class: "dashboard-columns",
                div { class: "card module-card",
                    Icon::<LdClipboardList> { icon: LdClipboardList, width: 40, height: 40 }
                    h3 { class: "card-title", "Task Management" }
                    p { class: "card-description", "Detailed task management tools will be displayed here." }
                    button {
                        class: "button",
                        r#type: "button",
                        onclick: move |_| toasts.info(TASKS_MODULE_NOTICE),
                        "Explore Tasks"
                    }
                }
                div { class: "card module-card",
                    Icon::<LdFileText> { icon: LdFileText, width: 40, height: 40 }
                    h3 { class: "card-title", "Progress Reports" }
                    p { class: "card-description", "Progress reports and analytics will be displayed here." }
                    button {
                        class: "button",
                        r#type: "button",
                        onclick: move |_| toasts.info(REPORTS_MODULE_NOTICE),
                        "View Reports"
                    }
                }
            }
        }
    }
}
