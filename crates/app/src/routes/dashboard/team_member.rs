use super::{DashboardHeader, LoadError, LoadingSkeletons, RecentActivity, StatGrid, UpcomingTasks};
use crate::toast::Toasts;
use dioxus::prelude::*;
use portal::views::{completion_rate, summarize};
use portal::{DashboardState, Notifier};
use shared_types::{Role, TaskStatus};

pub const MESSAGE_SENT: &str = "Message sent successfully";

/// Personal view: own task list, completion rate and the team feed.
#[component]
pub fn TeamMemberDashboard(state: DashboardState, on_refresh: EventHandler<()>) -> Element {
    let toasts = use_context::<Toasts>();
    let mut message = use_signal(String::new);

    if state.loading && state.stats.is_none() {
        return rsx! { LoadingSkeletons { count: 3 } };
    }
    let Some(stats) = state.stats.as_ref() else {
        return rsx! {
            LoadError { message: state.error.clone().unwrap_or_default(), on_retry: on_refresh }
        };
    };

    let view = summarize(Role::TeamMember, stats, &state.departments);
    let total = stats.upcoming_tasks.len();
    let completed = stats
        .upcoming_tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let rate = completion_rate(&stats.upcoming_tasks);

    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        if !message.read().trim().is_empty() {
            toasts.success(MESSAGE_SENT);
            message.set(String::new());
        }
    };

    rsx! {
        div { class: "dashboard-page",
            DashboardHeader {
                title: view.heading.to_string(),
                subtitle: "Your tasks and team updates",
                on_refresh,
            }
            StatGrid { tiles: view.tiles }
            div { class: "card progress-card",
                div { class: "progress-label-row",
                    span { class: "progress-label", "Overall Completion" }
                    span { class: "progress-value", "{rate}%" }
                }
                div { class: "progress",
                    div { class: "progress-indicator", style: "width: {rate}%;" }
                }
                p { class: "progress-meta",
                    "{completed} completed · {total - completed} remaining"
                }
            }
            div { class: "dashboard-columns",
                UpcomingTasks { tasks: stats.upcoming_tasks.clone(), show_details: true }
                div { class: "team-messages",
                    RecentActivity { title: "Team Messages", activities: stats.recent_activity.clone() }
                    form { class: "message-form", onsubmit: handle_send,
                        input {
                            class: "input",
                            placeholder: "Type your message...",
                            value: message(),
                            oninput: move |e: FormEvent| message.set(e.value()),
                        }
                        button { class: "button", r#type: "submit", "Send" }
                    }
                }
            }
        }
    }
}
