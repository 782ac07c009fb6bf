use super::{
    DashboardHeader, DepartmentList, LoadError, LoadingSkeletons, RecentActivity, StatGrid,
    UpcomingTasks,
};
use dioxus::prelude::*;
use portal::views::summarize;
use portal::DashboardState;
use shared_types::Role;

/// How many recent entries the communications panel shows.
const COMMUNICATIONS_SHOWN: usize = 3;

/// Head-of-department overview: every sub-department plus export.
#[component]
pub fn HodDashboard(
    state: DashboardState,
    on_refresh: EventHandler<()>,
    on_export: EventHandler<()>,
) -> Element {
    if state.loading && state.stats.is_none() {
        return rsx! { LoadingSkeletons { count: 4 } };
    }
    let Some(stats) = state.stats.as_ref() else {
        return rsx! {
            LoadError { message: state.error.clone().unwrap_or_default(), on_retry: on_refresh }
        };
    };

    let view = summarize(Role::HeadOfDepartment, stats, &state.departments);
    let communications: Vec<_> = stats
        .recent_activity
        .iter()
        .take(COMMUNICATIONS_SHOWN)
        .cloned()
        .collect();

    rsx! {
        div { class: "dashboard-page",
            DashboardHeader {
                title: view.heading.to_string(),
                subtitle: "Manage and monitor all sub-departments",
                on_refresh,
                on_export,
            }
            StatGrid { tiles: view.tiles }
            DepartmentList { departments: state.departments.clone() }
            div { class: "dashboard-columns",
                RecentActivity { title: "Recent Communications", activities: communications }
                UpcomingTasks { tasks: stats.upcoming_tasks.clone() }
            }
        }
    }
}
