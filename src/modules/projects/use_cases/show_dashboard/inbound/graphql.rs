use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::projects::use_cases::list_project_summaries::inbound::graphql::GqlProjectSummary;
use crate::modules::projects::use_cases::show_dashboard::handler::Dashboard;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlDashboardStats {
    pub active_projects: u64,
    pub alert_projects: u64,
    pub pending_tasks: u64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlDashboard {
    pub search: Option<String>,
    pub stats: GqlDashboardStats,
    pub projects: Vec<GqlProjectSummary>,
}

impl From<Dashboard> for GqlDashboard {
    fn from(d: Dashboard) -> Self {
        Self {
            search: d.search,
            stats: GqlDashboardStats {
                active_projects: d.stats.active_projects,
                alert_projects: d.stats.alert_projects,
                pending_tasks: d.stats.pending_tasks,
            },
            projects: d.projects.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct DashboardQuery;

#[Object]
impl DashboardQuery {
    async fn dashboard(
        &self,
        context: &Context<'_>,
        user_id: String,
        search: Option<String>,
    ) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let dashboard = state
            .dashboard
            .get_dashboard(&user_id, search.as_deref())
            .await
            .map_err(gql_error)?;
        Ok(dashboard.into())
    }
}
