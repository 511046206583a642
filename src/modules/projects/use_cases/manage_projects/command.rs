#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProject {
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProject {
    pub user_id: String,
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPosition {
    pub project_id: String,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderProjects {
    pub user_id: String,
    pub positions: Vec<ProjectPosition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProject {
    pub user_id: String,
    pub project_id: String,
}
