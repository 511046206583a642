// Status engine: derive a project's health from its task counts.
//
// Boundaries
// - Pure. "Now" only enters through the caller, when it counts overdue tasks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Alert,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Alert => "alert",
        }
    }
}

/// Aggregate input of the status engine. `overdue` counts tasks whose deadline is
/// strictly before "now" and whose status is not done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: u64,
    pub overdue: u64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("overdue count {overdue} exceeds total count {total}")]
    InvariantViolation { total: u64, overdue: u64 },
}

/// A project is in alert when more than 20% of its tasks are overdue.
pub fn compute_status(counts: TaskCounts) -> Result<ProjectStatus, StatusError> {
    let TaskCounts { total, overdue } = counts;
    if overdue > total {
        return Err(StatusError::InvariantViolation { total, overdue });
    }
    if total == 0 {
        return Ok(ProjectStatus::Active);
    }
    // overdue / total > 1/5, kept in integers so the boundary is exact.
    if u128::from(overdue) * 5 > u128::from(total) {
        Ok(ProjectStatus::Alert)
    } else {
        Ok(ProjectStatus::Active)
    }
}
