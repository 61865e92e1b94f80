//! Picks one linker invocation out of the candidates found in a build log

use crate::buildlog::TaskNode;
use crate::error::SelectError;
use std::path::Path;

/// Which rule picked the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// Only one candidate survived the filters.
    Only,
    /// Several candidates; the first one with recorded errors won.
    FirstFailing { failing: usize },
    /// Several candidates, none failing; the first one in log order won.
    FirstOfMany { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index into the candidate slice handed to [`TaskSelector::select`].
    pub index: usize,
    pub reason: SelectionReason,
}

/// Filter-then-tie-break selection over build-log tasks.
pub struct TaskSelector {
    task_name: String,
    project: Option<String>,
    target: Option<String>,
}

impl TaskSelector {
    pub fn new(task_name: impl Into<String>) -> Self {
        Self { task_name: task_name.into(), project: None, target: None }
    }

    /// Keep only tasks from this project. Empty strings disable the filter.
    pub fn project(mut self, project: Option<&str>) -> Self {
        self.project = project.filter(|p| !p.is_empty()).map(str::to_string);
        self
    }

    /// Keep only tasks from this target. Empty strings disable the filter.
    pub fn target(mut self, target: Option<&str>) -> Self {
        self.target = target.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }

    pub fn select<T: TaskNode>(&self, candidates: &[T]) -> Result<Selection, SelectError> {
        if candidates.is_empty() {
            return Err(SelectError::NoTasks { task_name: self.task_name.clone() });
        }

        let mut indices: Vec<usize> = (0..candidates.len()).collect();

        if let Some(project) = &self.project {
            indices.retain(|&i| project_matches(candidates[i].project_name(), project));
            if indices.is_empty() {
                return Err(SelectError::NoProjectMatch {
                    task_name: self.task_name.clone(),
                    project: project.clone(),
                });
            }
        }

        if let Some(target) = &self.target {
            indices.retain(|&i| candidates[i].target_name() == Some(target.as_str()));
            if indices.is_empty() {
                return Err(SelectError::NoTargetMatch {
                    task_name: self.task_name.clone(),
                    target: target.clone(),
                });
            }
        }

        if let [only] = indices.as_slice() {
            return Ok(Selection { index: *only, reason: SelectionReason::Only });
        }

        let failing: Vec<usize> =
            indices.iter().copied().filter(|&i| candidates[i].has_errors()).collect();
        let selection = match failing.first() {
            Some(&index) => {
                Selection { index, reason: SelectionReason::FirstFailing { failing: failing.len() } }
            }
            None => Selection {
                index: indices[0],
                reason: SelectionReason::FirstOfMany { count: indices.len() },
            },
        };
        tracing::debug!(?selection, candidates = indices.len(), "selected task");
        Ok(selection)
    }
}

/// A project matches by full name (`App.csproj`) or by name without extension (`App`).
fn project_matches(name: Option<&str>, filter: &str) -> bool {
    let Some(name) = name else {
        return false;
    };
    if name == filter {
        return true;
    }
    Path::new(name).file_stem().and_then(|stem| stem.to_str()) == Some(filter)
}
