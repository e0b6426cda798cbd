//! Repository for portfolio projects.

use chrono::Utc;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::models::project::{CreateProject, Project, ProjectStats, UpdateProject};

#[derive(Default)]
struct ProjectTable {
    rows: Vec<Project>,
    /// Highest ID handed out so far. Never decremented.
    last_id: DbId,
}

/// Provides CRUD operations and filtered views over projects.
///
/// Rows are kept in insertion order. IDs are assigned from a monotonic
/// counter under the same write guard as the insert, so they stay unique
/// when handlers run concurrently.
#[derive(Default)]
pub struct ProjectRepo {
    table: RwLock<ProjectTable>,
}

impl ProjectRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a new project, returning the stored row.
    ///
    /// A project that fails validation is not stored and does not consume an
    /// ID; every violation is returned in [`CoreError::InvalidEntity`].
    pub async fn create(&self, input: CreateProject) -> Result<Project, CoreError> {
        let mut table = self.table.write().await;
        let next_id = table.last_id + 1;

        let project = Project::new(next_id, input, Utc::now());
        if let Err(errors) = project.validate() {
            tracing::warn!(?errors, "Project validation failed");
            return Err(CoreError::InvalidEntity {
                entity: "Project",
                errors,
            });
        }

        table.last_id = next_id;
        table.rows.push(project.clone());
        tracing::debug!(project_id = next_id, "Project created");
        Ok(project)
    }

    /// Find a project by ID.
    pub async fn find_by_id(&self, id: DbId) -> Option<Project> {
        let table = self.table.read().await;
        table.rows.iter().find(|p| p.id == id).cloned()
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(&self, id: DbId, input: &UpdateProject) -> Option<Project> {
        let mut table = self.table.write().await;
        let project = table.rows.iter_mut().find(|p| p.id == id)?;
        project.apply_update(input, Utc::now());
        Some(project.clone())
    }

    /// Remove a project by ID. Returns `true` if a row was removed.
    pub async fn delete(&self, id: DbId) -> bool {
        let mut table = self.table.write().await;
        let Some(index) = table.rows.iter().position(|p| p.id == id) else {
            return false;
        };
        table.rows.remove(index);
        tracing::debug!(project_id = id, "Project deleted");
        true
    }

    /// List all projects in insertion order.
    pub async fn list(&self) -> Vec<Project> {
        self.table.read().await.rows.clone()
    }

    /// List projects whose category equals `category` exactly.
    pub async fn list_by_category(&self, category: &str) -> Vec<Project> {
        self.filtered(|p| p.category == category).await
    }

    /// List projects flagged as featured.
    pub async fn list_featured(&self) -> Vec<Project> {
        self.filtered(|p| p.featured).await
    }

    /// Totals, featured count and per-category counts.
    pub async fn stats(&self) -> ProjectStats {
        let table = self.table.read().await;
        let mut categories: IndexMap<String, usize> = IndexMap::new();
        for project in &table.rows {
            *categories.entry(project.category.clone()).or_default() += 1;
        }
        ProjectStats {
            total_projects: table.rows.len(),
            featured_projects: table.rows.iter().filter(|p| p.featured).count(),
            categories,
        }
    }

    /// Number of stored projects.
    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }

    async fn filtered(&self, keep: impl Fn(&Project) -> bool) -> Vec<Project> {
        let table = self.table.read().await;
        table.rows.iter().filter(|p| keep(*p)).cloned().collect()
    }
}
