//! Project entity model and DTOs.

use folio_core::project::{validate_project, ProjectFields, StatValue};
use folio_core::types::{DbId, Timestamp};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Ordered `stats` map as sent by clients (`{"stars": 10, "forks": 5}`).
pub type ProjectStatsMap = IndexMap<String, StatValue>;

/// A stored portfolio project.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub category: String,
    pub featured: bool,
    /// Display date, `YYYY-MM-DD`.
    pub date: String,
    /// Image URL, empty when the project has none.
    pub image: String,
    pub stats: ProjectStatsMap,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. Absent or `null` keys fall back to empty
/// values so that validation can report every missing field at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProject {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    /// Defaults to today's local date if omitted or empty.
    pub date: Option<String>,
    pub image: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: ProjectStatsMap,
}

/// DTO for updating an existing project. All fields are optional and any
/// key not listed here is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub link: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub stats: Option<ProjectStatsMap>,
}

/// Aggregate counts over the stored projects.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStats {
    pub total_projects: usize,
    pub featured_projects: usize,
    /// Project count per category, in order of first appearance.
    pub categories: IndexMap<String, usize>,
}

impl Project {
    /// Build a project from a creation DTO. The result is not validated yet.
    pub fn new(id: DbId, input: CreateProject, now: Timestamp) -> Self {
        let date = input
            .date
            .filter(|d| !d.is_empty())
            .unwrap_or_else(today);

        Self {
            id,
            title: input.title,
            description: input.description,
            technologies: input.technologies,
            link: input.link,
            category: input.category,
            featured: input.featured,
            date,
            image: input.image.unwrap_or_default(),
            stats: input.stats,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the project against every field rule.
    ///
    /// Returns all violations, not just the first one.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors = validate_project(&ProjectFields {
            title: &self.title,
            description: &self.description,
            technologies: &self.technologies,
            link: &self.link,
            category: &self.category,
        });
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Apply the non-`None` fields of `input` and refresh `updated_at`.
    ///
    /// The merged project is not re-validated.
    pub fn apply_update(&mut self, input: &UpdateProject, now: Timestamp) {
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(technologies) = &input.technologies {
            self.technologies = technologies.clone();
        }
        if let Some(link) = &input.link {
            self.link = link.clone();
        }
        if let Some(category) = &input.category {
            self.category = category.clone();
        }
        if let Some(featured) = input.featured {
            self.featured = featured;
        }
        if let Some(date) = &input.date {
            self.date = date.clone();
        }
        if let Some(image) = &input.image {
            self.image = image.clone();
        }
        if let Some(stats) = &input.stats {
            self.stats = stats.clone();
        }
        self.updated_at = now;
    }
}

/// Read a JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
