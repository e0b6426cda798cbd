//! Integration tests for the in-memory project repository.
//!
//! Covers ID assignment, validation on create, partial updates, deletion and
//! the filtered views.

use assert_matches::assert_matches;
use folio_core::error::CoreError;
use folio_core::project::{StatValue, ERR_TITLE_REQUIRED, ERR_TECHNOLOGIES_REQUIRED};
use folio_db::models::project::{today, CreateProject, UpdateProject};
use folio_db::repositories::ProjectRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, category: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: "Descripción".to_string(),
        technologies: vec!["Rust".to_string()],
        link: "https://github.com/example".to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_increasing_ids() {
    let repo = ProjectRepo::new();

    let first = repo.create(new_project("A", "DevOps")).await.unwrap();
    let second = repo.create(new_project("B", "IA")).await.unwrap();

    assert_eq!(first.id, 1);
    assert!(second.id > first.id);
    assert!(first.validate().is_ok());
}

#[tokio::test]
async fn create_applies_defaults() {
    let repo = ProjectRepo::new();

    let project = repo.create(new_project("X", "DevOps")).await.unwrap();

    assert!(!project.featured);
    assert_eq!(project.date, today());
    assert_eq!(project.image, "");
    assert!(project.stats.is_empty());
    assert_eq!(project.created_at, project.updated_at);
}

#[tokio::test]
async fn create_keeps_explicit_date_and_stats() {
    let repo = ProjectRepo::new();
    let mut input = new_project("X", "Hardware");
    input.date = Some("2023-05-01".to_string());
    input.stats.insert("stars".to_string(), StatValue::Integer(10));

    let project = repo.create(input).await.unwrap();

    assert_eq!(project.date, "2023-05-01");
    assert_eq!(project.stats.get("stars"), Some(&StatValue::Integer(10)));
}

#[tokio::test]
async fn invalid_project_is_not_stored() {
    let repo = ProjectRepo::new();
    let mut input = new_project("", "Mobile");
    input.technologies.clear();

    let result = repo.create(input).await;

    assert_matches!(
        result,
        Err(CoreError::InvalidEntity { entity: "Project", ref errors })
            if errors == &vec![ERR_TITLE_REQUIRED.to_string(), ERR_TECHNOLOGIES_REQUIRED.to_string()]
    );
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let repo = ProjectRepo::new();

    let result = repo.create(new_project("X", "Gaming")).await;

    assert_matches!(result, Err(CoreError::InvalidEntity { .. }));
    assert!(repo.list().await.is_empty());
}

#[tokio::test]
async fn failed_create_does_not_consume_an_id() {
    let repo = ProjectRepo::new();

    repo.create(new_project("A", "IA")).await.unwrap();
    repo.create(new_project("", "IA")).await.unwrap_err();
    let next = repo.create(new_project("B", "IA")).await.unwrap();

    assert_eq!(next.id, 2);
}

// ---------------------------------------------------------------------------
// Read / update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_by_id_returns_stored_project() {
    let repo = ProjectRepo::new();
    let created = repo.create(new_project("Find me", "FullStack")).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found.title, "Find me");
    assert!(repo.find_by_id(999).await.is_none());
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let repo = ProjectRepo::new();
    let created = repo.create(new_project("Original", "DevOps")).await.unwrap();

    let input = UpdateProject {
        title: Some("Updated".to_string()),
        featured: Some(true),
        ..Default::default()
    };
    let updated = repo.update(created.id, &input).await.unwrap();

    assert_eq!(updated.title, "Updated");
    assert!(updated.featured);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.category, "DevOps");
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_does_not_revalidate() {
    let repo = ProjectRepo::new();
    let created = repo.create(new_project("X", "DevOps")).await.unwrap();

    let input = UpdateProject {
        category: Some("Gaming".to_string()),
        ..Default::default()
    };
    let updated = repo.update(created.id, &input).await.unwrap();

    assert_eq!(updated.category, "Gaming");
    assert!(updated.validate().is_err());
}

#[tokio::test]
async fn update_ignores_unknown_json_fields() {
    let repo = ProjectRepo::new();
    let created = repo.create(new_project("X", "DevOps")).await.unwrap();

    let input: UpdateProject =
        serde_json::from_value(serde_json::json!({"id": 99, "owner": "someone"})).unwrap();
    let updated = repo.update(created.id, &input).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "X");
}

#[tokio::test]
async fn update_missing_project_returns_none() {
    let repo = ProjectRepo::new();
    assert!(repo.update(7, &UpdateProject::default()).await.is_none());
}

#[tokio::test]
async fn read_after_delete_misses() {
    let repo = ProjectRepo::new();
    let created = repo.create(new_project("Delete me", "Seguridad")).await.unwrap();

    assert!(repo.delete(created.id).await);
    assert!(repo.find_by_id(created.id).await.is_none());
    assert!(!repo.delete(created.id).await);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let repo = ProjectRepo::new();
    let first = repo.create(new_project("A", "IA")).await.unwrap();
    repo.delete(first.id).await;

    let second = repo.create(new_project("B", "IA")).await.unwrap();

    assert_eq!(second.id, 2);
}

// ---------------------------------------------------------------------------
// Filtered views and stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_by_category_is_ordered_subset_of_list() {
    let repo = ProjectRepo::new();
    for (title, category) in [("A", "IA"), ("B", "Mobile"), ("C", "IA"), ("D", "DevOps")] {
        repo.create(new_project(title, category)).await.unwrap();
    }

    let all = repo.list().await;
    let ai = repo.list_by_category("IA").await;

    let expected: Vec<_> = all
        .iter()
        .filter(|p| p.category == "IA")
        .map(|p| p.id)
        .collect();
    let actual: Vec<_> = ai.iter().map(|p| p.id).collect();
    assert_eq!(actual, expected);
    assert!(repo.list_by_category("NoSuchCategory").await.is_empty());
}

#[tokio::test]
async fn list_featured_only_returns_featured() {
    let repo = ProjectRepo::new();
    let mut featured = new_project("Star", "Embebidos");
    featured.featured = true;
    repo.create(featured).await.unwrap();
    repo.create(new_project("Plain", "Embebidos")).await.unwrap();

    let result = repo.list_featured().await;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Star");
}

#[tokio::test]
async fn stats_count_categories_in_first_seen_order() {
    let repo = ProjectRepo::new();
    let mut featured = new_project("A", "Mobile");
    featured.featured = true;
    repo.create(featured).await.unwrap();
    repo.create(new_project("B", "IA")).await.unwrap();
    repo.create(new_project("C", "Mobile")).await.unwrap();

    let stats = repo.stats().await;

    assert_eq!(stats.total_projects, 3);
    assert_eq!(stats.featured_projects, 1);
    let categories: Vec<_> = stats.categories.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(categories, vec![("Mobile", 2), ("IA", 1)]);
}

#[tokio::test]
async fn null_optional_fields_fall_back_to_defaults() {
    let repo = ProjectRepo::new();
    let input: CreateProject = serde_json::from_value(serde_json::json!({
        "title": "X",
        "description": "Y",
        "technologies": ["Go"],
        "link": "http://a",
        "category": "DevOps",
        "featured": null,
        "stats": null,
        "image": null,
        "date": null,
    }))
    .unwrap();

    let project = repo.create(input).await.unwrap();

    assert!(!project.featured);
    assert!(project.stats.is_empty());
    assert_eq!(project.image, "");
    assert_eq!(project.date, today());
}

#[tokio::test]
async fn null_required_fields_are_reported_as_missing() {
    let repo = ProjectRepo::new();
    let input: CreateProject = serde_json::from_value(serde_json::json!({
        "title": null,
        "description": "Y",
        "technologies": null,
        "link": "http://a",
        "category": "DevOps",
    }))
    .unwrap();

    let err = repo.create(input).await.unwrap_err();

    assert_matches!(err, CoreError::InvalidEntity { errors, .. } => {
        assert_eq!(errors, vec![ERR_TITLE_REQUIRED, ERR_TECHNOLOGIES_REQUIRED]);
    });
}
