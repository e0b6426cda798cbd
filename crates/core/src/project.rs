//! Project categories, stat values and field validation.
//!
//! The HTTP layer accepts projects as loosely filled DTOs; everything that
//! decides whether a project may be stored lives here.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const CATEGORY_MOBILE: &str = "Mobile";
pub const CATEGORY_AI: &str = "IA";
pub const CATEGORY_FULL_STACK: &str = "FullStack";
pub const CATEGORY_DEVOPS: &str = "DevOps";
pub const CATEGORY_SECURITY: &str = "Seguridad";
pub const CATEGORY_HARDWARE: &str = "Hardware";
pub const CATEGORY_EMBEDDED: &str = "Embebidos";

/// All accepted project categories, in display order.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_MOBILE,
    CATEGORY_AI,
    CATEGORY_FULL_STACK,
    CATEGORY_DEVOPS,
    CATEGORY_SECURITY,
    CATEGORY_HARDWARE,
    CATEGORY_EMBEDDED,
];

/// Returns `true` when `category` is one of [`VALID_CATEGORIES`] (case-sensitive).
pub fn is_valid_category(category: &str) -> bool {
    VALID_CATEGORIES.contains(&category)
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// A scalar value in a project's `stats` map (stars, forks, uptime, ...).
///
/// Variant order matters for untagged deserialization: integers must be
/// tried before floats so `10` stays an integer on the way back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub const ERR_TITLE_REQUIRED: &str = "El título es obligatorio";
pub const ERR_DESCRIPTION_REQUIRED: &str = "La descripción es obligatoria";
pub const ERR_CATEGORY_REQUIRED: &str = "La categoría es obligatoria";
pub const ERR_LINK_REQUIRED: &str = "El enlace es obligatorio";
pub const ERR_TECHNOLOGIES_REQUIRED: &str = "Debe haber al menos una tecnología";

/// Borrowed view of the project fields that carry validation rules.
#[derive(Debug, Clone, Copy)]
pub struct ProjectFields<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub technologies: &'a [String],
    pub link: &'a str,
    pub category: &'a str,
}

/// Message listing the accepted categories.
pub fn invalid_category_message() -> String {
    format!("Categoría inválida. Válidas: {}", VALID_CATEGORIES.join(", "))
}

/// Check every project rule and collect all violations.
///
/// Rules are evaluated in a fixed order and never short-circuit, so an empty
/// category reports both the missing value and the unknown category.
pub fn validate_project(fields: &ProjectFields<'_>) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(fields.title) {
        errors.push(ERR_TITLE_REQUIRED.to_string());
    }
    if is_blank(fields.description) {
        errors.push(ERR_DESCRIPTION_REQUIRED.to_string());
    }
    if is_blank(fields.category) {
        errors.push(ERR_CATEGORY_REQUIRED.to_string());
    }
    if is_blank(fields.link) {
        errors.push(ERR_LINK_REQUIRED.to_string());
    }
    if fields.technologies.is_empty() {
        errors.push(ERR_TECHNOLOGIES_REQUIRED.to_string());
    }
    if !is_valid_category(fields.category) {
        errors.push(invalid_category_message());
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
