//! Experience Service
//!
//! Business logic for experience management.

use kuuni_core::domain::experience::Experience;
use kuuni_core::dto::experience::CreateExperience;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::experience_repository;

/// Service error type
#[derive(Debug)]
pub enum ExperienceError {
    NotFound(Uuid),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for ExperienceError {
    fn from(err: sqlx::Error) -> Self {
        ExperienceError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, ExperienceError>;

/// Create a new experience
pub async fn create_experience(pool: &PgPool, req: CreateExperience) -> Result<Experience> {
    // Validate request
    validate_experience_request(&req)?;

    // Create experience in database
    let experience = experience_repository::create(pool, req).await?;

    tracing::info!(
        "Experience created: {} ({})",
        experience.title,
        experience.id
    );

    Ok(experience)
}

/// Get an experience by ID
pub async fn get_experience(pool: &PgPool, id: Uuid) -> Result<Experience> {
    let experience = experience_repository::find_by_id(pool, id)
        .await?
        .ok_or(ExperienceError::NotFound(id))?;

    Ok(experience)
}

/// List experiences, optionally filtered by featured flag
pub async fn list_experiences(pool: &PgPool, featured: Option<bool>) -> Result<Vec<Experience>> {
    let experiences = experience_repository::list(pool, featured).await?;
    Ok(experiences)
}

/// Update an experience
pub async fn update_experience(
    pool: &PgPool,
    id: Uuid,
    req: CreateExperience,
) -> Result<Experience> {
    // Validate request
    validate_experience_request(&req)?;

    let updated = experience_repository::update(pool, id, req).await?;

    if !updated {
        return Err(ExperienceError::NotFound(id));
    }

    // Return updated experience
    get_experience(pool, id).await
}

/// Delete an experience
pub async fn delete_experience(pool: &PgPool, id: Uuid) -> Result<()> {
    let deleted = experience_repository::delete(pool, id).await?;

    if !deleted {
        return Err(ExperienceError::NotFound(id));
    }

    tracing::info!("Experience deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_experience_request(req: &CreateExperience) -> Result<()> {
    if req.title.trim().is_empty() {
        return Err(ExperienceError::ValidationError(
            "Experience title cannot be empty".to_string(),
        ));
    }

    if req.title.len() > 255 {
        return Err(ExperienceError::ValidationError(
            "Experience title is too long (max 255 characters)".to_string(),
        ));
    }

    if req.description.trim().is_empty() {
        return Err(ExperienceError::ValidationError(
            "Experience description cannot be empty".to_string(),
        ));
    }

    if req.category.trim().is_empty() {
        return Err(ExperienceError::ValidationError(
            "Experience category cannot be empty".to_string(),
        ));
    }

    if req.duration.trim().is_empty() {
        return Err(ExperienceError::ValidationError(
            "Experience duration cannot be empty".to_string(),
        ));
    }

    // Price is deliberately not range-checked

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuuni_core::domain::experience::{City, ExperienceKind};

    fn valid_request() -> CreateExperience {
        CreateExperience {
            title: "Balade au marché central".to_string(),
            description: "Une immersion dans le marché".to_string(),
            long_description: "Visite guidée des étals et ateliers".to_string(),
            city: City::Ouagadougou,
            kind: ExperienceKind::Experience,
            category: "Culture".to_string(),
            group: None,
            price: 15000,
            duration: "2 heures".to_string(),
            images: vec![],
            highlights: vec![],
            included: vec![],
            not_included: vec![],
            featured: false,
        }
    }

    #[test]
    fn test_validate_empty_title() {
        let mut req = valid_request();
        req.title = "".to_string();

        let result = validate_experience_request(&req);
        assert!(matches!(result, Err(ExperienceError::ValidationError(_))));
    }

    #[test]
    fn test_validate_title_too_long() {
        let mut req = valid_request();
        req.title = "x".repeat(256);

        let result = validate_experience_request(&req);
        assert!(matches!(result, Err(ExperienceError::ValidationError(_))));
    }

    #[test]
    fn test_validate_empty_duration() {
        let mut req = valid_request();
        req.duration = "  ".to_string();

        let result = validate_experience_request(&req);
        assert!(matches!(result, Err(ExperienceError::ValidationError(_))));
    }

    #[test]
    fn test_validate_valid_request() {
        let result = validate_experience_request(&valid_request());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_negative_price_accepted() {
        let mut req = valid_request();
        req.price = -500;

        let result = validate_experience_request(&req);
        assert!(result.is_ok());
    }
}
