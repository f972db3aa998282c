//! Category Resolution
//!
//! Clients may reference a category by numeric id or by name. The
//! ambiguity is absorbed here, at the boundary: a string of digits is
//! taken as an id, anything else as a name.

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::entity::Category;
use crate::domain::repository::CategoryRepository;
use crate::error::{BlogError, BlogResult};

/// A client-supplied category reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRef {
    ById(CategoryId),
    ByName(String),
}

impl CategoryRef {
    /// Parse a raw string: all-digits means an id, otherwise a name
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(id) => CategoryRef::ById(CategoryId::from_i64(id)),
            Err(_) => CategoryRef::ByName(trimmed.to_string()),
        }
    }

    /// Resolve to an id for attaching to a post, creating the category
    /// when referenced by a new name
    pub async fn resolve_or_create<R: CategoryRepository>(
        &self,
        repo: &R,
    ) -> BlogResult<CategoryId> {
        match self {
            CategoryRef::ById(id) => {
                repo.find_by_id(*id)
                    .await?
                    .ok_or(BlogError::CategoryNotFound)?;
                Ok(*id)
            }
            CategoryRef::ByName(name) => {
                if name.is_empty() {
                    return Err(BlogError::Validation(
                        "Category name cannot be empty".to_string(),
                    ));
                }
                repo.find_or_create_by_name(name).await
            }
        }
    }

    /// Resolve to an id for filtering; an unknown reference yields None
    /// (the listing is simply empty), never an error
    pub async fn resolve_for_filter<R: CategoryRepository>(
        &self,
        repo: &R,
    ) -> BlogResult<Option<CategoryId>> {
        match self {
            CategoryRef::ById(id) => Ok(Some(*id)),
            CategoryRef::ByName(name) => {
                Ok(repo.find_by_name(name).await?.map(|c| c.id))
            }
        }
    }
}

/// List categories use case
pub struct ListCategoriesUseCase<R: CategoryRepository> {
    repo: Arc<R>,
}

impl<R: CategoryRepository> ListCategoriesUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> BlogResult<Vec<Category>> {
        self.repo.list_all().await
    }
}
