use serde::{Deserialize, Serialize};

use courtside_core::{CategoryId, Entity};

use crate::product::slugify;

/// A storefront category ("Badminton Rackets"), addressed by slug in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

impl Collection {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            slug: slugify(&name),
            name,
        }
    }

    /// Slugs compare case-insensitively, ignoring surrounding whitespace.
    pub fn has_slug(&self, slug: &str) -> bool {
        self.slug.eq_ignore_ascii_case(slug.trim())
    }
}

impl Entity for Collection {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
