// Gallery domain - categories, normalized records, state, and fetching
//
// Everything downstream of the provider boundary works with one record
// shape (GalleryItem) regardless of which API produced it. The branching
// on provider identity lives in providers.rs and nowhere else.

pub mod fetch;
pub mod providers;
pub mod state;

use serde::{Deserialize, Serialize};

/// The selected image domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Dog,
    Cat,
    Sea,
}

impl Category {
    /// All categories in tab order
    pub fn all() -> &'static [Category] {
        &[Category::Dog, Category::Cat, Category::Sea]
    }

    /// Next category in the cycle (Tab key)
    pub fn next(self) -> Self {
        match self {
            Category::Dog => Category::Cat,
            Category::Cat => Category::Sea,
            Category::Sea => Category::Dog,
        }
    }

    /// Tab label shown in the category selector
    pub fn tab_label(&self) -> &'static str {
        match self {
            Category::Dog => "🐶 DOG",
            Category::Cat => "🐱 CAT",
            Category::Sea => "🌊 SEA",
        }
    }

    /// Short lowercase name for logs and headless output
    pub fn name(&self) -> &'static str {
        match self {
            Category::Dog => "dog",
            Category::Cat => "cat",
            Category::Sea => "sea",
        }
    }

    /// Label for the submit action in the search box
    pub fn submit_label(&self) -> &'static str {
        match self {
            Category::Dog => "Shuffle dogs",
            Category::Cat => "Shuffle cats",
            Category::Sea => "Search sea photos",
        }
    }

    /// Mode hint shown above the submit row
    pub fn mode_hint(&self) -> &'static str {
        match self {
            Category::Dog => "Dog mode: press Enter to fetch six random dogs",
            Category::Cat => "Cat mode: press Enter to fetch six random cats",
            Category::Sea => "Sea mode: type a search term (or leave empty) and press Enter",
        }
    }

    /// Placeholder text when the gallery is empty and idle
    pub fn placeholder(&self) -> &'static str {
        match self {
            Category::Dog => "Press Enter to start shuffling dog pictures",
            Category::Cat => "Press Enter to start shuffling cat pictures",
            Category::Sea => "Type something about the sea and press Enter",
        }
    }

    /// Whether the free-text query applies to this category
    pub fn uses_query(&self) -> bool {
        matches!(self, Category::Sea)
    }
}

/// The common normalized record all provider responses convert into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Unique within one result batch (provider id, or synthesized for
    /// providers that return bare URLs)
    pub id: String,
    /// Absolute image URL
    pub url: String,
    /// Short display caption
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cycle_covers_all() {
        let mut c = Category::Dog;
        for _ in 0..3 {
            c = c.next();
        }
        assert_eq!(c, Category::Dog);
        assert_eq!(Category::all().len(), 3);
    }

    #[test]
    fn only_sea_uses_query() {
        assert!(!Category::Dog.uses_query());
        assert!(!Category::Cat.uses_query());
        assert!(Category::Sea.uses_query());
    }
}
