//! Category tree view-state and the category/subcategory forms.

use std::collections::BTreeSet;

use crate::error::FormError;
use crate::models::{Category, NewCategory, NewSubCategory, Product};

/// A category fetch handed out by [`CategoryTree::begin_load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryLoad(u64);

/// Sidebar tree: categories as fetched, which are expanded, and which
/// subcategories are checked as a product filter.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CategoryTree {
    categories: Vec<Category>,
    expanded: BTreeSet<String>,
    selected: BTreeSet<String>,
    issued: u64,
}

impl CategoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Start a fetch; only the latest one issued may land.
    pub fn begin_load(&mut self) -> CategoryLoad {
        self.issued += 1;
        CategoryLoad(self.issued)
    }

    pub fn is_current(&self, load: CategoryLoad) -> bool {
        load.0 == self.issued
    }

    /// Land a fetch started by `begin_load`. Returns `false` (and changes
    /// nothing) when a later fetch has been issued.
    pub fn finish_load(&mut self, load: CategoryLoad, categories: Vec<Category>) -> bool {
        if !self.is_current(load) {
            tracing::debug!("Dropping stale category load #{} (latest #{})", load.0, self.issued);
            return false;
        }
        self.replace(categories);
        true
    }

    /// Install a fresh fetch. Expanded/selected ids that no longer exist are
    /// dropped.
    pub fn replace(&mut self, categories: Vec<Category>) {
        self.expanded
            .retain(|id| categories.iter().any(|c| &c.id == id));
        self.selected.retain(|id| {
            categories
                .iter()
                .any(|c| c.sub_categories.iter().any(|s| &s.id == id))
        });
        self.categories = categories;
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.expanded.contains(category_id)
    }

    pub fn toggle_expanded(&mut self, category_id: &str) {
        if !self.expanded.remove(category_id) {
            self.expanded.insert(category_id.to_string());
        }
    }

    pub fn is_selected(&self, sub_category_id: &str) -> bool {
        self.selected.contains(sub_category_id)
    }

    pub fn set_selected(&mut self, sub_category_id: &str, checked: bool) {
        if checked {
            self.selected.insert(sub_category_id.to_string());
        } else {
            self.selected.remove(sub_category_id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selected
    }
}

/// Products under any of `selected` subcategories; everything when empty.
pub fn filter_by_subcategory<'a>(
    products: &'a [Product],
    selected: &BTreeSet<String>,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| selected.is_empty() || selected.contains(&p.sub_category))
        .collect()
}

/// Add Category form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub const BLANK_MESSAGE: &'static str = "Please enter a category name";
    pub const ADDED_MESSAGE: &'static str = "Category added successfully";

    pub fn validate(&self) -> Result<NewCategory, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Blank("category name"));
        }
        Ok(NewCategory {
            name: name.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
    }
}

/// Add Subcategory form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubCategoryDraft {
    /// Selected parent category id, empty for none
    pub category_id: String,
    pub name: String,
}

impl SubCategoryDraft {
    pub const INVALID_MESSAGE: &'static str =
        "Please select a category and enter subcategory name";
    pub const ADDED_MESSAGE: &'static str = "Subcategory added successfully";

    pub fn validate(&self) -> Result<NewSubCategory, FormError> {
        if self.category_id.is_empty() {
            return Err(FormError::NotSelected("category"));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Blank("subcategory name"));
        }
        Ok(NewSubCategory {
            category_id: self.category_id.clone(),
            name: name.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.category_id.clear();
        self.name.clear();
    }
}
