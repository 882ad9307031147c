//! Category taxonomy
//!
//! Owns the category list and its expense/income partition. Classification
//! is derived from the category name: names in the fixed recognized set are
//! income, everything else is expense. The match is case-sensitive and
//! exact, so a custom "Gift" category counts as expense even if it is
//! conceptually income-like. Renaming a category reclassifies it
//! automatically because nothing is stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{CentavoError, CentavoResult};
use crate::models::{Category, CategoryId, TransactionKind};

/// Category names recognized as income
pub const INCOME_CATEGORY_NAMES: [&str; 2] = ["Salary", "Allowance"];

/// The expense/income bucket a category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Expense,
    Income,
}

impl Classification {
    /// The transaction direction implied by this classification
    pub fn transaction_kind(&self) -> TransactionKind {
        match self {
            Self::Expense => TransactionKind::Expense,
            Self::Income => TransactionKind::Income,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// Classify a category name against the recognized income-name set
pub fn classify_name(name: &str) -> Classification {
    if INCOME_CATEGORY_NAMES.contains(&name) {
        Classification::Income
    } else {
        Classification::Expense
    }
}

/// The category list and its partition into expenses and income
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    /// Create an empty taxonomy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a taxonomy seeded with the default category set
    pub fn with_defaults() -> Self {
        let defaults = [
            ("Food", "icons/category icons/food.png"),
            ("Transport", "icons/category icons/transport.png"),
            ("Shopping", "icons/category icons/shopping.png"),
            ("Entertainment", "icons/category icons/entertainment.png"),
            ("Health", "icons/category icons/health.png"),
            ("Education", "icons/category icons/education.png"),
            ("Bills", "icons/category icons/bills.png"),
            ("Savings", "icons/category icons/savings.png"),
            ("Salary", "icons/category icons/salary (1).png"),
            ("Allowance", "icons/category icons/allowance.png"),
        ];

        Self {
            categories: defaults
                .iter()
                .map(|(name, icon)| Category::new(*name, *icon))
                .collect(),
        }
    }

    /// All categories, in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The classification of a category
    pub fn classify(&self, category: &Category) -> Classification {
        classify_name(&category.name)
    }

    /// Categories classified as expenses, in insertion order
    pub fn expenses(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| classify_name(&c.name) == Classification::Expense)
            .collect()
    }

    /// Categories classified as income, in insertion order
    pub fn income(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| classify_name(&c.name) == Classification::Income)
            .collect()
    }

    /// Look up a category by ID
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Add a new category
    ///
    /// Names are unique: since the name fully determines the classification
    /// bucket, uniqueness within a bucket is the same as plain uniqueness.
    pub fn add_category(&mut self, name: &str, icon: &str) -> CentavoResult<&Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CentavoError::EmptyField("Category name"));
        }

        if self.find_by_name(name).is_some() {
            return Err(CentavoError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(name, icon);
        category
            .validate()
            .map_err(|e| CentavoError::Validation(e.to_string()))?;

        debug!(category = %category.name, classification = %classify_name(name), "category added");
        self.categories.push(category);
        Ok(self.categories.last().unwrap())
    }

    /// Rename a category
    ///
    /// Reclassification is automatic: if the new name is in the recognized
    /// income set the category moves buckets without any further action.
    pub fn rename_category(&mut self, id: CategoryId, new_name: &str) -> CentavoResult<&Category> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(CentavoError::EmptyField("Category name"));
        }

        if self.categories.iter().any(|c| c.name == new_name && c.id != id) {
            return Err(CentavoError::Duplicate {
                entity_type: "Category",
                identifier: new_name.to_string(),
            });
        }

        let position = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CentavoError::category_not_found(id.to_string()))?;

        // Validate the renamed candidate before touching the stored one
        let mut renamed = self.categories[position].clone();
        renamed.name = new_name.to_string();
        renamed
            .validate()
            .map_err(|e| CentavoError::Validation(e.to_string()))?;

        debug!(from = %self.categories[position].name, to = %renamed.name, "category renamed");
        self.categories[position] = renamed;

        Ok(&self.categories[position])
    }

    /// Remove a selection of categories, returning how many were removed
    ///
    /// Never fails: unknown IDs are skipped and an empty selection is a
    /// no-op. Transactions already recorded keep the category name as a
    /// plain label.
    pub fn remove_categories(&mut self, selection: &[CategoryId]) -> usize {
        let before = self.categories.len();
        self.categories.retain(|c| !selection.contains(&c.id));
        let removed = before - self.categories.len();
        if removed > 0 {
            debug!(removed, "categories removed");
        }
        removed
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the taxonomy holds no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
