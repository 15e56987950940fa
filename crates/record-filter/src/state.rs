//! Search text and category selections held by a page

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Selection value meaning a category filter is inactive
pub const ALL: &str = "All";

/// The current search text and category selections for one page.
///
/// Created with every declared category set to [`ALL`] and an empty search,
/// mutated by user input, discarded with the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    search_text: String,
    selections: BTreeMap<String, String>,
}

impl FilterState {
    /// Default state for the given category filter names
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_text: String::new(),
            selections: categories
                .into_iter()
                .map(|name| (name.into(), ALL.to_string()))
                .collect(),
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.set_search(text);
        self
    }

    /// Select a value for a declared category filter
    pub fn select(&mut self, filter: &str, value: impl Into<String>) -> Result<(), FilterError> {
        match self.selections.get_mut(filter) {
            Some(selected) => {
                *selected = value.into();
                Ok(())
            }
            None => Err(FilterError::UnknownFilter(filter.to_string())),
        }
    }

    pub fn with_selection(
        mut self,
        filter: &str,
        value: impl Into<String>,
    ) -> Result<Self, FilterError> {
        self.select(filter, value)?;
        Ok(self)
    }

    /// Current selection for a filter; undeclared filters read as [`ALL`]
    pub fn selection(&self, filter: &str) -> &str {
        self.selections.get(filter).map(String::as_str).unwrap_or(ALL)
    }

    /// Declared filter names with their selections
    pub fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Reset the search and every selection to its default
    pub fn clear(&mut self) {
        self.search_text.clear();
        for selected in self.selections.values_mut() {
            *selected = ALL.to_string();
        }
    }

    /// True when no predicate is active
    pub fn is_default(&self) -> bool {
        self.search_text.is_empty() && self.selections.values().all(|value| value == ALL)
    }
}
