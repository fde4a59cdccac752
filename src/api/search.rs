//! Suggestion lookups

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::get_json;
use crate::error::ApiError;
use crate::models::SuggestionItem;

/// Which entity a picker looks up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Ingredients,
    Recipes,
}

impl SearchKind {
    fn resource(self) -> &'static str {
        match self {
            SearchKind::Ingredients => "ingredients",
            SearchKind::Recipes => "recipes",
        }
    }
}

pub fn search_path(kind: SearchKind, query: &str, limit: u32) -> String {
    format!(
        "/{}/search?q={}&limit={}",
        kind.resource(),
        utf8_percent_encode(query, NON_ALPHANUMERIC),
        limit
    )
}

pub async fn search(kind: SearchKind, query: &str, limit: u32) -> Result<Vec<SuggestionItem>, ApiError> {
    get_json(&search_path(kind, query, limit)).await
}
