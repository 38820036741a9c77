//! Breed record returned by the search service.
//!
//! A [`ResultItem`] is decoded verbatim from the service's JSON array and is
//! never mutated afterwards. Every field other than `id` and `name` is
//! optional; display code goes through [`display_or_placeholder`] so that a
//! missing value and an empty string both render as an em-dash.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered for any missing optional field.
pub const MISSING_FIELD: &str = "—";

/// Identifier of a breed record.
///
/// The service emits integers, but string identifiers are accepted so that a
/// compatible service with opaque ids still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One breed record from the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub life_span: Option<String>,
    #[serde(default)]
    pub bred_for: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Relevance score assigned by the service, when it reports one.
    #[serde(default)]
    pub score: Option<f64>,
}

impl ResultItem {
    /// Temperament text, or the em-dash placeholder.
    #[must_use]
    pub fn temperament_or_placeholder(&self) -> &str {
        display_or_placeholder(self.temperament.as_deref())
    }

    /// Short label for the image: the last path segment of the URL.
    ///
    /// Returns `None` when the item has no image, which the card renders as
    /// a `No image` placeholder.
    ///
    /// # Examples
    ///
    /// ```
    /// use breed_search::domain::{ItemId, ResultItem};
    ///
    /// let item = ResultItem {
    ///     id: ItemId::Number(1),
    ///     name: "Pug".to_string(),
    ///     temperament: None,
    ///     description: None,
    ///     life_span: None,
    ///     bred_for: None,
    ///     image: Some("https://cdn2.thedogapi.com/images/HyJvcl9N7.jpg".to_string()),
    ///     score: None,
    /// };
    /// assert_eq!(item.image_label().as_deref(), Some("HyJvcl9N7.jpg"));
    /// ```
    #[must_use]
    pub fn image_label(&self) -> Option<String> {
        let url = self.image.as_deref().filter(|u| !u.trim().is_empty())?;
        let without_query = url.split(['?', '#']).next().unwrap_or(url);
        let label = without_query
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(without_query);
        Some(label.to_string())
    }

    /// Relevance score formatted for the detail panel.
    #[must_use]
    pub fn score_label(&self) -> String {
        self.score
            .map_or_else(|| MISSING_FIELD.to_string(), |s| format!("{s:.2}"))
    }
}

/// Returns the value, or the em-dash placeholder if it is absent or empty.
///
/// # Examples
///
/// ```
/// use breed_search::domain::display_or_placeholder;
///
/// assert_eq!(display_or_placeholder(Some("Loyal")), "Loyal");
/// assert_eq!(display_or_placeholder(Some("")), "—");
/// assert_eq!(display_or_placeholder(None), "—");
/// ```
#[must_use]
pub fn display_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => MISSING_FIELD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_record() {
        let item: ResultItem =
            serde_json::from_str(r#"{"id":1,"name":"Pug","temperament":"Stubborn"}"#).unwrap();
        assert_eq!(item.id, ItemId::Number(1));
        assert_eq!(item.name, "Pug");
        assert_eq!(item.temperament_or_placeholder(), "Stubborn");
        assert!(item.description.is_none());
        assert!(item.image_label().is_none());
    }

    #[test]
    fn decodes_null_fields_and_string_ids() {
        let item: ResultItem = serde_json::from_str(
            r#"{"id":"abc","name":"Akita","temperament":null,"image":null,"score":0.42,"breed_group":"Working"}"#,
        )
        .unwrap();
        assert_eq!(item.id.to_string(), "abc");
        assert_eq!(item.temperament_or_placeholder(), MISSING_FIELD);
        assert_eq!(item.score_label(), "0.42");
    }

    #[test]
    fn image_label_strips_query_and_trailing_slash() {
        let mut item: ResultItem = serde_json::from_str(r#"{"id":2,"name":"Beagle"}"#).unwrap();
        item.image = Some("https://example.com/img/beagle.png?w=200".to_string());
        assert_eq!(item.image_label().as_deref(), Some("beagle.png"));

        item.image = Some("https://example.com/img/".to_string());
        assert_eq!(item.image_label().as_deref(), Some("img"));

        item.image = Some("   ".to_string());
        assert!(item.image_label().is_none());
    }

    #[test]
    fn missing_score_renders_placeholder() {
        let item: ResultItem = serde_json::from_str(r#"{"id":3,"name":"Boxer"}"#).unwrap();
        assert_eq!(item.score_label(), MISSING_FIELD);
    }
}
