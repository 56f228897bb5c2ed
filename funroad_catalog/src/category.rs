// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Deserializer, Serialize};

use crate::Slug;

/// A catalog category as served by the content backend.
///
/// `subcategories` may be missing or `null` on the wire; both decode to an empty list.
/// A category with no subcategories is a leaf: selecting it navigates instead of drilling down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend document id.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Identifier used in route paths, unique among siblings.
    pub slug: Slug,
    /// Background accent used while the category is focused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Nested categories, in display order.
    #[serde(
        default,
        deserialize_with = "nullable_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub subcategories: Vec<Category>,
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Category>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Category {
    /// Create a leaf category without an accent color.
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: Slug) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug,
            color: None,
            subcategories: Vec::new(),
        }
    }

    /// Set the accent color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Replace the subcategories.
    #[must_use]
    pub fn with_subcategories(mut self, subcategories: Vec<Self>) -> Self {
        self.subcategories = subcategories;
        self
    }

    /// Whether selecting this category navigates rather than drills down.
    pub fn is_leaf(&self) -> bool {
        self.subcategories.is_empty()
    }

    /// Accent color, treating an empty string as absent.
    pub fn accent(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_subcategories_are_leaves() {
        let missing: Category =
            serde_json::from_str(r#"{"id":"a","name":"Music","slug":"music"}"#).unwrap();
        let null: Category = serde_json::from_str(
            r#"{"id":"b","name":"Books","slug":"books","subcategories":null,"color":null}"#,
        )
        .unwrap();
        assert!(missing.is_leaf());
        assert!(null.is_leaf());
        assert_eq!(null.color, None);
    }

    #[test]
    fn nested_categories_decode_in_order() {
        let c: Category = serde_json::from_str(
            r##"{"id":"1","name":"Design","slug":"design","color":"#B5B9FF",
                "subcategories":[
                    {"id":"2","name":"UI/UX","slug":"ui-ux"},
                    {"id":"3","name":"Illustration","slug":"illustration"}
                ]}"##,
        )
        .unwrap();
        assert!(!c.is_leaf());
        let slugs: Vec<&str> = c.subcategories.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["ui-ux", "illustration"]);
        assert_eq!(c.accent(), Some("#B5B9FF"));
    }

    #[test]
    fn blank_color_has_no_accent() {
        let c = Category::new("1", "Other", Slug::new("other").unwrap()).with_color("  ");
        assert_eq!(c.accent(), None);
    }

    #[test]
    fn leaf_serializes_without_empty_fields() {
        let c = Category::new("7", "Music", Slug::new("music").unwrap());
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"id": "7", "name": "Music", "slug": "music"})
        );
    }
}
