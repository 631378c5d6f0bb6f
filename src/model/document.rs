//! Building model document - the host-exported element catalog
//!
//! A document is a flat, ordered list of elements as exported by the host
//! modeling application. The helper never owns host objects; elements are
//! plain records identified by their host id.

use serde::{Deserialize, Serialize};

/// Category name under which the host files level elements
pub const LEVEL_CATEGORY: &str = "Levels";

/// A building model document (host JSON export)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Project name, if the export carries one
    #[serde(default)]
    pub project: Option<String>,
    /// All exported elements, in host order
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    /// Iterate elements of one category, preserving host order
    pub fn elements_of_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Element> {
        self.elements.iter().filter(move |e| e.category == category)
    }
}

/// A raw host element
///
/// Only the fields the picker needs are modeled; unknown export fields
/// are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Present only for level elements
    #[serde(default)]
    pub elevation: Option<f64>,
}

impl Element {
    /// Try to view this element as a level
    ///
    /// The category query can return a superset (the host files some
    /// non-level annotations under the same category), so requiring an
    /// elevation is the subtype check.
    pub fn as_level(&self) -> Option<Level> {
        if self.category != LEVEL_CATEGORY {
            return None;
        }
        let elevation = self.elevation?;
        Some(Level {
            id: self.id.clone(),
            name: self.name.clone(),
            elevation,
        })
    }
}

/// A level element - the picker's candidate type
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub elevation: f64,
}

impl Level {
    pub fn formatted_elevation(&self) -> String {
        format!("{:+.2}", self.elevation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_parses_and_ignores_unknown_fields() {
        let json = r#"{
            "project": "Office Tower",
            "exporter_version": "2.1",
            "elements": [
                {"id": "e1", "name": "Level 1", "category": "Levels", "elevation": 0.0, "phase": "New"},
                {"id": "e2", "name": "North Wall", "category": "Walls"}
            ]
        }"#;

        let document: Document = serde_json::from_str(json).expect("valid document");
        assert_eq!(document.project.as_deref(), Some("Office Tower"));
        assert_eq!(document.elements.len(), 2);
        assert_eq!(document.elements[0].elevation, Some(0.0));
        assert_eq!(document.elements[1].elevation, None);
    }

    #[test]
    fn test_as_level_requires_category_and_elevation() {
        let level = Element {
            id: "e1".to_string(),
            name: "Level 1".to_string(),
            category: LEVEL_CATEGORY.to_string(),
            elevation: Some(3.5),
        };
        assert!(level.as_level().is_some());

        let wrong_category = Element {
            id: "e2".to_string(),
            name: "North Wall".to_string(),
            category: "Walls".to_string(),
            elevation: Some(3.5),
        };
        assert!(wrong_category.as_level().is_none());

        let no_elevation = Element {
            id: "e3".to_string(),
            name: "Level Annotation".to_string(),
            category: LEVEL_CATEGORY.to_string(),
            elevation: None,
        };
        assert!(no_elevation.as_level().is_none());
    }

    #[test]
    fn test_elements_of_category_preserves_order() {
        let document = Document {
            project: None,
            elements: vec![
                Element {
                    id: "b".to_string(),
                    name: "Level B".to_string(),
                    category: LEVEL_CATEGORY.to_string(),
                    elevation: Some(4.0),
                },
                Element {
                    id: "w".to_string(),
                    name: "Wall".to_string(),
                    category: "Walls".to_string(),
                    elevation: None,
                },
                Element {
                    id: "a".to_string(),
                    name: "Level A".to_string(),
                    category: LEVEL_CATEGORY.to_string(),
                    elevation: Some(0.0),
                },
            ],
        };

        let ids: Vec<&str> = document
            .elements_of_category(LEVEL_CATEGORY)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
