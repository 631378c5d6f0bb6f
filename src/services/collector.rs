//! Level collection from a host document

use crate::model::{Document, Element, Level, LEVEL_CATEGORY};

/// Collect all levels from the document, in host order
///
/// The category query can return a superset, so each element is checked
/// with the subtype filter before it is offered to the picker. Pure read,
/// possibly empty.
pub fn collect_levels(document: &Document) -> Vec<Level> {
    document
        .elements_of_category(LEVEL_CATEGORY)
        .filter_map(Element::as_level)
        .collect()
}
