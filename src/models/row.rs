use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// One record of the list: a display name and the slug derived from it.
///
/// Serializes as a two-field CSV record in `(name, slug)` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    pub slug: String,
}

impl Row {
    /// Build a row from a display name, deriving its slug.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }
}

/// Convert names into rows, keeping their order.
pub fn rows_from_names<I, S>(names: I) -> Vec<Row>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Row::from_name).collect()
}
