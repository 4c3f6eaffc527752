//! Reading a generated list back for lookups.
//!
//! Entries are numbered by their 1-based position in the file, which matches
//! Pokedex order when the source list is in Pokedex order.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use inflector::Inflector;
use tracing::debug;

use crate::error::{ListError, Result};
use crate::models::Row;
use crate::slug::slugify;

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based position in the list
    pub dex: usize,
    pub name: String,
    pub slug: String,
}

/// What the user asked for on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    DexId(usize),
    /// A display name or a slug
    Name(String),
}

impl Query {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match text.parse::<usize>() {
            Ok(dex) => Query::DexId(dex),
            Err(_) => Query::Name(text.to_string()),
        }
    }
}

/// A parsed `name,slug` list.
#[derive(Debug)]
pub struct NameList {
    entries: Vec<Entry>,
    /// Slug -> index of its first entry
    by_slug: HashMap<String, usize>,
    /// Lowercased name -> index of its first entry
    by_name: HashMap<String, usize>,
}

impl NameList {
    /// Read a list CSV from disk
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ListError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    /// Parse a list CSV; `path` is only used in errors
    pub fn from_reader<R: Read>(reader: R, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut entries = Vec::new();
        let mut by_slug = HashMap::new();
        let mut by_name = HashMap::new();

        for result in reader.records() {
            let record = result.map_err(|source| ListError::Csv {
                path: path.clone(),
                source,
            })?;

            if record.len() != 2 {
                return Err(ListError::MalformedRow {
                    path,
                    line: record.position().map_or(0, |p| p.line()),
                    message: format!("expected 2 fields, found {}", record.len()),
                });
            }

            let row: Row = record.deserialize(None).map_err(|source| ListError::Csv {
                path: path.clone(),
                source,
            })?;

            let idx = entries.len();
            let entry = Entry {
                dex: idx + 1,
                name: row.name,
                slug: row.slug,
            };
            by_slug.entry(entry.slug.clone()).or_insert(idx);
            by_name.entry(entry.name.to_lowercase()).or_insert(idx);
            entries.push(entry);
        }

        debug!("Loaded {} entries from {:?}", entries.len(), path);
        Ok(Self {
            entries,
            by_slug,
            by_name,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up by 1-based dex number
    pub fn get_by_id(&self, dex: usize) -> Option<&Entry> {
        dex.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Entry> {
        self.by_slug.get(slug).map(|&idx| &self.entries[idx])
    }

    /// Case-insensitive lookup on the name column
    pub fn find_by_name(&self, name: &str) -> Option<&Entry> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    /// Resolve a query: dex number, then name, then slug (as given or slugified)
    pub fn resolve(&self, query: &Query) -> Option<&Entry> {
        match query {
            Query::DexId(dex) => self.get_by_id(*dex),
            Query::Name(text) => self
                .find_by_name(text)
                .or_else(|| self.get_by_slug(text))
                .or_else(|| self.get_by_slug(&slugify(text))),
        }
    }

    /// Resolve raw command-line text, failing when nothing matches
    pub fn lookup(&self, text: &str) -> Result<&Entry> {
        self.resolve(&Query::parse(text))
            .ok_or_else(|| ListError::UnknownQuery {
                query: text.to_string(),
            })
    }

    /// The recorded display name for `slug`, or a best-effort formatting of it
    pub fn display_name(&self, slug: &str) -> String {
        match self.get_by_slug(slug) {
            Some(entry) => entry.name.clone(),
            None => format_slug(slug),
        }
    }
}

/// "mr-mime" -> "Mr Mime". Symbols such as `♀` are dropped.
fn format_slug(slug: &str) -> String {
    slug.replace('-', " ").replace('\'', "").to_title_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = "Bulbasaur,bulbasaur\nMr. Mime,mr-mime\n,\nMr Mime,mr-mime\n\"Type: Null\",type-null\n";

    fn list() -> NameList {
        NameList::from_reader(LIST.as_bytes(), "list.csv").unwrap()
    }

    #[test]
    fn test_from_reader_keeps_blank_rows() {
        let list = list();
        assert_eq!(list.len(), 5);
        assert_eq!(list.entries()[2].name, "");
        assert_eq!(list.entries()[2].slug, "");
        assert_eq!(list.entries()[4].dex, 5);
    }

    #[test]
    fn test_get_by_id() {
        let list = list();
        assert_eq!(list.get_by_id(1).unwrap().slug, "bulbasaur");
        assert_eq!(list.get_by_id(2).unwrap().name, "Mr. Mime");
        assert!(list.get_by_id(0).is_none());
        assert!(list.get_by_id(6).is_none());
    }

    #[test]
    fn test_get_by_slug_first_wins() {
        let list = list();
        assert_eq!(list.get_by_slug("mr-mime").unwrap().name, "Mr. Mime");
        assert!(list.get_by_slug("pikachu").is_none());
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let list = list();
        assert_eq!(list.find_by_name("BULBASAUR").unwrap().dex, 1);
        assert_eq!(list.find_by_name("mr mime").unwrap().dex, 4);
    }

    #[test]
    fn test_resolve() {
        let list = list();
        assert_eq!(list.resolve(&Query::parse("5")).unwrap().slug, "type-null");
        assert_eq!(list.resolve(&Query::parse("type-null")).unwrap().dex, 5);
        assert_eq!(list.resolve(&Query::parse("type: null")).unwrap().dex, 5);
        assert_eq!(list.resolve(&Query::parse("MR.  MIME")), None);
        assert!(list.resolve(&Query::parse("0")).is_none());
    }

    #[test]
    fn test_lookup() {
        let list = list();
        assert_eq!(list.lookup("2").unwrap().slug, "mr-mime");
        assert_eq!(list.lookup("Bulbasaur").unwrap().dex, 1);
    }

    #[test]
    fn test_lookup_unknown_is_error() {
        let list = list();
        for query in ["pikachu", "0", "6"] {
            match list.lookup(query) {
                Err(ListError::UnknownQuery { query: q }) => assert_eq!(q, query),
                other => panic!("expected UnknownQuery, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_query_parse() {
        assert_eq!(Query::parse("25"), Query::DexId(25));
        assert_eq!(Query::parse(" Pikachu "), Query::Name("Pikachu".to_string()));
        assert_eq!(Query::parse("-1"), Query::Name("-1".to_string()));
    }

    #[test]
    fn test_display_name() {
        let list = list();
        assert_eq!(list.display_name("mr-mime"), "Mr. Mime");
        assert_eq!(list.display_name("tapu-koko"), "Tapu Koko");
        assert_eq!(list.display_name("sirfetch'd"), "Sirfetchd");
        assert_eq!(list.display_name("jangmo-o"), "Jangmo O");
    }

    #[test]
    fn test_display_name_fallback_drops_symbols() {
        let list = list();
        assert_eq!(list.display_name("nidoran♀"), "Nidoran");
    }

    #[test]
    fn test_malformed_row() {
        let err = NameList::from_reader("Bulbasaur,bulbasaur\nIvysaur\n".as_bytes(), "list.csv")
            .unwrap_err();
        match err {
            ListError::MalformedRow { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = NameList::read(&dir.path().join("list.csv")).err().unwrap();
        assert!(matches!(err, ListError::Read { .. }));
    }
}
