use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::PrefixIndex;

/// Terms served when no word-list file is given.
pub const BUILTIN_TERMS: [&str; 6] = [
    "interface",
    "inet",
    "address",
    "access-list",
    "family",
    "ethernet-switching",
];

/// The fixed set of terms the service suggests from.
///
/// Built once before serving and only read afterwards; share it with
/// `Arc<Vocabulary>`.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: PrefixIndex<String>,
}

impl Vocabulary {
    /// The built-in word list.
    pub fn builtin() -> Self {
        Self::from_terms(BUILTIN_TERMS)
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = PrefixIndex::new();
        for term in terms {
            let term: String = term.into();
            index.insert(term.clone(), term);
        }
        Vocabulary { index }
    }

    /// Reads one term per line. Surrounding whitespace is trimmed; blank
    /// lines and lines starting with `#` are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadVocabulary {
            path: path.to_path_buf(),
            source,
        })?;

        let vocabulary = Self::from_terms(parse_terms(&contents));
        debug!(
            "Parsed {} terms from {}",
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// Loads `path` if given, otherwise the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let vocabulary = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::builtin(),
        };
        info!("Vocabulary ready with {} terms", vocabulary.len());
        Ok(vocabulary)
    }

    /// Every term starting with `prefix`, in ascending code point order.
    /// The empty prefix returns the whole vocabulary.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.index.prefix_values(prefix).cloned().collect()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn parse_terms(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
