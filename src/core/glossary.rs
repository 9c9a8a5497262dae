//! Static glossary of Git terms for learners.
//!
//! Terms load once from a bundled JSON document. A missing or malformed
//! source is logged and degrades to an empty glossary; it is never fatal.

use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const BUNDLED_TERMS: &str = include_str!("../../data/glossary.json");

/// One glossary entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub short_desc: String,
    pub description: String,
    #[serde(default)]
    pub related: Vec<String>,
    #[serde(default)]
    pub command: String,
}

#[derive(Debug, Deserialize)]
struct GlossaryDocument {
    terms: Vec<GlossaryTerm>,
}

/// Read-only term lookup, keyed by term name.
#[derive(Debug, Default)]
pub struct Glossary {
    terms: BTreeMap<String, GlossaryTerm>,
}

impl Glossary {
    /// Load the glossary bundled with the binary.
    pub fn bundled() -> Self {
        Self::from_source(BUNDLED_TERMS, "bundled glossary")
    }

    /// Load a glossary from an external JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_source(&source, &path.display().to_string()),
            Err(e) => {
                warn!("could not read glossary file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn from_source(source: &str, origin: &str) -> Self {
        match serde_json::from_str::<GlossaryDocument>(source) {
            Ok(document) => {
                let terms = document
                    .terms
                    .into_iter()
                    .map(|t| (t.term.clone(), t))
                    .collect();
                Glossary { terms }
            }
            Err(e) => {
                warn!("could not parse {origin}: {e}");
                Self::default()
            }
        }
    }

    pub fn term(&self, name: &str) -> Option<&GlossaryTerm> {
        self.terms.get(name)
    }

    /// All terms in alphabetical order.
    pub fn all_terms(&self) -> impl Iterator<Item = &GlossaryTerm> {
        self.terms.values()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
