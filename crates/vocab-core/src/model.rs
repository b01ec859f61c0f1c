//! Core data model types for vocab.

use std::fmt;

/// Which tier produced a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// A user-authored file in the overrides directory.
    UserOverride,
    /// The secondary dictionary lookup.
    Dictionary,
    /// Definitions scraped from a dictionary web page.
    WebScrape,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionKind::UserOverride => write!(f, "user definition"),
            DefinitionKind::Dictionary => write!(f, "dictionary"),
            DefinitionKind::WebScrape => write!(f, "web"),
        }
    }
}

/// An unstructured definition attributed to exactly one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// The word or phrase as it was looked up.
    pub word: String,
    /// Where the text came from.
    pub kind: DefinitionKind,
    /// The definition text, returned as-is.
    pub text: String,
}

impl Definition {
    pub fn new(word: impl Into<String>, kind: DefinitionKind, text: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            kind,
            text: text.into(),
        }
    }
}

/// Definitions for one part of speech, as returned by a dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningGroup {
    /// Part-of-speech label (e.g. "noun").
    pub part_of_speech: String,
    /// Definition lines in the order the dictionary returned them.
    pub definitions: Vec<String>,
}

/// Render meaning groups as a part-of-speech label followed by numbered,
/// tab-indented definitions. Groups without definitions are skipped.
pub fn format_meanings(groups: &[MeaningGroup]) -> String {
    let mut out = String::new();
    for group in groups.iter().filter(|g| !g.definitions.is_empty()) {
        out.push_str(&group.part_of_speech);
        for (i, def) in group.definitions.iter().enumerate() {
            out.push_str(&format!("\n\t{}. {}", i + 1, def));
        }
        out.push('\n');
    }
    out
}
