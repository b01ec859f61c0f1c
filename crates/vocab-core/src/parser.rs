//! HTML definition extraction.
//!
//! Scraping is fragile, so the page-to-definitions step sits behind
//! [`DefinitionParser`] and can be tested and replaced without any network.

use regex::Regex;

/// Turns a fetched page into plain-text definition strings.
pub trait DefinitionParser: Send + Sync {
    fn parse(&self, page: &str) -> Vec<String>;
}

/// Extracts `<div class="def-content">` blocks from a dictionary page.
pub struct DefContentParser {
    block: Regex,
    tag: Regex,
}

impl DefContentParser {
    pub fn new() -> Self {
        Self {
            block: Regex::new(r#"(?s)<div class="def-content">(.*?)</div>"#)
                .expect("valid definition block pattern"),
            tag: Regex::new(r"<[^>]*>").expect("valid tag pattern"),
        }
    }
}

impl Default for DefContentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionParser for DefContentParser {
    fn parse(&self, page: &str) -> Vec<String> {
        self.block
            .captures_iter(page)
            .filter_map(|caps| caps.get(1))
            .map(|inner| {
                let text = self.tag.replace_all(inner.as_str(), "");
                decode_entities(&text).trim().to_string()
            })
            .filter(|def| !def.is_empty())
            .collect()
    }
}

/// Format definitions as `\n1. <def>\n2. <def>...` with whitespace collapsed.
pub fn number_definitions(defs: &[String]) -> String {
    let mut out = String::new();
    for (i, def) in defs.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, def));
    }
    collapse_whitespace(&out)
}

/// Convert tabs to spaces and squeeze runs of spaces, line by line.
pub fn collapse_whitespace(text: &str) -> String {
    text.split('\n')
        .map(collapse_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev_space = false;
    for c in line.chars() {
        let c = if c == '\t' { ' ' } else { c };
        if c == ' ' && prev_space {
            continue;
        }
        prev_space = c == ' ';
        out.push(c);
    }
    out
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
