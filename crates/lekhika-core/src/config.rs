//! Sectioned `key = value` parser shared by both data sources.
//!
//! The format looks like TOML but is recovered line by line: a malformed line
//! is skipped and parsing continues. Values may be quoted with `"` or `'`;
//! inside quotes `\\`, `\n` and `\t` are unescaped (any other escaped char
//! stands for itself). A `#` outside quotes starts a comment.

use tracing::{debug, debug_span};

/// One `[section]` of a parsed source, entries in file order.
#[derive(Debug, Default, Clone)]
pub struct Section {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

/// Parsed configuration source.
///
/// Lines that appear before the first `[section]` header are collected under
/// the unnamed section `""`, which no consumer reads.
#[derive(Debug, Default, Clone)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

impl ConfigDocument {
    /// All entries of every section named `name`, in file order.
    ///
    /// A section header may appear more than once; the entries of each
    /// occurrence are concatenated.
    pub fn entries<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.sections
            .iter()
            .filter(move |s| s.name == name)
            .flat_map(|s| s.entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.entries.is_empty())
    }
}

/// Parse a whole source. Never fails.
pub fn parse_config(text: &str) -> ConfigDocument {
    let _span = debug_span!("parse_config", bytes = text.len()).entered();

    let mut sections = vec![Section::default()];
    let mut skipped = 0usize;

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            sections.push(Section {
                name: line[1..line.len() - 1].trim().to_string(),
                entries: Vec::new(),
            });
            continue;
        }
        match parse_entry(line) {
            Some(entry) => {
                // `sections` always holds the unnamed leading section.
                if let Some(current) = sections.last_mut() {
                    current.entries.push(entry);
                }
            }
            None => {
                skipped += 1;
                debug!(line = lineno + 1, "skipping malformed config line");
            }
        }
    }

    debug!(sections = sections.len() - 1, skipped);
    ConfigDocument { sections }
}

/// Parse one `key = value` line. `None` for anything malformed.
fn parse_entry(line: &str) -> Option<(String, String)> {
    let eq = find_separator(line)?;
    let key = parse_scalar(line[..eq].trim())?;
    let value = parse_scalar(strip_comment(&line[eq + 1..]).trim())?;
    Some((key, value))
}

/// Byte offset of the `=` that separates key from value. A quoted key may
/// itself contain `=`.
fn find_separator(line: &str) -> Option<usize> {
    let first = line.chars().next()?;
    if first == '"' || first == '\'' {
        let close = closing_quote(line, first)?;
        return line[close + 1..].find('=').map(|i| close + 1 + i);
    }
    line.find('=')
}

/// Drop a trailing `# comment` that is not inside quotes.
fn strip_comment(value: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (Some(_), '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, '#') => return &value[..i],
            _ => {}
        }
    }
    value
}

/// Byte offset of the quote that closes the string opened at offset 0.
fn closing_quote(s: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(i);
        }
    }
    None
}

/// A bare or quoted scalar. Empty, unterminated, or trailing-garbage values
/// yield `None`.
fn parse_scalar(raw: &str) -> Option<String> {
    let first = raw.chars().next()?;
    let value = if first == '"' || first == '\'' {
        let close = closing_quote(raw, first)?;
        if !raw[close + 1..].trim().is_empty() {
            return None;
        }
        unescape(&raw[1..close])
    } else {
        raw.to_string()
    };
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
