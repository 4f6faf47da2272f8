use std::collections::BTreeMap;

/// Fold a header label into its canonical lookup form.
///
/// The exports write the same logical header with several byte-distinct dash
/// characters (en dash, em dash, minus sign) and uneven whitespace, so all
/// dash variants map to an ASCII hyphen, whitespace collapses to single
/// spaces, and the result is lowercased. A leading BOM is dropped.
pub fn canonical_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut canonical = String::with_capacity(trimmed.len());
    let mut pending_space = false;
    for ch in trimmed.chars() {
        let ch = fold_dash(ch);
        if ch.is_whitespace() {
            pending_space = !canonical.is_empty();
            continue;
        }
        if pending_space {
            canonical.push(' ');
            pending_space = false;
        }
        for lower in ch.to_lowercase() {
            canonical.push(lower);
        }
    }
    canonical
}

fn fold_dash(ch: char) -> char {
    match ch {
        // hyphen, non-breaking hyphen, figure dash, en dash, em dash, minus sign
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
        other => other,
    }
}

/// Lookup table from canonical header form to the raw header as read.
///
/// Built once per table; spec lookups canonicalize their source label and
/// resolve to whichever raw spelling this particular export used.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    by_canonical: BTreeMap<String, String>,
}

impl HeaderIndex {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut by_canonical = BTreeMap::new();
        for header in headers {
            let raw = header.as_ref();
            let canonical = canonical_header(raw);
            if canonical.is_empty() {
                continue;
            }
            // First spelling wins when an export repeats a header.
            by_canonical.entry(canonical).or_insert_with(|| raw.to_string());
        }
        Self { by_canonical }
    }

    /// Resolve a source label to the raw header present in this table.
    pub fn resolve(&self, source_label: &str) -> Option<&str> {
        self.by_canonical
            .get(&canonical_header(source_label))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_canonical.is_empty()
    }
}
