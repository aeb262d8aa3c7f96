use std::fmt;

// @module: Text sanitization for LaTeX embedding

/// Classification of a raw cell value before escaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellOutcome {
    // @variant: Value was absent or empty
    Missing,

    // @variant: Value contained the exclusion marker
    Excluded,

    // @variant: Value survived, escaped and trimmed
    Present(String),
}

impl fmt::Display for CellOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Excluded => write!(f, "excluded"),
            Self::Present(text) => write!(f, "{}", text),
        }
    }
}

/// Classify a raw cell value and escape it for LaTeX if it survives.
///
/// A value is `Missing` when absent or empty, `Excluded` when it contains
/// the exclusion marker substring anywhere (the whole value is dropped,
/// never partially redacted), and `Present` otherwise with all
/// LaTeX-reserved characters escaped, the German umlauts and sharp s
/// transliterated to their LaTeX commands, and surrounding whitespace
/// trimmed.
pub fn classify(raw: Option<&str>, exclusion_marker: &str) -> CellOutcome {
    let Some(value) = raw else {
        return CellOutcome::Missing;
    };

    if value.is_empty() {
        return CellOutcome::Missing;
    }

    if !exclusion_marker.is_empty() && value.contains(exclusion_marker) {
        return CellOutcome::Excluded;
    }

    CellOutcome::Present(escape_latex(value).trim().to_string())
}

/// Sanitize a raw cell value, returning only surviving text.
pub fn clean(raw: Option<&str>, exclusion_marker: &str) -> Option<String> {
    match classify(raw, exclusion_marker) {
        CellOutcome::Present(text) if !text.is_empty() => Some(text),
        _ => None,
    }
}

// @escapes: Reserved characters and umlauts, one pass
// Each source character is mapped exactly once so escape output is never
// itself re-escaped (a sequential substring replace would mangle the
// backslashes introduced by earlier replacements).
fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("\\&"),
            '%' => escaped.push_str("\\%"),
            '$' => escaped.push_str("\\$"),
            '#' => escaped.push_str("\\#"),
            '_' => escaped.push_str("\\_"),
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '\\' => escaped.push_str("\\textbackslash{}"),
            'ä' => escaped.push_str("{\\\"a}"),
            'ö' => escaped.push_str("{\\\"o}"),
            'ü' => escaped.push_str("{\\\"u}"),
            'Ä' => escaped.push_str("{\\\"A}"),
            'Ö' => escaped.push_str("{\\\"O}"),
            'Ü' => escaped.push_str("{\\\"U}"),
            'ß' => escaped.push_str("{\\ss}"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Escape a source file stem for inline use in the report.
///
/// Deliberately narrower than `classify`: only underscores and the
/// umlaut/sharp-s set are rewritten, since file stems are assumed free of
/// the other LaTeX-reserved characters. Keep this separate from the main
/// sanitizer - the rule sets differ.
pub fn escape_source_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());

    for c in name.chars() {
        match c {
            '_' => escaped.push_str("\\textunderscore{}"),
            'ä' => escaped.push_str("{\\\"a}"),
            'ö' => escaped.push_str("{\\\"o}"),
            'ü' => escaped.push_str("{\\\"u}"),
            'Ä' => escaped.push_str("{\\\"A}"),
            'Ö' => escaped.push_str("{\\\"O}"),
            'Ü' => escaped.push_str("{\\\"U}"),
            'ß' => escaped.push_str("{\\ss}"),
            _ => escaped.push(c),
        }
    }

    escaped
}
