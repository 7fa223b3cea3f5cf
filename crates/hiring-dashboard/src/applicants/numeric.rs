use serde::{Serialize, Serializer};

/// A display string such as `"$12,450"` paired with the number parsed from it at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedNumber {
    display: String,
    value: f64,
    has_digits: bool,
}

impl FormattedNumber {
    pub fn parse(display: impl Into<String>) -> Self {
        let display = display.into();
        let parsed = parse_formatted(&display);
        Self {
            value: parsed.unwrap_or(0.0),
            has_digits: parsed.is_some(),
            display,
        }
    }

    /// Pairs a value that arrived as a number with its display text, skipping the text parser.
    pub fn from_value(display: impl Into<String>, value: f64) -> Self {
        Self {
            display: display.into(),
            value,
            has_digits: true,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// True when the source text was non-blank but carried no digits, so the value fell back to 0.
    pub fn is_coerced(&self) -> bool {
        !self.has_digits && !self.display.trim().is_empty()
    }
}

impl Default for FormattedNumber {
    fn default() -> Self {
        Self::parse(String::new())
    }
}

impl Serialize for FormattedNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

/// Keeps only digits and decimal points, then reads the longest `digits[.digits]` prefix.
/// Returns `None` when no digit survives.
pub(crate) fn parse_formatted(raw: &str) -> Option<f64> {
    let kept: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();

    let mut end = 0;
    let mut seen_point = false;
    let mut seen_digit = false;
    for (idx, ch) in kept.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    kept[..end].trim_end_matches('.').parse::<f64>().ok()
}
