//! Phone number recognition and normalization.
//!
//! Customer phone entries arrive as free text ("Ahmet +90 534 682 22 82
//! ustaya sor"), sometimes with notes in parentheses. Storage keeps a
//! digit-only national form with a leading zero; this module derives that
//! form, extracts numbers out of surrounding text, and splits raw entries
//! into styled segments for display.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::{PhoneSegment, SegmentStyle};

/// Phone shapes recognized inside free text, most specific first.
static EXTRACT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"\+90\s*\d{3}\s*\d{3}\s*\d{2}\s*\d{2}",
        r"\+90\d{10}",
        r"90\d{10}",
        r"0\d{10}",
        r"\d{11}",
    ])
});

/// Extended grammar used when rendering raw entries, including spaced
/// national forms.
static RENDER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_patterns(&[
        r"\+90\s*\d{3}\s*\d{3}\s*\d{2}\s*\d{2}",
        r"\+90\d{10}",
        r"90\d{10}",
        r"0\d{10}",
        r"0\d{3}\s*\d{3}\s*\d{2}\s*\d{2}",
        r"0\d{3}\s*\d{3}\s*\d{4}",
        r"\d{11}",
    ])
});

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{10,11}").expect("invalid pattern"));
static PAREN_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").expect("invalid pattern"));
static MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"//\s*\[\d+\]\s*").expect("invalid pattern"));
static LEADING_SLASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//\s*").expect("invalid pattern"));
static TRAILING_SLASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*//\s*$").expect("invalid pattern"));

fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("invalid phone pattern"))
        .collect()
}

/// Reduce a phone entry to its storage form: digits only, `90` country
/// prefix replaced by a leading zero, bare 10-digit numbers prefixed with
/// zero. No validation; sparse input comes back short.
pub fn normalize_for_storage(input: &str) -> String {
    let mut cleaned: String = input.chars().filter(char::is_ascii_digit).collect();

    if cleaned.starts_with("90") && cleaned.len() >= 12 {
        cleaned = format!("0{}", &cleaned[2..]);
    }

    if !cleaned.starts_with('0') && cleaned.len() == 10 {
        cleaned = format!("0{}", cleaned);
    }

    cleaned
}

/// Find the first phone-shaped substring in free text and return it in
/// storage form. Text with at least ten digits but no recognized shape is
/// normalized wholesale; anything else comes back unchanged, so callers
/// must not assume the result is a valid number.
pub fn extract_phone(text: &str) -> String {
    for pattern in EXTRACT_PATTERNS.iter() {
        if let Some(found) = pattern.find(text) {
            return normalize_for_storage(found.as_str());
        }
    }

    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 10 {
        return normalize_for_storage(&digits);
    }

    text.to_string()
}

/// Digits suitable for initiating a call. Idempotent over already
/// normalized input.
pub fn cleaned_for_dialing(raw_input: &str) -> String {
    normalize_for_storage(raw_input)
}

/// Remove stray `// [n]` index debris and bare leading/trailing slashes
/// from a text field, then trim. Idempotent.
pub fn strip_annotation_markers(text: &str) -> String {
    let cleaned = MARKER.replace_all(text, "");
    let cleaned = LEADING_SLASHES.replace_all(&cleaned, "");
    let cleaned = TRAILING_SLASHES.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

/// Split a raw phone entry into styled spans: parenthesized text becomes
/// an annotation span, everything else becomes a phone span with each
/// recognized number replaced by its storage form.
pub fn render_with_highlight(raw_input: &str) -> Vec<PhoneSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for span in PAREN_SPAN.find_iter(raw_input) {
        if span.start() > cursor {
            push_phone_span(&mut segments, &raw_input[cursor..span.start()]);
        }
        segments.push(PhoneSegment {
            text: span.as_str().to_string(),
            style: SegmentStyle::Annotation,
        });
        cursor = span.end();
    }

    if cursor < raw_input.len() {
        push_phone_span(&mut segments, &raw_input[cursor..]);
    }

    segments
}

fn push_phone_span(segments: &mut Vec<PhoneSegment>, text: &str) {
    if text.is_empty() {
        return;
    }
    segments.push(PhoneSegment {
        text: normalize_within(text),
        style: SegmentStyle::Phone,
    });
}

/// Replace every recognized phone substring in a span with its storage
/// form, leaving the surrounding text alone.
fn normalize_within(span: &str) -> String {
    for pattern in RENDER_PATTERNS.iter() {
        if pattern.is_match(span) {
            return pattern
                .replace_all(span, |caps: &regex::Captures| {
                    normalize_for_storage(&caps[0])
                })
                .into_owned();
        }
    }

    if DIGIT_RUN.is_match(span) {
        return DIGIT_RUN
            .replace_all(span, |caps: &regex::Captures| {
                normalize_for_storage(&caps[0])
            })
            .into_owned();
    }

    span.to_string()
}
