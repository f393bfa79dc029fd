//! Location verification: the safety boundary between untrusted model output
//! and everything that renders or stores a span.
//!
//! The model reports where each discrepancy sits, either as a literal excerpt
//! or as claimed character offsets. Neither is trusted: excerpts are
//! re-searched in the exact source text, and claimed offsets are bounds- and
//! boundary-checked. Anything that fails resolves to `None` ("unlocatable"),
//! never a guessed span.

use crate::models::TextSpan;

/// Find the first occurrence of `phrase` in `content`.
///
/// Returns the half-open span of that occurrence, or `None` when the phrase
/// does not appear verbatim. Only the first occurrence is used; repeated
/// phrases are not disambiguated further.
pub fn find_text_location(content: &str, phrase: &str) -> Option<TextSpan> {
    if phrase.is_empty() {
        return None;
    }
    let start = content.find(phrase)?;
    Some(TextSpan::new(start, start + phrase.len()))
}

/// Validate a span against `content` and return it unchanged if sound.
///
/// Sound means `start < end`, `end <= content.len()`, and both offsets on
/// `char` boundaries (so `content[start..end]` is sliceable). Anything else
/// is `None`.
pub fn verify_span(content: &str, span: TextSpan) -> Option<TextSpan> {
    if span.start >= span.end || span.end > content.len() {
        return None;
    }
    if !content.is_char_boundary(span.start) || !content.is_char_boundary(span.end) {
        return None;
    }
    Some(span)
}

/// Validate model-claimed offsets, which arrive as signed JSON numbers.
pub fn verify_claimed_span(content: &str, start: i64, end: i64) -> Option<TextSpan> {
    if start < 0 || end < 0 {
        return None;
    }
    verify_span(content, TextSpan::new(start as usize, end as usize))
}

/// Resolve a discrepancy location from whatever the model supplied.
///
/// A non-empty excerpt always takes precedence over claimed offsets, because
/// literal text search is more trustworthy than unverified coordinates. When
/// an excerpt is supplied but not found, the result is `None` — there is no
/// fallback to the claimed span.
pub fn resolve_location(
    content: &str,
    excerpt: Option<&str>,
    claimed: Option<(i64, i64)>,
) -> Option<TextSpan> {
    match excerpt.filter(|p| !p.is_empty()) {
        Some(phrase) => find_text_location(content, phrase),
        None => claimed.and_then(|(start, end)| verify_claimed_span(content, start, end)),
    }
}
