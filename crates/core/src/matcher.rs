//! Start-anchored prefix matchers.
//!
//! Pure classification helpers for handler actions. Both functions enforce
//! anchoring at offset 0, regardless of whether the pattern itself carries
//! `^`: a match further into the string is a no-match.

use regex::Regex;

/// Returns the text following a prefix match.
///
/// `None` when `pattern` does not match at the start of `text`; that is the
/// no-match signal dispatch uses to fall through to the next handler.
pub fn strip_prefix<'t>(text: &'t str, pattern: &Regex) -> Option<&'t str> {
	let found = pattern.find(text)?;
	(found.start() == 0).then(|| &text[found.end()..])
}

/// Returns the matched prefix itself, not the remainder.
///
/// `None` when `pattern` does not match at the start of `text`.
pub fn match_prefix<'t>(text: &'t str, pattern: &Regex) -> Option<&'t str> {
	let found = pattern.find(text)?;
	(found.start() == 0).then(|| found.as_str())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn re(pattern: &str) -> Regex {
		Regex::new(pattern).unwrap()
	}

	#[test]
	fn strip_prefix_returns_remainder() {
		assert_eq!(strip_prefix("@ foo.txt", &re(r"^@\s+")), Some("foo.txt"));
	}

	#[test]
	fn strip_prefix_rejects_unprefixed_text() {
		assert_eq!(strip_prefix("foo.txt", &re(r"^@\s+")), None);
	}

	#[test]
	fn match_prefix_returns_the_match_itself() {
		assert_eq!(
			match_prefix("http://example.com/docs now", &re(r"^https?://\S+")),
			Some("http://example.com/docs")
		);
	}

	#[test]
	fn mid_string_match_is_rejected() {
		// Anchored prefix test, not substring search.
		assert_eq!(match_prefix("visit http://example.com now", &re(r"^https?://\S+")), None);
		assert_eq!(match_prefix("visit http://example.com now", &re(r"https?://\S+")), None);
	}

	#[test]
	fn anchoring_holds_without_caret_in_pattern() {
		assert_eq!(strip_prefix("@ foo.txt", &re(r"@\s+")), Some("foo.txt"));
	}
}
