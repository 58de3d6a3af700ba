//! Logical-command extraction.
//!
//! A dispatch starts from whatever the user points at. An explicit selection
//! is taken verbatim; otherwise the line under the cursor is expanded into
//! the full continuation-chained block it belongs to and joined into a
//! single command string. Extraction never fails — degenerate buffers yield
//! an empty string that flows through the chain like any other text.

use crate::chain::{Extractor, ExtractorId};
use crate::source::{TextSource, selection_text};

#[cfg(test)]
mod tests;

/// Extracts the command text for the current dispatch.
///
/// Explicit selections bypass continuation handling entirely: what the user
/// selected is what the handlers see, untrimmed. Implicit line-based
/// extraction is continuation-aware.
pub fn command_text(source: &dyn TextSource, continuation: char) -> String {
	if let Some((start, end)) = source.selection() {
		return selection_text(source, start, end);
	}
	logical_command_at(source, source.cursor_line(), continuation)
}

/// Joins the continuation block around `cursor_line` into one logical command.
///
/// The block is the maximal run of lines chained by a trailing continuation
/// marker, found by scanning upward and downward from the cursor; the cursor
/// may sit on any line of the block and the result is identical. Each line
/// is trimmed, a single trailing marker is dropped, and the fragments are
/// joined with single spaces.
pub fn logical_command_at(source: &dyn TextSource, cursor_line: usize, continuation: char) -> String {
	let count = source.line_count();
	if count == 0 || cursor_line >= count {
		return String::new();
	}

	// Upward scan: a line above that ends with the marker chains into the
	// current block start. The start index decreases by exactly one per
	// step, so termination is by construction.
	let mut start = cursor_line;
	while start > 0 && continues(&source.line_text(start - 1), continuation) {
		start -= 1;
	}

	// Downward scan from the true start captures the complete block,
	// wherever the cursor sat inside it.
	let mut end = start;
	while end + 1 < count && continues(&source.line_text(end), continuation) {
		end += 1;
	}

	let mut fragments: Vec<String> = Vec::with_capacity(end - start + 1);
	for i in start..=end {
		let line = source.line_text(i);
		let trimmed = line.trim();
		let fragment = trimmed
			.strip_suffix(continuation)
			.map(str::trim_end)
			.unwrap_or(trimmed);
		// A marker-only line contributes nothing; skipping it keeps the
		// continuation boundary collapsed to a single space.
		if !fragment.is_empty() {
			fragments.push(fragment.to_string());
		}
	}
	fragments.join(" ")
}

/// True when `line`'s last non-whitespace character is the marker.
fn continues(line: &str, continuation: char) -> bool {
	line.trim_end().ends_with(continuation)
}

/// Default extractor: selection verbatim, else the continuation-joined line.
///
/// All six built-in handlers share one of these, so a full fall-through
/// still scans the buffer exactly once.
#[derive(Debug, Clone, Copy)]
pub struct LineExtractor {
	continuation: char,
}

impl LineExtractor {
	/// Creates an extractor using `continuation` as the trailing marker.
	pub fn new(continuation: char) -> Self {
		Self { continuation }
	}
}

impl Default for LineExtractor {
	fn default() -> Self {
		Self::new('\\')
	}
}

impl Extractor for LineExtractor {
	fn id(&self) -> ExtractorId {
		ExtractorId::Line
	}

	fn extract(&self, source: &dyn TextSource) -> String {
		command_text(source, self.continuation)
	}
}
