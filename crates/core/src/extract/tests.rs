use pretty_assertions::assert_eq;

use super::*;
use crate::chain::{Extractor, ExtractorId};
use crate::source::{Position, StrSource};

fn at(text: &str, cursor: usize) -> String {
	logical_command_at(&StrSource::new(text), cursor, '\\')
}

#[test]
fn single_line_is_returned_trimmed() {
	assert_eq!(at("  echo hi  ", 0), "echo hi");
}

#[test]
fn block_joins_identically_from_every_cursor_line() {
	let text = "cargo build \\\n  --release \\\n  --quiet";
	for cursor in 0..3 {
		assert_eq!(at(text, cursor), "cargo build --release --quiet");
	}
}

#[test]
fn block_is_bounded_by_plain_lines() {
	let text = "before\nx \\\ny\nafter";
	assert_eq!(at(text, 0), "before");
	assert_eq!(at(text, 1), "x y");
	assert_eq!(at(text, 2), "x y");
	assert_eq!(at(text, 3), "after");
}

#[test]
fn midline_marker_is_literal() {
	assert_eq!(at("echo a\\b", 0), "echo a\\b");
	// Only a marker that is the last non-whitespace character continues.
	assert_eq!(at("echo \\ x \\\nnext", 0), "echo \\ x next");
}

#[test]
fn trailing_whitespace_after_marker_still_continues() {
	assert_eq!(at("a \\  \nb", 0), "a b");
	assert_eq!(at("a \\  \nb", 1), "a b");
}

#[test]
fn marker_only_line_collapses_to_single_space() {
	assert_eq!(at("a \\\n\\\nb", 0), "a b");
}

#[test]
fn empty_buffer_yields_empty_command() {
	assert_eq!(at("", 0), "");
}

#[test]
fn cursor_past_the_end_yields_empty_command() {
	assert_eq!(at("one line", 99), "");
}

#[test]
fn last_line_marker_does_not_scan_past_the_buffer() {
	assert_eq!(at("tail \\", 0), "tail");
}

#[test]
fn selection_bypasses_continuation_handling() {
	let source = StrSource::new("  foo \\\nbar baz")
		.with_selection(Position::new(0, 0), Position::new(1, 3));
	// Verbatim: leading whitespace and the marker survive.
	assert_eq!(command_text(&source, '\\'), "  foo \\\nbar");
}

#[test]
fn without_selection_command_text_uses_the_cursor_line() {
	let source = StrSource::new("first\nsecond").with_cursor(1);
	assert_eq!(command_text(&source, '\\'), "second");
}

#[test]
fn line_extractor_reports_the_line_id() {
	let extractor = LineExtractor::default();
	assert_eq!(extractor.id(), ExtractorId::Line);

	let source = StrSource::new("run \\\nme").with_cursor(1);
	assert_eq!(extractor.extract(&source), "run me");
}

#[test]
fn alternate_continuation_marker() {
	let source = StrSource::new("copy a ^\nb").with_cursor(0);
	assert_eq!(command_text(&source, '^'), "copy a b");
}
