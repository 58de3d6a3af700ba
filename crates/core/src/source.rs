//! Buffer access abstraction.
//!
//! The engine never touches editor internals. Hosts expose their buffer
//! through [`TextSource`], a read-only snapshot of line content, cursor
//! position, and any explicit selection, taken at dispatch time.

use std::borrow::Cow;

use ropey::Rope;

/// A (line, column) position in the host buffer. Columns are char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
	/// Zero-based physical line index.
	pub line: usize,
	/// Zero-based char offset within the line.
	pub column: usize,
}

impl Position {
	/// Creates a position from line and column.
	pub fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}
}

/// Read-only snapshot of the host buffer at dispatch time.
pub trait TextSource {
	/// Number of physical lines in the buffer.
	fn line_count(&self) -> usize;
	/// Content of line `i`, without its trailing newline.
	fn line_text(&self, i: usize) -> Cow<'_, str>;
	/// Line the cursor is on.
	fn cursor_line(&self) -> usize;
	/// Endpoints of the explicit selection, if one is active.
	fn selection(&self) -> Option<(Position, Position)>;
}

/// Returns the raw text between `start` and `end`, verbatim.
///
/// Explicit selections are taken literally: no trimming, no continuation
/// stripping. Multi-line selections keep their newlines.
pub fn selection_text(source: &dyn TextSource, start: Position, end: Position) -> String {
	if source.line_count() == 0 {
		return String::new();
	}
	let (start, end) = if end < start { (end, start) } else { (start, end) };
	let last = end.line.min(source.line_count() - 1);
	if start.line >= last {
		return slice_columns(&source.line_text(last), start.column, Some(end.column));
	}
	let mut out = slice_columns(&source.line_text(start.line), start.column, None);
	for i in start.line + 1..last {
		out.push('\n');
		out.push_str(&source.line_text(i));
	}
	out.push('\n');
	out.push_str(&slice_columns(&source.line_text(last), 0, Some(end.column)));
	out
}

/// Char-offset substring of `line`, clamped to its length.
fn slice_columns(line: &str, from: usize, to: Option<usize>) -> String {
	let start = byte_at(line, from);
	let end = to.map_or(line.len(), |column| byte_at(line, column));
	line[start..end.max(start)].to_string()
}

fn byte_at(line: &str, column: usize) -> usize {
	line.char_indices().nth(column).map_or(line.len(), |(byte, _)| byte)
}

/// [`TextSource`] over a borrowed string, for tests and simple hosts.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
	lines: Vec<&'a str>,
	cursor: usize,
	selection: Option<(Position, Position)>,
}

impl<'a> StrSource<'a> {
	/// Creates a source over `text` with the cursor on line 0.
	pub fn new(text: &'a str) -> Self {
		Self {
			lines: text.split('\n').collect(),
			cursor: 0,
			selection: None,
		}
	}

	/// Places the cursor on `line`.
	pub fn with_cursor(mut self, line: usize) -> Self {
		self.cursor = line;
		self
	}

	/// Marks an explicit selection from `start` to `end`.
	pub fn with_selection(mut self, start: Position, end: Position) -> Self {
		self.selection = Some((start, end));
		self
	}
}

impl TextSource for StrSource<'_> {
	fn line_count(&self) -> usize {
		self.lines.len()
	}

	fn line_text(&self, i: usize) -> Cow<'_, str> {
		Cow::Borrowed(self.lines.get(i).copied().unwrap_or(""))
	}

	fn cursor_line(&self) -> usize {
		self.cursor
	}

	fn selection(&self) -> Option<(Position, Position)> {
		self.selection
	}
}

/// [`TextSource`] over a [`ropey::Rope`], for rope-based hosts.
#[derive(Debug, Clone)]
pub struct RopeSource<'a> {
	rope: &'a Rope,
	cursor: usize,
	selection: Option<(Position, Position)>,
}

impl<'a> RopeSource<'a> {
	/// Creates a source over `rope` with the cursor on line 0.
	pub fn new(rope: &'a Rope) -> Self {
		Self {
			rope,
			cursor: 0,
			selection: None,
		}
	}

	/// Places the cursor on `line`.
	pub fn with_cursor(mut self, line: usize) -> Self {
		self.cursor = line;
		self
	}

	/// Marks an explicit selection from `start` to `end`.
	pub fn with_selection(mut self, start: Position, end: Position) -> Self {
		self.selection = Some((start, end));
		self
	}
}

impl TextSource for RopeSource<'_> {
	fn line_count(&self) -> usize {
		self.rope.len_lines()
	}

	fn line_text(&self, i: usize) -> Cow<'_, str> {
		if i >= self.rope.len_lines() {
			return Cow::Borrowed("");
		}
		// Rope lines keep their terminator; the trait contract excludes it.
		let text = Cow::<str>::from(self.rope.line(i));
		let content = text.trim_end_matches(['\r', '\n']).len();
		match text {
			Cow::Borrowed(s) => Cow::Borrowed(&s[..content]),
			Cow::Owned(mut s) => {
				s.truncate(content);
				Cow::Owned(s)
			}
		}
	}

	fn cursor_line(&self) -> usize {
		self.cursor
	}

	fn selection(&self) -> Option<(Position, Position)> {
		self.selection
	}
}
