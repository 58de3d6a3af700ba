//! End-to-end routing through the default chain.
//!
//! External programs are pointed at `true` so launches are harmless; the
//! assertions are on which handler fired, since launch outcomes are
//! deliberately unobservable.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use runline_core::{ActionContext, EditorOps, LaunchConfig, Position, StrSource, dispatch};
use runline_launch::builtin_chain;

#[derive(Default)]
struct RecordingEditor {
	opened: Vec<PathBuf>,
}

impl EditorOps for RecordingEditor {
	fn open_file(&mut self, path: &Path) {
		self.opened.push(path.to_path_buf());
	}
}

fn quiet_config() -> LaunchConfig {
	LaunchConfig {
		open_command: "true".to_string(),
		terminal_command: "true".to_string(),
		..LaunchConfig::default()
	}
}

fn route_source(source: &StrSource<'_>, editor: &mut RecordingEditor) -> Option<&'static str> {
	let config = quiet_config();
	let chain = builtin_chain(&config);
	let mut cx = ActionContext {
		config: &config,
		workdir: None,
		editor,
	};
	dispatch(&chain, source, &mut cx)
}

fn route(text: &str) -> Option<&'static str> {
	let mut editor = RecordingEditor::default();
	route_source(&StrSource::new(text), &mut editor)
}

#[test]
fn at_prefix_opens_in_the_editor() {
	let mut editor = RecordingEditor::default();
	let fired = route_source(&StrSource::new("@ notes.txt"), &mut editor);
	assert_eq!(fired, Some("open-file"));
	assert_eq!(editor.opened, [PathBuf::from("notes.txt")]);
}

#[test]
fn tilde_prefix_routes_to_system_open() {
	assert_eq!(route("~ report.pdf"), Some("system-open"));
}

#[test]
fn dollar_prefix_routes_to_terminal_run() {
	assert_eq!(route("$ echo hi"), Some("terminal-run"));
}

#[test]
fn leading_url_routes_to_url_open() {
	assert_eq!(route("https://example.com/docs"), Some("url-open"));
}

#[test]
fn mid_string_url_is_not_a_url_dispatch() {
	assert_eq!(route("visit http://example.com now"), Some("shell-run"));
}

#[test]
fn existing_directory_routes_to_dir_terminal() {
	let dir = tempfile::tempdir().unwrap();
	assert_eq!(route(dir.path().to_str().unwrap()), Some("dir-terminal"));
}

#[test]
fn plain_text_falls_back_to_shell_run() {
	assert_eq!(route("exit 0"), Some("shell-run"));
}

#[test]
fn empty_buffer_falls_back_to_shell_run() {
	assert_eq!(route(""), Some("shell-run"));
}

#[test]
fn continued_block_routes_from_any_cursor_line() {
	let text = "$ echo \\\nhi";
	for cursor in 0..2 {
		let mut editor = RecordingEditor::default();
		let source = StrSource::new(text).with_cursor(cursor);
		assert_eq!(route_source(&source, &mut editor), Some("terminal-run"));
	}
}

#[test]
fn explicit_selection_is_taken_literally() {
	// Selecting past the `$ ` prefix leaves plain text, so the terminal
	// handler no longer matches and the shell fallback fires.
	let mut editor = RecordingEditor::default();
	let source = StrSource::new("$ echo hi")
		.with_selection(Position::new(0, 2), Position::new(0, 9));
	assert_eq!(route_source(&source, &mut editor), Some("shell-run"));
}
