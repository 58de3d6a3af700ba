//! The six built-in handlers.
//!
//! Priority order is part of the contract: file open, system open, terminal
//! run, URL open, directory terminal, then the silent shell fallback, which
//! always matches. All six share one [`LineExtractor`], so a dispatch scans
//! the buffer once no matter how far it falls through the chain.

use std::process::Command;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use runline_core::{
	Action, ActionContext, Handler, HandlerChain, LaunchConfig, LineExtractor, match_prefix,
	strip_prefix,
};

use crate::{opener, spawn, terminal};


static OPEN_FILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@\s+").expect("valid prefix pattern"));
static SYSTEM_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^~\s+").expect("valid prefix pattern"));
static TERMINAL_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\$\s+").expect("valid prefix pattern"));
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://\S+").expect("valid prefix pattern"));

/// `@ <path>` — open the file in the host editor.
///
/// The only built-in that is not a process launch: the path goes to the
/// host's own buffer-open through [`runline_core::EditorOps`].
pub struct OpenFile;

impl Action for OpenFile {
	fn run(&self, text: &str, cx: &mut ActionContext<'_>) -> bool {
		let Some(payload) = strip_prefix(text, &OPEN_FILE) else {
			return false;
		};
		let path = cx.resolve(payload);
		tracing::debug!(path = %path.display(), "builtin.open_file");
		cx.editor.open_file(&path);
		true
	}
}

/// `~ <path>` — hand the file to the OS default handler.
pub struct SystemOpen;

impl Action for SystemOpen {
	fn run(&self, text: &str, cx: &mut ActionContext<'_>) -> bool {
		let Some(payload) = strip_prefix(text, &SYSTEM_OPEN) else {
			return false;
		};
		let path = cx.resolve(payload);
		tracing::debug!(path = %path.display(), "builtin.system_open");
		spawn::detached(opener::open_command(cx.config, &path));
		true
	}
}

/// `$ <command>` — run the command inside a terminal.
pub struct TerminalRun;

impl Action for TerminalRun {
	fn run(&self, text: &str, cx: &mut ActionContext<'_>) -> bool {
		let Some(payload) = strip_prefix(text, &TERMINAL_RUN) else {
			return false;
		};
		tracing::debug!(command = payload, "builtin.terminal_run");
		spawn::detached(terminal::run_command(cx.config, payload, cx.workdir));
		true
	}
}

/// `http://` or `https://` — open the URL with the OS default handler.
///
/// The payload is the matched URL itself, not a stripped remainder.
pub struct UrlOpen;

impl Action for UrlOpen {
	fn run(&self, text: &str, cx: &mut ActionContext<'_>) -> bool {
		let Some(url) = match_prefix(text, &URL) else {
			return false;
		};
		tracing::debug!(url, "builtin.url_open");
		spawn::detached(opener::open_command(cx.config, url));
		true
	}
}

/// An existing directory — open a terminal there.
pub struct DirTerminal;

impl Action for DirTerminal {
	fn run(&self, text: &str, cx: &mut ActionContext<'_>) -> bool {
		// Empty text would resolve to the workdir itself; the shell
		// fallback owns the empty-command no-op.
		if text.is_empty() {
			return false;
		}
		let dir = cx.resolve(text);
		if !dir.is_dir() {
			return false;
		}
		tracing::debug!(dir = %dir.display(), "builtin.dir_terminal");
		spawn::detached(terminal::open_at(cx.config, &dir));
		true
	}
}

/// Fallback — run the text as a shell command with no terminal attached.
///
/// Always matches. An empty command is handed to the shell as-is, which
/// accepts it as a no-op.
pub struct ShellRun;

impl Action for ShellRun {
	fn run(&self, text: &str, cx: &mut ActionContext<'_>) -> bool {
		tracing::debug!(command = text, "builtin.shell_run");
		let mut cmd = Command::new("sh");
		cmd.arg("-c").arg(text);
		if let Some(dir) = cx.workdir {
			cmd.current_dir(dir);
		}
		spawn::detached(cmd);
		true
	}
}

/// Builds the default chain: the six built-ins in priority order, sharing
/// one line extractor.
pub fn builtin_chain(config: &LaunchConfig) -> HandlerChain {
	let line = Arc::new(LineExtractor::new(config.continuation));
	let builtins: [(&'static str, Box<dyn Action>); 6] = [
		("open-file", Box::new(OpenFile)),
		("system-open", Box::new(SystemOpen)),
		("terminal-run", Box::new(TerminalRun)),
		("url-open", Box::new(UrlOpen)),
		("dir-terminal", Box::new(DirTerminal)),
		("shell-run", Box::new(ShellRun)),
	];

	let mut chain = HandlerChain::new();
	for (id, action) in builtins {
		chain
			.push(Handler::new(id, line.clone(), action))
			.expect("builtin handler ids are distinct");
	}
	chain
}
