//! Built-in launch actions for runline.
//!
//! `runline-launch` is the effectful half of runline: the six built-in
//! handlers (file open, system open, terminal run, URL open, directory
//! terminal, silent shell fallback) and the process plumbing they share.
//! Everything external spawns detached — see [`spawn::detached`] — and the
//! buffer-open action goes through the host's
//! [`EditorOps`](runline_core::EditorOps) instead.
//!
//! Typical wiring:
//!
//! ```ignore
//! let config = terminal::detected_config();
//! let chain = builtin_chain(&config);
//! // per trigger:
//! let mut cx = ActionContext { config: &config, workdir, editor: &mut shim };
//! dispatch(&chain, &source, &mut cx);
//! ```

/// The six built-in handlers and the default chain.
pub mod builtins;
/// OS-default open invocations.
pub mod opener;
/// Detached process launching.
pub mod spawn;
/// Terminal invocations and detection.
pub mod terminal;

pub use builtins::{
	DirTerminal, OpenFile, ShellRun, SystemOpen, TerminalRun, UrlOpen, builtin_chain,
};
