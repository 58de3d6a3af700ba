//! Line extraction, prefix matching, and the handler-chain dispatch engine.
//!
//! `runline-core` is the pure half of runline: it decides WHICH action a
//! piece of buffer text goes to and WHAT string that action receives. Hosts
//! expose their buffer through [`TextSource`], hand [`dispatch`] an ordered
//! [`HandlerChain`], and the first action to report success wins. The
//! built-in chain (file open, system open, terminal run, URL open,
//! directory terminal, silent shell fallback) lives in `runline-launch`.
//!
//! Dispatch is single-threaded and synchronous: one trigger resolves fully
//! against a snapshot of cursor and selection state before the next can
//! start. Extraction and matching are infallible; the only fallible surface
//! is editing the chain itself.

/// Handler chain, dispatch, and the extractor/action seams.
pub mod chain;
/// Launch configuration shared by the built-in actions.
pub mod config;
/// Continuation-aware logical-command extraction.
pub mod extract;
/// Start-anchored prefix matchers.
pub mod matcher;
/// Buffer access abstraction.
pub mod source;

pub use chain::{
	Action, ActionContext, ChainError, EditorOps, Extractor, ExtractorId, Handler, HandlerChain,
	dispatch,
};
pub use config::LaunchConfig;
pub use extract::{LineExtractor, command_text, logical_command_at};
pub use matcher::{match_prefix, strip_prefix};
pub use source::{Position, RopeSource, StrSource, TextSource};
