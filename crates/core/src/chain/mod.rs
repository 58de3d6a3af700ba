//! The handler chain: a priority-ordered, short-circuiting rule engine.
//!
//! Each [`Handler`] pairs an [`Extractor`] with an [`Action`]. [`dispatch`]
//! walks the chain in order, memoizing extractor output per [`ExtractorId`]
//! so handlers that share an extractor share one buffer scan, and stops at
//! the first action that reports the dispatch handled.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::config::LaunchConfig;
use crate::source::TextSource;


/// Errors from editing a [`HandlerChain`].
#[derive(Debug, Error)]
pub enum ChainError {
	/// A handler with this id is already registered.
	#[error("duplicate handler id: {0}")]
	DuplicateHandler(&'static str),

	/// No handler with this id exists in the chain.
	#[error("unknown handler id: {0}")]
	UnknownHandler(String),
}

/// Identity of an extractor, used as the per-dispatch memo key.
///
/// The cache is keyed by extractor identity rather than handler identity:
/// several handlers can share one extraction pass, while a custom handler
/// brings its own extractor under a [`ExtractorId::Custom`] tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractorId {
	/// The built-in continuation-aware line extractor.
	Line,
	/// A host-defined extractor.
	Custom(u16),
}

/// Produces the command text a handler's action will see.
pub trait Extractor: Send + Sync {
	/// Stable identity for per-dispatch memoization.
	fn id(&self) -> ExtractorId;
	/// Computes the command text from the buffer snapshot.
	fn extract(&self, source: &dyn TextSource) -> String;
}

/// Host editor operations available to actions.
///
/// Buffer-open is a synchronous local editor operation, not a process
/// launch, so it goes through this seam instead of a spawn.
pub trait EditorOps {
	/// Opens `path` in the host for interactive editing.
	fn open_file(&mut self, path: &Path);
}

/// Per-dispatch context handed to actions.
pub struct ActionContext<'a> {
	/// Launch configuration in effect for this dispatch.
	pub config: &'a LaunchConfig,
	/// Directory of the current document, when known.
	pub workdir: Option<&'a Path>,
	/// Host editor callback surface.
	pub editor: &'a mut dyn EditorOps,
}

impl ActionContext<'_> {
	/// Resolves `path` against the working directory.
	///
	/// A leading `~/` expands to the home directory, absolute paths pass
	/// through, and anything else is joined onto the working directory when
	/// one is known.
	pub fn resolve(&self, path: &str) -> PathBuf {
		if let Some(rest) = path.strip_prefix("~/")
			&& let Some(home) = dirs::home_dir()
		{
			return home.join(rest);
		}
		let path = Path::new(path);
		if path.is_absolute() {
			return path.to_path_buf();
		}
		match self.workdir {
			Some(dir) => dir.join(path),
			None => path.to_path_buf(),
		}
	}
}

/// Side-effecting arm of a handler.
pub trait Action: Send + Sync {
	/// Attempts to handle `text`.
	///
	/// Returns `true` once the action fired; `false` is the no-match signal
	/// that lets dispatch fall through to the next handler.
	fn run(&self, text: &str, cx: &mut ActionContext<'_>) -> bool;
}

/// An (extractor, action) pair tried in chain order.
pub struct Handler {
	id: &'static str,
	extractor: Arc<dyn Extractor>,
	action: Box<dyn Action>,
}

impl Handler {
	/// Creates a handler.
	pub fn new(id: &'static str, extractor: Arc<dyn Extractor>, action: Box<dyn Action>) -> Self {
		Self { id, extractor, action }
	}

	/// Unique id used for chain edits and logging.
	pub fn id(&self) -> &'static str {
		self.id
	}
}

/// Ordered, user-editable handler sequence. Order defines priority.
#[derive(Default)]
pub struct HandlerChain {
	handlers: Vec<Handler>,
}

impl HandlerChain {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `handler` at the lowest priority.
	pub fn push(&mut self, handler: Handler) -> Result<(), ChainError> {
		if self.position(handler.id).is_some() {
			return Err(ChainError::DuplicateHandler(handler.id));
		}
		self.handlers.push(handler);
		Ok(())
	}

	/// Inserts `handler` immediately before the handler named `anchor`.
	pub fn insert_before(&mut self, anchor: &str, handler: Handler) -> Result<(), ChainError> {
		if self.position(handler.id).is_some() {
			return Err(ChainError::DuplicateHandler(handler.id));
		}
		let at = self
			.position(anchor)
			.ok_or_else(|| ChainError::UnknownHandler(anchor.to_string()))?;
		self.handlers.insert(at, handler);
		Ok(())
	}

	/// Removes and returns the handler named `id`.
	pub fn remove(&mut self, id: &str) -> Result<Handler, ChainError> {
		let at = self.position(id).ok_or_else(|| ChainError::UnknownHandler(id.to_string()))?;
		Ok(self.handlers.remove(at))
	}

	/// Handlers in priority order.
	pub fn iter(&self) -> impl Iterator<Item = &Handler> {
		self.handlers.iter()
	}

	/// Number of handlers in the chain.
	pub fn len(&self) -> usize {
		self.handlers.len()
	}

	/// True when the chain has no handlers.
	pub fn is_empty(&self) -> bool {
		self.handlers.is_empty()
	}

	fn position(&self, id: &str) -> Option<usize> {
		self.handlers.iter().position(|handler| handler.id == id)
	}
}

/// Runs the chain against one buffer snapshot, first match wins.
///
/// Each distinct extractor runs at most once per dispatch; its output is
/// memoized for later handlers. Returns the id of the handler that fired,
/// or `None` when the chain is exhausted. Hosts that only care about the
/// side effects can ignore the return value.
pub fn dispatch(
	chain: &HandlerChain,
	source: &dyn TextSource,
	cx: &mut ActionContext<'_>,
) -> Option<&'static str> {
	let mut cache: HashMap<ExtractorId, String> = HashMap::new();
	for handler in chain.iter() {
		let text = match cache.entry(handler.extractor.id()) {
			Entry::Occupied(entry) => entry.into_mut(),
			Entry::Vacant(slot) => slot.insert(handler.extractor.extract(source)),
		};
		tracing::trace!(handler = handler.id, "dispatch.try");
		if handler.action.run(text, cx) {
			tracing::debug!(handler = handler.id, "dispatch.handled");
			return Some(handler.id);
		}
	}
	tracing::debug!("dispatch.unhandled");
	None
}
