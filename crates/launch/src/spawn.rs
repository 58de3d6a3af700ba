//! Detached process launching.
//!
//! Every external effect in runline is fire-and-forget: the child gets null
//! stdio, nobody waits on it, and its exit status is never observed. The
//! dispatcher's contract ends at the launch attempt; cancelling a launched
//! process is the user's business.

use std::process::{Command, Stdio};

/// Launches `cmd` detached from the host.
///
/// Returns whether the process launched. Launch failures (program missing,
/// permission denied) are logged at `warn` and otherwise swallowed — the
/// handler that asked for the launch still counts the dispatch as handled.
pub fn detached(mut cmd: Command) -> bool {
	cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
	match cmd.spawn() {
		Ok(child) => {
			tracing::trace!(program = ?cmd.get_program(), pid = child.id(), "spawn.detached");
			true
		}
		Err(error) => {
			tracing::warn!(program = ?cmd.get_program(), %error, "spawn.failed");
			false
		}
	}
}
