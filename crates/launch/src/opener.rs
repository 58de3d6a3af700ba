//! OS-default opens.
//!
//! MIME resolution and browser choice are the opener program's problem; this
//! module only builds the one-argument invocation.

use std::ffi::OsStr;
use std::process::Command;

use runline_core::LaunchConfig;

/// Builds the `open_command` invocation for a path or URL.
pub fn open_command(config: &LaunchConfig, target: impl AsRef<OsStr>) -> Command {
	let mut cmd = Command::new(&config.open_command);
	cmd.arg(target);
	cmd
}
