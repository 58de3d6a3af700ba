//! Launch configuration.

use serde::{Deserialize, Serialize};

/// Programs and flags used by the built-in actions.
///
/// One of these is in effect per dispatch. Hosts that scope configuration
/// per buffer layer the override in their integration shim and pass the
/// resolved struct here; the core never reads host state itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
	/// Program handed paths and URLs for OS-default opens.
	pub open_command: String,
	/// Program used to spawn a terminal.
	pub terminal_command: String,
	/// Flag telling the terminal to run a command instead of an interactive shell.
	pub terminal_execute_arg: String,
	/// Trailing marker that continues a logical line onto the next one.
	pub continuation: char,
}

impl Default for LaunchConfig {
	fn default() -> Self {
		Self {
			open_command: "xdg-open".to_string(),
			terminal_command: "xterm".to_string(),
			terminal_execute_arg: "-e".to_string(),
			continuation: '\\',
		}
	}
}
