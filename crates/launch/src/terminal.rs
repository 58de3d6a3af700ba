//! Terminal invocations.
//!
//! Terminals are driven through two knobs from [`LaunchConfig`]: the program
//! and the flag that makes it run a command instead of an interactive shell
//! (the `xterm -e` convention). [`detect`] can fill both from the
//! environment; the stock default stays `xterm`.

use std::path::Path;
use std::process::Command;

use runline_core::LaunchConfig;

/// Terminals launchable as `program <execute-arg> <command>`, probed in
/// preference order.
const KNOWN_TERMINALS: &[(&str, &str)] = &[
	("kitty", "-e"),
	("alacritty", "-e"),
	("gnome-terminal", "--"),
	("konsole", "-e"),
	("xterm", "-e"),
];

/// Builds the invocation that runs `command_line` inside a terminal.
///
/// The command line is passed as a single argument after the execute flag;
/// `cwd`, when given, becomes the terminal's working directory.
pub fn run_command(config: &LaunchConfig, command_line: &str, cwd: Option<&Path>) -> Command {
	let mut cmd = Command::new(&config.terminal_command);
	cmd.arg(&config.terminal_execute_arg).arg(command_line);
	if let Some(dir) = cwd {
		cmd.current_dir(dir);
	}
	cmd
}

/// Builds the invocation that opens an interactive terminal in `dir`.
pub fn open_at(config: &LaunchConfig, dir: &Path) -> Command {
	let mut cmd = Command::new(&config.terminal_command);
	cmd.current_dir(dir);
	cmd
}

/// Picks a terminal emulator from the environment.
///
/// Checks `$TERMINAL` first, then known terminals on `PATH`. Returns the
/// program together with its execute flag.
pub fn detect() -> Option<(String, &'static str)> {
	if let Ok(terminal) = std::env::var("TERMINAL")
		&& which::which(&terminal).is_ok()
	{
		let execute_arg = KNOWN_TERMINALS
			.iter()
			.find(|(name, _)| terminal.contains(*name))
			.map_or("-e", |(_, arg)| *arg);
		return Some((terminal, execute_arg));
	}

	for &(name, arg) in KNOWN_TERMINALS {
		if which::which(name).is_ok() {
			return Some((name.to_string(), arg));
		}
	}

	None
}

/// A [`LaunchConfig`] with the terminal filled in by [`detect`], falling
/// back to the stock `xterm` default when nothing is found.
pub fn detected_config() -> LaunchConfig {
	let mut config = LaunchConfig::default();
	if let Some((terminal, execute_arg)) = detect() {
		config.terminal_command = terminal;
		config.terminal_execute_arg = execute_arg.to_string();
	}
	config
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn run_command_uses_configured_terminal() {
		let config = LaunchConfig::default();
		let cmd = run_command(&config, "echo hi", Some(Path::new("/tmp")));
		assert_eq!(cmd.get_program(), "xterm");
		let args: Vec<_> = cmd.get_args().collect();
		assert_eq!(args, ["-e", "echo hi"]);
		assert_eq!(cmd.get_current_dir(), Some(Path::new("/tmp")));
	}

	#[test]
	fn open_at_sets_only_the_working_directory() {
		let config = LaunchConfig::default();
		let cmd = open_at(&config, Path::new("/tmp"));
		assert_eq!(cmd.get_program(), "xterm");
		assert_eq!(cmd.get_args().count(), 0);
		assert_eq!(cmd.get_current_dir(), Some(Path::new("/tmp")));
	}

	#[test]
	fn detected_config_always_has_a_terminal() {
		let config = detected_config();
		assert!(!config.terminal_command.is_empty());
		assert!(!config.terminal_execute_arg.is_empty());
	}
}
