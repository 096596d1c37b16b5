//! Platform clipboard tools, used when the host shell does not provide
//! its own clipboard access: pbcopy (macOS), clip (Windows), wl-copy
//! (Wayland), xclip/xsel (X11).

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use super::{ClipboardError, ClipboardWriter};

/// A clipboard writer that pipes text into an external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandClipboard {
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandClipboard {
    pub const MACOS: Self = Self {
        program: "pbcopy",
        args: &[],
    };
    pub const WINDOWS: Self = Self {
        program: "clip",
        args: &[],
    };
    pub const WAYLAND: Self = Self {
        program: "wl-copy",
        args: &[],
    };
    pub const X11_XCLIP: Self = Self {
        program: "xclip",
        args: &["-selection", "clipboard"],
    };
    pub const X11_XSEL: Self = Self {
        program: "xsel",
        args: &["--clipboard", "--input"],
    };
}

impl ClipboardWriter for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        run_command_with_input(self.program, self.args, text)
    }

    fn name(&self) -> &'static str {
        self.program
    }
}

/// Detects the platform clipboard tool, returning a primary writer and an
/// optional fallback tried when the primary fails.
pub fn detect_backend() -> Option<(CommandClipboard, Option<CommandClipboard>)> {
    if cfg!(target_os = "macos") && command_exists("pbcopy") {
        return Some((CommandClipboard::MACOS, None));
    }
    if cfg!(target_os = "windows") && command_exists("clip") {
        return Some((CommandClipboard::WINDOWS, None));
    }
    if env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy") {
        let fallback = x11_backend();
        return Some((CommandClipboard::WAYLAND, fallback));
    }
    if env::var_os("DISPLAY").is_some() {
        if let Some(primary) = x11_backend() {
            let fallback = (primary == CommandClipboard::X11_XCLIP && command_exists("xsel"))
                .then_some(CommandClipboard::X11_XSEL);
            return Some((primary, fallback));
        }
    }
    None
}

fn x11_backend() -> Option<CommandClipboard> {
    if command_exists("xclip") {
        Some(CommandClipboard::X11_XCLIP)
    } else if command_exists("xsel") {
        Some(CommandClipboard::X11_XSEL)
    } else {
        None
    }
}

fn command_exists(cmd: &str) -> bool {
    let Some(path) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path).any(|dir| dir.join(cmd).is_file())
}

fn run_command_with_input(cmd: &str, args: &[&str], content: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| ClipboardError::WriteFailed(err.to_string()))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(content.as_bytes())
            .map_err(|err| ClipboardError::WriteFailed(err.to_string()))?;
    }

    let status = child
        .wait()
        .map_err(|err| ClipboardError::WriteFailed(err.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::WriteFailed(format!(
            "clipboard command failed: {cmd}"
        )))
    }
}
