//! Copy a rendered card to the system clipboard by piping it into the
//! platform's clipboard command.
//!
//! Tools are tried in priority order: `pbcopy` (macOS), `wl-copy` (Wayland),
//! `xclip` and `xsel` (X11), `clip.exe` (Windows and WSL). A configured
//! command line overrides detection.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{PunchcardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTool {
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
    ClipExe,
}

impl ClipboardTool {
    pub fn all() -> &'static [ClipboardTool] {
        &[
            ClipboardTool::Pbcopy,
            ClipboardTool::WlCopy,
            ClipboardTool::Xclip,
            ClipboardTool::Xsel,
            ClipboardTool::ClipExe,
        ]
    }

    pub fn program(self) -> &'static str {
        match self {
            ClipboardTool::Pbcopy => "pbcopy",
            ClipboardTool::WlCopy => "wl-copy",
            ClipboardTool::Xclip => "xclip",
            ClipboardTool::Xsel => "xsel",
            ClipboardTool::ClipExe => "clip.exe",
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            ClipboardTool::Xclip => &["-selection", "clipboard"],
            ClipboardTool::Xsel => &["--clipboard", "--input"],
            _ => &[],
        }
    }
}

/// First clipboard tool found on `PATH`, if any.
pub fn detect() -> Option<ClipboardTool> {
    ClipboardTool::all()
        .iter()
        .copied()
        .find(|tool| which::which(tool.program()).is_ok())
}

/// Copy `text` to the clipboard. Returns the program that received it.
///
/// `command` is a whitespace-separated command line; blank or `None` means
/// auto-detect. Fails without retrying if no tool is available, the tool
/// cannot be spawned, or it exits non-zero.
pub fn copy(text: &str, command: Option<&str>) -> Result<String> {
    let (program, args): (String, Vec<String>) = match command.map(str::trim) {
        Some(cmdline) if !cmdline.is_empty() => {
            let mut parts = cmdline.split_whitespace().map(str::to_string);
            let program = parts.next().unwrap_or_default();
            (program, parts.collect())
        }
        _ => {
            let tool = detect().ok_or(PunchcardError::ClipboardUnavailable)?;
            (
                tool.program().to_string(),
                tool.args().iter().map(|a| a.to_string()).collect(),
            )
        }
    };

    pipe_to(&program, &args, text)?;
    Ok(program)
}

fn pipe_to(program: &str, args: &[String], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| PunchcardError::ClipboardFailed(format!("{program}: {e}")))?;

    // Dropping stdin closes the pipe so the tool sees EOF.
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| PunchcardError::ClipboardFailed(format!("{program}: {e}")))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| PunchcardError::ClipboardFailed(format!("{program}: {e}")))?;

    if !output.status.success() {
        let hint: String = String::from_utf8_lossy(&output.stderr)
            .trim()
            .chars()
            .take(200)
            .collect();
        return Err(PunchcardError::ClipboardFailed(format!(
            "{program} exited with {}{}",
            output.status,
            if hint.is_empty() {
                String::new()
            } else {
                format!(": {hint}")
            }
        )));
    }
    Ok(())
}
