//! External editor round-trip for the input buffers.
//!
//! Buffers are written as `title\n\ncontent`, the editor runs, and the file is
//! parsed back: first line is the title, an optional blank line, the rest is
//! content. Whitespace inside the title and content is kept as written, so an
//! unedited buffer parses back to the buffers it came from.

use crate::error::{NotezError, Result};
use crate::model::InputBuffers;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

pub fn to_buffer(buffers: &InputBuffers) -> String {
    if buffers.content.is_empty() {
        format!("{}\n\n", buffers.title)
    } else {
        format!("{}\n\n{}", buffers.title, buffers.content)
    }
}

pub fn from_buffer(buffer: &str) -> InputBuffers {
    let (title, rest) = match buffer.split_once('\n') {
        Some((title, rest)) => (title, rest),
        None => (buffer, ""),
    };
    let content = rest.strip_prefix('\n').unwrap_or(rest);
    InputBuffers::new(title.strip_suffix('\r').unwrap_or(title), content)
}

/// Parse what the editor left behind, given the buffers it was started with.
///
/// Text identical to what was written, or that plus the final newline most
/// editors append on save, means nothing was edited and `initial` comes back.
pub fn parse_edited(initial: &InputBuffers, edited: &str) -> InputBuffers {
    let written = to_buffer(initial);
    if edited == written || edited.strip_suffix('\n') == Some(written.as_str()) {
        return initial.clone();
    }
    from_buffer(edited)
}

/// Checks $EDITOR, then $VISUAL, then common fallbacks.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var)
            && !editor.trim().is_empty()
        {
            return Ok(editor);
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok(fallback.to_string());
        }
    }

    Err(NotezError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor, waits, and returns the file's contents.
///
/// `$EDITOR` may carry arguments (`code --wait`); they are split on whitespace.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| NotezError::Api("Empty editor command".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| NotezError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(NotezError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(NotezError::Io)
}

/// Stage `initial` in a temp file, let the user edit it, and parse the result.
pub fn edit_buffers(initial: &InputBuffers) -> Result<InputBuffers> {
    let temp_file = env::temp_dir().join(format!("notez_edit_{}.txt", Uuid::new_v4()));
    fs::write(&temp_file, to_buffer(initial)).map_err(NotezError::Io)?;

    let edited = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(parse_edited(initial, &edited?))
}
