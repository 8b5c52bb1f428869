//! Program Image Loader.
//!
//! This module turns an LS8 program image into bytes. It performs:
//! 1. **File reading:** Reads a UTF-8 text file from disk.
//! 2. **Parsing:** One binary literal per line; `#` starts a comment, blank lines are skipped.
//! 3. **Validation:** Each literal is 1-8 binary digits, and the image fits in 256 bytes.
//!
//! The loader never touches CPU state; [`crate::core::Cpu::load`] copies the
//! parsed bytes into memory.
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::io;
use std::path::Path;

use crate::common::LoadError;
use crate::common::constants::MEMORY_SIZE;

/// Character that starts a comment.
const COMMENT: char = '#';

/// Maximum digits in a binary byte literal.
const MAX_DIGITS: usize = 8;

/// Reads and parses the program image at `path`.
///
/// # Errors
///
/// * [`LoadError::FileNotFound`] if nothing exists at `path`.
/// * [`LoadError::Unreadable`] if the file exists but cannot be read as text.
/// * [`LoadError::MalformedLiteral`] or [`LoadError::ProgramTooLarge`] from [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::FileNotFound { path, source }
        } else {
            LoadError::Unreadable { path, source }
        }
    })?;
    let image = parse_program(&source)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "parsed program image");
    Ok(image)
}

/// Parses program text into bytes, one byte per non-blank line.
///
/// # Errors
///
/// * [`LoadError::MalformedLiteral`] for the first line that is not a valid literal.
/// * [`LoadError::ProgramTooLarge`] if the image exceeds 256 bytes.
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let token = line.split(COMMENT).next().unwrap_or_default().trim();
        if token.is_empty() {
            continue;
        }
        let byte = parse_literal(token).ok_or_else(|| LoadError::MalformedLiteral {
            line: idx + 1,
            token: token.to_string(),
        })?;
        image.push(byte);
    }

    if image.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge { len: image.len() });
    }
    Ok(image)
}

/// Parses a single binary literal such as `10000010`.
///
/// Returns `None` unless the token is 1-8 characters, each `0` or `1`.
pub fn parse_literal(token: &str) -> Option<u8> {
    if token.is_empty()
        || token.len() > MAX_DIGITS
        || !token.bytes().all(|b| b == b'0' || b == b'1')
    {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}
