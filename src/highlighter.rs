// ABOUTME: Syntax highlighter for the REPL prompt
// Implements rustyline's Highlighter trait to provide ANSI color codes for
// Coiz syntax elements while preserving display width

use crate::token::is_keyword;
use rustyline::completion::Completer;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow;

// 3-bit/4-bit ANSI colors for maximum terminal compatibility
const COLOR_RESET: &str = "\x1b[0m";
const COLOR_KEYWORD: &str = "\x1b[1;35m"; // Bold magenta
const COLOR_NUMBER: &str = "\x1b[33m"; // Yellow
const COLOR_STRING: &str = "\x1b[32m"; // Green
const COLOR_CODE: &str = "\x1b[1;33m"; // Bold yellow
const COLOR_COMMENT: &str = "\x1b[90m"; // Bright black (gray)

/// Prompt helper providing syntax-aware highlighting for Coiz source lines.
pub struct CoizHelper;

impl CoizHelper {
    pub fn new() -> Self {
        CoizHelper
    }
}

impl Default for CoizHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for CoizHelper {}

impl Completer for CoizHelper {
    type Candidate = String;
}

impl Hinter for CoizHelper {
    type Hint = String;
}

impl Validator for CoizHelper {}

impl Highlighter for CoizHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let highlighted = highlight_line(line);
        if highlighted == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(highlighted)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        // Re-highlight on every keystroke and cursor movement
        true
    }
}

/// Walk the line once and wrap recognized runs in color codes.
fn highlight_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            // Comments: // to end of line, /* to */ (or end of line)
            '/' if i + 1 < chars.len() && chars[i + 1] == '/' => {
                result.push_str(COLOR_COMMENT);
                while i < chars.len() {
                    result.push(chars[i]);
                    i += 1;
                }
                result.push_str(COLOR_RESET);
            }
            '/' if i + 1 < chars.len() && chars[i + 1] == '*' => {
                result.push_str(COLOR_COMMENT);
                result.push_str("/*");
                i += 2;
                while i < chars.len() {
                    if chars[i] == '*' && i + 1 < chars.len() && chars[i + 1] == '/' {
                        result.push_str("*/");
                        i += 2;
                        break;
                    }
                    result.push(chars[i]);
                    i += 1;
                }
                result.push_str(COLOR_RESET);
            }

            '"' => {
                i = push_delimited(&chars, i, '"', COLOR_STRING, &mut result);
            }
            '`' => {
                i = push_delimited(&chars, i, '`', COLOR_CODE, &mut result);
            }

            c if c.is_ascii_digit() => {
                result.push_str(COLOR_NUMBER);
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    result.push(chars[i]);
                    i += 1;
                }
                result.push_str(COLOR_RESET);
            }

            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if is_keyword(&word) {
                    result.push_str(COLOR_KEYWORD);
                    result.push_str(&word);
                    result.push_str(COLOR_RESET);
                } else {
                    result.push_str(&word);
                }
            }

            c => {
                result.push(c);
                i += 1;
            }
        }
    }

    result
}

/// Copy a delimited literal, colorized, returning the index past the closing
/// delimiter (or the end of the line when unterminated).
fn push_delimited(
    chars: &[char],
    mut i: usize,
    close: char,
    color: &str,
    result: &mut String,
) -> usize {
    result.push_str(color);
    result.push(chars[i]);
    i += 1;
    while i < chars.len() {
        let c = chars[i];
        result.push(c);
        i += 1;
        if c == close {
            break;
        }
    }
    result.push_str(COLOR_RESET);
    i
}
