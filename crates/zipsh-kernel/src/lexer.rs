//! Command-line tokenizer.
//!
//! Lines are split with POSIX shell word rules:
//!
//! - unquoted spaces, tabs and newlines separate words
//! - `'...'` is literal
//! - `"..."` is literal except that `\"` and `\\` escape
//! - an unquoted backslash takes the next character literally
//! - quotes only group, so `a'b c'` is the single word `ab c` and `''` is an
//!   empty word
//!
//! `#` is an ordinary character. There is no expansion of any kind.

use thiserror::Error;

/// Tokenization failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("No closing quotation")]
    UnclosedQuote,
    #[error("No escaped character")]
    DanglingEscape,
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split a command line into words.
pub fn tokenize(line: &str) -> Result<Vec<String>, LexError> {
    let mut words = Vec::new();
    let mut word = String::new();
    // A quoted empty string still starts a word.
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            c if is_separator(c) => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            '\\' => {
                word.push(chars.next().ok_or(LexError::DanglingEscape)?);
                in_word = true;
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => word.push(c),
                        None => return Err(LexError::UnclosedQuote),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => word.push(c),
                            Some(c) => {
                                word.push('\\');
                                word.push(c);
                            }
                            None => return Err(LexError::DanglingEscape),
                        },
                        Some(c) => word.push(c),
                        None => return Err(LexError::UnclosedQuote),
                    }
                }
            }
            c => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(word);
    }
    Ok(words)
}
