// ABOUTME: Terminal line input for the titanfit session, backed by rustyline
// ABOUTME: Adds history and line editing, and splits lines into words for clap honoring double quotes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::mem;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::task;

/// Line editor with in-memory history
pub struct LineReader {
    editor: DefaultEditor,
}

impl LineReader {
    /// Attach to the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Read one line and split it into words
    ///
    /// Returns `None` at end of input (Ctrl-D). Ctrl-C discards the line
    /// and yields no words. Readline blocks, so the worker thread is handed
    /// over to the runtime while waiting and background plan generation
    /// keeps running.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails
    pub fn read_words(&mut self, prompt: &str) -> Result<Option<Vec<String>>> {
        match task::block_in_place(|| self.editor.readline(prompt)) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(split_words(&line)))
            }
            Err(ReadlineError::Interrupted) => Ok(Some(Vec::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Split `line` on whitespace; text inside double quotes stays one word
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                has_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if has_word {
                    words.push(mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if has_word {
        words.push(current);
    }
    words
}
