//! Input/output abstractions
//!
//! The console session talks to the player only through these traits, so
//! tests can script keypresses and capture the screen.

use std::io::{self, BufRead, Write};

/// Trait for reading player commands
pub trait InputReader {
    /// Read one line after showing `prompt`. `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Trait for writing the screen
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        Ok((read > 0).then_some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
        let _ = io::stdout().flush();
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
