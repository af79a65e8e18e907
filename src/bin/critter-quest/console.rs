//! Paced output and line prompts.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Terminal I/O with narration pacing.
pub struct Console {
    delay: Duration,
    input: io::StdinLock<'static>,
    output: io::Stdout,
}

impl Console {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }

    /// Print a line one character at a time.
    pub fn narrate(&mut self, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            return self.say(text);
        }

        let mut out = self.output.lock();
        for ch in text.chars() {
            write!(out, "{ch}")?;
            out.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(out)
    }

    /// Print a line immediately.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output.lock(), "{text}")
    }

    pub fn pause(&self, duration: Duration) {
        if !self.delay.is_zero() {
            thread::sleep(duration);
        }
    }

    /// Show `prompt` and read one line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.output.lock();
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
