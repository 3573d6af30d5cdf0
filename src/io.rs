//! Input collaborators for the `,` instruction.
//!
//! Output needs no abstraction of its own: the interpreter emits raw bytes
//! verbatim, so any [`std::io::Write`] is a valid sink. Input is the
//! interesting side, because interactive use wants single-keystroke,
//! no-echo semantics while piped and test use wants plain byte streams.

use std::io::{self, Read};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Supplies one byte per `,` instruction.
pub trait InputSource {
    /// Produce the next input byte, or `Ok(None)` at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Interactive input: one raw keystroke per byte, no echo, no line
/// buffering.
///
/// Raw mode is entered for the duration of each keystroke and left again
/// before returning, so program output in between is rendered normally.
/// Ctrl+D signals end of input; Ctrl+C fails the read with
/// [`io::ErrorKind::Interrupted`]. Keys with no byte value (arrows,
/// function keys, releases) are ignored and the read continues.
pub struct Keyboard;

impl InputSource for Keyboard {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        enable_raw_mode()?;
        let result = self.next_key();
        disable_raw_mode()?;
        result
    }
}

impl Keyboard {
    fn next_key(&mut self) -> io::Result<Option<u8>> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('d') => return Ok(None),
                    KeyCode::Char('c') => {
                        return Err(io::Error::new(
                            io::ErrorKind::Interrupted,
                            "input interrupted by ctrl+c",
                        ));
                    }
                    _ => continue,
                }
            }
            match key.code {
                // Only characters that fit a byte cell; anything wider is
                // ignored rather than truncated.
                KeyCode::Char(c) if (c as u32) <= 0xFF => return Ok(Some(c as u8)),
                KeyCode::Enter => return Ok(Some(b'\n')),
                KeyCode::Tab => return Ok(Some(b'\t')),
                KeyCode::Backspace => return Ok(Some(0x08)),
                KeyCode::Esc => return Ok(Some(0x1b)),
                _ => continue,
            }
        }
    }
}

/// Byte-stream input: one byte per `,` from any reader, `None` on EOF.
///
/// This is the collaborator for piped stdin, files, and tests.
pub struct ByteReader<R> {
    inner: R,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> InputSource for ByteReader<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}
