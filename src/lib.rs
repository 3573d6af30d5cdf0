//! A tiny Brainfuck interpreter library.
//!
//! This crate provides a minimal Brainfuck interpreter that operates on an
//! unbounded memory tape, addressable in both directions from the starting
//! cell.
//!
//! Features and behaviors:
//! - Tape cells are unsigned bytes, initialized to 0, wrapping on
//!   increment/decrement.
//! - The tape grows on demand in either direction; the data pointer is
//!   never out of bounds.
//! - Loop brackets are matched once, up front; unbalanced or mis-nested
//!   `[`/`]` are rejected before anything executes.
//! - Output `.` emits the raw cell byte, verbatim; a single newline is
//!   appended after the program halts.
//! - Input `,` asks an [`InputSource`] for one byte; at end of input the
//!   current cell is set to 0.
//! - Any non-Brainfuck character is treated as a comment and skipped.
//!
//! Quick start:
//!
//! ```
//! use bf_tape::{ByteReader, Interpreter};
//!
//! // Count up to 'A' in a loop, then print it.
//! let program = Interpreter::new("++++++++[>++++++++<-]>+.").unwrap();
//! let mut output = Vec::new();
//! program
//!     .run(&mut ByteReader::new(std::io::empty()), &mut output)
//!     .unwrap();
//! assert_eq!(output, b"A\n");
//! ```

pub mod cli_util;
mod interpreter;
mod io;
mod tape;

pub use interpreter::{Error, Interpreter, UnmatchedBracketKind};
pub use io::{ByteReader, InputSource, Keyboard};
pub use tape::Tape;
