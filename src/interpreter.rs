//! The interpreter core: jump-table construction and the fetch-execute
//! loop.

use std::fmt;
use std::io::Write;

use crate::io::InputSource;
use crate::tape::Tape;

/// Errors that can occur while constructing or running a program.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Brackets did not balance or nest properly; detected at
    /// construction time, before anything executes.
    #[error("malformed program: unmatched {kind} bracket at instruction {ip}")]
    MalformedProgram { ip: usize, kind: UnmatchedBracketKind },

    /// An input or output collaborator failed during `.` or `,` (or while
    /// emitting the trailing newline). Propagated without retry.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Which side of a loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedBracketKind {
    /// A `[` with no matching `]`.
    Open,
    /// A `]` with no matching `[`.
    Close,
}

impl fmt::Display for UnmatchedBracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedBracketKind::Open => write!(f, "opening"),
            UnmatchedBracketKind::Close => write!(f, "closing"),
        }
    }
}

/// A Brainfuck interpreter.
///
/// Holds the program text and the jump table built from it at
/// construction. Both are immutable; all mutable run state (the tape, the
/// program counter) is local to [`run`](Interpreter::run), so a single
/// interpreter can be run any number of times and every run is isolated.
pub struct Interpreter {
    program: Vec<char>,
    jumps: Vec<Option<usize>>,
}

impl Interpreter {
    /// Parse `code` into a runnable interpreter.
    ///
    /// The whole text is scanned once to match up loop brackets;
    /// unbalanced or mis-nested brackets fail here with
    /// [`Error::MalformedProgram`] so that a malformed program never
    /// executes a single instruction. Non-instruction characters are
    /// kept (they occupy positions that the jump table indexes) but are
    /// inert at run time.
    pub fn new(code: &str) -> Result<Self, Error> {
        let program: Vec<char> = code.chars().collect();
        let jumps = build_jump_table(&program)?;
        Ok(Self { program, jumps })
    }

    /// Execute the program against a fresh tape.
    ///
    /// Bytes produced by `.` go to `output` verbatim, one write per
    /// instruction, followed by a single trailing newline once the
    /// program halts. Bytes consumed by `,` come from `input`; at end of
    /// input the current cell is set to 0. A non-terminating program
    /// loops forever; bounding execution time is the caller's problem.
    pub fn run<I, W>(&self, input: &mut I, output: &mut W) -> Result<(), Error>
    where
        I: InputSource,
        W: Write,
    {
        let mut tape = Tape::new();
        let mut pc = 0;

        while pc < self.program.len() {
            match self.program[pc] {
                '>' => tape.move_right(),
                '<' => tape.move_left(),
                '+' => tape.increment(),
                '-' => tape.decrement(),
                '.' => {
                    output
                        .write_all(&[tape.read()])
                        .map_err(|source| Error::Io { ip: pc, source })?;
                }
                ',' => {
                    let byte = input
                        .read_byte()
                        .map_err(|source| Error::Io { ip: pc, source })?;
                    // End of input writes 0, so `,[...]` input loops
                    // terminate on drained streams.
                    tape.write(byte.unwrap_or(0));
                }
                '[' => {
                    if tape.is_zero() {
                        pc = self.jumps[pc].expect("validated bracket");
                    }
                }
                ']' => {
                    if !tape.is_zero() {
                        pc = self.jumps[pc].expect("validated bracket");
                    }
                }
                // Anything else is a comment character.
                _ => {}
            }
            // Always step past the instruction just handled, including a
            // bracket just jumped to.
            pc += 1;
        }

        // Trailing newline for readability; not program output.
        let end = self.program.len();
        output
            .write_all(b"\n")
            .map_err(|source| Error::Io { ip: end, source })?;
        output
            .flush()
            .map_err(|source| Error::Io { ip: end, source })?;
        Ok(())
    }

    /// The matching-bracket position for the bracket at `ip`, if any.
    /// Exposed for inspection and tests; execution uses it internally.
    pub fn matching_bracket(&self, ip: usize) -> Option<usize> {
        self.jumps.get(ip).copied().flatten()
    }
}

/// Match up loop brackets in a single left-to-right scan.
///
/// `table[i]` holds the matching index for a `[` or `]` at `i`, `None`
/// for every other position. A `]` with an empty stack, or a leftover
/// `[` after the scan, is a malformed program; the error carries the
/// offending bracket's position.
fn build_jump_table(program: &[char]) -> Result<Vec<Option<usize>>, Error> {
    let mut table: Vec<Option<usize>> = vec![None; program.len()];
    let mut stack: Vec<usize> = Vec::new();

    for (i, &c) in program.iter().enumerate() {
        if c == '[' {
            stack.push(i);
        } else if c == ']' {
            let Some(open_index) = stack.pop() else {
                return Err(Error::MalformedProgram {
                    ip: i,
                    kind: UnmatchedBracketKind::Close,
                });
            };
            table[open_index] = Some(i);
            table[i] = Some(open_index);
        }
    }

    if let Some(unmatched_open) = stack.last().copied() {
        return Err(Error::MalformedProgram {
            ip: unmatched_open,
            kind: UnmatchedBracketKind::Open,
        });
    }

    Ok(table)
}
