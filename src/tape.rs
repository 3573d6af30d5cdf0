//! The interpreter's memory: an unbounded tape of byte cells, addressable
//! in both directions from an arbitrary origin.

/// A tape of unsigned byte cells, infinite in both directions.
///
/// Storage is two growable halves: non-negative cursor positions live on
/// `right` at index `cursor`, negative positions on `left` at index
/// `-cursor - 1`, so the origin is representable on exactly one side.
/// Cells that were never written read as 0.
#[derive(Debug, Default)]
pub struct Tape {
    right: Vec<u8>,
    left: Vec<u8>,
    cursor: i64,
}

impl Tape {
    /// Create an empty tape with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value at the current cursor position, or 0 if never written.
    pub fn read(&self) -> u8 {
        let (half, index) = self.slot();
        half.get(index).copied().unwrap_or(0)
    }

    /// Store `value` at the current cursor position, growing the backing
    /// half as needed. Gaps are zero-filled, so unwritten cells keep
    /// reading as 0.
    pub fn write(&mut self, value: u8) {
        let (half, index) = self.slot_mut();
        if index >= half.len() {
            half.resize(index + 1, 0);
        }
        half[index] = value;
    }

    /// Increment the current cell, wrapping 255 to 0.
    pub fn increment(&mut self) {
        self.write(self.read().wrapping_add(1));
    }

    /// Decrement the current cell, wrapping 0 to 255.
    pub fn decrement(&mut self) {
        self.write(self.read().wrapping_sub(1));
    }

    /// Move the cursor one cell to the right.
    pub fn move_right(&mut self) {
        self.cursor += 1;
    }

    /// Move the cursor one cell to the left.
    pub fn move_left(&mut self) {
        self.cursor -= 1;
    }

    /// Whether the current cell holds 0.
    pub fn is_zero(&self) -> bool {
        self.read() == 0
    }

    fn slot(&self) -> (&Vec<u8>, usize) {
        if self.cursor >= 0 {
            (&self.right, self.cursor as usize)
        } else {
            (&self.left, (-(self.cursor + 1)) as usize)
        }
    }

    fn slot_mut(&mut self) -> (&mut Vec<u8>, usize) {
        if self.cursor >= 0 {
            (&mut self.right, self.cursor as usize)
        } else {
            (&mut self.left, (-(self.cursor + 1)) as usize)
        }
    }
}
