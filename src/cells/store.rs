//! `CellStore`: the fixed-capacity cell array and its cursor.

use super::snapshot::PinSnapshot;
use crate::error::{PinError, PinResult};

/// Ordered, fixed-length array of optional single-character values plus the
/// index of the next cell to fill.
///
/// Under normal operation `cursor` equals the number of non-empty leading
/// cells. A restored state may leave it behind that prefix (e.g. cell 0
/// filled with the cursor at 0), never past it; see
/// [`CellStore::clear_before`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStore {
    cells: Box<[Option<char>]>,
    cursor: usize,
}

impl CellStore {
    /// Create an empty store with `length` cells.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::InvalidConfig`] if `length` is zero.
    pub fn new(length: usize) -> PinResult<Self> {
        if length == 0 {
            return Err(PinError::invalid_config("length must be at least 1"));
        }
        Ok(Self {
            cells: vec![None; length].into_boxed_slice(),
            cursor: 0,
        })
    }

    /// Number of cells.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Index of the next cell to be filled.
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every cell has been filled.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.cursor == self.cells.len()
    }

    /// Value of cell `index`, or `None` if it is empty or out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Iterate over all cells in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.cells.iter().copied()
    }

    /// Write `value` at the cursor and advance it.
    ///
    /// Returns `false` without touching anything when the store is full.
    pub fn set_at(&mut self, value: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.cells[self.cursor] = Some(value);
        self.cursor += 1;
        true
    }

    /// Remove the value just before the cursor and move the cursor back.
    ///
    /// At cursor 0 this clears cell 0 and leaves the cursor where it is.
    /// Returns the removed value, or `None` if the cell was already empty.
    pub fn clear_before(&mut self) -> Option<char> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.cells[self.cursor].take()
        } else {
            self.cells[0].take()
        }
    }

    /// Concatenation of the contiguous filled prefix.
    ///
    /// Stops at the first empty cell. `None` if cell 0 is empty.
    pub fn full_text(&self) -> Option<String> {
        let text: String = self.cells.iter().map_while(|cell| *cell).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Empty every cell and rewind the cursor.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.cursor = 0;
    }

    /// Capture the cell values and cursor.
    pub fn snapshot(&self) -> PinSnapshot {
        PinSnapshot {
            cells: self.cells.to_vec(),
            cursor: self.cursor,
        }
    }

    /// Replace the contents with a previously captured snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::InvalidRestoredState`] if the snapshot has a
    /// different cell count, a cell holding anything but an ASCII digit, or
    /// a cursor past the contiguous filled prefix. The store is left
    /// untouched in that case.
    pub fn restore(&mut self, snapshot: &PinSnapshot) -> PinResult<()> {
        if snapshot.cells.len() != self.cells.len() {
            return Err(PinError::invalid_restore(format!(
                "expected {} cells, got {}",
                self.cells.len(),
                snapshot.cells.len()
            )));
        }
        if let Some((index, value)) = snapshot
            .cells
            .iter()
            .enumerate()
            .find_map(|(i, cell)| cell.filter(|c| !c.is_ascii_digit()).map(|c| (i, c)))
        {
            return Err(PinError::invalid_restore(format!(
                "cell {index} holds {value:?}, expected a digit"
            )));
        }
        let filled = snapshot.cells.iter().take_while(|cell| cell.is_some()).count();
        if snapshot.cursor > filled {
            return Err(PinError::invalid_restore(format!(
                "cursor {} is past the filled prefix ({filled} cells)",
                snapshot.cursor
            )));
        }
        self.cells.copy_from_slice(&snapshot.cells);
        self.cursor = snapshot.cursor;
        Ok(())
    }
}
