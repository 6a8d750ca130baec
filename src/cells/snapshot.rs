//! Saved widget state for suspend/resume of the host.

use serde::{Deserialize, Serialize};

/// Cell values and cursor, captured so a host can rebuild the widget after
/// it was torn down (e.g. a rotation or a process suspend).
///
/// Only the input state is saved. Blink phase and focus are re-derived when
/// the widget is attached again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSnapshot {
    /// One entry per cell, `None` for empty cells.
    pub cells: Vec<Option<char>>,
    /// Index of the next cell to fill.
    pub cursor: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = PinSnapshot {
            cells: vec![Some('1'), Some('2'), None],
            cursor: 2,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"cells":["1","2",null],"cursor":2}"#);
        let back: PinSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_snapshot_rejects_multi_char_cell() {
        let parsed = serde_json::from_str::<PinSnapshot>(r#"{"cells":["12"],"cursor":1}"#);
        assert!(parsed.is_err());
    }
}
