use serde::{Deserialize, Serialize};

/// Zero-based position of the caret inside a draft buffer.
///
/// `line` counts buffer rows, `column` counts characters within the
/// row. The origin `(0, 0)` is the default, which is where a fresh
/// draft opens. Draft snapshots round-trip through the editor engine,
/// so the position survives serialization unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A selected span inside a draft buffer, anchored at `start` with the
/// caret at `end`. `start` need not precede `end` in document order;
/// the pair records how the selection was made, not a normalized range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

impl TextSelection {
    pub fn new(start: CursorPosition, end: CursorPosition) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_cursor_is_the_origin() {
        assert_eq!(CursorPosition::default(), CursorPosition::new(0, 0));
    }

    #[test]
    fn test_selection_keeps_anchor_and_caret_order() {
        // Backwards selection (caret moved left of the anchor) is legal.
        let selection = TextSelection::new(CursorPosition::new(0, 5), CursorPosition::new(0, 1));

        assert_eq!(selection.start.column, 5);
        assert_eq!(selection.end.column, 1);
    }

    #[test]
    fn test_selection_serde_round_trip() -> Result<()> {
        let selection = TextSelection::new(CursorPosition::new(1, 0), CursorPosition::new(2, 4));
        let json = serde_json::to_string(&selection)?;
        let back: TextSelection = serde_json::from_str(&json)?;

        assert_eq!(selection, back);

        Ok(())
    }
}
