use ratatui::layout::{Position, Positions, Rect, Size};

/// The square board the game is played on.  Positions are relative to the
/// board's top-left corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    cells: u16,
}

impl Grid {
    pub(super) fn new(cells: u16) -> Grid {
        Grid { cells }
    }

    /// Number of cells along each edge
    pub(super) fn cells(self) -> u16 {
        self.cells
    }

    /// Total number of cells on the board
    pub(super) fn area(self) -> usize {
        usize::from(self.cells) * usize::from(self.cells)
    }

    pub(super) fn center(self) -> Position {
        Position::new(self.cells / 2, self.cells / 2)
    }

    pub(super) fn size(self) -> Size {
        Size {
            width: self.cells,
            height: self.cells,
        }
    }

    #[allow(unused)]
    pub(super) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}
