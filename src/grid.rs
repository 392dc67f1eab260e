use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};


// Visual class of a cell. The board is a checkerboard: a cell is `Even` iff
// the sum of its zero-based row and column indices is even.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellShade {
    Even,
    Odd,
}

impl CellShade {
    pub fn of(coord: Coord) -> Self {
        if (coord.row.to_zero_based() + coord.col.to_zero_based()) % 2 == 0 {
            CellShade::Even
        } else {
            CellShade::Odd
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            CellShade::Even => "even",
            CellShade::Odd => "odd",
        }
    }
}


// A single board cell. Cells are value objects: created once when the model
// is built and never mutated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    coord: Coord,
}

impl Cell {
    pub fn new(coord: Coord) -> Self { Cell { coord } }

    pub fn coord(self) -> Coord { self.coord }
    pub fn shade(self) -> CellShade { CellShade::of(self.coord) }

    // Stable element id, e.g. "cell-3-7" for row 3, column 7.
    pub fn dom_id(self) -> String {
        format!("cell-{}-{}", self.coord.row.to_zero_based(), self.coord.col.to_zero_based())
    }
}


// The full 10x10 board, row-major. Pure data: rendering it into a document
// is the adapter's job.
#[derive(Clone, Debug)]
pub struct GridModel {
    rows: Vec<Vec<Cell>>,
}

impl GridModel {
    pub fn new() -> Self {
        let rows = Row::all()
            .map(|row| Col::all().map(|col| Cell::new(Coord::new(row, col))).collect())
            .collect();
        GridModel { rows }
    }

    pub fn num_rows(&self) -> usize { NUM_ROWS as usize }
    pub fn num_cols(&self) -> usize { NUM_COLS as usize }

    // Rows in ascending order; each row holds its cells in ascending column order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    // All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flatten().copied()
    }
}
