use itertools::Itertools;


pub const NUM_ROWS: u8 = 10;
pub const NUM_COLS: u8 = 10;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Row {
    idx: u8, // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(|idx| Self::from_zero_based(idx))
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Col {
    idx: u8, // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_COLS).map(|idx| Self::from_zero_based(idx))
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Coord { row, col } }

    // All coords in row-major order: (0,0), (0,1), ... (9,8), (9,9).
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        Row::all()
            .cartesian_product(Col::all())
            .map(|(row, col)| Coord::new(row, col))
    }
}
