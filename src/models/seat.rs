use serde::{Deserialize, Serialize};

// Координата места в зале, нумерация рядов и мест начинается с 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat {
    pub row: i32,
    pub column: i32,
}

impl Seat {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row, self.column)
    }
}
