use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::table::{CellValue, DataTable};

pub const MATRIX_ROWS: usize = 5;
pub const MATRIX_COLS: usize = 3;
/// Values are drawn from `MATRIX_LOW..MATRIX_HIGH`.
pub const MATRIX_LOW: i64 = 10;
pub const MATRIX_HIGH: i64 = 50;

/// Seeded generator for the random integer matrix shown on the welcome screen.
pub struct MatrixGenerator {
    rng: StdRng,
}

impl MatrixGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_matrix(&mut self) -> DataTable {
        let rows = (0..MATRIX_ROWS)
            .map(|_| {
                (0..MATRIX_COLS)
                    .map(|_| CellValue::Int(self.rng.gen_range(MATRIX_LOW..MATRIX_HIGH)))
                    .collect()
            })
            .collect();
        DataTable::new(
            "Data NumPy array",
            (0..MATRIX_COLS).map(|c| c.to_string()).collect(),
            rows,
        )
    }
}
