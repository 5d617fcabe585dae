use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Single cell of a [`DataTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Interpret a raw text field the way a spreadsheet reader would.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return CellValue::Int(value);
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            if value.is_finite() {
                return CellValue::Float(value);
            }
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "true" => return CellValue::Bool(true),
            "false" => return CellValue::Bool(false),
            _ => {}
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return CellValue::Date(date);
        }
        CellValue::Text(trimmed.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(value) => Some(*value as f64),
            CellValue::Float(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    fn sort_rank(&self) -> u8 {
        match self {
            CellValue::Int(_) | CellValue::Float(_) => 0,
            CellValue::Date(_) | CellValue::DateTime(_) => 1,
            CellValue::Bool(_) => 2,
            CellValue::Text(_) => 3,
            CellValue::Empty => 4,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        let rank = self.sort_rank().cmp(&other.sort_rank());
        if rank != Ordering::Equal {
            return rank;
        }
        match (self, other) {
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a.cmp(b),
            (CellValue::Date(a), CellValue::DateTime(b)) => a.and_time(NaiveTime::MIN).cmp(b),
            (CellValue::DateTime(a), CellValue::Date(b)) => a.cmp(&b.and_time(NaiveTime::MIN)),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(text) => f.write_str(text),
            CellValue::Int(value) => write!(f, "{value}"),
            CellValue::Float(value) => write!(f, "{value}"),
            CellValue::Bool(value) => write!(f, "{value}"),
            CellValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            CellValue::DateTime(datetime) => write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

/// Named, immutable table of rows keyed by column headers.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Rows shorter than the header are padded with [`CellValue::Empty`]; longer rows are cut.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Case-insensitive lookup of a column by header text.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.columns
            .iter()
            .position(|column| column.trim().eq_ignore_ascii_case(wanted))
    }

    /// Numeric values of a column, skipping cells that are not numbers.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(idx).and_then(CellValue::as_f64))
                .collect(),
        )
    }

    /// Row order for display. Ties keep their original order.
    pub fn sorted_row_indices(&self, column: usize, descending: bool) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        if column >= self.columns.len() {
            return order;
        }
        order.sort_by(|&a, &b| {
            let left = &self.rows[a][column];
            let right = &self.rows[b][column];
            // Empty cells stay at the bottom in both directions.
            match (left.is_empty(), right.is_empty()) {
                (true, false) => return Ordering::Greater,
                (false, true) => return Ordering::Less,
                _ => {}
            }
            let ord = left.compare(right);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
        order
    }
}

/// Literal sample table shown on the welcome screen.
pub fn sample_people() -> DataTable {
    let people: [(&str, i64, &str, &str); 5] = [
        ("Man", 19, "Pangkep", "Data Scientist"),
        ("Naufal", 18, "Kolaka", "Analyst"),
        ("Sifa", 20, "Sudiang", "Engineer"),
        ("Nadya", 25, "Gowa", "Researcher"),
        ("Farel", 27, "Bulukumba", "Consultant"),
    ];

    DataTable::new(
        "Data Peserta",
        ["Nama", "Umur", "Kota", "Pekerjaan"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        people
            .iter()
            .map(|(name, age, city, job)| {
                vec![
                    CellValue::from(*name),
                    CellValue::Int(*age),
                    CellValue::from(*city),
                    CellValue::from(*job),
                ]
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_cell_types() {
        assert_eq!(CellValue::infer(" 19 "), CellValue::Int(19));
        assert_eq!(CellValue::infer("21.5"), CellValue::Float(21.5));
        assert_eq!(CellValue::infer(""), CellValue::Empty);
        assert_eq!(CellValue::infer("TRUE"), CellValue::Bool(true));
        assert_eq!(
            CellValue::infer("2024-02-29"),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date"))
        );
        assert_eq!(CellValue::infer("Gowa"), CellValue::Text("Gowa".to_string()));
        assert_eq!(CellValue::infer("NaN"), CellValue::Text("NaN".to_string()));
    }

    #[test]
    fn pads_short_rows() {
        let table = DataTable::new(
            "t",
            vec!["a".to_string(), "b".to_string()],
            vec![vec![CellValue::Int(1)]],
        );
        assert_eq!(table.rows()[0], vec![CellValue::Int(1), CellValue::Empty]);
    }

    #[test]
    fn column_lookup_ignores_case() {
        let table = sample_people();
        assert_eq!(table.column_index("umur"), Some(1));
        assert_eq!(table.column_index("missing"), None);
        assert_eq!(
            table.numeric_column("UMUR"),
            Some(vec![19.0, 18.0, 20.0, 25.0, 27.0])
        );
    }

    #[test]
    fn sorts_numbers_and_keeps_empty_last() {
        let table = DataTable::new(
            "t",
            vec!["v".to_string()],
            vec![
                vec![CellValue::Int(3)],
                vec![CellValue::Empty],
                vec![CellValue::Float(1.5)],
                vec![CellValue::Int(3)],
            ],
        );
        assert_eq!(table.sorted_row_indices(0, false), vec![2, 0, 3, 1]);
        assert_eq!(table.sorted_row_indices(0, true), vec![0, 3, 2, 1]);
    }
}
