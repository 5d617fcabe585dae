use super::table::DataTable;

/// Column headers recognised as the age column of an uploaded table.
pub const AGE_COLUMN_ALIASES: &[&str] = &["Umur", "age", "usia"];

/// Descriptive statistics of a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; absent below two observations.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Label/value pairs in the conventional `describe()` order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("count", format!("{}", self.count)),
            ("mean", format_stat(self.mean)),
            (
                "std",
                self.std.map(format_stat).unwrap_or_else(|| "NaN".to_string()),
            ),
            ("min", format_stat(self.min)),
            ("25%", format_stat(self.q25)),
            ("50%", format_stat(self.median)),
            ("75%", format_stat(self.q75)),
            ("max", format_stat(self.max)),
        ]
    }
}

fn format_stat(value: f64) -> String {
    format!("{value:.6}")
}

/// Compute statistics over finite values; `None` when nothing is left to describe.
pub fn describe(values: &[f64]) -> Option<Describe> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let variance = sorted
            .iter()
            .map(|value| {
                let delta = value - mean;
                delta * delta
            })
            .sum::<f64>()
            / (count - 1) as f64;
        Some(variance.sqrt())
    } else {
        None
    };

    Some(Describe {
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Linear interpolation between closest ranks over an ascending slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Header of the first recognised age column, if the table has one.
pub fn age_column(table: &DataTable) -> Option<&str> {
    AGE_COLUMN_ALIASES.iter().find_map(|alias| {
        table
            .column_index(alias)
            .map(|idx| table.columns()[idx].as_str())
    })
}

/// Statistics for the recognised age column. Missing column or no numeric cells yield `None`.
pub fn describe_age(table: &DataTable) -> Option<Describe> {
    let column = age_column(table)?;
    let values = table.numeric_column(column)?;
    describe(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::table::{sample_people, CellValue};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn describes_sample_ages() {
        let stats = describe(&[19.0, 18.0, 20.0, 25.0, 27.0]).expect("stats");
        assert_eq!(stats.count, 5);
        assert_close(stats.mean, 21.8);
        assert_close(stats.min, 18.0);
        assert_close(stats.max, 27.0);
        assert_close(stats.q25, 19.0);
        assert_close(stats.median, 20.0);
        assert_close(stats.q75, 25.0);
        assert_close(stats.std.expect("std"), 15.7_f64.sqrt());
    }

    #[test]
    fn interpolates_quartiles() {
        let stats = describe(&[1.0, 2.0, 3.0, 4.0]).expect("stats");
        assert_close(stats.q25, 1.75);
        assert_close(stats.median, 2.5);
        assert_close(stats.q75, 3.25);
    }

    #[test]
    fn single_value_has_no_std() {
        let stats = describe(&[7.0]).expect("stats");
        assert_eq!(stats.std, None);
        assert_eq!(stats.rows()[2], ("std", "NaN".to_string()));
        assert!(describe(&[]).is_none());
    }

    #[test]
    fn finds_age_column_by_alias() {
        let table = sample_people();
        assert_eq!(age_column(&table), Some("Umur"));
        let stats = describe_age(&table).expect("age stats");
        assert_eq!(stats.count, 5);
        assert_close(stats.mean, 21.8);

        let english = DataTable::new(
            "upload",
            vec!["name".to_string(), "Age".to_string()],
            vec![
                vec![CellValue::from("a"), CellValue::Int(30)],
                vec![CellValue::from("b"), CellValue::from("unknown")],
                vec![CellValue::from("c"), CellValue::Float(40.0)],
            ],
        );
        let stats = describe_age(&english).expect("age stats");
        assert_eq!(stats.count, 2);
        assert_close(stats.mean, 35.0);
    }

    #[test]
    fn absent_age_column_is_a_no_op() {
        let table = DataTable::new(
            "upload",
            vec!["city".to_string()],
            vec![vec![CellValue::from("Gowa")]],
        );
        assert!(describe_age(&table).is_none());
    }
}
