use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};
use chrono::NaiveTime;
use log::{info, warn};
use thiserror::Error;

use super::stats::{describe_age, Describe};
use super::table::{CellValue, DataTable};

/// Recoverable failures of the upload step. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File type `.{extension}` is not accepted (allowed: {allowed})")]
    NotAccepted { extension: String, allowed: String },
    #[error("`.{extension}` files are accepted but cannot be read as a table")]
    UnsupportedFormat { extension: String },
    #[error("Error reading {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("{file} contains no table data")]
    Empty { file: String },
}

/// Extensions offered to the user. Independent from what [`TableFormat`] can parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptPolicy {
    extensions: Vec<String>,
}

impl AcceptPolicy {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn accepts(&self, path: &Path) -> bool {
        extension_of(path)
            .map(|ext| self.extensions.iter().any(|allowed| *allowed == ext))
            .unwrap_or(false)
    }

    pub fn describe(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Formats the upload step can actually turn into a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Workbook,
    Csv,
}

impl TableFormat {
    pub fn detect(path: &Path) -> Option<Self> {
        match extension_of(path)?.as_str() {
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Some(TableFormat::Workbook),
            "csv" => Some(TableFormat::Csv),
            _ => None,
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Uploaded table plus the optional age statistics.
#[derive(Debug, Clone)]
pub struct UploadPreview {
    pub path: PathBuf,
    pub table: DataTable,
    pub age_stats: Option<Describe>,
}

/// Read `path` into a table. Either the whole table is returned or an error; never a partial one.
pub fn load_table(path: &Path, policy: &AcceptPolicy) -> Result<DataTable, UploadError> {
    let extension = extension_of(path).unwrap_or_default();
    if !policy.accepts(path) {
        return Err(UploadError::NotAccepted {
            extension,
            allowed: policy.describe(),
        });
    }

    let format =
        TableFormat::detect(path).ok_or(UploadError::UnsupportedFormat { extension })?;

    let file = display_name(path);
    let table = match format {
        TableFormat::Workbook => read_workbook(path, &file)?,
        TableFormat::Csv => read_csv(path, &file)?,
    };

    if table.columns().is_empty() {
        return Err(UploadError::Empty { file });
    }
    Ok(table)
}

pub fn preview(path: &Path, policy: &AcceptPolicy) -> Result<UploadPreview, UploadError> {
    match load_table(path, policy) {
        Ok(table) => {
            let age_stats = describe_age(&table);
            info!(
                "Loaded {} ({} rows, {} columns, age stats: {})",
                path.display(),
                table.row_count(),
                table.columns().len(),
                age_stats.is_some()
            );
            Ok(UploadPreview {
                path: path.to_path_buf(),
                table,
                age_stats,
            })
        }
        Err(err) => {
            warn!("Upload of {} failed: {}", path.display(), err);
            Err(err)
        }
    }
}

fn read_workbook(path: &Path, file: &str) -> Result<DataTable, UploadError> {
    let parse_error = |reason: String| UploadError::Parse {
        file: file.to_string(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|err| parse_error(err.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| UploadError::Empty {
            file: file.to_string(),
        })?
        .map_err(|err| parse_error(err.to_string()))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(UploadError::Empty {
            file: file.to_string(),
        });
    };

    let columns = header_names(header.iter().map(cell_to_text));
    let body = rows
        .map(|row| row.iter().map(cell_to_value).collect::<Vec<_>>())
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    Ok(DataTable::new(file, columns, body))
}

fn read_csv(path: &Path, file: &str) -> Result<DataTable, UploadError> {
    let parse_error = |err: csv::Error| UploadError::Parse {
        file: file.to_string(),
        reason: err.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(parse_error)?;

    let headers = reader.headers().map_err(parse_error)?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(UploadError::Empty {
            file: file.to_string(),
        });
    }
    let columns = header_names(headers.iter().map(|h| h.trim().to_string()));

    let mut body = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        body.push(record.iter().map(CellValue::infer).collect());
    }

    Ok(DataTable::new(file, columns, body))
}

fn header_names(raw: impl Iterator<Item = String>) -> Vec<String> {
    raw.enumerate()
        .map(|(idx, name)| {
            if name.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name
            }
        })
        .collect()
}

fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::DateTime(value) => excel_datetime(value).to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => CellValue::Int(*f as i64),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTimeIso(s) => CellValue::infer(s),
        Data::DateTime(value) => excel_datetime(value),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(err) => CellValue::Text(err.to_string()),
        Data::Empty => CellValue::Empty,
    }
}

/// Excel serial date to a calendar value; midnight becomes a plain date.
fn excel_datetime(value: &ExcelDateTime) -> CellValue {
    if value.is_duration() {
        return match value.as_duration() {
            Some(duration) => {
                let secs = duration.num_seconds();
                CellValue::Text(format!(
                    "{}:{:02}:{:02}",
                    secs / 3600,
                    (secs % 3600) / 60,
                    secs % 60
                ))
            }
            None => CellValue::Float(value.as_f64()),
        };
    }
    match value.as_datetime() {
        Some(datetime) if datetime.time() == NaiveTime::MIN => CellValue::Date(datetime.date()),
        Some(datetime) => CellValue::DateTime(datetime),
        None => CellValue::Float(value.as_f64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ACCEPTED_EXTENSIONS;
    use calamine::ExcelDateTimeType;
    use chrono::NaiveDate;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "data-showcase-upload-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn default_policy() -> AcceptPolicy {
        AcceptPolicy::new(DEFAULT_ACCEPTED_EXTENSIONS)
    }

    #[test]
    fn declared_and_parsed_types_are_independent() {
        let policy = default_policy();
        let pdf = Path::new("report.PDF");
        assert!(policy.accepts(pdf));
        assert_eq!(TableFormat::detect(pdf), None);

        let ods = Path::new("sheet.ods");
        assert!(!policy.accepts(ods));
        assert_eq!(TableFormat::detect(ods), Some(TableFormat::Workbook));
        assert_eq!(
            TableFormat::detect(Path::new("data.csv")),
            Some(TableFormat::Csv)
        );
    }

    #[test]
    fn accepted_pdf_reports_unsupported_format() {
        let dir = scratch_dir("pdf");
        let path = dir.join("brosur.pdf");
        fs::write(&path, b"%PDF-1.4\n").expect("write pdf");

        let err = load_table(&path, &default_policy()).expect_err("pdf cannot be parsed");
        assert!(matches!(err, UploadError::UnsupportedFormat { ref extension } if extension == "pdf"));
    }

    #[test]
    fn rejects_undeclared_type() {
        let policy = AcceptPolicy::new(["csv"]);
        let err = load_table(Path::new("book.xlsx"), &policy).expect_err("xlsx not declared");
        assert_eq!(
            err.to_string(),
            "File type `.xlsx` is not accepted (allowed: .csv)"
        );
    }

    #[test]
    fn csv_upload_yields_table_and_age_stats() {
        let dir = scratch_dir("csv");
        let path = dir.join("peserta.csv");
        fs::write(
            &path,
            "Nama,Umur,Kota\nMan,19,Pangkep\nNaufal,18,Kolaka\nSifa,20,Sudiang\nNadya,25,Gowa\nFarel,27,Bulukumba\n",
        )
        .expect("write csv");

        let preview = preview(&path, &default_policy()).expect("csv parses");
        assert_eq!(preview.table.row_count(), 5);
        assert_eq!(preview.table.columns(), &["Nama", "Umur", "Kota"]);
        let stats = preview.age_stats.expect("age stats");
        assert_eq!(stats.count, 5);
        assert!((stats.mean - 21.8).abs() < 1e-9);
        assert_eq!(stats.min, 18.0);
        assert_eq!(stats.max, 27.0);
    }

    #[test]
    fn csv_without_age_column_skips_stats() {
        let dir = scratch_dir("noage");
        let path = dir.join("kota.csv");
        fs::write(&path, "Kota,Provinsi\nGowa,Sulsel\n").expect("write csv");

        let preview = preview(&path, &default_policy()).expect("csv parses");
        assert_eq!(preview.table.row_count(), 1);
        assert!(preview.age_stats.is_none());
    }

    #[test]
    fn malformed_csv_returns_no_partial_table() {
        let dir = scratch_dir("ragged");
        let path = dir.join("rusak.csv");
        fs::write(&path, "Nama,Umur\nMan,19\nNaufal,18,extra\nSifa,20\n").expect("write csv");

        let err = load_table(&path, &default_policy()).expect_err("ragged csv fails");
        assert!(matches!(err, UploadError::Parse { .. }), "{err:?}");
        assert!(err.to_string().starts_with("Error reading rusak.csv"));
    }

    #[test]
    fn malformed_workbook_is_a_parse_error() {
        let dir = scratch_dir("xlsx");
        let path = dir.join("palsu.xlsx");
        fs::write(&path, b"this is not a zip archive").expect("write xlsx");

        let err = load_table(&path, &default_policy()).expect_err("garbage xlsx fails");
        assert!(matches!(err, UploadError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn shipped_workbook_yields_typed_cells_and_age_stats() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/uploads/peserta.xlsx");

        let preview = preview(&path, &default_policy()).expect("workbook parses");
        let table = &preview.table;
        assert_eq!(table.columns(), &["Nama", "Umur", "Kota", "Tanggal Daftar"]);
        // The blank sheet row between Sifa and Nadya is dropped.
        assert_eq!(table.row_count(), 5);

        let first = &table.rows()[0];
        assert_eq!(first[0], CellValue::Text("Man".to_string()));
        assert_eq!(first[1], CellValue::Int(19));
        assert_eq!(
            first[3],
            CellValue::Date(NaiveDate::from_ymd_opt(2005, 3, 14).expect("date"))
        );
        assert_eq!(first[3].to_string(), "2005-03-14");

        let last = &table.rows()[4];
        assert_eq!(last[0], CellValue::Text("Farel".to_string()));
        assert_eq!(last[3].to_string(), "1997-01-30 08:30:00");

        let stats = preview.age_stats.expect("age stats");
        assert_eq!(stats.count, 5);
        assert!((stats.mean - 21.8).abs() < 1e-9);
        assert_eq!(stats.min, 18.0);
        assert_eq!(stats.median, 20.0);
        assert_eq!(stats.max, 27.0);
    }

    #[test]
    fn excel_serials_become_calendar_values() {
        let date = Data::DateTime(ExcelDateTime::new(38425.0, ExcelDateTimeType::DateTime, false));
        assert_eq!(
            cell_to_value(&date),
            CellValue::Date(NaiveDate::from_ymd_opt(2005, 3, 14).expect("date"))
        );
        assert_eq!(cell_to_text(&date), "2005-03-14");

        let noon = Data::DateTime(ExcelDateTime::new(45943.5, ExcelDateTimeType::DateTime, false));
        assert_eq!(cell_to_value(&noon).to_string(), "2025-10-13 12:00:00");

        let span = Data::DateTime(ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false));
        assert_eq!(cell_to_value(&span), CellValue::Text("36:00:00".to_string()));
    }

    #[test]
    fn header_only_csv_is_an_empty_table() {
        let dir = scratch_dir("header");
        let path = dir.join("kosong.csv");
        fs::write(&path, "Nama,,Kota\n").expect("write csv");

        let table = load_table(&path, &default_policy()).expect("header parses");
        assert!(table.is_empty());
        assert_eq!(table.columns()[1], "Unnamed: 1");
    }

    #[test]
    fn blank_csv_is_reported_empty() {
        let dir = scratch_dir("blank");
        let path = dir.join("blank.csv");
        fs::write(&path, "").expect("write csv");

        let err = load_table(&path, &default_policy()).expect_err("blank csv fails");
        assert!(matches!(err, UploadError::Empty { .. }), "{err:?}");
    }
}
