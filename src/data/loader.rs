use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;

use super::model::{Dataset, ListingRecord};

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "price",
    "model_year",
    "model",
    "condition",
    "odometer",
    "type",
    "days_listed",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a listings file cannot be turned into a [`Dataset`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read header row: {0}")]
    Header(#[source] csv::Error),

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("row {row}: {source}")]
    Record {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}, column '{column}': invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the listings table from a delimited file on disk.
pub fn load_file(path: &Path, delimiter: u8) -> Result<Dataset, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    read_listings(reader)
}

/// Load the listings table from any reader (header row first).
pub fn load_reader<R: Read>(input: R, delimiter: u8) -> Result<Dataset, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(input);
    read_listings(reader)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Header position of each required column.
struct ColumnIndex {
    price: usize,
    model_year: usize,
    model: usize,
    condition: usize,
    odometer: usize,
    body_type: usize,
    days_listed: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self, LoadError> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(**name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        let at = |name: &str| position(name).unwrap_or_default();
        Ok(ColumnIndex {
            price: at("price"),
            model_year: at("model_year"),
            model: at("model"),
            condition: at("condition"),
            odometer: at("odometer"),
            body_type: at("type"),
            days_listed: at("days_listed"),
        })
    }
}

fn read_listings<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    let cols = ColumnIndex::locate(&headers)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        // 1-based data row number, header excluded.
        let row = i + 1;
        let record = result.map_err(|source| LoadError::Record { row, source })?;
        records.push(parse_listing(&record, &cols, row)?);
    }

    log::debug!("parsed {} listing rows", records.len());
    Ok(Dataset::from_records(records))
}

fn parse_listing(
    record: &StringRecord,
    cols: &ColumnIndex,
    row: usize,
) -> Result<ListingRecord, LoadError> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let days_listed = parse_whole(field(cols.days_listed), row, "days_listed")?
        .ok_or_else(|| invalid(row, "days_listed", ""))?;
    let days_listed =
        u32::try_from(days_listed).map_err(|_| invalid(row, "days_listed", field(cols.days_listed)))?;

    let model_year = parse_whole(field(cols.model_year), row, "model_year")?
        .map(|y| i32::try_from(y).map_err(|_| invalid(row, "model_year", field(cols.model_year))))
        .transpose()?;

    Ok(ListingRecord {
        price: parse_amount(field(cols.price), row, "price")?,
        model_year,
        model: field(cols.model).to_string(),
        condition: parse_category(field(cols.condition)),
        odometer: parse_amount(field(cols.odometer), row, "odometer")?,
        body_type: parse_category(field(cols.body_type)),
        days_listed,
    })
}

fn invalid(row: usize, column: &'static str, value: &str) -> LoadError {
    LoadError::InvalidValue {
        row,
        column,
        value: value.to_string(),
    }
}

/// Blank cells and the textual NaN markers pandas writes count as missing.
fn is_missing(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("nan") || s.eq_ignore_ascii_case("na")
}

/// Non-negative finite number, `None` when missing.
fn parse_amount(s: &str, row: usize, column: &'static str) -> Result<Option<f64>, LoadError> {
    if is_missing(s) {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(invalid(row, column, s)),
    }
}

/// Whole number, also accepting integral float text such as `2011.0`.
fn parse_whole(s: &str, row: usize, column: &'static str) -> Result<Option<i64>, LoadError> {
    if is_missing(s) {
        return Ok(None);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Ok(Some(i));
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(Some(v as i64)),
        _ => Err(invalid(row, column, s)),
    }
}

fn parse_category(s: &str) -> Option<String> {
    if is_missing(s) {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "price,model_year,model,condition,cylinders,fuel,odometer,type,days_listed";

    fn load(body: &str) -> Result<Dataset, LoadError> {
        load_reader(format!("{HEADER}\n{body}").as_bytes(), b',')
    }

    #[test]
    fn parses_rows_and_ignores_extra_columns() {
        let ds = load(
            "9400,2011.0,bmw x5,good,6.0,gas,145000.0,SUV,19\n\
             25500,,ford f-150,good,6.0,gas,88705.0,pickup,50\n",
        )
        .unwrap();
        assert_eq!(ds.len(), 2);

        let first = &ds.records[0];
        assert_eq!(first.price, Some(9400.0));
        assert_eq!(first.model_year, Some(2011));
        assert_eq!(first.model, "bmw x5");
        assert_eq!(first.condition.as_deref(), Some("good"));
        assert_eq!(first.odometer, Some(145000.0));
        assert_eq!(first.body_type.as_deref(), Some("SUV"));
        assert_eq!(first.days_listed, 19);

        assert_eq!(ds.records[1].model_year, None);
    }

    #[test]
    fn blank_and_nan_cells_are_missing() {
        let ds = load(",nan,,,,,NaN,,7\n").unwrap();
        let r = &ds.records[0];
        assert_eq!(r.price, None);
        assert_eq!(r.model_year, None);
        assert_eq!(r.model, "");
        assert_eq!(r.condition, None);
        assert_eq!(r.odometer, None);
        assert_eq!(r.body_type, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let err = load_reader("price,model_year,model\n1,2,x\n".as_bytes(), b',').unwrap_err();
        match err {
            LoadError::MissingColumns(cols) => {
                assert_eq!(cols, vec!["condition", "odometer", "type", "days_listed"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_number_reports_row_and_column() {
        let err = load("100,2010,a,good,4,gas,10,sedan,3\ncheap,2010,a,good,4,gas,10,sedan,3\n")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "row 2, column 'price': invalid value 'cheap'"
        );
    }

    #[test]
    fn negative_amount_and_fractional_year_are_rejected() {
        assert!(matches!(
            load("-5,2010,a,good,4,gas,10,sedan,3\n"),
            Err(LoadError::InvalidValue { column: "price", .. })
        ));
        assert!(matches!(
            load("5,2010.5,a,good,4,gas,10,sedan,3\n"),
            Err(LoadError::InvalidValue { column: "model_year", .. })
        ));
    }

    #[test]
    fn days_listed_is_required() {
        assert!(matches!(
            load("5,2010,a,good,4,gas,10,sedan,\n"),
            Err(LoadError::InvalidValue { column: "days_listed", .. })
        ));
    }

    #[test]
    fn load_file_honours_delimiter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "price;model_year;model;condition;odometer;type;days_listed").unwrap();
        writeln!(file, "1000;2010;civic;fair;200000;sedan;12").unwrap();
        let ds = load_file(file.path(), b';').unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].model, "civic");
    }

    #[test]
    fn load_file_reports_unreadable_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = load_file(&missing, b',').unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
