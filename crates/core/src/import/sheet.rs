//! Typed view over the raw tabular source.
//!
//! Source files carry no type information per field, so every field is
//! classified into a cell kind first and the column mappers then extract
//! the value they need from that kind. A cell that does not carry the
//! requested kind extracts to `None` rather than failing the row.

use std::io::Read;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

/// One classified field of a source row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Boolean(bool),
    Blank,
}

impl Cell {
    /// Classifies a raw field. Whitespace-only fields are blank, `true` and
    /// `false` (any case) are booleans, anything numeric is a number, and
    /// the rest stays text.
    pub fn classify(raw: &str) -> Cell {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Blank;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Cell::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Cell::Boolean(false);
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            if value.is_finite() {
                return Cell::Number(value);
            }
        }
        Cell::Text(raw.to_string())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    /// Text rendering of the cell. Whole numbers render without a decimal
    /// point, booleans as `true`/`false`, and the result is trimmed; an
    /// empty rendering becomes `None`.
    pub fn as_string(&self) -> Option<String> {
        let rendered = match self {
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 9.2e18 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Cell::Boolean(b) => b.to_string(),
            Cell::Blank => return None,
        };
        if rendered.is_empty() {
            None
        } else {
            Some(rendered)
        }
    }

    /// Decimal extraction, numeric cells only. Text that merely looks
    /// numeric never reaches here because classification already made it
    /// a number.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Cell::Number(n) => Decimal::from_f64(*n),
            _ => None,
        }
    }

    /// Integer extraction: numeric cells truncate, text cells parse.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Cell::Number(n) => {
                let truncated = n.trunc();
                if truncated >= f64::from(i32::MIN) && truncated <= f64::from(i32::MAX) {
                    Some(truncated as i32)
                } else {
                    None
                }
            }
            Cell::Text(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        }
    }

    /// Timestamp extraction. Numeric cells are serial dates counted in days
    /// from 1899-12-30 with the fraction as time of day; text cells are
    /// local ISO timestamps, tolerating a trailing `Z`.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::Number(n) => serial_to_datetime(*n),
            Cell::Text(s) => {
                let trimmed = s.trim().trim_end_matches('Z');
                NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").ok()
            }
            _ => None,
        }
    }
}

fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial > 2_958_465.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let days = serial.trunc() as i64;
    let seconds = (serial.fract() * 86_400.0).round() as i64;
    epoch.checked_add_signed(Duration::days(days) + Duration::seconds(seconds))
}

/// One classified source row.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_blank)
    }
}

/// Streaming reader that yields classified rows from a delimited source.
/// Rows are yielded one at a time so file size never dictates memory use;
/// a record that cannot be decoded surfaces as an error item without
/// stopping the iteration.
pub struct SheetReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SheetReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);
        SheetReader { reader }
    }

    pub fn rows(self) -> impl Iterator<Item = csv::Result<Row>> {
        self.reader.into_records().map(|record| {
            record.map(|fields| Row::new(fields.iter().map(Cell::classify).collect()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn classification_covers_all_kinds() {
        assert_eq!(Cell::classify("  "), Cell::Blank);
        assert_eq!(Cell::classify("TRUE"), Cell::Boolean(true));
        assert_eq!(Cell::classify("false"), Cell::Boolean(false));
        assert_eq!(Cell::classify("42.5"), Cell::Number(42.5));
        assert_eq!(Cell::classify("CH0012345678"), Cell::Text("CH0012345678".to_string()));
    }

    #[test]
    fn whole_numbers_render_without_decimal_point() {
        assert_eq!(Cell::Number(12345.0).as_string().as_deref(), Some("12345"));
        assert_eq!(Cell::Number(12.5).as_string().as_deref(), Some("12.5"));
        assert_eq!(Cell::Boolean(true).as_string().as_deref(), Some("true"));
        assert_eq!(Cell::Blank.as_string(), None);
    }

    #[test]
    fn decimal_extraction_is_numeric_only() {
        assert_eq!(Cell::Number(99.25).as_decimal(), Some(dec!(99.25)));
        assert_eq!(Cell::Text("99.25".to_string()).as_decimal(), None);
        assert_eq!(Cell::Blank.as_decimal(), None);
    }

    #[test]
    fn integer_extraction_truncates_and_parses() {
        assert_eq!(Cell::Number(7.9).as_integer(), Some(7));
        assert_eq!(Cell::Text(" 123 ".to_string()).as_integer(), Some(123));
        assert_eq!(Cell::Text("abc".to_string()).as_integer(), None);
    }

    #[test]
    fn datetime_accepts_iso_text_with_trailing_z() {
        let parsed = Cell::Text("2024-03-15T10:30:00Z".to_string()).as_datetime().unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap()
        );
    }

    #[test]
    fn datetime_accepts_serial_dates() {
        // 45_000 days after 1899-12-30 is 2023-03-15
        let parsed = Cell::Number(45_000.5).as_datetime().unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2023, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
        );
    }

    #[test]
    fn empty_row_detection() {
        let blank = Row::new(vec![Cell::Blank, Cell::Blank]);
        assert!(blank.is_empty());
        let not_blank = Row::new(vec![Cell::Blank, Cell::Text("x".to_string())]);
        assert!(!not_blank.is_empty());
    }

    #[test]
    fn reader_classifies_fields_per_row() {
        let data = "P1,ACC-1,1000.5\n,,\n";
        let rows: Vec<_> = SheetReader::new(data.as_bytes())
            .rows()
            .collect::<csv::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cell(2), Some(&Cell::Number(1000.5)));
        assert!(rows[1].is_empty());
    }
}
