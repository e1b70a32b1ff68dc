use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::Error;
use crate::geom::Point2d;

/// Reads `(x, y)` coordinates from a CSV file, preserving file order.
///
/// Input is comma-delimited with no header row. Fields are trimmed of
/// surrounding whitespace; the first two fields of each record must parse
/// as `f64` and any further fields are ignored. Any unreadable file,
/// malformed record, short record, or non-numeric field is fatal.
pub fn load_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<Point2d>, Error> {
    collect_points(reader_builder().from_path(path)?)
}

/// Same contract as [`load_csv_path`], over any reader.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<Point2d>, Error> {
    collect_points(reader_builder().from_reader(input))
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

fn collect_points<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Point2d>, Error> {
    let mut points = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let number = i as u64 + 1;

        if record.len() < 2 {
            return Err(Error::TooFewFields {
                record: number,
                found: record.len(),
            });
        }

        let x = parse_field(&record, number, 0)?;
        let y = parse_field(&record, number, 1)?;
        points.push(Point2d::new(x, y));
    }

    Ok(points)
}

fn parse_field(record: &StringRecord, number: u64, index: usize) -> Result<f64, Error> {
    record[index].parse().map_err(|source| Error::InvalidFloat {
        record: number,
        field: index + 1,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::read_csv;
    use crate::error::Error;
    use crate::geom::Point2d;

    #[test]
    fn reads_rows_in_file_order() {
        let input = b"1.0,2.0\n3.5,-4.25\n0,0\n";
        let points = read_csv(&input[..]).expect("valid input");

        assert_eq!(
            points,
            vec![
                Point2d::new(1.0, 2.0),
                Point2d::new(3.5, -4.25),
                Point2d::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn trims_whitespace_and_ignores_extra_fields() {
        let input = b" 1.0 , 2.0 ,junk,more\n";
        let points = read_csv(&input[..]).expect("valid input");

        assert_eq!(points, vec![Point2d::new(1.0, 2.0)]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let points = read_csv(&b""[..]).expect("valid input");
        assert!(points.is_empty());
    }

    #[test]
    fn short_record_is_fatal_with_record_number() {
        let input = b"1.0,2.0\n3.0\n";
        let err = read_csv(&input[..]).expect_err("short record");

        match err {
            Error::TooFewFields { record, found } => {
                assert_eq!(record, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_is_fatal_with_record_and_field() {
        let input = b"1.0,2.0\n3.0,north\n";
        let err = read_csv(&input[..]).expect_err("bad float");

        match err {
            Error::InvalidFloat { record, field, .. } => {
                assert_eq!(record, 2);
                assert_eq!(field, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
