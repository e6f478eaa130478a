//! Dataset loader: a quoted-field tabular source in, a [`Catalog`] out.
//!
//! The header line is read first and the four required columns are located
//! by name, in any order. A missing column aborts the load before any row is
//! processed. After that, a row that fails for any reason is logged, recorded
//! in the [`LoadReport`] and skipped; one bad row never aborts the load.
//!
//! Rows are physical lines. Field splitting within a line is done by the
//! `csv` reader: a delimiter inside a quoted span is literal and a doubled
//! quote inside a quoted span is a literal quote character. The nested
//! cast/crew arrays are decoded only after this unescaping.

use crate::error::{DataLoadError, Result};
use crate::index::Catalog;
use crate::parser::{self, RawRow};
use crate::types::Work;
use csv::{ReaderBuilder, StringRecord};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Settings for reading a credits source
///
/// ## Usage
/// ```ignore
/// let options = LoaderOptions::new()
///     .with_delimiter(b';')
///     .with_id_column("id");
/// ```
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    delimiter: u8,
    id_column: String,
    title_column: String,
    cast_column: String,
    crew_column: String,
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            id_column: "movie_id".to_string(),
            title_column: "title".to_string(),
            cast_column: "cast".to_string(),
            crew_column: "crew".to_string(),
        }
    }

    /// Configure the field delimiter (default: `,`)
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Configure the identifier column name (default: `movie_id`)
    pub fn with_id_column(mut self, name: impl Into<String>) -> Self {
        self.id_column = name.into();
        self
    }

    /// Configure the title column name (default: `title`)
    pub fn with_title_column(mut self, name: impl Into<String>) -> Self {
        self.title_column = name.into();
        self
    }

    /// Configure the cast column name (default: `cast`)
    pub fn with_cast_column(mut self, name: impl Into<String>) -> Self {
        self.cast_column = name.into();
        self
    }

    /// Configure the crew column name (default: `crew`)
    pub fn with_crew_column(mut self, name: impl Into<String>) -> Self {
        self.crew_column = name.into();
        self
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A row that was dropped during loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line of the row in the source
    pub line: u64,
    pub reason: String,
}

/// Outcome of a load: the catalog plus every row that was dropped
#[derive(Debug)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    /// Number of works retained.
    pub fn retained(&self) -> usize {
        self.catalog.len()
    }
}

/// Positions of the required columns within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    id: usize,
    title: usize,
    cast: usize,
    crew: usize,
}

impl Columns {
    fn resolve(header: &StringRecord, options: &LoaderOptions) -> Result<Self> {
        let names: Vec<&str> = header
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();
        let position = |wanted: &str| names.iter().position(|&h| h == wanted);

        let required = [
            &options.id_column,
            &options.title_column,
            &options.cast_column,
            &options.crew_column,
        ];
        let positions: Vec<Option<usize>> = required.iter().map(|c| position(c.as_str())).collect();

        match positions[..] {
            [Some(id), Some(title), Some(cast), Some(crew)] => Ok(Self {
                id,
                title,
                cast,
                crew,
            }),
            _ => Err(DataLoadError::MissingColumns {
                missing: required
                    .iter()
                    .zip(&positions)
                    .filter(|(_, p)| p.is_none())
                    .map(|(c, _)| c.to_string())
                    .collect(),
            }),
        }
    }
}

/// Load a credits file from disk.
pub fn load_from_path(path: &Path, options: &LoaderOptions) -> Result<LoadReport> {
    info!("Loading credits from {:?}", path);

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    load_from_reader(file, options)
}

/// Load credits from any reader.
///
/// Steps:
/// 1. Resolve the required columns from the header (fatal if absent)
/// 2. Cut the rest of the source into physical lines
/// 3. Split and parse the lines in parallel; collection keeps source order
/// 4. Report failures in row order and build the catalog
///
/// Each line is split on its own, so an unbalanced quote can swallow at
/// most the rest of its own line.
pub fn load_from_reader<R: Read>(reader: R, options: &LoaderOptions) -> Result<LoadReport> {
    let mut lines = BufReader::new(reader).split(b'\n');

    let header = match lines.next().transpose()? {
        Some(line) => split_line(&line, options.delimiter)?,
        None => None,
    };
    let header = match header {
        Some(header) if !header.is_empty() => header,
        _ => return Err(DataLoadError::EmptySource),
    };
    let columns = Columns::resolve(&header, options)?;

    // Line 1 is the header.
    let mut raw_lines: Vec<(u64, Vec<u8>)> = Vec::new();
    for (i, line) in lines.enumerate() {
        raw_lines.push((i as u64 + 2, line?));
    }

    let parsed: Vec<Option<Result<Work>>> = raw_lines
        .into_par_iter()
        .map(|(line, bytes)| match split_line(&bytes, options.delimiter) {
            Ok(Some(record)) => Some(parse_record(&record, line, columns)),
            Ok(None) => None,
            Err(e) => Some(Err(DataLoadError::ParseError {
                line,
                reason: e.to_string(),
            })),
        })
        .collect();

    let mut works = Vec::with_capacity(parsed.len());
    let mut skipped = Vec::new();
    for result in parsed.into_iter().flatten() {
        match result {
            Ok(work) => works.push(work),
            Err(e) => {
                let row = skipped_row(e);
                warn!("Skipping row at line {}: {}", row.line, row.reason);
                skipped.push(row);
            }
        }
    }

    info!(
        "Loaded {} works ({} rows skipped)",
        works.len(),
        skipped.len()
    );

    Ok(LoadReport {
        catalog: Catalog::new(works),
        skipped,
    })
}

/// Split one physical line into fields. `None` for a blank line.
fn split_line(line: &[u8], delimiter: u8) -> std::result::Result<Option<StringRecord>, csv::Error> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if line.is_empty() {
        return Ok(None);
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(line);
    let mut record = StringRecord::new();
    if rdr.read_record(&mut record)? {
        Ok(Some(record))
    } else {
        Ok(None)
    }
}

fn parse_record(record: &StringRecord, line: u64, columns: Columns) -> Result<Work> {
    let field = |idx: usize, name: &str| {
        record.get(idx).ok_or_else(|| DataLoadError::ParseError {
            line,
            reason: format!(
                "row has {} fields, no value for column '{}'",
                record.len(),
                name
            ),
        })
    };

    let row = RawRow {
        id: field(columns.id, "id")?,
        title: field(columns.title, "title")?,
        cast: field(columns.cast, "cast")?,
        crew: field(columns.crew, "crew")?,
    };

    parser::parse_work(row).map_err(|e| e.at_line(line))
}

fn skipped_row(err: DataLoadError) -> SkippedRow {
    match err {
        DataLoadError::ParseError { line, reason } => SkippedRow { line, reason },
        other => SkippedRow {
            line: 0,
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "movie_id,title,cast,crew\n";

    fn load(text: &str) -> Result<LoadReport> {
        load_from_reader(text.as_bytes(), &LoaderOptions::default())
    }

    #[test]
    fn test_loads_well_formed_rows() {
        let text = format!(
            "{HEADER}1,One,[],[]\n2,Two,[],[]\n3,Three,[],[]\n"
        );
        let report = load(&text).unwrap();

        assert_eq!(report.retained(), 3);
        assert!(report.skipped.is_empty());
        let ids: Vec<u32> = report.catalog.works().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_columns_in_any_order() {
        let text = concat!(
            "crew,title,cast,movie_id\n",
            "\"[{\"\"name\"\": \"\"Jane\"\", \"\"job\"\": \"\"Director\"\"}]\",Film,[],5\n",
        );
        let report = load(text).unwrap();
        let work = &report.catalog.works()[0];

        assert_eq!(work.id, 5);
        assert_eq!(work.title, "Film");
        assert_eq!(work.crew[0].name, "Jane");
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let err = load("movie_id,title,cast\n1,One,[]\n").unwrap_err();
        match err {
            DataLoadError::MissingColumns { missing } => assert_eq!(missing, vec!["crew"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_source_is_fatal() {
        assert!(matches!(load(""), Err(DataLoadError::EmptySource)));
    }

    #[test]
    fn test_malformed_row_is_skipped() {
        let text = format!("{HEADER}1,One,[],[]\nnope,Bad,[],[]\n2,Two,[],[]\n3,Short\n");
        let report = load(&text).unwrap();

        assert_eq!(report.retained(), 2);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].line, 3);
        assert!(report.skipped[0].reason.contains("movie_id"));
        assert_eq!(report.skipped[1].line, 5);
    }

    #[test]
    fn test_unclosed_quote_only_costs_its_own_row() {
        let text = format!("{HEADER}1,One,[],[]\n2,\"Unclosed,[],[]\n3,Three,[],[]\n4,Four,[],[]\n");
        let report = load(&text).unwrap();

        let ids: Vec<u32> = report.catalog.works().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 3);
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let text = "movie_id,title,cast,crew\r\n1,One,[],[]\r\n\r\n2,Two,[],[]\r\n";
        let report = load(text).unwrap();

        assert!(report.skipped.is_empty());
        let titles: Vec<&str> = report.catalog.works().iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"1,\xff\xfe,[],[]\n2,Two,[],[]\n");
        let report = load_from_reader(&bytes[..], &LoaderOptions::default()).unwrap();

        assert_eq!(report.retained(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
    }

    #[test]
    fn test_quoted_fields_keep_delimiters_and_quotes() {
        let text = concat!(
            "movie_id,title,cast,crew\n",
            "9,\"Crouching Tiger, Hidden \"\"Dragon\"\"\",",
            "\"[{\"\"name\"\": \"\"Chow, Yun-fat\"\", \"\"character\"\": \"\"Li Mu Bai\"\"}]\",[]\n",
        );
        let report = load(text).unwrap();
        let work = &report.catalog.works()[0];

        assert_eq!(work.title, "Crouching Tiger, Hidden \"Dragon\"");
        assert_eq!(work.cast[0].name, "Chow, Yun-fat");
        assert_eq!(work.cast[0].character, "Li Mu Bai");
    }

    #[test]
    fn test_custom_options() {
        let options = LoaderOptions::new()
            .with_delimiter(b';')
            .with_id_column("id")
            .with_title_column("name")
            .with_cast_column("actors")
            .with_crew_column("staff");
        let text = "id;name;actors;staff\n4;Four;[];[]\n";
        let report = load_from_reader(text.as_bytes(), &options).unwrap();
        assert_eq!(report.catalog.works()[0].title, "Four");
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}{HEADER}1,One,[],[]\n").unwrap();

        let report = load_from_path(file.path(), &LoaderOptions::default()).unwrap();
        assert_eq!(report.retained(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_from_path(Path::new("does/not/exist.csv"), &LoaderOptions::default())
            .unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
