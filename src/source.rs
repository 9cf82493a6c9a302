// 📂 Record Sources
// Where address book entries come from. Only a file exists today, but the
// report engine works on any RecordSource, so an in-memory (or later a
// database / web service) source can be swapped in without touching it.

use crate::error::{AddressBookError, Result};
use crate::record::Record;
use crate::validator::RecordValidator;
use log::{debug, error, info};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Field positions in an address line
const NAME: usize = 0;
const SEX: usize = 1;
const BIRTHDATE: usize = 2;
const FIELD_COUNT: usize = 3;

/// Default location of the address book, relative to the working directory
pub const DEFAULT_PATH: &str = "data/addressBook.dat";

// ============================================================================
// CORE TRAIT
// ============================================================================

/// RecordSource - yields every record of an address book
///
/// Ingestion is all-or-nothing: the first invalid line aborts the load and
/// no partial list is returned.
pub trait RecordSource: Send + Sync {
    /// Load all records in input order
    fn load(&self) -> Result<Vec<Record>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

// ============================================================================
// LINE PARSING
// ============================================================================

/// Parse comma-separated address lines from any reader.
///
/// Fields are split on every comma (no quoting, no escaping) and each line
/// must hold exactly name, sex and birthdate, so an empty line is rejected
/// like any other short line. Only the final newline before end of input is
/// optional. Line numbers in errors are 1-based physical lines.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (index, chunk) in BufReader::new(reader).split(b'\n').enumerate() {
        let line = index + 1;
        let mut bytes = chunk.map_err(|e| {
            error!("Failed to read line {}: {}", line, e);
            AddressBookError::Io(e)
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let record = decode_line(bytes, line)
            .and_then(|text| parse_line(&text, line))
            .map_err(|e| {
                error!("{}", e);
                e
            })?;
        debug!("line {}: {}", line, record);
        records.push(record);
    }

    Ok(records)
}

fn decode_line(bytes: Vec<u8>, line: usize) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| AddressBookError::invalid(line, "encoding (not UTF-8)"))
}

fn parse_line(text: &str, line: usize) -> Result<Record> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(AddressBookError::invalid(
            line,
            format!("field count ({} instead of {})", fields.len(), FIELD_COUNT),
        ));
    }

    let validator = RecordValidator::at_line(line);
    validator.validate_fields(fields[NAME], fields[SEX], fields[BIRTHDATE])
}

// ============================================================================
// FILE SOURCE
// ============================================================================

/// Address book stored in a local text file
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileRecordSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileRecordSource {
    fn default() -> Self {
        FileRecordSource::new(DEFAULT_PATH)
    }
}

impl RecordSource for FileRecordSource {
    fn load(&self) -> Result<Vec<Record>> {
        // Handle is dropped on every return path, including a failed line.
        let file = File::open(&self.path).map_err(|e| {
            error!("Failed to open {}: {}", self.path.display(), e);
            AddressBookError::Io(e)
        })?;

        let records = parse_records(file)?;
        info!("Loaded {} records from {}", records.len(), self.describe());
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

// ============================================================================
// IN-MEMORY SOURCE
// ============================================================================

/// Pre-built records, e.g. for tests or records produced elsewhere
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordSource {
    records: Vec<Record>,
}

impl MemoryRecordSource {
    pub fn new(records: Vec<Record>) -> Self {
        MemoryRecordSource { records }
    }
}

impl RecordSource for MemoryRecordSource {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Sex;
    use chrono::NaiveDate;
    use std::io::Write;

    const BOOK: &str = "Bill McKnight, Male, 16/03/77\n\
                        Paul Robinson, Male, 15/01/85\n\
                        Gemma Lane, Female, 20/11/91\n\
                        Sarah Stone, Female, 20/09/80\n\
                        Wes Jackson, Male, 14/08/74\n";

    #[test]
    fn test_parse_keeps_line_order() {
        let records = parse_records(BOOK.as_bytes()).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["Bill McKnight", "Paul Robinson", "Gemma Lane", "Sarah Stone", "Wes Jackson"]
        );
        assert_eq!(records[2].sex(), Sex::Female);
        assert_eq!(records[4].birthdate(), NaiveDate::from_ymd_opt(1974, 8, 14).unwrap());
    }

    #[test]
    fn test_round_trip_is_canonical() {
        let records = parse_records("  Gemma Lane ,FEMALE,20/11/91\n".as_bytes()).unwrap();
        assert_eq!(records[0].to_string(), "Gemma Lane,Female,20/11/1991");

        let again = parse_records(records[0].to_string().as_bytes()).unwrap();
        assert_eq!(again, records);
    }

    #[test]
    fn test_invalid_line_aborts_with_line_number() {
        let input = "Bill McKnight, Male, 16/03/77\nPaul Robinson, xxx, 15/01/85\nWes Jackson, Male, 14/08/74\n";
        let err = parse_records(input.as_bytes()).unwrap_err();
        assert!(matches!(err, AddressBookError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        let err = parse_records("Bill McKnight, Male\n".as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(1));

        // Commas are never quoted, so a comma inside a name adds a field
        let err = parse_records("\"McKnight, Bill\", Male, 16/03/77\n".as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_blank_line_rejected() {
        let input = "Bill McKnight, Male, 16/03/77\n\nPaul Robinson, Male, 15/01/85\n";
        let err = parse_records(input.as_bytes()).unwrap_err();
        match err {
            AddressBookError::InvalidRecord { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "field count (1 instead of 3)");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        // Same outcome for a whitespace-only line
        let err = parse_records("Bill McKnight, Male, 16/03/77\n   \n".as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_trailing_blank_line_rejected() {
        let err = parse_records("Bill McKnight, Male, 16/03/77\n\n".as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_missing_final_newline_accepted() {
        let records = parse_records("Bill McKnight, Male, 16/03/77\nWes Jackson, Male, 14/08/74".as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_line_numbers_after_error_free_lines() {
        let input = "Bill McKnight, Male, 16/03/77\nPaul Robinson, Male, 15/01/85\nGemma Lane, Female, 1/11/91\n";
        let err = parse_records(input.as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_non_utf8_line_rejected() {
        let input: &[u8] = b"Bill McKnight, Male, 16/03/77\nG\xffmma Lane, Female, 20/11/91\n";
        let err = parse_records(input).unwrap_err();
        assert_eq!(err.to_string(), "Address in line 2 contains an invalid encoding (not UTF-8)");
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse_records("Sarah Stone,Female,20/09/80\r\nWes Jackson,Male,14/08/74\r\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].birthdate(), NaiveDate::from_ymd_opt(1980, 9, 20).unwrap());
    }

    #[test]
    fn test_empty_input_gives_empty_list() {
        assert!(parse_records("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_file_source_loads() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(BOOK.as_bytes()).unwrap();
        tmp.flush().unwrap();

        let source = FileRecordSource::new(tmp.path());
        let records = source.load().unwrap();
        assert_eq!(records.len(), 5);
        assert!(source.describe().starts_with("file "));
    }

    #[test]
    fn test_file_source_missing_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileRecordSource::new(dir.path().join("missing.dat"));
        assert!(matches!(source.load(), Err(AddressBookError::Io(_))));
    }

    #[test]
    fn test_file_source_invalid_line_discards_records() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "Bill McKnight, Male, 16/03/77").unwrap();
        writeln!(tmp, ", Male, 16/03/77").unwrap();
        tmp.flush().unwrap();

        let err = FileRecordSource::new(tmp.path()).load().unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(FileRecordSource::default().path(), Path::new("data/addressBook.dat"));
    }

    #[test]
    fn test_memory_source_returns_records() {
        let record = Record::new(
            "Wes Jackson",
            Sex::Male,
            NaiveDate::from_ymd_opt(1974, 8, 14).unwrap(),
        );
        let source = MemoryRecordSource::new(vec![record.clone()]);
        assert_eq!(source.load().unwrap(), vec![record]);
        assert_eq!(source.describe(), "memory (1 records)");
    }
}
