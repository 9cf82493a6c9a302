// 🔍 Record Validator
// Turns the three raw text fields of an address line into typed values.
//
// Every failure carries the input line number so the caller can point at the
// offending line of the address book.

use crate::error::{AddressBookError, Result};
use crate::record::{Record, Sex};
use chrono::NaiveDate;

/// Positions inside a `day/month/year` literal
const DAY: usize = 0;
const MONTH: usize = 1;
const YEAR: usize = 2;

/// Century prefixed to two-digit years ("87" → 1987). Fixed, not configurable.
const TWO_DIGIT_CENTURY: i32 = 1900;

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator {
    line: usize,
}

impl RecordValidator {
    /// Validator reporting errors against a 1-based input line
    pub fn at_line(line: usize) -> Self {
        RecordValidator { line }
    }

    /// Validate all three fields and build the record
    pub fn validate_fields(&self, name: &str, sex: &str, date: &str) -> Result<Record> {
        let name = self.validate_name(name)?;
        let sex = self.validate_sex(sex)?;
        let birthdate = self.validate_date(date)?;
        Ok(Record::new(name, sex, birthdate))
    }

    pub fn validate_name(&self, raw: &str) -> Result<String> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(self.invalid("name"));
        }
        Ok(name.to_string())
    }

    pub fn validate_sex(&self, raw: &str) -> Result<Sex> {
        Sex::from_token(raw.trim()).ok_or_else(|| self.invalid("sex"))
    }

    /// Parse `dd/mm/yy` or `dd/mm/yyyy`
    pub fn validate_date(&self, raw: &str) -> Result<NaiveDate> {
        let tokens: Vec<&str> = raw.trim().split('/').collect();
        if tokens.len() != 3 {
            return Err(self.invalid("date (expected day/month/year)"));
        }

        let year_len = tokens[YEAR].chars().count();
        if year_len != 2 && year_len != 4 {
            return Err(self.invalid("date (year must have 2 or 4 digits)"));
        }
        if tokens[MONTH].chars().count() != 2 {
            return Err(self.invalid("date (month must have 2 digits)"));
        }
        if tokens[DAY].chars().count() != 2 {
            return Err(self.invalid("date (day must have 2 digits)"));
        }

        let day = self.numeric(tokens[DAY])?;
        let month = self.numeric(tokens[MONTH])?;
        let mut year = self.numeric(tokens[YEAR])? as i32;
        if year_len == 2 {
            year += TWO_DIGIT_CENTURY;
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| self.invalid("date (no such calendar day)"))
    }

    /// Digits only; signs and inner whitespace are rejected
    fn numeric(&self, token: &str) -> Result<u32> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.invalid("date (non-numeric value)"));
        }
        token
            .parse()
            .map_err(|_| self.invalid("date (non-numeric value)"))
    }

    fn invalid(&self, reason: &str) -> AddressBookError {
        AddressBookError::invalid(self.line, reason)
    }
}
