// 📊 Report Engine
// The three address book questions, each a single linear scan over records.

use crate::error::{AddressBookError, Result};
use crate::record::{Record, Sex};
use crate::source::RecordSource;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// REPORT
// ============================================================================

/// All three answers, computed before anything is printed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub female_count: usize,
    pub oldest: Record,
    pub older_name: String,
    pub younger_name: String,
    pub days_older: i64,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "1. The addressbook contains {} female persons.",
            self.female_count
        )?;
        writeln!(f, "2. The oldest person is {}", self.oldest.name())?;
        writeln!(
            f,
            "3. {} is {} days older than {}.",
            self.older_name, self.days_older, self.younger_name
        )
    }
}

// ============================================================================
// REPORT ENGINE
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportEngine;

impl ReportEngine {
    pub fn new() -> Self {
        ReportEngine
    }

    /// Number of records with the given sex
    pub fn count_by_sex(&self, records: &[Record], sex: Sex) -> usize {
        records.iter().filter(|r| r.sex() == sex).count()
    }

    /// Record with the earliest birthdate.
    ///
    /// Ties go to the record that appears first in the input.
    pub fn find_oldest<'a>(&self, records: &'a [Record]) -> Result<&'a Record> {
        let mut oldest = records.first().ok_or(AddressBookError::EmptyInput)?;
        for record in &records[1..] {
            if record.birthdate() < oldest.birthdate() {
                oldest = record;
            }
        }
        Ok(oldest)
    }

    /// Days between the birthdates of the first records whose names start
    /// with `older` and `younger`: `birthdate(younger) - birthdate(older)`.
    ///
    /// Matching is a literal prefix match, so "Bill" matches "Bill McKnight".
    /// The result is negative when the "older" person was born later.
    pub fn day_difference(&self, records: &[Record], older: &str, younger: &str) -> Result<i64> {
        let older_record = find_by_prefix(records, older)?;
        info!("Name of the older person: {}", older_record.name());

        let younger_record = find_by_prefix(records, younger)?;
        info!("Name of the younger person: {}", younger_record.name());

        let days = (younger_record.birthdate() - older_record.birthdate()).num_days();
        debug!(
            "{} was born {} days earlier than {}",
            older_record.name(),
            days,
            younger_record.name()
        );
        Ok(days)
    }

    /// Answer all three questions at once
    pub fn build_report(&self, records: &[Record], older: &str, younger: &str) -> Result<Report> {
        let female_count = self.count_by_sex(records, Sex::Female);
        let oldest = self.find_oldest(records)?.clone();
        let days_older = self.day_difference(records, older, younger)?;

        Ok(Report {
            female_count,
            oldest,
            older_name: older.to_string(),
            younger_name: younger.to_string(),
            days_older,
        })
    }
}

impl ReportEngine {
    /// Load every record from `source`, then build the report.
    ///
    /// Any failure returns before a report exists, so callers never see
    /// partial answers.
    pub fn analyse(&self, source: &dyn RecordSource, older: &str, younger: &str) -> Result<Report> {
        let records = source.load()?;
        info!("Analysing {} records from {}", records.len(), source.describe());
        self.build_report(&records, older, younger)
    }
}

fn find_by_prefix<'a>(records: &'a [Record], prefix: &str) -> Result<&'a Record> {
    records
        .iter()
        .find(|r| r.name().starts_with(prefix))
        .ok_or_else(|| AddressBookError::NotFound {
            prefix: prefix.to_string(),
        })
}
