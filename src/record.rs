// 📇 Record - one validated address book entry
// Fields are private: a Record only exists once every field passed validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SEX
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Canonical capitalised form
    pub fn name(&self) -> &str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }

    /// Case-insensitive lookup of an already trimmed token
    pub fn from_token(token: &str) -> Option<Sex> {
        if token.eq_ignore_ascii_case("female") {
            Some(Sex::Female)
        } else if token.eq_ignore_ascii_case("male") {
            Some(Sex::Male)
        } else {
            None
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    sex: Sex,
    birthdate: NaiveDate,
}

impl Record {
    /// Build from already validated parts. Use `RecordValidator` for raw text.
    pub fn new(name: impl Into<String>, sex: Sex, birthdate: NaiveDate) -> Self {
        Record {
            name: name.into(),
            sex,
            birthdate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }
}

/// Canonical input line: `<name>,<Sex>,<dd>/<mm>/<yyyy>`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.name,
            self.sex,
            self.birthdate.format("%d/%m/%Y")
        )
    }
}
