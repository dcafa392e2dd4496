/// what one ingestion run did, with skip reasons. malformed blocks and
/// duplicate hand ids are expected conditions, never run failures.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub files: usize,
    pub unreadable: usize,
    pub ingested: usize,
    pub malformed: usize,
    pub duplicates: usize,
}

impl Report {
    pub fn merge(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            unreadable: self.unreadable + other.unreadable,
            ingested: self.ingested + other.ingested,
            malformed: self.malformed + other.malformed,
            duplicates: self.duplicates + other.duplicates,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{} files ({} {})  {} hands {}  {} {}  {} {}",
            self.files,
            self.unreadable,
            "unreadable".red(),
            self.ingested,
            "ingested".green(),
            self.malformed,
            "malformed".red(),
            self.duplicates,
            "duplicate".yellow(),
        )
    }
}

use colored::*;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
