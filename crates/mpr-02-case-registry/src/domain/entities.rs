//! # Case Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, CaseId, CaseStatus, Division, Timestamp};

/// A missing-person case record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Case id, dense from 1.
    pub id: CaseId,
    /// Name of the missing person.
    pub name: String,
    /// Age in years (1-120).
    pub age: u16,
    /// Height in centimetres (50-250).
    pub height: u16,
    /// Free-form description (clothing, last seen location, ...).
    pub description: String,
    /// Division the person was last seen in.
    pub division: Division,
    /// Contact of the reporting relative.
    pub relative_contact: String,
    /// Lifecycle status.
    pub status: CaseStatus,
    /// Assigned investigator; `None` while unassigned.
    pub investigator: Option<Address>,
    /// Identity that filed the report.
    pub reporter: Address,
    /// Commit time of the report.
    pub reported_at: Timestamp,
}

impl Case {
    /// Returns true while an investigator has not been assigned.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.investigator.is_none()
    }

    /// Returns true while the person is still missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.status == CaseStatus::Missing
    }

    /// Triage level derived from the person's age.
    #[must_use]
    pub fn urgency(&self) -> Urgency {
        Urgency::for_age(self.age)
    }
}

/// Triage level of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    /// Minors.
    High,
    /// Over fifty.
    Medium,
    /// Everyone else.
    Low,
}

impl Urgency {
    /// Classify by age: under 18 is `High`, over 50 is `Medium`.
    #[must_use]
    pub fn for_age(age: u16) -> Self {
        if age < 18 {
            Urgency::High
        } else if age > 50 {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }
}

/// Input of `add_case`, as submitted by a reporter.
///
/// `division` is the raw wire code; it is range-checked on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCase {
    /// Name of the missing person.
    pub name: String,
    /// Age in years.
    pub age: u16,
    /// Height in centimetres.
    pub height: u16,
    /// Free-form description.
    pub description: String,
    /// Division wire code (0-7).
    pub division: u8,
    /// Contact of the reporting relative.
    pub relative_contact: String,
}

impl NewCase {
    /// Build a report for a known division.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u16,
        height: u16,
        description: impl Into<String>,
        division: Division,
        relative_contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            height,
            description: description.into(),
            division: division.code(),
            relative_contact: relative_contact.into(),
        }
    }
}
