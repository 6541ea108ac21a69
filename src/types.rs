//! Type-safe survey types
//!
//! Student status, degree programs and Likert answers are closed sets, so they
//! are modelled as enums with strum-derived string forms instead of raw strings.

use crate::error::{RecommenderError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Substring that marks a program as graduate level
pub const GRADUATE_QUALIFIER: &str = "Master of Science";

/// Student status chosen once at the start of a survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum StudentStatus {
    #[default]
    Undergraduate,
    Graduate,
}

impl StudentStatus {
    /// Parse a status, rejecting anything but the two exact names
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| RecommenderError::InvalidStatus(s.to_string()))
    }

    /// The other status (used by the welcome screen toggle)
    pub fn toggled(self) -> Self {
        match self {
            Self::Undergraduate => Self::Graduate,
            Self::Graduate => Self::Undergraduate,
        }
    }
}

/// Degree programs known to the catalog, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, AsRefStr)]
pub enum Program {
    #[strum(serialize = "Bachelor of Science, Computer Science")]
    #[serde(rename = "Bachelor of Science, Computer Science")]
    BsComputerScience,
    #[strum(serialize = "Bachelor of Science, Cybersecurity and Information Assurance")]
    #[serde(rename = "Bachelor of Science, Cybersecurity and Information Assurance")]
    BsCybersecurity,
    #[strum(serialize = "Bachelor of Science, Data Analytics")]
    #[serde(rename = "Bachelor of Science, Data Analytics")]
    BsDataAnalytics,
    #[strum(serialize = "Bachelor of Science, Network Engineering and Security")]
    #[serde(rename = "Bachelor of Science, Network Engineering and Security")]
    BsNetworkEngineering,
    #[strum(serialize = "Bachelor of Science, Software Engineering")]
    #[serde(rename = "Bachelor of Science, Software Engineering")]
    BsSoftwareEngineering,
    #[strum(serialize = "Bachelor of Science, Cloud Computing")]
    #[serde(rename = "Bachelor of Science, Cloud Computing")]
    BsCloudComputing,
    #[strum(serialize = "Bachelor of Science, Information Technology")]
    #[serde(rename = "Bachelor of Science, Information Technology")]
    BsInformationTechnology,
    #[strum(serialize = "Master of Science, Cybersecurity and Information Assurance")]
    #[serde(rename = "Master of Science, Cybersecurity and Information Assurance")]
    MsCybersecurity,
    #[strum(serialize = "Master of Science, Data Analytics")]
    #[serde(rename = "Master of Science, Data Analytics")]
    MsDataAnalytics,
    #[strum(serialize = "Master of Science, Information Technology Management")]
    #[serde(rename = "Master of Science, Information Technology Management")]
    MsItManagement,
}

impl Program {
    /// Look up a program by its full display name
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| RecommenderError::UnknownProgram(name.to_string()))
    }

    /// Tier of this program, decided by the graduate qualifier in its name.
    ///
    /// This is the single status filter used by both the catalog and the engine.
    pub fn tier(&self) -> StudentStatus {
        if self.as_ref().contains(GRADUATE_QUALIFIER) {
            StudentStatus::Graduate
        } else {
            StudentStatus::Undergraduate
        }
    }

    /// Whether this program is offered to students with `status`
    pub fn matches(&self, status: StudentStatus) -> bool {
        self.tier() == status
    }

    /// All programs for a status, in catalog order
    pub fn for_status(status: StudentStatus) -> impl Iterator<Item = Program> {
        Self::iter().filter(move |p| p.matches(status))
    }
}

/// A single Likert answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumIter)]
#[serde(try_from = "u8", into = "u8")]
pub enum LikertScore {
    #[strum(serialize = "Strongly Disagree")]
    StronglyDisagree = 1,
    #[strum(serialize = "Disagree")]
    Disagree = 2,
    #[strum(serialize = "Neutral")]
    Neutral = 3,
    #[strum(serialize = "Agree")]
    Agree = 4,
    #[strum(serialize = "Strongly Agree")]
    StronglyAgree = 5,
}

impl LikertScore {
    /// Lowest possible answer value
    pub const MIN: u8 = 1;
    /// Highest possible answer value
    pub const MAX: u8 = 5;

    /// Numeric value in 1..=5
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Answer one step towards "Strongly Disagree", saturating
    pub fn lower(self) -> Self {
        Self::try_from(self.value().saturating_sub(1).max(Self::MIN)).unwrap_or(self)
    }

    /// Answer one step towards "Strongly Agree", saturating
    pub fn higher(self) -> Self {
        Self::try_from((self.value() + 1).min(Self::MAX)).unwrap_or(self)
    }
}

impl TryFrom<u8> for LikertScore {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::StronglyDisagree),
            2 => Ok(Self::Disagree),
            3 => Ok(Self::Neutral),
            4 => Ok(Self::Agree),
            5 => Ok(Self::StronglyAgree),
            other => Err(other),
        }
    }
}

impl From<LikertScore> for u8 {
    fn from(score: LikertScore) -> Self {
        score.value()
    }
}
