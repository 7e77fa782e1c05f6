//! Core domain types: the closed key sets and the content entry shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CurriculumError;

/// Current schema version for exported content files.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// QualificationKey
// ---------------------------------------------------------------------------

/// One pedagogical stage or programme. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualificationKey {
    Primary,
    Ks3,
    Gcse,
    Igcse,
    ALevel,
    Ib,
    Myp,
}

impl QualificationKey {
    /// All levels in table order.
    pub const ALL: [QualificationKey; 7] = [
        Self::Primary,
        Self::Ks3,
        Self::Gcse,
        Self::Igcse,
        Self::ALevel,
        Self::Ib,
        Self::Myp,
    ];

    /// URL slug, e.g. `a-level`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Ks3 => "ks3",
            Self::Gcse => "gcse",
            Self::Igcse => "igcse",
            Self::ALevel => "a-level",
            Self::Ib => "ib",
            Self::Myp => "myp",
        }
    }

    /// Primary and KS3 get age-appropriate rather than exam-focused content.
    pub fn is_primary_like(self) -> bool {
        matches!(self, Self::Primary | Self::Ks3)
    }
}

impl fmt::Display for QualificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.slug())
    }
}

impl FromStr for QualificationKey {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.slug() == wanted)
            .ok_or_else(|| CurriculumError::UnknownLevel(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SubjectKey
// ---------------------------------------------------------------------------

/// One teachable subject. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectKey {
    Mathematics,
    English,
    Science,
    Physics,
    Chemistry,
    Biology,
    BusinessStudies,
    Economics,
    Psychology,
}

impl SubjectKey {
    /// All subjects in table order.
    pub const ALL: [SubjectKey; 9] = [
        Self::Mathematics,
        Self::English,
        Self::Science,
        Self::Physics,
        Self::Chemistry,
        Self::Biology,
        Self::BusinessStudies,
        Self::Economics,
        Self::Psychology,
    ];

    /// URL slug, e.g. `business-studies`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Mathematics => "mathematics",
            Self::English => "english",
            Self::Science => "science",
            Self::Physics => "physics",
            Self::Chemistry => "chemistry",
            Self::Biology => "biology",
            Self::BusinessStudies => "business-studies",
            Self::Economics => "economics",
            Self::Psychology => "psychology",
        }
    }

    /// Physics, Chemistry, Biology and combined Science.
    pub fn is_science(self) -> bool {
        matches!(
            self,
            Self::Science | Self::Physics | Self::Chemistry | Self::Biology
        )
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.slug())
    }
}

impl FromStr for SubjectKey {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.slug() == wanted)
            .ok_or_else(|| CurriculumError::UnknownSubject(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Static table rows
// ---------------------------------------------------------------------------

/// A row of the qualification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Qualification {
    pub key: QualificationKey,
    pub label: &'static str,
    /// Visual theme token consumed by the renderer.
    pub theme: &'static str,
    /// Exam boards or programme descriptor.
    pub badge: &'static str,
    pub age_range: &'static str,
    pub trust_line: &'static str,
}

/// A row of the subject table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub key: SubjectKey,
    pub label: &'static str,
    /// Canonical course page, relative to the site root.
    pub course_url: &'static str,
}

// ---------------------------------------------------------------------------
// ContentEntry
// ---------------------------------------------------------------------------

/// The fully assembled content bundle for one (level, subject) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub level: QualificationKey,
    pub subject: SubjectKey,
    pub seo: Seo,
    pub hero: Hero,
    pub overview: Overview,
    pub course_content: CourseContent,
    pub assessment: Assessment,
    pub exam_boards: ExamBoards,
    pub differentiators: Differentiators,
    pub success: Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub key_badges: Vec<KeyBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyBadge {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub heading: String,
    pub body: String,
    /// Only set for hand-written pairs; absent means "skip the card block".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<OverviewCard>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewCard {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseContent {
    pub heading: String,
    pub columns: Vec<ContentColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentColumn {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub heading: String,
    pub cards: Vec<AssessmentCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentCard {
    pub eyebrow: String,
    pub title: String,
    pub body: String,
    /// Theme token for the card accent.
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamBoards {
    pub heading: String,
    pub cards: Vec<ExamBoardCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamBoardCard {
    pub name: String,
    pub description: String,
    /// Board specification code, only known for some pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Differentiators {
    pub heading: String,
    pub items: Vec<Differentiator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Differentiator {
    pub title: String,
    pub body: String,
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Success {
    pub heading: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_slug_roundtrip() {
        for key in QualificationKey::ALL {
            let parsed: QualificationKey = key.slug().parse().expect("parse level");
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!("A-Level".parse::<QualificationKey>().unwrap(), QualificationKey::ALevel);
        assert_eq!(" GCSE ".parse::<QualificationKey>().unwrap(), QualificationKey::Gcse);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = "eyfs".parse::<QualificationKey>().unwrap_err();
        assert!(matches!(err, CurriculumError::UnknownLevel(ref s) if s == "eyfs"));

        let err = "art".parse::<SubjectKey>().unwrap_err();
        assert!(matches!(err, CurriculumError::UnknownSubject(_)));
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&QualificationKey::ALevel).expect("serialize");
        assert_eq!(json, "\"a-level\"");
        let json = serde_json::to_string(&SubjectKey::BusinessStudies).expect("serialize");
        assert_eq!(json, "\"business-studies\"");
        let parsed: SubjectKey = serde_json::from_str("\"psychology\"").expect("deserialize");
        assert_eq!(parsed, SubjectKey::Psychology);
    }

    #[test]
    fn optional_fields_are_omitted() {
        let overview = Overview {
            heading: "Overview".into(),
            body: "Body".into(),
            cards: None,
        };
        let json = serde_json::to_string(&overview).expect("serialize");
        assert!(!json.contains("cards"));

        let card = ExamBoardCard {
            name: "AQA".into(),
            description: "Desc".into(),
            specification: Some("8300".into()),
        };
        let json = serde_json::to_string(&card).expect("serialize");
        assert!(json.contains("\"specification\":\"8300\""));
    }

    #[test]
    fn entry_fields_use_camel_case() {
        let assessment = Assessment {
            heading: "Assessment".into(),
            cards: Vec::new(),
            note_heading: Some("Tiers".into()),
            note_body: Some("Foundation or Higher".into()),
        };
        let json = serde_json::to_string(&assessment).expect("serialize");
        assert!(json.contains("\"noteHeading\":\"Tiers\""));
        assert!(json.contains("\"noteBody\""));
        assert!(!json.contains("note_heading"));

        let parsed: Assessment = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, assessment);
    }

    #[test]
    fn primary_like_levels() {
        assert!(QualificationKey::Primary.is_primary_like());
        assert!(QualificationKey::Ks3.is_primary_like());
        assert!(!QualificationKey::Gcse.is_primary_like());
        assert!(!QualificationKey::Myp.is_primary_like());
    }
}
