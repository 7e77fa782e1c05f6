//! Content matrix builder.
//!
//! [`build_content`] combines level and subject fragments into a complete
//! [`ContentEntry`]. It is total over offered pairs and has no error path;
//! callers validate the pair first (see [`crate::routes`]).

pub mod assessment;
pub mod columns;

use curriculum_shared::{
    ContentEntry, CourseContent, Differentiator, Differentiators, Hero, KeyBadge, Overview,
    OverviewCard, Qualification, QualificationKey, Seo, Subject, SubjectKey, Success, Testimonial,
};
use tracing::debug;

use crate::catalog;
use columns::ColumnTemplate;

use QualificationKey as L;

/// Build the content entry for an offered (level, subject) pair.
pub fn build_content(level: QualificationKey, subject: SubjectKey) -> ContentEntry {
    let q = catalog::qualification(level);
    let s = catalog::subject(subject);
    debug!(%level, %subject, "building content entry");

    ContentEntry {
        level,
        subject,
        seo: seo(q, s),
        hero: hero(q, s),
        overview: overview(q, s),
        course_content: CourseContent {
            heading: format!("What {} {} Covers", q.label, s.label),
            columns: ColumnTemplate::for_subject(subject).columns(level),
        },
        assessment: assessment::assessment(q, s),
        exam_boards: assessment::exam_boards(q, s),
        differentiators: differentiators(q),
        success: success(q, s),
    }
}

// ---------------------------------------------------------------------------
// SEO
// ---------------------------------------------------------------------------

/// Boards/format descriptor used in SEO text.
///
/// IB, MYP and Primary badges are programme names rather than board lists,
/// so their descriptors are fixed.
pub fn boards_for_seo(level: &Qualification) -> String {
    match level.key {
        L::Ib => "SL & HL".to_string(),
        L::Myp => "MYP Criteria".to_string(),
        L::Primary => "UK & International Schools".to_string(),
        _ => level.badge.replace(" · ", ", "),
    }
}

fn seo(level: &Qualification, subject: &Subject) -> Seo {
    let (l, s) = (level.label, subject.label);
    let boards = boards_for_seo(level);
    let (ll, sl, bl) = (
        l.to_lowercase(),
        s.to_lowercase(),
        boards.to_lowercase(),
    );

    Seo {
        title: format!("{l} {s} Tutor in Dubai | {boards}"),
        description: format!(
            "Expert {l} {s} tuition in Dubai ({boards}). Small-group classes, \
             structured practice and clear progress tracking with specialist tutors."
        ),
        keywords: [
            format!("{ll} {sl} tutor dubai"),
            format!("{ll} {sl} tuition"),
            format!("{ll} {sl} {bl}"),
            format!("{sl} tutor dubai"),
            "small group tuition dubai".to_string(),
            "exam preparation uae".to_string(),
        ]
        .join(", "),
    }
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

fn badge(title: &str, subtitle: &str) -> KeyBadge {
    KeyBadge {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    }
}

/// The three hero badges for a level.
pub fn key_badges(level: &Qualification) -> [KeyBadge; 3] {
    let age = level.age_range;
    match level.key {
        L::Primary => [
            badge(age, "EYFS to Year 6"),
            badge("UK & International", "Curriculum aligned"),
            badge("Confidence First", "Strong foundations"),
        ],
        L::Ks3 => [
            badge(age, "Years 7–9"),
            badge("National Curriculum", "UK & British schools"),
            badge("GCSE Ready", "Early exam skills"),
        ],
        L::Gcse => [
            badge(age, "Years 10–11"),
            badge("AQA · Edexcel · OCR", "All major boards"),
            badge("Target Grades", "Grades 7–9"),
        ],
        L::Igcse => [
            badge(age, "Years 10–11"),
            badge("Cambridge · Edexcel", "International boards"),
            badge("Target Grades", "A* / 9–7"),
        ],
        L::ALevel => [
            badge(age, "Years 12–13"),
            badge("AQA · Edexcel · OCR", "Plus CIE International"),
            badge("Target Grades", "A*–A"),
        ],
        L::Ib => [
            badge(age, "DP1 & DP2"),
            badge("SL & HL", "Both levels covered"),
            badge("Target Scores", "6s & 7s"),
        ],
        L::Myp => [
            badge(age, "MYP Years 1–5"),
            badge("Criteria A–D", "Assessment aligned"),
            badge("eAssessment", "MYP 5 ready"),
        ],
    }
}

fn hero(level: &Qualification, subject: &Subject) -> Hero {
    let (l, s) = (level.label, subject.label);
    let subtitle = if level.key.is_primary_like() {
        format!(
            "Patient, structured {s} lessons that build skills and confidence. {}.",
            level.trust_line
        )
    } else {
        format!(
            "Specialist {l} {s} tutoring focused on the syllabus, exam technique and top grades. {}.",
            level.trust_line
        )
    };

    Hero {
        title: format!("{l} {s} Tuition in Dubai"),
        subtitle,
        key_badges: key_badges(level).into(),
    }
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

fn overview_card(title: &str, body: &str) -> OverviewCard {
    OverviewCard {
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Hand-written overview cards; only two pairs have them.
pub fn overview_cards(level: QualificationKey, subject: SubjectKey) -> Option<Vec<OverviewCard>> {
    match (level, subject) {
        (L::Gcse, SubjectKey::Mathematics) => Some(vec![
            overview_card(
                "Two Tiers",
                "Foundation covers grades 1–5; Higher covers grades 4–9.",
            ),
            overview_card(
                "Three Papers",
                "One non-calculator and two calculator papers, equally weighted.",
            ),
            overview_card(
                "Formulae Recall",
                "Most formulae must be memorised; we drill them until they stick.",
            ),
        ]),
        (L::Gcse, SubjectKey::English) => Some(vec![
            overview_card(
                "Language & Literature",
                "Two separate GCSEs, both built on close reading and timed writing.",
            ),
            overview_card(
                "Closed Book",
                "Set texts are examined without the book, so quotation recall matters.",
            ),
            overview_card(
                "Writing Skills",
                "Descriptive and persuasive writing carry half the Language marks.",
            ),
        ]),
        _ => None,
    }
}

fn overview(level: &Qualification, subject: &Subject) -> Overview {
    let (l, s) = (level.label, subject.label);
    Overview {
        heading: format!("{l} {s} Overview"),
        body: format!(
            "Our {l} {s} programme follows your school's syllabus ({}), combining clear \
             teaching with regular practice so that every topic is secure well before assessments.",
            level.badge
        ),
        cards: overview_cards(level.key, subject.key),
    }
}

// ---------------------------------------------------------------------------
// Differentiators
// ---------------------------------------------------------------------------

/// Background/foreground colour pair for a level's tiles.
pub fn level_colors(level: QualificationKey) -> (&'static str, &'static str) {
    match level {
        L::Primary => ("bg-emerald-50", "text-emerald-700"),
        L::Ks3 => ("bg-sky-50", "text-sky-700"),
        L::Gcse => ("bg-indigo-50", "text-indigo-700"),
        L::Igcse => ("bg-violet-50", "text-violet-700"),
        L::ALevel => ("bg-rose-50", "text-rose-700"),
        L::Ib => ("bg-amber-50", "text-amber-700"),
        L::Myp => ("bg-teal-50", "text-teal-700"),
    }
}

fn differentiators(level: &Qualification) -> Differentiators {
    let l = level.label;
    let (bg, fg) = level_colors(level.key);
    let tile = |title: &str, body: String| Differentiator {
        title: title.to_string(),
        body,
        background: bg.to_string(),
        foreground: fg.to_string(),
    };

    let early = level.key.is_primary_like();
    let (second_title, second_body) = if early {
        (
            "Skills First",
            "We secure the fundamentals before moving on, so nothing is left to chance.".to_string(),
        )
    } else {
        (
            "Exam Technique",
            format!("Mark-scheme thinking and timing practice built into every {l} lesson."),
        )
    };
    let (third_title, third_body) = if early {
        (
            "Confidence Building",
            "Encouraging tutors who make learning feel achievable and fun.".to_string(),
        )
    } else {
        (
            "Past Papers",
            format!("Regular timed {l} past papers, marked with examiner-style feedback."),
        )
    };

    Differentiators {
        heading: format!("Why Choose Us for {l}"),
        items: vec![
            tile(
                "Small Groups",
                format!("No more than six students, so every {l} learner gets real attention."),
            ),
            tile(second_title, second_body),
            tile(third_title, third_body),
            tile(
                "Progress Tracking",
                "Regular reports show parents exactly where progress is being made.".to_string(),
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

/// Who the testimonials are attributed to at each level.
pub fn testimonial_role(level: QualificationKey) -> &'static str {
    match level {
        L::Primary => "Parent, Year 4",
        L::Ks3 => "Parent, Year 8",
        L::Gcse | L::Igcse => "Student, Year 11",
        L::ALevel => "Student, Year 13",
        L::Ib => "Student, DP2",
        L::Myp => "Student, MYP 5",
    }
}

fn success(level: &Qualification, subject: &Subject) -> Success {
    let (l, s) = (level.label, subject.label);
    let role = testimonial_role(level.key);
    Success {
        heading: format!("{l} {s} Success Stories"),
        testimonials: vec![
            Testimonial {
                quote: format!(
                    "The {l} {s} sessions turned things around. Clear explanations, \
                     plenty of practice and honest feedback every week."
                ),
                author: "Sarah M.".to_string(),
                role: role.to_string(),
            },
            Testimonial {
                quote: format!(
                    "Our tutor knew the {l} {s} course inside out. Confidence went up \
                     long before the results did."
                ),
                author: "Ahmed K.".to_string(),
                role: role.to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offered_pairs() -> impl Iterator<Item = (QualificationKey, SubjectKey)> {
        catalog::SUBJECTS_BY_LEVEL
            .iter()
            .flat_map(|(level, subjects)| subjects.iter().map(move |s| (*level, *s)))
    }

    #[test]
    fn totality_over_offered_pairs() {
        for (level, subject) in offered_pairs() {
            let entry = build_content(level, subject);
            assert!(!entry.seo.title.is_empty(), "{level}/{subject}");
            assert!(!entry.seo.description.is_empty());
            assert_eq!(entry.hero.key_badges.len(), 3);
            assert_eq!(entry.differentiators.items.len(), 4);
            assert_eq!(entry.success.testimonials.len(), 2);
            assert_eq!(entry.course_content.columns.len(), 3);
            assert!(!entry.assessment.cards.is_empty());
            assert!((2..=3).contains(&entry.exam_boards.cards.len()));
        }
    }

    #[test]
    fn deterministic() {
        for (level, subject) in offered_pairs() {
            assert_eq!(build_content(level, subject), build_content(level, subject));
        }
    }

    #[test]
    fn gcse_biology_scenario() {
        let entry = build_content(L::Gcse, SubjectKey::Biology);
        for needle in ["GCSE", "Biology", "Dubai"] {
            assert!(entry.seo.title.contains(needle), "title lacks {needle}");
        }
        assert_eq!(entry.hero.key_badges[2].title, "Target Grades");
    }

    #[test]
    fn ib_psychology_scenario() {
        let entry = build_content(L::Ib, SubjectKey::Psychology);
        assert!(
            entry
                .assessment
                .cards
                .iter()
                .any(|c| c.eyebrow == "Internal" && c.title == "IA Support")
        );
    }

    #[test]
    fn boards_descriptor_per_level() {
        let d = |key| boards_for_seo(catalog::qualification(key));
        assert_eq!(d(L::Ib), "SL & HL");
        assert_eq!(d(L::Myp), "MYP Criteria");
        assert_eq!(d(L::Primary), "UK & International Schools");
        assert_eq!(d(L::Gcse), "AQA, Edexcel, OCR");
        assert_eq!(d(L::Igcse), "Cambridge, Edexcel");
    }

    #[test]
    fn keywords_are_lowercase_and_comma_joined() {
        let entry = build_content(L::ALevel, SubjectKey::Economics);
        assert!(entry.seo.keywords.starts_with("a-level economics tutor dubai, "));
        assert!(entry.seo.keywords.contains("aqa, edexcel, ocr, cie"));
    }

    #[test]
    fn overview_cards_only_for_gcse_maths_and_english() {
        for (level, subject) in offered_pairs() {
            let entry = build_content(level, subject);
            let expected = level == L::Gcse
                && matches!(subject, SubjectKey::Mathematics | SubjectKey::English);
            assert_eq!(entry.overview.cards.is_some(), expected, "{level}/{subject}");
        }
    }

    #[test]
    fn differentiators_follow_level() {
        let primary = build_content(L::Primary, SubjectKey::English);
        let titles: Vec<_> = primary
            .differentiators
            .items
            .iter()
            .map(|d| d.title.as_str())
            .collect();
        assert_eq!(
            titles,
            ["Small Groups", "Skills First", "Confidence Building", "Progress Tracking"]
        );
        assert!(
            primary
                .differentiators
                .items
                .iter()
                .all(|d| d.background == "bg-emerald-50")
        );

        let gcse = build_content(L::Gcse, SubjectKey::Physics);
        assert_eq!(gcse.differentiators.items[1].title, "Exam Technique");
        assert_eq!(gcse.differentiators.items[2].title, "Past Papers");
    }

    #[test]
    fn testimonials_use_fixed_authors_and_level_role() {
        let entry = build_content(L::Gcse, SubjectKey::Chemistry);
        let t = &entry.success.testimonials;
        assert_eq!(t[0].author, "Sarah M.");
        assert_eq!(t[1].author, "Ahmed K.");
        assert!(t.iter().all(|t| t.role == "Student, Year 11"));
        assert!(t[0].quote.contains("GCSE Chemistry"));
    }

    #[test]
    fn every_level_has_three_badges_with_age_first() {
        for key in QualificationKey::ALL {
            let q = catalog::qualification(key);
            let badges = key_badges(q);
            assert_eq!(badges[0].title, q.age_range);
        }
    }

    #[test]
    fn serialized_entry_uses_renderer_field_names() {
        let entry = build_content(L::Gcse, SubjectKey::Mathematics);
        let json = serde_json::to_string(&entry).expect("serialize");
        for key in [
            "\"keyBadges\"",
            "\"courseContent\"",
            "\"examBoards\"",
            "\"noteHeading\"",
            "\"noteBody\"",
            "\"specification\"",
            "\"testimonials\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
        assert!(!json.contains("key_badges"));
        assert!(!json.contains("exam_boards"));
    }
}
