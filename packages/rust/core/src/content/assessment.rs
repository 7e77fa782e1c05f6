//! Assessment-structure and exam-board sections.
//!
//! Both are priority-ordered rule sets expressed as a single `match`; the
//! first arm that matches a pair wins.

use curriculum_shared::{
    Assessment, AssessmentCard, ExamBoardCard, ExamBoards, Qualification, QualificationKey,
    Subject, SubjectKey,
};

use QualificationKey as L;

/// Accent token for assessment cards at each level.
fn accent(level: QualificationKey) -> &'static str {
    match level {
        L::Primary => "emerald-500",
        L::Ks3 => "sky-500",
        L::Gcse => "indigo-500",
        L::Igcse => "violet-500",
        L::ALevel => "rose-500",
        L::Ib => "amber-500",
        L::Myp => "teal-500",
    }
}

fn card(eyebrow: &str, title: &str, body: String, accent: &str) -> AssessmentCard {
    AssessmentCard {
        eyebrow: eyebrow.to_string(),
        title: title.to_string(),
        body,
        accent: accent.to_string(),
    }
}

/// Build the assessment section.
///
/// Rule order: Primary, IB, MYP, GCSE Mathematics, then the generic
/// three-paper layout.
pub fn assessment(level: &Qualification, subject: &Subject) -> Assessment {
    let (l, s) = (level.label, subject.label);
    let tone = accent(level.key);
    let heading = format!("How {l} {s} Is Assessed");

    match (level.key, subject.key) {
        (L::Primary, _) => Assessment {
            heading: format!("How We Track {s} Progress"),
            cards: vec![
                card(
                    "Diagnostic",
                    "Starting Point Check",
                    format!("A relaxed first session pinpoints exactly where your child is in {s}."),
                    tone,
                ),
                card(
                    "Weekly",
                    "Progress Checks",
                    "Short in-lesson checks make sure each new skill has stuck.".to_string(),
                    tone,
                ),
                card(
                    "Termly",
                    "Parent Reports",
                    format!("A written report on {s} progress, next steps and school alignment."),
                    tone,
                ),
            ],
            note_heading: None,
            note_body: None,
        },
        (L::Ib, _) => Assessment {
            heading,
            cards: vec![
                card(
                    "Internal",
                    "IA Support",
                    format!(
                        "Topic selection, research design and draft feedback for your {s} Internal Assessment."
                    ),
                    tone,
                ),
                card(
                    "External",
                    "Exam Papers",
                    format!("Paper-by-paper practice for {s} at both SL and HL."),
                    tone,
                ),
                card(
                    "Strategy",
                    "Command Terms",
                    "Answering exactly what 'evaluate', 'discuss' and 'explain' demand.".to_string(),
                    tone,
                ),
            ],
            note_heading: Some("IA deadlines".to_string()),
            note_body: Some(
                "We plan IA milestones around your school's internal deadlines from the start of DP1."
                    .to_string(),
            ),
        },
        (L::Myp, _) => Assessment {
            heading,
            cards: vec![
                card(
                    "Criterion A",
                    "Knowing & Understanding",
                    format!("Recall and apply core {s} knowledge in familiar and unfamiliar contexts."),
                    tone,
                ),
                card(
                    "Criteria B & C",
                    "Inquiring & Processing",
                    "Designing investigations, then processing and evaluating the data.".to_string(),
                    tone,
                ),
                card(
                    "Criterion D",
                    "Reflecting on Impact",
                    format!("Discussing the real-world impact of {s} with balanced arguments."),
                    tone,
                ),
            ],
            note_heading: None,
            note_body: None,
        },
        (L::Gcse, SubjectKey::Mathematics) => Assessment {
            heading,
            cards: vec![
                card(
                    "Paper 1",
                    "Non-Calculator",
                    "1 hour 30 minutes · 80 marks · one third of the GCSE.".to_string(),
                    tone,
                ),
                card(
                    "Paper 2",
                    "Calculator",
                    "1 hour 30 minutes · 80 marks · one third of the GCSE.".to_string(),
                    tone,
                ),
                card(
                    "Paper 3",
                    "Calculator",
                    "1 hour 30 minutes · 80 marks · one third of the GCSE.".to_string(),
                    tone,
                ),
            ],
            note_heading: Some("Foundation or Higher?".to_string()),
            note_body: Some(
                "We help you choose the right tier early; Higher opens grades 4–9.".to_string(),
            ),
        },
        (_, subject_key) => {
            let (third_title, third_body) = if subject_key.is_science() {
                (
                    "Practical Skills",
                    format!("Required practicals and the practical questions that test them in {s}."),
                )
            } else {
                (
                    "Coursework",
                    format!("Structured support for {s} coursework and extended responses."),
                )
            };
            let (note_heading, note_body) = if subject_key.is_science() {
                (
                    Some("Required practicals".to_string()),
                    Some(format!(
                        "Practical methods make up a large share of {l} {s} marks; we rehearse each one."
                    )),
                )
            } else {
                (None, None)
            };
            Assessment {
                heading,
                cards: vec![
                    card(
                        "Paper 1",
                        "Written Exam",
                        format!("Core {s} content tested through structured and extended questions."),
                        tone,
                    ),
                    card(
                        "Paper 2",
                        "Topic Paper",
                        "Remaining topics tested, with synoptic questions across the course."
                            .to_string(),
                        tone,
                    ),
                    card("Paper 3", third_title, third_body, tone),
                ],
                note_heading,
                note_body,
            }
        }
    }
}

fn board(name: &str, description: &str, specification: Option<&str>) -> ExamBoardCard {
    ExamBoardCard {
        name: name.to_string(),
        description: description.to_string(),
        specification: specification.map(str::to_string),
    }
}

/// Build the exam-board section.
///
/// Rule order: Primary, IGCSE, IB, MYP, then KS3 school schemes or the
/// AQA/Edexcel/OCR trio. Specification codes are only known for GCSE
/// Mathematics.
pub fn exam_boards(level: &Qualification, subject: &Subject) -> ExamBoards {
    let heading = format!("{} {} Exam Boards", level.label, subject.label);
    let cards = match (level.key, subject.key) {
        (L::Primary, _) => vec![
            board(
                "UK National Curriculum",
                "Key Stage 1 and 2 objectives, including SATs preparation.",
                None,
            ),
            board(
                "International Schools",
                "Aligned with IPC and Cambridge Primary schemes used across Dubai.",
                None,
            ),
        ],
        (L::Igcse, _) => vec![
            board(
                "Cambridge International",
                "CIE IGCSE with Core and Extended tiers.",
                None,
            ),
            board(
                "Pearson Edexcel International",
                "Edexcel International GCSE, graded 9–1.",
                None,
            ),
        ],
        (L::Ib, _) => vec![
            board("Standard Level", "SL syllabus, papers and IA requirements.", None),
            board(
                "Higher Level",
                "HL extension content and additional paper practice.",
                None,
            ),
        ],
        (L::Myp, _) => vec![
            board(
                "MYP Criteria",
                "Teaching mapped to criteria A–D and school-set tasks.",
                None,
            ),
            board(
                "MYP eAssessment",
                "On-screen examination preparation for MYP Year 5.",
                None,
            ),
        ],
        (L::Ks3, _) => vec![
            board(
                "UK National Curriculum",
                "Key Stage 3 programmes of study for Years 7–9.",
                None,
            ),
            board(
                "Cambridge Lower Secondary",
                "Stage 7–9 frameworks and checkpoint tests.",
                None,
            ),
            board(
                "School Schemes of Work",
                "Lessons matched to your school's own topic order.",
                None,
            ),
        ],
        (level_key, subject_key) => {
            let maths = level_key == L::Gcse && subject_key == SubjectKey::Mathematics;
            vec![
                board(
                    "AQA",
                    "The UK's most widely used board.",
                    maths.then_some("8300"),
                ),
                board(
                    "Pearson Edexcel",
                    "Popular with British curriculum schools in the UAE.",
                    maths.then_some("1MA1"),
                ),
                board(
                    "OCR",
                    "Specification-specific practice and mark schemes.",
                    maths.then_some("J560"),
                ),
            ]
        }
    };

    ExamBoards { heading, cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{qualification, subject};

    fn assess(level: QualificationKey, subj: SubjectKey) -> Assessment {
        assessment(qualification(level), subject(subj))
    }

    fn boards(level: QualificationKey, subj: SubjectKey) -> ExamBoards {
        exam_boards(qualification(level), subject(subj))
    }

    #[test]
    fn gcse_maths_has_three_exact_papers() {
        let a = assess(L::Gcse, SubjectKey::Mathematics);
        let eyebrows: Vec<_> = a.cards.iter().map(|c| c.eyebrow.as_str()).collect();
        let titles: Vec<_> = a.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(eyebrows, ["Paper 1", "Paper 2", "Paper 3"]);
        assert_eq!(titles, ["Non-Calculator", "Calculator", "Calculator"]);
    }

    #[test]
    fn primary_rule_beats_everything() {
        let a = assess(L::Primary, SubjectKey::Mathematics);
        let eyebrows: Vec<_> = a.cards.iter().map(|c| c.eyebrow.as_str()).collect();
        assert_eq!(eyebrows, ["Diagnostic", "Weekly", "Termly"]);
    }

    #[test]
    fn ib_has_ia_support() {
        let a = assess(L::Ib, SubjectKey::Psychology);
        assert!(
            a.cards
                .iter()
                .any(|c| c.eyebrow == "Internal" && c.title == "IA Support")
        );
    }

    #[test]
    fn myp_is_criteria_based() {
        let a = assess(L::Myp, SubjectKey::Physics);
        assert_eq!(a.cards[0].eyebrow, "Criterion A");
        assert!(a.note_heading.is_none());
    }

    #[test]
    fn generic_third_paper_depends_on_subject() {
        let chem = assess(L::ALevel, SubjectKey::Chemistry);
        assert_eq!(chem.cards[2].title, "Practical Skills");
        assert!(chem.note_heading.is_some());

        let econ = assess(L::Igcse, SubjectKey::Economics);
        assert_eq!(econ.cards[2].title, "Coursework");
        assert!(econ.note_heading.is_none() && econ.note_body.is_none());
    }

    #[test]
    fn accent_follows_level() {
        let a = assess(L::Gcse, SubjectKey::Biology);
        assert!(a.cards.iter().all(|c| c.accent == "indigo-500"));
    }

    #[test]
    fn gcse_maths_boards_have_specifications() {
        let b = boards(L::Gcse, SubjectKey::Mathematics);
        let specs: Vec<_> = b
            .cards
            .iter()
            .map(|c| (c.name.as_str(), c.specification.as_deref()))
            .collect();
        assert_eq!(
            specs,
            [
                ("AQA", Some("8300")),
                ("Pearson Edexcel", Some("1MA1")),
                ("OCR", Some("J560")),
            ]
        );
    }

    #[test]
    fn other_pairs_have_no_specifications() {
        for level in QualificationKey::ALL {
            for subj in SubjectKey::ALL {
                if level == L::Gcse && subj == SubjectKey::Mathematics {
                    continue;
                }
                let b = boards(level, subj);
                assert!(b.cards.iter().all(|c| c.specification.is_none()));
                assert!((2..=3).contains(&b.cards.len()));
            }
        }
    }

    #[test]
    fn ks3_gets_school_schemes() {
        let b = boards(L::Ks3, SubjectKey::English);
        assert_eq!(b.cards.len(), 3);
        assert_eq!(b.cards[2].name, "School Schemes of Work");
    }
}
