//! Static lookup tables: qualification levels, subjects, and which level
//! teaches which subject.
//!
//! All tables are immutable statics; nothing here is built at runtime.

use curriculum_shared::{
    CurriculumError, Qualification, QualificationKey, Result, Subject, SubjectKey,
};

use QualificationKey as L;
use SubjectKey as S;

/// Qualification table, in display order.
pub static QUALIFICATIONS: [Qualification; 7] = [
    Qualification {
        key: L::Primary,
        label: "Primary",
        theme: "emerald",
        badge: "EYFS · KS1 · KS2",
        age_range: "Ages 4–11",
        trust_line: "Trusted by families across Dubai's leading primary schools",
    },
    Qualification {
        key: L::Ks3,
        label: "KS3",
        theme: "sky",
        badge: "Years 7 · 8 · 9",
        age_range: "Ages 11–14",
        trust_line: "Building the foundations for GCSE success",
    },
    Qualification {
        key: L::Gcse,
        label: "GCSE",
        theme: "indigo",
        badge: "AQA · Edexcel · OCR",
        age_range: "Ages 14–16",
        trust_line: "Hundreds of GCSE students tutored to grades 7–9",
    },
    Qualification {
        key: L::Igcse,
        label: "IGCSE",
        theme: "violet",
        badge: "Cambridge · Edexcel",
        age_range: "Ages 14–16",
        trust_line: "Specialists in Cambridge and Edexcel International",
    },
    Qualification {
        key: L::ALevel,
        label: "A-Level",
        theme: "rose",
        badge: "AQA · Edexcel · OCR · CIE",
        age_range: "Ages 16–18",
        trust_line: "Helping students secure A*–A and top university offers",
    },
    Qualification {
        key: L::Ib,
        label: "IB",
        theme: "amber",
        badge: "IB Diploma Programme",
        age_range: "Ages 16–19",
        trust_line: "Experienced IB examiners and IA mentors",
    },
    Qualification {
        key: L::Myp,
        label: "MYP",
        theme: "teal",
        badge: "IB Middle Years Programme",
        age_range: "Ages 11–16",
        trust_line: "Criteria-focused support for MYP schools in Dubai",
    },
];

/// Subject table, in display order.
pub static SUBJECTS: [Subject; 9] = [
    Subject {
        key: S::Mathematics,
        label: "Mathematics",
        course_url: "/courses/mathematics",
    },
    Subject {
        key: S::English,
        label: "English",
        course_url: "/courses/english",
    },
    Subject {
        key: S::Science,
        label: "Science",
        course_url: "/courses/science",
    },
    Subject {
        key: S::Physics,
        label: "Physics",
        course_url: "/courses/physics",
    },
    Subject {
        key: S::Chemistry,
        label: "Chemistry",
        course_url: "/courses/chemistry",
    },
    Subject {
        key: S::Biology,
        label: "Biology",
        course_url: "/courses/biology",
    },
    Subject {
        key: S::BusinessStudies,
        label: "Business Studies",
        course_url: "/courses/business-studies",
    },
    Subject {
        key: S::Economics,
        label: "Economics",
        course_url: "/courses/economics",
    },
    Subject {
        key: S::Psychology,
        label: "Psychology",
        course_url: "/courses/psychology",
    },
];

/// Subjects taught at each level. Order is the display order on level pages.
pub static SUBJECTS_BY_LEVEL: [(QualificationKey, &[SubjectKey]); 7] = [
    (L::Primary, &[S::Mathematics, S::English, S::Science]),
    (L::Ks3, &[S::Mathematics, S::English, S::Science]),
    (
        L::Gcse,
        &[
            S::Mathematics,
            S::English,
            S::Physics,
            S::Chemistry,
            S::Biology,
            S::BusinessStudies,
            S::Economics,
            S::Psychology,
        ],
    ),
    (
        L::Igcse,
        &[
            S::Mathematics,
            S::English,
            S::Physics,
            S::Chemistry,
            S::Biology,
            S::BusinessStudies,
            S::Economics,
        ],
    ),
    (
        L::ALevel,
        &[
            S::Mathematics,
            S::Physics,
            S::Chemistry,
            S::Biology,
            S::BusinessStudies,
            S::Economics,
            S::Psychology,
        ],
    ),
    (
        L::Ib,
        &[
            S::Mathematics,
            S::Physics,
            S::Chemistry,
            S::Biology,
            S::Economics,
            S::Psychology,
        ],
    ),
    (L::Myp, &[S::Chemistry, S::Physics, S::Biology]),
];

/// Look up the qualification row for a level.
pub fn qualification(key: QualificationKey) -> &'static Qualification {
    match key {
        L::Primary => &QUALIFICATIONS[0],
        L::Ks3 => &QUALIFICATIONS[1],
        L::Gcse => &QUALIFICATIONS[2],
        L::Igcse => &QUALIFICATIONS[3],
        L::ALevel => &QUALIFICATIONS[4],
        L::Ib => &QUALIFICATIONS[5],
        L::Myp => &QUALIFICATIONS[6],
    }
}

/// Look up the subject row for a subject.
pub fn subject(key: SubjectKey) -> &'static Subject {
    match key {
        S::Mathematics => &SUBJECTS[0],
        S::English => &SUBJECTS[1],
        S::Science => &SUBJECTS[2],
        S::Physics => &SUBJECTS[3],
        S::Chemistry => &SUBJECTS[4],
        S::Biology => &SUBJECTS[5],
        S::BusinessStudies => &SUBJECTS[6],
        S::Economics => &SUBJECTS[7],
        S::Psychology => &SUBJECTS[8],
    }
}

/// Subjects offered at a level, in display order.
pub fn subjects_for(level: QualificationKey) -> &'static [SubjectKey] {
    SUBJECTS_BY_LEVEL
        .iter()
        .find(|(key, _)| *key == level)
        .map(|(_, subjects)| *subjects)
        .unwrap_or(&[])
}

/// Whether `level` teaches `subject`.
pub fn offers(level: QualificationKey, subject: SubjectKey) -> bool {
    subjects_for(level).contains(&subject)
}

/// Levels that teach `subject`, in table order.
pub fn levels_offering(subject: SubjectKey) -> Vec<QualificationKey> {
    QualificationKey::ALL
        .into_iter()
        .filter(|level| offers(*level, subject))
        .collect()
}

/// Check the table invariants: non-empty labels and badges, rows keyed in
/// enum order, no duplicate subjects within a level.
pub fn validate_tables() -> Result<()> {
    for (row, key) in QUALIFICATIONS.iter().zip(QualificationKey::ALL) {
        if row.key != key {
            return Err(CurriculumError::validation(format!(
                "qualification row {} is keyed {}",
                key, row.key
            )));
        }
        if row.label.trim().is_empty() || row.badge.trim().is_empty() {
            return Err(CurriculumError::validation(format!(
                "qualification {key} has an empty label or badge"
            )));
        }
    }

    for (row, key) in SUBJECTS.iter().zip(SubjectKey::ALL) {
        if row.key != key {
            return Err(CurriculumError::validation(format!(
                "subject row {} is keyed {}",
                key, row.key
            )));
        }
        if row.label.trim().is_empty() || !row.course_url.starts_with('/') {
            return Err(CurriculumError::validation(format!(
                "subject {key} has an empty label or relative course URL"
            )));
        }
    }

    for (level, subjects) in SUBJECTS_BY_LEVEL.iter() {
        for (i, subject) in subjects.iter().enumerate() {
            if subjects[..i].contains(subject) {
                return Err(CurriculumError::validation(format!(
                    "{level} lists {subject} twice"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_valid() {
        validate_tables().expect("static tables validate");
    }

    #[test]
    fn lookups_match_keys() {
        for key in QualificationKey::ALL {
            assert_eq!(qualification(key).key, key);
        }
        for key in SubjectKey::ALL {
            assert_eq!(subject(key).key, key);
        }
    }

    #[test]
    fn every_level_has_an_offering_row() {
        for key in QualificationKey::ALL {
            assert!(
                SUBJECTS_BY_LEVEL.iter().any(|(level, _)| *level == key),
                "{key} missing from SUBJECTS_BY_LEVEL"
            );
        }
    }

    #[test]
    fn myp_offers_only_sciences() {
        assert_eq!(
            subjects_for(L::Myp),
            &[S::Chemistry, S::Physics, S::Biology]
        );
        assert!(!offers(L::Myp, S::Mathematics));
    }

    #[test]
    fn levels_offering_in_table_order() {
        assert_eq!(levels_offering(S::Science), vec![L::Primary, L::Ks3]);
        assert_eq!(
            levels_offering(S::Chemistry),
            vec![L::Gcse, L::Igcse, L::ALevel, L::Ib, L::Myp]
        );
    }
}
