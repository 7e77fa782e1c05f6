//! Route boundary: turn URL segments into a validated, offered pair.
//!
//! Every lookup goes through here before [`crate::content::build_content`];
//! failures are all "not found" errors (see `CurriculumError::is_not_found`).

use tracing::{debug, instrument};

use curriculum_shared::{CurriculumError, QualificationKey, Result, SubjectKey};

use crate::catalog;

/// Resolve raw level/subject segments into an offered pair.
#[instrument(level = "debug")]
pub fn resolve_route(level: &str, subject: &str) -> Result<(QualificationKey, SubjectKey)> {
    let level_key: QualificationKey = level.parse()?;
    let subject_key: SubjectKey = subject.parse()?;

    if !catalog::offers(level_key, subject_key) {
        debug!(%level_key, %subject_key, "pair not offered");
        return Err(CurriculumError::NotOffered {
            level: level_key.to_string(),
            subject: subject_key.to_string(),
        });
    }

    Ok((level_key, subject_key))
}

/// Resolve a full page path such as `/curriculum/gcse/biology`.
pub fn resolve_path(route_prefix: &str, path: &str) -> Result<(QualificationKey, SubjectKey)> {
    let prefix = route_prefix.trim_matches('/');
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [p, level, subject] if *p == prefix => resolve_route(level, subject),
        _ => Err(CurriculumError::validation(format!(
            "'{path}' is not a /{prefix}/<level>/<subject> path"
        ))),
    }
}

/// Every offered pair, in table order: the set of statically generated pages.
pub fn static_params() -> Vec<(QualificationKey, SubjectKey)> {
    catalog::SUBJECTS_BY_LEVEL
        .iter()
        .flat_map(|(level, subjects)| subjects.iter().map(move |subject| (*level, *subject)))
        .collect()
}

/// Site-relative path of a curriculum page.
pub fn page_path(route_prefix: &str, level: QualificationKey, subject: SubjectKey) -> String {
    format!("/{}/{level}/{subject}", route_prefix.trim_matches('/'))
}

/// Site-relative path of a level's landing page.
pub fn level_path(route_prefix: &str, level: QualificationKey) -> String {
    format!("/{}/{level}", route_prefix.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    use QualificationKey as L;
    use SubjectKey as S;

    #[test]
    fn resolves_offered_pair() {
        assert_eq!(resolve_route("gcse", "biology").unwrap(), (L::Gcse, S::Biology));
        assert_eq!(
            resolve_route("A-Level", "Business-Studies").unwrap(),
            (L::ALevel, S::BusinessStudies)
        );
    }

    #[test]
    fn unoffered_pair_is_not_found() {
        let err = resolve_route("myp", "mathematics").unwrap_err();
        assert!(matches!(err, CurriculumError::NotOffered { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_keys_are_not_found() {
        let err = resolve_route("eyfs", "mathematics").unwrap_err();
        assert!(matches!(err, CurriculumError::UnknownLevel(_)));
        assert!(err.is_not_found());

        let err = resolve_route("gcse", "latin").unwrap_err();
        assert!(matches!(err, CurriculumError::UnknownSubject(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn resolves_full_paths() {
        assert_eq!(
            resolve_path("curriculum", "/curriculum/ib/physics/").unwrap(),
            (L::Ib, S::Physics)
        );
        let err = resolve_path("curriculum", "/courses/ib/physics").unwrap_err();
        assert!(!err.is_not_found());
        assert!(resolve_path("/curriculum/", "/curriculum/ib").is_err());
    }

    #[test]
    fn static_params_cover_every_offering() {
        let params = static_params();
        let expected: usize = catalog::SUBJECTS_BY_LEVEL.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(params.len(), expected);
        assert_eq!(params[0], (L::Primary, S::Mathematics));
        assert!(!params.contains(&(L::Myp, S::Mathematics)));
    }

    #[test]
    fn page_paths_resolve_back() {
        for prefix in ["curriculum", "courses"] {
            for (level, subject) in static_params() {
                let path = page_path(prefix, level, subject);
                assert_eq!(resolve_path(prefix, &path).unwrap(), (level, subject), "{path}");
            }
        }
    }

    #[test]
    fn page_paths() {
        assert_eq!(page_path("curriculum", L::ALevel, S::Psychology), "/curriculum/a-level/psychology");
        assert_eq!(page_path("/curriculum/", L::Gcse, S::English), "/curriculum/gcse/english");
        assert_eq!(level_path("curriculum", L::Ib), "/curriculum/ib");
    }
}
