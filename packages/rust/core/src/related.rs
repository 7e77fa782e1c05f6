//! Related-level picker for cross-link navigation.
//!
//! Given a level and subject, picks up to two other levels teaching the same
//! subject, preferring the nearest later stage, then the nearest earlier one.

use serde::Serialize;

use curriculum_shared::{QualificationKey, SubjectKey};

use crate::catalog;
use crate::routes::page_path;

/// Pedagogical ordering of stages. `eyfs`, `ks1` and `ks2` are primary
/// sub-stages with no curriculum pages of their own, so they never match.
pub const LEVEL_ORDER: [&str; 10] = [
    "eyfs", "ks1", "ks2", "primary", "ks3", "myp", "gcse", "igcse", "a-level", "ib",
];

/// Maximum number of related levels returned.
pub const MAX_RELATED: usize = 2;

/// Link target of the tile that fills a half-empty related block.
pub const BOOK_ASSESSMENT_HREF: &str = "/book-assessment";

/// A tile in the "related courses" block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedTile {
    pub label: String,
    pub href: String,
    /// Set on the generic booking tile rather than a real course.
    pub is_booking: bool,
}

/// Pick up to two levels other than `current` that also offer `subject`.
///
/// Next-first: the nearest later candidate, then the nearest earlier one,
/// padded from the remaining candidates in ordering order.
pub fn pick_related_levels(current: QualificationKey, subject: SubjectKey) -> Vec<QualificationKey> {
    let candidates: Vec<(usize, QualificationKey)> = LEVEL_ORDER
        .iter()
        .enumerate()
        .filter_map(|(pos, slug)| slug.parse::<QualificationKey>().ok().map(|key| (pos, key)))
        .filter(|(_, key)| *key != current && catalog::offers(*key, subject))
        .collect();

    let Some(current_pos) = LEVEL_ORDER.iter().position(|slug| *slug == current.slug()) else {
        return candidates
            .into_iter()
            .take(MAX_RELATED)
            .map(|(_, key)| key)
            .collect();
    };

    let prev = candidates
        .iter()
        .rev()
        .find(|(pos, _)| *pos < current_pos)
        .map(|(_, key)| *key);
    let next = candidates
        .iter()
        .find(|(pos, _)| *pos > current_pos)
        .map(|(_, key)| *key);

    let mut picked: Vec<QualificationKey> = [next, prev].into_iter().flatten().collect();
    picked.truncate(MAX_RELATED);

    for (_, key) in &candidates {
        if picked.len() >= MAX_RELATED {
            break;
        }
        if !picked.contains(key) {
            picked.push(*key);
        }
    }

    picked
}

/// Link tiles for the related-courses block.
///
/// Empty when no other level offers the subject; a single related level is
/// followed by a "Book an Assessment" tile so the block always has two.
pub fn related_courses(
    route_prefix: &str,
    current: QualificationKey,
    subject: SubjectKey,
) -> Vec<RelatedTile> {
    let picked = pick_related_levels(current, subject);
    if picked.is_empty() {
        return Vec::new();
    }

    let subject_label = catalog::subject(subject).label;
    let mut tiles: Vec<RelatedTile> = picked
        .into_iter()
        .map(|level| RelatedTile {
            label: format!("{} {subject_label}", catalog::qualification(level).label),
            href: page_path(route_prefix, level, subject),
            is_booking: false,
        })
        .collect();

    if tiles.len() < MAX_RELATED {
        tiles.push(RelatedTile {
            label: "Book an Assessment".to_string(),
            href: BOOK_ASSESSMENT_HREF.to_string(),
            is_booking: true,
        });
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    use QualificationKey as L;
    use SubjectKey as S;

    #[test]
    fn gcse_chemistry_prefers_next_then_prev() {
        assert_eq!(pick_related_levels(L::Gcse, S::Chemistry), vec![L::Igcse, L::Myp]);
    }

    #[test]
    fn ib_has_no_later_stage() {
        // Nothing after IB, so the nearest earlier stage is padded from the front.
        assert_eq!(pick_related_levels(L::Ib, S::Physics), vec![L::ALevel, L::Myp]);
    }

    #[test]
    fn primary_science_returns_single_level() {
        assert_eq!(pick_related_levels(L::Primary, S::Science), vec![L::Ks3]);
        assert_eq!(pick_related_levels(L::Ks3, S::Science), vec![L::Primary]);
    }

    #[test]
    fn padding_fills_from_ordering() {
        assert_eq!(pick_related_levels(L::Ks3, S::English), vec![L::Gcse, L::Primary]);
        // Primary maths: nothing earlier, next is KS3, padded with GCSE.
        assert_eq!(pick_related_levels(L::Primary, S::Mathematics), vec![L::Ks3, L::Gcse]);
    }

    #[test]
    fn never_contains_input_and_bounded() {
        for level in QualificationKey::ALL {
            for subject in SubjectKey::ALL {
                let picked = pick_related_levels(level, subject);
                assert!(picked.len() <= MAX_RELATED);
                assert!(!picked.contains(&level));
                for key in &picked {
                    assert!(catalog::offers(*key, subject));
                }
            }
        }
    }

    #[test]
    fn every_level_is_in_the_ordering() {
        for level in QualificationKey::ALL {
            assert!(LEVEL_ORDER.contains(&level.slug()), "{level} not ordered");
        }
    }

    #[test]
    fn related_tiles_link_to_pages() {
        let tiles = related_courses("curriculum", L::Gcse, S::Chemistry);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].label, "IGCSE Chemistry");
        assert_eq!(tiles[0].href, "/curriculum/igcse/chemistry");
        assert!(tiles.iter().all(|t| !t.is_booking));
    }

    #[test]
    fn single_related_level_is_padded_with_booking_tile() {
        let tiles = related_courses("curriculum", L::Primary, S::Science);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].href, "/curriculum/ks3/science");
        assert!(tiles[1].is_booking);
        assert_eq!(tiles[1].href, BOOK_ASSESSMENT_HREF);
    }
}
