//! Eagerly built content matrix: one entry per offered pair.

use std::collections::HashMap;

use tracing::{debug, instrument};

use curriculum_shared::{ContentEntry, QualificationKey, SubjectKey};

use crate::content::build_content;
use crate::routes::static_params;

/// All content entries, built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ContentMatrix {
    entries: Vec<ContentEntry>,
    index: HashMap<(QualificationKey, SubjectKey), usize>,
}

impl ContentMatrix {
    /// Build every offered pair in table order.
    #[instrument(name = "matrix_build")]
    pub fn build() -> Self {
        let entries: Vec<ContentEntry> = static_params()
            .into_iter()
            .map(|(level, subject)| build_content(level, subject))
            .collect();

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ((entry.level, entry.subject), i))
            .collect();

        debug!(entries = entries.len(), "content matrix built");
        Self { entries, index }
    }

    /// Entry for a pair, or `None` if the pair is not offered.
    pub fn get(&self, level: QualificationKey, subject: SubjectKey) -> Option<&ContentEntry> {
        self.index.get(&(level, subject)).map(|&i| &self.entries[i])
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContentMatrix {
    type Item = &'a ContentEntry;
    type IntoIter = std::slice::Iter<'a, ContentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn one_entry_per_offered_pair() {
        let matrix = ContentMatrix::build();
        assert_eq!(matrix.len(), static_params().len());
        for (level, subject) in static_params() {
            let entry = matrix.get(level, subject).expect("entry present");
            assert_eq!((entry.level, entry.subject), (level, subject));
        }
    }

    #[test]
    fn unoffered_pair_is_absent() {
        let matrix = ContentMatrix::build();
        assert!(!catalog::offers(QualificationKey::Myp, SubjectKey::Mathematics));
        assert!(matrix.get(QualificationKey::Myp, SubjectKey::Mathematics).is_none());
    }

    #[test]
    fn matches_direct_builder() {
        let matrix = ContentMatrix::build();
        let entry = matrix.get(QualificationKey::Ib, SubjectKey::Psychology).unwrap();
        assert_eq!(entry, &build_content(QualificationKey::Ib, SubjectKey::Psychology));
    }

    #[test]
    fn iteration_follows_table_order() {
        let matrix = ContentMatrix::build();
        let myp: Vec<_> = matrix
            .iter()
            .filter(|e| e.level == QualificationKey::Myp)
            .map(|e| e.subject)
            .collect();
        assert_eq!(myp, catalog::subjects_for(QualificationKey::Myp));
    }
}
