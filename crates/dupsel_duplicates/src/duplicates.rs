use log::debug;

use crate::types::{FileRecord, SelectorOccurrenceMap};

/// Maps every selector that two or more files define directly to the set of those files.
///
/// Accumulates owners per selector in a single pass and then drops selectors with a
/// single owner, so the result does not depend on the order of `files`.
pub fn find_duplicates(files: &[FileRecord]) -> SelectorOccurrenceMap {
    let mut owners = files.iter().fold(SelectorOccurrenceMap::new(), |mut owners, file| {
        for selector in &file.direct_selectors {
            owners.entry(selector.clone()).or_default().insert(file.path.clone());
        }
        owners
    });
    let total = owners.len();
    owners.retain(|_, paths| paths.len() >= 2);

    debug!("{} of {} distinct selectors are defined in more than one file", owners.len(), total);
    owners
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::BTreeSet, path::PathBuf};

    fn record(path: &str, selectors: &[&str]) -> FileRecord {
        FileRecord {
            path: PathBuf::from(path),
            raw_imports: Vec::new(),
            direct_selectors: selectors.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn paths(items: &[&str]) -> BTreeSet<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    fn mock_project() -> Vec<FileRecord> {
        vec![
            record("test/mock/shared.scss", &[".shared"]),
            record("test/mock/not-duplicated.scss", &[".new-item"]),
            record("test/mock/nex-item.scss", &[".item-button", ".nested .nested2"]),
            record("test/mock/item.scss", &[".item-button", ".nested .nested2"]),
        ]
    }

    fn expected_mock_duplicates() -> SelectorOccurrenceMap {
        let owners = paths(&["test/mock/item.scss", "test/mock/nex-item.scss"]);
        SelectorOccurrenceMap::from([
            (".item-button".to_string(), owners.clone()),
            (".nested .nested2".to_string(), owners),
        ])
    }

    #[test]
    fn test_mock_project() {
        assert_eq!(find_duplicates(&mock_project()), expected_mock_duplicates());
    }

    #[test]
    fn test_order_independent() {
        let files = mock_project();
        let expected = find_duplicates(&files);

        // Every permutation of the four records
        let mut indices: Vec<usize> = (0..files.len()).collect();
        let mut seen = 0;
        loop {
            let permuted: Vec<FileRecord> = indices.iter().map(|&i| files[i].clone()).collect();
            assert_eq!(find_duplicates(&permuted), expected, "order {:?}", indices);
            seen += 1;
            if !next_permutation(&mut indices) {
                break;
            }
        }
        assert_eq!(seen, 24);
    }

    fn next_permutation(v: &mut [usize]) -> bool {
        let Some(i) = (1..v.len()).rev().find(|&i| v[i - 1] < v[i]) else {
            return false;
        };
        let j = (i..v.len()).rev().find(|&j| v[j] > v[i - 1]).unwrap();
        v.swap(i - 1, j);
        v[i..].reverse();
        true
    }

    #[test]
    fn test_three_owners_share_one_entry() {
        let files = vec![
            record("a.scss", &[".x", ".a"]),
            record("b.scss", &[".x"]),
            record("c.scss", &[".x", ".c"]),
        ];
        let duplicates = find_duplicates(&files);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[".x"], paths(&["a.scss", "b.scss", "c.scss"]));
    }

    #[test]
    fn test_no_common_selectors() {
        let files = vec![record("a.scss", &[".a"]), record("b.scss", &[".b"])];
        assert!(find_duplicates(&files).is_empty());
    }

    #[test]
    fn test_single_owner_never_reported() {
        let files = vec![record("a.scss", &[".a"]), record("a.scss", &[".a"])];
        assert!(find_duplicates(&files).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(find_duplicates(&[]).is_empty());
    }
}
