//! Resource identifier sets.
//!
//! Batch endpoints take several IDs as a single path segment, e.g.
//! `/computers/12,15,99`. The remote API treats the segment as an unordered set,
//! but the order given here is kept so the output is predictable.

use std::fmt;

/// Joins IDs with `,` in iteration order.
///
/// An empty input yields an empty string. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use printnode_core::encode_ids;
///
/// assert_eq!(encode_ids([3, 1, 2]), "3,1,2");
/// assert_eq!(encode_ids(Vec::<i64>::new()), "");
/// ```
pub fn encode_ids<I>(ids: I) -> String
where
    I: IntoIterator<Item = i64>,
{
    let mut output = String::new();
    for (index, id) in ids.into_iter().enumerate() {
        if index > 0 {
            output.push(',');
        }
        output.push_str(&id.to_string());
    }
    output
}

/// An ordered batch of resource IDs that renders as one path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: Vec<i64>,
}

impl IdSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends more IDs to the set.
    pub fn add<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = i64>,
    {
        self.ids.extend(ids);
    }

    /// Number of IDs in the set, counting duplicates.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The IDs in insertion order.
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Renders the set as a comma-joined path segment.
    pub fn build(&self) -> String {
        encode_ids(self.ids.iter().copied())
    }
}

impl FromIterator<i64> for IdSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<i64> for IdSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl From<Vec<i64>> for IdSet {
    fn from(ids: Vec<i64>) -> Self {
        Self { ids }
    }
}

impl From<&[i64]> for IdSet {
    fn from(ids: &[i64]) -> Self {
        Self { ids: ids.to_vec() }
    }
}

impl fmt::Display for IdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(encoded: &str) -> Vec<i64> {
        encoded.split(',').map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_ids(Vec::<i64>::new()), "");
        assert_eq!(IdSet::new().build(), "");
    }

    #[test]
    fn test_encode_single() {
        assert_eq!(encode_ids([42]), "42");
    }

    #[test]
    fn test_encode_has_no_trailing_separator() {
        let encoded = encode_ids([1, 2, 3]);
        assert_eq!(encoded, "1,2,3");
        assert!(!encoded.ends_with(','));
    }

    #[test]
    fn test_split_reproduces_input() {
        let inputs: Vec<Vec<i64>> = vec![
            vec![7],
            vec![9, 1, 5],
            vec![3, 3, 3],
            vec![-4, 0, i64::MAX, i64::MIN],
            (1..=50).rev().collect(),
        ];
        for ids in inputs {
            assert_eq!(split(&encode_ids(ids.iter().copied())), ids);
        }
    }

    #[test]
    fn test_id_set_keeps_order_and_duplicates() {
        let mut set: IdSet = vec![5, 2].into();
        set.add([5, 9]);
        set.extend([1]);
        assert_eq!(set.len(), 5);
        assert_eq!(set.ids(), &[5, 2, 5, 9, 1]);
        assert_eq!(set.to_string(), "5,2,5,9,1");
    }

    #[test]
    fn test_id_set_from_iter() {
        let set: IdSet = (10..13).collect();
        assert!(!set.is_empty());
        assert_eq!(set.build(), "10,11,12");
    }
}
