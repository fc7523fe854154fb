//! # Division Index
//!
//! Secondary index of case ids per division, kept in creation order.
//! Every case appears in exactly one bucket; counts are bucket lengths.

use im::Vector;
use serde::{Deserialize, Serialize};
use shared_types::{CaseId, Division};

/// Case ids bucketed by division.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionIndex {
    buckets: [Vector<CaseId>; Division::COUNT],
}

impl DivisionIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly created case.
    pub fn record(&mut self, division: Division, case_id: CaseId) {
        self.buckets[division.index()].push_back(case_id);
    }

    /// Case ids in `division`, in creation order.
    #[must_use]
    pub fn filter(&self, division: Division) -> &Vector<CaseId> {
        &self.buckets[division.index()]
    }

    /// Number of cases reported in `division`.
    #[must_use]
    pub fn count(&self, division: Division) -> u64 {
        self.buckets[division.index()].len() as u64
    }

    /// Total number of indexed cases.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|b| b.len() as u64).sum()
    }

    /// All eight divisions ordered by case count.
    ///
    /// The sort is stable, so tied divisions keep declaration order in
    /// either direction.
    #[must_use]
    pub fn rank(&self, ascending: bool) -> DivisionRanking {
        let mut entries: Vec<(Division, u64)> =
            Division::ALL.iter().map(|d| (*d, self.count(*d))).collect();
        if ascending {
            entries.sort_by(|a, b| a.1.cmp(&b.1));
        } else {
            entries.sort_by(|a, b| b.1.cmp(&a.1));
        }
        let (divisions, counts) = entries.into_iter().unzip();
        DivisionRanking { divisions, counts }
    }
}

/// Divisions and their case counts as two parallel sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionRanking {
    /// Divisions in ranked order.
    pub divisions: Vec<Division>,
    /// `counts[i]` is the number of cases in `divisions[i]`.
    pub counts: Vec<u64>,
}

impl DivisionRanking {
    /// Iterate `(division, count)` pairs in ranked order.
    pub fn iter(&self) -> impl Iterator<Item = (Division, u64)> + '_ {
        self.divisions.iter().copied().zip(self.counts.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_empty_rank_keeps_declaration_order() {
        let index = DivisionIndex::new();
        for ascending in [true, false] {
            let ranking = index.rank(ascending);
            assert_eq!(ranking.divisions, Division::ALL.to_vec());
            assert_eq!(ranking.counts, vec![0; Division::COUNT]);
        }
    }

    #[test]
    fn test_rank_descending_with_ties() {
        let mut index = DivisionIndex::new();
        index.record(Division::Sylhet, 1);
        index.record(Division::Sylhet, 2);
        index.record(Division::Khulna, 3);
        index.record(Division::Dhaka, 4);

        let ranking = index.rank(false);
        assert_eq!(
            ranking.divisions,
            vec![
                Division::Sylhet,
                Division::Dhaka,
                Division::Khulna,
                Division::Chittagong,
                Division::Rajshahi,
                Division::Barisal,
                Division::Rangpur,
                Division::Mymensingh,
            ]
        );
        assert_eq!(ranking.counts, vec![2, 1, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_rank_ascending_with_ties() {
        let mut index = DivisionIndex::new();
        index.record(Division::Dhaka, 1);
        index.record(Division::Dhaka, 2);
        index.record(Division::Mymensingh, 3);

        let ranking = index.rank(true);
        assert_eq!(ranking.divisions[0], Division::Chittagong);
        assert_eq!(ranking.divisions[5], Division::Rangpur);
        assert_eq!(ranking.divisions[6], Division::Mymensingh);
        assert_eq!(ranking.divisions[7], Division::Dhaka);
        assert_eq!(ranking.counts[7], 2);
    }

    #[test]
    fn test_filter_preserves_creation_order() {
        let mut index = DivisionIndex::new();
        index.record(Division::Barisal, 2);
        index.record(Division::Barisal, 5);
        index.record(Division::Barisal, 9);
        assert_eq!(*index.filter(Division::Barisal), im::vector![2, 5, 9]);
        assert!(index.filter(Division::Rangpur).is_empty());
    }

    #[test]
    fn test_counts_sum_to_total() {
        let mut rng = rand::thread_rng();
        let mut index = DivisionIndex::new();
        for id in 1..=200u64 {
            let code: u8 = rng.gen_range(0..Division::COUNT as u8);
            let division = Division::try_from(code).unwrap();
            index.record(division, id);
        }
        let ranking = index.rank(false);
        assert_eq!(ranking.counts.iter().sum::<u64>(), 200);
        assert_eq!(index.total(), 200);
        assert!(ranking.counts.windows(2).all(|w| w[0] >= w[1]));
    }
}
