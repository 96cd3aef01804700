//! Fixed, labelled numeric ranges.
//!
//! Intervals are closed on the right, `(lo, hi]`, and the first interval also
//! includes its lower edge, so `[0, 2], (2, 5], (5, 10], (10, 20]` covers every
//! value from 0 to 20 exactly once. Values outside the outer edges belong to
//! no bin.

use crate::stats::mean;

/// A set of edges and the label of each interval between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinSpec {
    pub edges: &'static [f64],
    pub labels: &'static [&'static str],
}

/// Per-bin means of a target column, plus the rows that fit no bin.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedMeans {
    pub labels: Vec<String>,
    pub means: Vec<Option<f64>>,
    pub counts: Vec<usize>,
    pub dropped: usize,
}

impl BinSpec {
    pub const fn new(edges: &'static [f64], labels: &'static [&'static str]) -> Self {
        Self { edges, labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Index of the interval containing `value`.
    pub fn assign(&self, value: f64) -> Option<usize> {
        if value.is_nan() || self.edges.len() < 2 {
            return None;
        }
        let lowest = self.edges[0];
        if value == lowest {
            return Some(0);
        }
        self.edges
            .windows(2)
            .position(|pair| value > pair[0] && value <= pair[1])
    }

    /// Groups `targets` by the bin of the matching `keys` value and averages each group.
    ///
    /// Rows whose key is missing or out of range are counted in `dropped`;
    /// rows whose target is missing are skipped from the mean only.
    pub fn means(&self, keys: &[Option<f64>], targets: &[Option<f64>]) -> BinnedMeans {
        let mut groups: Vec<Vec<Option<f64>>> = vec![Vec::new(); self.len()];
        let mut dropped = 0usize;
        for (key, target) in keys.iter().zip(targets) {
            match key.and_then(|k| self.assign(k)) {
                Some(bin) => groups[bin].push(*target),
                None => dropped += 1,
            }
        }
        BinnedMeans {
            labels: self.labels.iter().map(|l| (*l).to_string()).collect(),
            counts: groups.iter().map(Vec::len).collect(),
            means: groups.into_iter().map(mean).collect(),
            dropped,
        }
    }
}

/// AI tool usage, hours per week.
pub const AI_USAGE_BINS: BinSpec = BinSpec::new(
    &[0.0, 2.0, 5.0, 10.0, 20.0],
    &["0-2 h", "3-5 h", "6-10 h", ">10 h"],
);

/// Share of tasks automated, percent.
pub const AUTOMATION_BINS: BinSpec = BinSpec::new(
    &[0.0, 25.0, 50.0, 75.0, 100.0],
    &["0-25%", "26-50%", "51-75%", "76-100%"],
);

/// Meeting load, hours per week.
pub const MEETING_BINS: BinSpec = BinSpec::new(
    &[0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0],
    &[
        "0-5 h", "6-10 h", "11-15 h", "16-20 h", "21-25 h", "26-30 h", "31-35 h", "36-40 h",
    ],
);

/// Work experience, years.
pub const EXPERIENCE_BINS: BinSpec = BinSpec::new(
    &[0.0, 2.0, 5.0, 10.0, 20.0],
    &["0-2 yrs", "3-5 yrs", "6-10 yrs", ">10 yrs"],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_right_closed_with_inclusive_lowest() {
        assert_eq!(AI_USAGE_BINS.assign(0.0), Some(0));
        assert_eq!(AI_USAGE_BINS.assign(2.0), Some(0));
        assert_eq!(AI_USAGE_BINS.assign(2.01), Some(1));
        assert_eq!(AI_USAGE_BINS.assign(10.0), Some(2));
        assert_eq!(AI_USAGE_BINS.assign(20.0), Some(3));
        assert_eq!(AI_USAGE_BINS.assign(20.5), None);
        assert_eq!(AI_USAGE_BINS.assign(-1.0), None);
        assert_eq!(AI_USAGE_BINS.assign(f64::NAN), None);
    }

    #[test]
    fn labels_match_intervals() {
        for spec in [AI_USAGE_BINS, AUTOMATION_BINS, MEETING_BINS, EXPERIENCE_BINS] {
            assert_eq!(spec.edges.len(), spec.labels.len() + 1);
        }
    }

    #[test]
    fn means_count_dropped_rows() {
        let keys = [Some(1.0), Some(4.0), Some(4.5), None, Some(25.0)];
        let targets = [Some(60.0), Some(70.0), None, Some(90.0), Some(99.0)];
        let binned = AI_USAGE_BINS.means(&keys, &targets);
        assert_eq!(binned.means, vec![Some(60.0), Some(70.0), None, None]);
        assert_eq!(binned.counts, vec![1, 2, 0, 0]);
        assert_eq!(binned.dropped, 2);
    }
}
