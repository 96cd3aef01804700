use proptest::prelude::*;

use apd_charts::binning::{AI_USAGE_BINS, AUTOMATION_BINS, EXPERIENCE_BINS, MEETING_BINS};
use apd_charts::profile::segment_by_productivity;
use apd_charts::stats::quantile;

proptest! {
    #[test]
    fn every_in_range_value_lands_in_exactly_one_bin(fraction in 0.0f64..=1.0) {
        for spec in [AI_USAGE_BINS, AUTOMATION_BINS, MEETING_BINS, EXPERIENCE_BINS] {
            let lo = spec.edges[0];
            let hi = spec.edges[spec.edges.len() - 1];
            let value = lo + (hi - lo) * fraction;
            let hits = spec
                .edges
                .windows(2)
                .enumerate()
                .filter(|(i, pair)| {
                    (value > pair[0] || (*i == 0 && value == pair[0])) && value <= pair[1]
                })
                .count();
            prop_assert_eq!(hits, 1);
            prop_assert!(spec.assign(value).is_some());
        }
    }

    #[test]
    fn out_of_range_values_land_nowhere(excess in 0.001f64..1000.0) {
        for spec in [AI_USAGE_BINS, AUTOMATION_BINS, MEETING_BINS, EXPERIENCE_BINS] {
            let hi = spec.edges[spec.edges.len() - 1];
            prop_assert_eq!(spec.assign(hi + excess), None);
            prop_assert_eq!(spec.assign(spec.edges[0] - excess), None);
        }
    }

    #[test]
    fn top_segment_matches_threshold_count(scores in prop::collection::vec(0.0f64..100.0, 1..200)) {
        let values: Vec<Option<f64>> = scores.iter().copied().map(Some).collect();
        let (threshold, segments) = segment_by_productivity(&values).unwrap();
        prop_assert_eq!(Some(threshold), quantile(&values, 0.9));
        let expected = scores.iter().filter(|v| **v >= threshold).count();
        let top = segments
            .iter()
            .filter(|s| **s == apd_charts::Segment::TopPerformer)
            .count();
        prop_assert_eq!(top, expected);
        prop_assert!(top >= 1);
    }
}
