#[cfg(test)]
mod tests {
    use crate::algorithms::aggregation::{aggregate, DestinationAggregator};
    use crate::algorithms::stay_length::StayLengthEstimator;
    use crate::models::{PartialDate, VisitRecord};
    use proptest::prelude::*;

    fn visit(place: &str, start: PartialDate, end: PartialDate) -> VisitRecord {
        VisitRecord::new(place, start, end)
    }

    fn five_day_visit(place: &str) -> VisitRecord {
        visit(place, PartialDate::exact(1, 6, 2020), PartialDate::exact(5, 6, 2020))
    }

    fn unknown_visit(place: &str) -> VisitRecord {
        visit(place, PartialDate::empty(), PartialDate::empty())
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_repeated_place_is_summed() {
        let v1 = five_day_visit("Rome");
        let v2 = unknown_visit("Rome");
        let destinations = aggregate(&[v1.clone(), v2.clone()]);

        assert_eq!(destinations.len(), 1);
        let rome = &destinations[0];
        assert_eq!(rome.place, "Rome");
        assert_eq!(rome.visit_count, 2);
        assert_eq!(rome.total_stay_length.value(), 31.0);
        assert_eq!(rome.source_visits, vec![v1, v2]);
        assert_eq!(rome.source_indices, vec![0, 1]);
        assert!(rome.position.is_none());
    }

    #[test]
    fn test_first_occurrence_order() {
        let visits = vec![
            unknown_visit("Paris"),
            unknown_visit("Turin"),
            unknown_visit("Paris"),
            unknown_visit("Geneva"),
            unknown_visit("Turin"),
        ];
        let places: Vec<String> = aggregate(&visits).into_iter().map(|d| d.place).collect();
        assert_eq!(places, vec!["Paris", "Turin", "Geneva"]);
    }

    #[test]
    fn test_places_compare_exactly() {
        let visits = vec![
            unknown_visit("Rome"),
            unknown_visit("rome"),
            unknown_visit("Rome "),
        ];
        assert_eq!(aggregate(&visits).len(), 3);
    }

    #[test]
    fn test_reversed_dates_add_positive_length() {
        let reversed = visit("Milan", PartialDate::exact(5, 6, 2020), PartialDate::exact(1, 6, 2020));
        let destinations = aggregate(&[reversed]);
        assert_eq!(destinations[0].total_stay_length.value(), 3.0);
    }

    #[test]
    fn test_visits_without_coordinates_are_kept() {
        let mapped = five_day_visit("Bologna").with_coordinates(11.34, 44.49);
        let unmapped = five_day_visit("Bologna");
        let destinations = aggregate(&[mapped, unmapped]);
        assert_eq!(destinations[0].visit_count, 2);
    }

    #[test]
    fn test_custom_estimator() {
        let aggregator = DestinationAggregator::new(StayLengthEstimator::new(10.0));
        let destinations = aggregator.aggregate(&[unknown_visit("Lyon"), unknown_visit("Lyon")]);
        assert_eq!(destinations[0].total_stay_length.value(), 20.0);
        assert_eq!(aggregator.estimator().average_stay().value(), 10.0);
    }

    fn visit_strategy() -> impl Strategy<Value = VisitRecord> {
        let place = prop::sample::select(vec!["Rome", "Naples", "Venice", "Paris", "London"]);
        let date = (
            proptest::option::of(1u32..=28),
            proptest::option::of(1u32..=12),
            proptest::option::of(1740i32..=1790),
        )
            .prop_map(|(d, m, y)| PartialDate::new(d, m, y));
        (place, date.clone(), date).prop_map(|(place, start, end)| visit(place, start, end))
    }

    proptest! {
        #[test]
        fn prop_aggregate_is_idempotent(visits in prop::collection::vec(visit_strategy(), 0..40)) {
            prop_assert_eq!(aggregate(&visits), aggregate(&visits));
        }

        #[test]
        fn prop_counts_and_totals_are_conserved(visits in prop::collection::vec(visit_strategy(), 0..40)) {
            let destinations = aggregate(&visits);
            let counted: usize = destinations.iter().map(|d| d.visit_count).sum();
            prop_assert_eq!(counted, visits.len());

            for destination in &destinations {
                prop_assert!(destination.total_stay_length.value() >= 0.0);
                prop_assert_eq!(destination.source_visits.len(), destination.visit_count);
                prop_assert!(destination.source_visits.iter().all(|v| v.place == destination.place));
                prop_assert!(destination.source_indices.windows(2).all(|w| w[0] < w[1]));
            }
        }

        #[test]
        fn prop_first_occurrence_order(visits in prop::collection::vec(visit_strategy(), 0..40)) {
            let mut expected: Vec<&str> = Vec::new();
            for visit in &visits {
                if !expected.contains(&visit.place.as_str()) {
                    expected.push(visit.place.as_str());
                }
            }
            let destinations = aggregate(&visits);
            let actual: Vec<&str> = destinations.iter().map(|d| d.place.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
