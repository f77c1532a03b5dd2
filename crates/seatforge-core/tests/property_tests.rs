use proptest::prelude::*;
use seatforge_core::attendees::{Attendee, AttendeeKind, Roster, ZonePreference};
use seatforge_core::config::FitnessWeights;
use seatforge_core::fitness::Evaluator;
use seatforge_core::optimizer::{crossover, initialization, is_valid_assignment, mutation};
use seatforge_core::venue::Venue;

prop_compose! {
    fn arb_attendee()(
        is_vip in any::<bool>(),
        group in prop_oneof![
            Just(None),
            Just(Some("red".to_string())),
            Just(Some("blue".to_string())),
        ],
        preference in 0u8..4,
        priority in 0u8..=12,
    ) -> Attendee {
        Attendee {
            id: None,
            kind: if is_vip { AttendeeKind::Vip } else { AttendeeKind::Regular },
            group,
            preference: match preference {
                0 => ZonePreference::Any,
                1 => ZonePreference::Front,
                2 => ZonePreference::Middle,
                _ => ZonePreference::Back,
            },
            priority,
        }
    }
}

prop_compose! {
    fn arb_setup()(
        rows in 1usize..7,
        cols in 1usize..7,
        vip_fraction in 0usize..3,
        attendees in proptest::collection::vec(arb_attendee(), 1..20),
        seed in any::<u64>(),
    ) -> (Venue, Roster, u64) {
        let vip_rows = (rows * vip_fraction) / 3;
        let venue = Venue::new(rows, cols, vip_rows).unwrap();
        let mut attendees = attendees;
        attendees.truncate(venue.seat_count());
        (venue, Roster::new(attendees), seed)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_generators_yield_valid_assignments((venue, roster, seed) in arb_setup()) {
        let mut rng = fastrand::Rng::with_seed(seed);

        let random = initialization::random_assignment(&mut rng, &venue, roster.len());
        prop_assert!(is_valid_assignment(&random, venue.seat_count()));

        let greedy = initialization::greedy_assignment(&venue, &roster);
        prop_assert_eq!(greedy.len(), roster.len());
        prop_assert!(is_valid_assignment(&greedy, venue.seat_count()));
    }

    #[test]
    fn test_operators_preserve_the_permutation((venue, roster, seed) in arb_setup()) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let p1 = initialization::random_assignment(&mut rng, &venue, roster.len());
        let p2 = initialization::random_assignment(&mut rng, &venue, roster.len());

        let (mut c1, mut c2) = crossover::offspring(&p1, &p2, 1.0, &mut rng);
        prop_assert!(is_valid_assignment(&c1, venue.seat_count()));
        prop_assert!(is_valid_assignment(&c2, venue.seat_count()));

        for generation in 0..10 {
            mutation::mutate(&mut c1, venue.seat_count(), 0.9, generation, &mut rng);
            mutation::mutate(&mut c2, venue.seat_count(), 0.9, generation, &mut rng);
            prop_assert!(is_valid_assignment(&c1, venue.seat_count()));
            prop_assert!(is_valid_assignment(&c2, venue.seat_count()));
        }

        let evaluator = Evaluator::new(&venue, &roster, &FitnessWeights::default()).unwrap();
        let guide = evaluator.evaluate(&c1);
        mutation::smart_mutation(&mut c1, &venue, &roster, &guide);
        prop_assert!(is_valid_assignment(&c1, venue.seat_count()));
    }

    #[test]
    fn test_fitness_stays_in_unit_range((venue, roster, seed) in arb_setup()) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let evaluator = Evaluator::new(&venue, &roster, &FitnessWeights::default()).unwrap();

        for _ in 0..20 {
            let assignment = initialization::random_assignment(&mut rng, &venue, roster.len());
            let fit = evaluator.evaluate(&assignment);
            for score in [
                fit.friend_proximity,
                fit.vip_placement,
                fit.group_cohesion,
                fit.stage_distance,
                fit.total,
            ] {
                prop_assert!((0.0..=1.0).contains(&score), "out of range: {}", score);
            }
        }
    }
}
