use ga_routing::evaluation::FitnessEvaluator;
use ga_routing::ga::{decode, pmx_crossover, shuffle_indexes, Individual};
use ga_routing::models::{Location, VrpInstance};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn is_permutation(genes: &[usize]) -> bool {
    let mut sorted = genes.to_vec();
    sorted.sort_unstable();
    sorted.iter().enumerate().all(|(i, &g)| i == g)
}

fn arb_instance() -> impl Strategy<Value = VrpInstance> {
    (
        prop::collection::vec((-1000.0..1000.0f64, -1000.0..1000.0f64), 1..40),
        (-1000.0..1000.0f64, -1000.0..1000.0f64),
        1usize..8,
    )
        .prop_map(|(locs, depot, vehicles)| {
            VrpInstance::new(
                locs.into_iter().map(Location::from).collect(),
                Location::from(depot),
                vehicles,
            )
        })
}

proptest! {
    #[test]
    fn random_individuals_are_permutations(n in 0usize..200, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ind = Individual::random(n, &mut rng);
        prop_assert_eq!(ind.len(), n);
        prop_assert!(is_permutation(ind.genes()));
    }

    #[test]
    fn pmx_children_are_permutations(n in 0usize..60, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut a = Individual::random(n, &mut rng).genes().to_vec();
        let mut b = Individual::random(n, &mut rng).genes().to_vec();
        pmx_crossover(&mut a, &mut b, &mut rng);
        prop_assert_eq!(a.len(), n);
        prop_assert_eq!(b.len(), n);
        prop_assert!(is_permutation(&a));
        prop_assert!(is_permutation(&b));
    }

    #[test]
    fn shuffle_keeps_permutation(n in 0usize..60, indpb in 0.0..=1.0f64, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut genes = Individual::random(n, &mut rng).genes().to_vec();
        shuffle_indexes(&mut genes, indpb, &mut rng);
        prop_assert!(is_permutation(&genes));
    }

    #[test]
    fn fitness_is_non_negative(instance in arb_instance(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ind = Individual::random(instance.num_locations(), &mut rng);
        let fitness = FitnessEvaluator::new(&instance).evaluate(ind.genes()).expect("valid");
        prop_assert!(fitness.total_distance >= 0.0);
        prop_assert!(fitness.balance_penalty >= 0.0);
        prop_assert!(fitness.total_distance.is_finite());
        prop_assert!(fitness.balance_penalty.is_finite());
    }

    #[test]
    fn decode_is_deterministic_and_complete(instance in arb_instance(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ind = Individual::random(instance.num_locations(), &mut rng);
        let a = decode(ind.genes(), instance.depot(), instance.locations(), instance.num_vehicles()).expect("valid");
        let b = decode(ind.genes(), instance.depot(), instance.locations(), instance.num_vehicles()).expect("valid");
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), instance.num_vehicles());

        let mut visited: Vec<usize> = a.iter().flat_map(|r| r.location_ids().to_vec()).collect();
        visited.sort_unstable();
        prop_assert!(is_permutation(&visited));
        prop_assert_eq!(visited.len(), instance.num_locations());
    }
}
