//! Property tests for the query structures and the scorer

use proptest::prelude::*;

use gnat_core::{
    gamma, BoundingBox, NeuronId, PairTree, Spike, SpikePair, SpikeRaster, Synapse, Timestamp,
};

fn pair(t1: u64, t2: u64) -> SpikePair {
    SpikePair::new(
        NeuronId::new(0),
        Timestamp::from_ticks(t1),
        Timestamp::from_ticks(t2),
    )
    .expect("distinct timestamps")
}

proptest! {
    #[test]
    fn quadtree_conserves_accepted_pairs(
        points in prop::collection::vec((0u64..1000, 1u64..1000), 0..200)
    ) {
        // t2 = t1 + d keeps the two timestamps distinct
        let pairs: Vec<SpikePair> = points
            .iter()
            .map(|&(t1, d)| pair(t1, t1 + d))
            .collect();

        // A box that strictly contains every possible point
        let mut tree = PairTree::new(BoundingBox::new(1024.0, 1024.0, 1100.0));
        for p in &pairs {
            prop_assert!(tree.insert(*p));
        }

        prop_assert_eq!(tree.len(), pairs.len());
        prop_assert_eq!(tree.check_invariants(), pairs.len());

        // A whole-box sweep sees every pair exactly once
        let mut seen = Vec::new();
        tree.for_each_in_range(&BoundingBox::new(1024.0, 1024.0, 1100.0), |p| {
            seen.push((p.t1.ticks(), p.t2.ticks()));
        });
        let mut expected: Vec<(u64, u64)> =
            pairs.iter().map(|p| (p.t1.ticks(), p.t2.ticks())).collect();
        seen.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn quadtree_range_query_never_misses(
        points in prop::collection::vec((0u64..1000, 1u64..1000), 1..150),
        cx in 0.0f64..2000.0,
        cy in 0.0f64..2000.0,
        half in 0.0f64..500.0,
    ) {
        let pairs: Vec<SpikePair> = points
            .iter()
            .map(|&(t1, d)| pair(t1, t1 + d))
            .collect();
        let mut tree = PairTree::new(BoundingBox::new(1024.0, 1024.0, 1100.0));
        for p in &pairs {
            tree.insert(*p);
        }

        let query = BoundingBox::new(cx, cy, half);
        let mut visited = Vec::new();
        tree.for_each_in_range(&query, |p| visited.push(*p));

        // Over-approximate visits are allowed; misses are not.
        for p in pairs.iter().filter(|p| query.contains(p.point())) {
            prop_assert!(visited.contains(p), "pair {:?} inside query box was not visited", p);
        }
    }

    #[test]
    fn raster_range_query_matches_naive_filter(
        spikes in prop::collection::vec((0u32..4, 0u64..500), 0..200),
        bounds in (0u64..500, 0u64..500),
    ) {
        let mut raster = SpikeRaster::new(4);
        for &(n, t) in &spikes {
            raster
                .add_spike(Spike::new(NeuronId::new(n), Timestamp::from_ticks(t)))
                .expect("in range");
        }
        raster.finalize();

        let (low, high) = (bounds.0.min(bounds.1), bounds.0.max(bounds.1));
        for n in 0..4u32 {
            let neuron = NeuronId::new(n);
            let got: Vec<u64> = raster
                .spikes_in_range(
                    neuron,
                    Timestamp::from_ticks(low),
                    Timestamp::from_ticks(high),
                )
                .iter()
                .map(|t| t.ticks())
                .collect();

            let mut expected: Vec<u64> = spikes
                .iter()
                .filter(|&&(id, t)| id == n && low <= t && t <= high)
                .map(|&(_, t)| t)
                .collect();
            expected.sort_unstable();
            expected.dedup();

            prop_assert_eq!(got, expected);
            // Chronological order is part of the contract
        }
    }

    #[test]
    fn gamma_is_translation_invariant(
        t_pre in 0u64..1_000_000,
        lag in 0u64..10_000,
        offset in 0u64..1_000_000,
        rel_w in 0.01f32..10.0,
        delay in 0.0f32..100.0,
        tau in 0.1f32..100.0,
    ) {
        let syn = Synapse::new(NeuronId::new(0), NeuronId::new(1), rel_w, delay)
            .expect("valid synapse");
        let g0 = gamma(
            Timestamp::from_ticks(t_pre),
            Timestamp::from_ticks(t_pre + lag),
            &syn,
            tau,
        );
        let g1 = gamma(
            Timestamp::from_ticks(t_pre + offset),
            Timestamp::from_ticks(t_pre + lag + offset),
            &syn,
            tau,
        );
        // The signed tick difference is identical, so the scores agree
        prop_assert_eq!(g0, g1);
    }

    #[test]
    fn synapse_caches_negative_log_weight(rel_w in 0.001f32..1000.0) {
        let syn = Synapse::new(NeuronId::new(0), NeuronId::new(1), rel_w, 0.0)
            .expect("valid synapse");
        prop_assert!((syn.neg_log_rel_w - (-rel_w.ln())).abs() < 1e-6);
    }
}
