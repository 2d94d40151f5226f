//! Per-neuron spike raster with range-query support
//!
//! Spikes are accumulated per neuron while the raster file is read, then
//! [`SpikeRaster::finalize`] sorts each train and collapses duplicate
//! timestamps. All queries require a finalized raster.

use log::debug;

use crate::{
    error::{CoreError, Result},
    ids::{NeuronId, Timestamp},
    spike::{Spike, SpikePair},
};

/// The per-neuron record of spike times over a trial
#[derive(Debug, Clone)]
pub struct SpikeRaster {
    trains: Vec<Vec<Timestamp>>,
    t_min: Timestamp,
    t_max: Timestamp,
    n_spikes: u64,
}

impl SpikeRaster {
    /// Create an empty raster over `n_cells` neurons
    pub fn new(n_cells: u32) -> Self {
        Self {
            trains: vec![Vec::new(); n_cells as usize],
            t_min: Timestamp::ZERO,
            t_max: Timestamp::ZERO,
            n_spikes: 0,
        }
    }

    /// Population size the raster was declared with
    pub fn n_cells(&self) -> u32 {
        self.trains.len() as u32
    }

    /// Number of spikes added so far (before deduplication)
    pub fn n_spikes(&self) -> u64 {
        self.n_spikes
    }

    /// True if no spike has been added
    pub fn is_empty(&self) -> bool {
        self.n_spikes == 0
    }

    /// Append a spike to its neuron's train
    ///
    /// Fails if the spike's neuron lies outside the population; the caller
    /// decides whether that is fatal or a logged skip. Global time bounds
    /// are updated incrementally.
    pub fn add_spike(&mut self, spike: Spike) -> Result<()> {
        let n_cells = self.n_cells();
        if spike.neuron.raw() >= n_cells {
            return Err(CoreError::NeuronOutOfRange {
                id: spike.neuron.raw(),
                n_cells,
            });
        }

        if self.n_spikes == 0 {
            self.t_min = spike.ts;
            self.t_max = spike.ts;
        } else {
            self.t_min = self.t_min.min(spike.ts);
            self.t_max = self.t_max.max(spike.ts);
        }
        self.trains[spike.neuron.raw() as usize].push(spike.ts);
        self.n_spikes += 1;
        Ok(())
    }

    /// Sort every train chronologically and drop duplicate timestamps
    pub fn finalize(&mut self) {
        for train in &mut self.trains {
            train.sort_unstable();
            train.dedup();
        }
        debug!(
            "raster: {} cells, {} spikes, t in [{}, {}]",
            self.n_cells(),
            self.n_spikes,
            self.t_min,
            self.t_max
        );
    }

    /// All spikes of neuron `n`, chronological
    pub fn spike_train(&self, n: NeuronId) -> &[Timestamp] {
        &self.trains[n.raw() as usize]
    }

    /// Spikes of neuron `n` with `low <= t <= high`, chronological
    ///
    /// Two binary searches locate the window, so the cost is
    /// O(log m + k) for k results out of m spikes.
    pub fn spikes_in_range(&self, n: NeuronId, low: Timestamp, high: Timestamp) -> &[Timestamp] {
        let train = &self.trains[n.raw() as usize];
        let start = train.partition_point(|&t| t < low);
        let end = train.partition_point(|&t| t <= high);
        &train[start..end]
    }

    /// Global time bounds across all neurons; `None` for an empty raster
    pub fn time_bounds(&self) -> Option<(Timestamp, Timestamp)> {
        if self.is_empty() {
            None
        } else {
            Some((self.t_min, self.t_max))
        }
    }

    /// All distinct-timestamp spike pairs of neuron `n`
    ///
    /// For a train of k spikes this yields k*(k-1)/2 pairs with `t1`
    /// strictly preceding `t2` in train order.
    pub fn pairs(&self, n: NeuronId) -> impl Iterator<Item = SpikePair> + '_ {
        let train = self.spike_train(n);
        train.iter().enumerate().flat_map(move |(i, &t1)| {
            train[i + 1..].iter().map(move |&t2| SpikePair {
                neuron: n,
                t1,
                t2,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster_of(n_cells: u32, spikes: &[(u32, u64)]) -> SpikeRaster {
        let mut sr = SpikeRaster::new(n_cells);
        for &(n, t) in spikes {
            sr.add_spike(Spike::new(NeuronId::new(n), Timestamp::from_ticks(t)))
                .unwrap();
        }
        sr.finalize();
        sr
    }

    #[test]
    fn test_out_of_range_spike_is_rejected() {
        let mut sr = SpikeRaster::new(2);
        let err = sr.add_spike(Spike::new(NeuronId::new(2), Timestamp::ZERO));
        assert!(matches!(
            err,
            Err(CoreError::NeuronOutOfRange { id: 2, n_cells: 2 })
        ));
    }

    #[test]
    fn test_time_bounds_track_all_neurons() {
        let sr = raster_of(3, &[(0, 50), (1, 10), (2, 99), (0, 20)]);
        assert_eq!(
            sr.time_bounds(),
            Some((Timestamp::from_ticks(10), Timestamp::from_ticks(99)))
        );
        assert!(SpikeRaster::new(1).time_bounds().is_none());
    }

    #[test]
    fn test_finalize_sorts_and_dedups() {
        let sr = raster_of(1, &[(0, 30), (0, 10), (0, 30), (0, 20)]);
        let train: Vec<u64> = sr.spike_train(NeuronId::new(0)).iter().map(|t| t.ticks()).collect();
        assert_eq!(train, vec![10, 20, 30]);
    }

    #[test]
    fn test_spikes_in_range_inclusive() {
        let sr = raster_of(1, &[(0, 10), (0, 20), (0, 30), (0, 40)]);
        let n = NeuronId::new(0);
        let got: Vec<u64> = sr
            .spikes_in_range(n, Timestamp::from_ticks(20), Timestamp::from_ticks(30))
            .iter()
            .map(|t| t.ticks())
            .collect();
        assert_eq!(got, vec![20, 30]);
        // Empty window
        assert!(sr
            .spikes_in_range(n, Timestamp::from_ticks(31), Timestamp::from_ticks(39))
            .is_empty());
        // Window past either end
        assert!(sr
            .spikes_in_range(n, Timestamp::from_ticks(41), Timestamp::from_ticks(100))
            .is_empty());
    }

    #[test]
    fn test_pair_enumeration_order_and_count() {
        let sr = raster_of(1, &[(0, 1), (0, 2), (0, 3)]);
        let pairs: Vec<(u64, u64)> = sr
            .pairs(NeuronId::new(0))
            .map(|p| (p.t1.ticks(), p.t2.ticks()))
            .collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_pairs_of_silent_neuron() {
        let sr = raster_of(2, &[(0, 1)]);
        assert_eq!(sr.pairs(NeuronId::new(1)).count(), 0);
        assert_eq!(sr.pairs(NeuronId::new(0)).count(), 0);
    }
}
