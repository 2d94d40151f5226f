//! Synapse-weighted causal scoring
//!
//! The latency score between a candidate presynaptic spike at `t_pre` and a
//! postsynaptic spike at `t_post` through a synapse `(w, d)` with time
//! constant `tau` is
//!
//! ```text
//! gamma = -ln w + (delta_t - d) / tau,    delta_t = t_post - t_pre
//! ```
//!
//! valid inside the causal window `delta_t >= d`. Below the delay the score
//! is pushed past [`GAMMA_SENTINEL`] so a `<= thresh` test always fails.
//! The synapse caches `-ln w`, so the hot path is two adds and a divide
//! with no transcendental calls.

use crate::{
    ids::Timestamp,
    network::Synapse,
    spike::SpikePair,
};

/// Additive sentinel applied to scores below the causal window
pub const GAMMA_SENTINEL: f32 = 1.0e6;

fn delta_ticks(t_pre: Timestamp, t_post: Timestamp) -> f32 {
    // Signed difference: a query box can hand the scorer a "pre" spike that
    // is actually in the future of the post spike.
    (t_post.ticks() as i64 - t_pre.ticks() as i64) as f32
}

/// Causal latency score through `syn`; lower is more causal
pub fn gamma(t_pre: Timestamp, t_post: Timestamp, syn: &Synapse, tau: f32) -> f32 {
    let delta_t = delta_ticks(t_pre, t_post);
    let base = syn.neg_log_rel_w + (delta_t - syn.delay) / tau;
    if delta_t < syn.delay {
        GAMMA_SENTINEL + base
    } else {
        base
    }
}

/// Positive-intensity form of the score; diagnostic only
///
/// `omega = theta * w * exp(-(delta_t - d) / tau)` with
/// `theta = 1[delta_t >= d]`. Not used in inner loops.
pub fn omega(t_pre: Timestamp, t_post: Timestamp, syn: &Synapse, tau: f32) -> f32 {
    let delta_t = delta_ticks(t_pre, t_post);
    if delta_t >= syn.delay {
        syn.rel_w * (-(delta_t - syn.delay) / tau).exp()
    } else {
        0.0
    }
}

/// Second-order edge test between a presynaptic and a postsynaptic pair
///
/// Both component scores through the shared synapse must pass the
/// threshold. Component-wise matching is well-defined because pairs are
/// enumerated with `t1` preceding `t2`.
pub fn pair_edge_test(
    pre: &SpikePair,
    post: &SpikePair,
    syn: &Synapse,
    tau: f32,
    thresh: f32,
) -> bool {
    gamma(pre.t1, post.t1, syn, tau) <= thresh && gamma(pre.t2, post.t2, syn, tau) <= thresh
}
