//! Deterministic planar point clouds (radial jitter + replay tokens).
//!
//! Purpose
//! - Small reproducible sampler feeding the hull tests and benches. Draws are
//!   indexed by a replay token `(seed, index)` mixed into a single RNG, so a
//!   failing case can be replayed exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of points drawn.
    pub count: usize,
    /// Base radius before jitter.
    pub base_radius: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 16,
            base_radius: 1.0,
            radial_jitter: 0.4,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a jittered ring of points around the origin.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count;
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n.max(1) as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let theta = phase + (k as f64) * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = r0 * (1.0 + u);
            Point::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}
