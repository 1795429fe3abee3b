//! Random point clouds in 2D (uniform box sampling + replay tokens).
//!
//! Purpose
//! - Feed the ordering/inset pipeline with small reproducible inputs for tests,
//!   benches and the CLI `--random` mode. The default draws 4–5 points in
//!   [-1, 1]², the size of the throwaway shapes people sketch interactively.
//!
//! Model
//! - Sample the point count, then each coordinate uniformly in the box.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point2;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Uniform box sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    pub vertex_count: VertexCount,
    /// Lower-left corner of the sampling box.
    pub min: Point2,
    /// Upper-right corner of the sampling box.
    pub max: Point2,
}
impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 4, max: 5 },
            min: Vector2::new(-1.0, -1.0),
            max: Vector2::new(1.0, 1.0),
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
        // SplitMix64-style mixing.
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

/// Draw an unordered point cloud, uniform in the configured box.
///
/// A degenerate box (zero width or height) yields points on a line; callers
/// that need a polygon should keep the box non-degenerate.
pub fn draw_points_uniform(cfg: PointCloudCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let lo = cfg.min.inf(&cfg.max);
    let hi = cfg.min.sup(&cfg.max);
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            Vector2::new(lo.x + u * (hi.x - lo.x), lo.y + v * (hi.y - lo.y))
        })
        .collect()
}
