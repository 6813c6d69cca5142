//! Normal distribution sampling for seed speeds

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Box-Muller sampler.
///
/// Each transform yields two independent values; the second is cached and
/// returned by the next call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalSampler {
    spare: Option<f32>,
}

impl NormalSampler {
    /// Draw from the standard normal distribution (mean 0, stddev 1)
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        if let Some(z1) = self.spare.take() {
            return z1;
        }

        // Map [0, 1) to (0, 1) so ln() stays finite
        let mut u1 = 0.0f32;
        while u1 == 0.0 {
            u1 = rng.random();
        }
        let mut u2 = 0.0f32;
        while u2 == 0.0 {
            u2 = rng.random();
        }

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = std::f32::consts::TAU * u2;
        self.spare = Some(r * theta.sin());
        r * theta.cos()
    }

    #[cfg(test)]
    fn has_spare(&self) -> bool {
        self.spare.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spare_alternates() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut sampler = NormalSampler::default();
        assert!(!sampler.has_spare());
        sampler.sample(&mut rng);
        assert!(sampler.has_spare());
        sampler.sample(&mut rng);
        assert!(!sampler.has_spare());
    }

    #[test]
    fn test_distribution_moments() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut sampler = NormalSampler::default();
        let n = 20_000;
        let samples: Vec<f32> = (0..n).map(|_| sampler.sample(&mut rng)).collect();

        let mean = samples.iter().sum::<f32>() / n as f32;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f32>() / n as f32;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.1, "variance {var}");
        assert!(samples.iter().all(|s| s.is_finite()));
    }
}
