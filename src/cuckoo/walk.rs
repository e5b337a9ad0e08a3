//! Random-walk operators used to lay new eggs.

use crate::solution::Solution;
use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

/// Step distribution for the cuckoo's random walk.
///
/// Every variant perturbs each variable independently and returns a
/// candidate of the same dimensionality. Feasibility is checked by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Walk {
    /// Normal step: `x + step_size * N(0, 1)`.
    Gaussian {
        /// Standard deviation of each component.
        step_size: f64,
    },

    /// Box step: `x + U(-step_size, step_size)`.
    Uniform {
        /// Half-width of the step interval.
        step_size: f64,
    },

    /// Lévy flight: `x + step_size * L(beta)`, where `L` is drawn with
    /// Mantegna's algorithm. Mostly short steps with occasional long jumps.
    ///
    /// Typical `beta`: 1.5.
    Levy {
        /// Stability index in `(0, 2]`.
        beta: f64,
        step_size: f64,
    },
}

impl Default for Walk {
    fn default() -> Self {
        Walk::Gaussian { step_size: 0.1 }
    }
}

impl Walk {
    /// Draws a candidate one step away from `from`.
    ///
    /// # Panics
    /// Parameters must pass [`validate`](Self::validate); a uniform walk
    /// with a negative or NaN `step_size` panics in the sampler.
    pub fn step<R: Rng>(&self, from: &Solution, rng: &mut R) -> Solution {
        debug_assert!(self.validate().is_ok(), "invalid walk: {self:?}");
        let variables = match *self {
            Walk::Gaussian { step_size } => from
                .variables
                .iter()
                .map(|&x| x + step_size * rng.sample::<f64, _>(StandardNormal))
                .collect(),
            Walk::Uniform { step_size } => from
                .variables
                .iter()
                .map(|&x| x + rng.random_range(-step_size..=step_size))
                .collect(),
            Walk::Levy { beta, step_size } => {
                let sigma_u = mantegna_sigma(beta);
                from.variables
                    .iter()
                    .map(|&x| {
                        let u = sigma_u * rng.sample::<f64, _>(StandardNormal);
                        let v: f64 = rng.sample(StandardNormal);
                        x + step_size * u / v.abs().powf(1.0 / beta)
                    })
                    .collect()
            }
        };
        Solution::new(variables)
    }

    /// Validates the walk parameters.
    pub fn validate(&self) -> Result<(), String> {
        let step_size = match *self {
            Walk::Gaussian { step_size } | Walk::Uniform { step_size } => step_size,
            Walk::Levy { beta, step_size } => {
                if !(beta > 0.0 && beta <= 2.0) {
                    return Err(format!("levy beta must be in (0, 2], got {beta}"));
                }
                step_size
            }
        };
        if !(step_size.is_finite() && step_size > 0.0) {
            return Err(format!("walk step_size must be positive, got {step_size}"));
        }
        Ok(())
    }
}

/// Scale of the numerator normal in Mantegna's algorithm.
fn mantegna_sigma(beta: f64) -> f64 {
    let num = gamma(1.0 + beta) * (PI * beta / 2.0).sin();
    let den = gamma((1.0 + beta) / 2.0) * beta * 2f64.powf((beta - 1.0) / 2.0);
    (num / den).powf(1.0 / beta)
}

/// Lanczos approximation of the gamma function (g = 7, n = 9).
fn gamma(x: f64) -> f64 {
    const G: f64 = 7.0;
    const COEFFS: [f64; 9] = [
        0.999_999_999_999_809_9,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_1,
        -176.615_029_162_140_6,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_572e-6,
        1.505_632_735_149_311_6e-7,
    ];

    if x < 0.5 {
        // Reflection formula.
        return PI / ((PI * x).sin() * gamma(1.0 - x));
    }
    let x = x - 1.0;
    let t = x + G + 0.5;
    let series = COEFFS[1..]
        .iter()
        .enumerate()
        .fold(COEFFS[0], |acc, (i, c)| acc + c / (x + i as f64 + 1.0));
    (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * series
}
