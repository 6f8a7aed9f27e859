// File: crates/response-times/src/data.rs
// Summary: Seeded synthetic response-time generator (per-channel log-normal, clamped).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::LogNormal;
use thiserror::Error;

/// Seed used by the binary; fixed so every run produces the same chart.
pub const SEED: u64 = 42;
/// Samples drawn per channel.
pub const SAMPLES_PER_GROUP: usize = 500;
/// Upper clamp for response minutes; draws above it are pinned to it.
pub const VALUE_MAX: f64 = 120.0;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("location must be finite, got {0}")]
    InvalidLocation(f64),

    #[error("scale must be finite and non-negative, got {0}")]
    InvalidScale(f64),

    #[error("log-normal distribution rejected parameters: {0}")]
    Distribution(#[from] rand_distr::NormalError),
}

/// Support channel (the chart's category).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Email,
    Chat,
    Phone,
    Social,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Email, Channel::Chat, Channel::Phone, Channel::Social];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Chat => "Chat",
            Channel::Phone => "Phone",
            Channel::Social => "Social",
        }
    }

    /// Log-space location and scale; median is roughly `exp(location)`.
    pub fn params(self) -> GroupParams {
        let (location, scale) = match self {
            Channel::Email => (3.4, 0.6),  // ~30 min
            Channel::Chat => (2.5, 0.4),   // ~12 min
            Channel::Phone => (2.8, 0.5),  // ~16 min
            Channel::Social => (3.1, 0.7), // ~22 min
        };
        GroupParams { location, scale }
    }
}

/// Parameters of one group's log-normal distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupParams {
    /// Mean of the log of the value.
    pub location: f64,
    /// Standard deviation of the log of the value.
    pub scale: f64,
}

impl GroupParams {
    pub fn new(location: f64, scale: f64) -> Result<Self, GenerateError> {
        if !location.is_finite() {
            return Err(GenerateError::InvalidLocation(location));
        }
        if !scale.is_finite() || scale < 0.0 {
            return Err(GenerateError::InvalidScale(scale));
        }
        Ok(Self { location, scale })
    }

    /// Approximate median, `exp(location)`.
    pub fn median(&self) -> f64 {
        self.location.exp()
    }

    fn distribution(&self) -> Result<LogNormal<f64>, GenerateError> {
        // direct construction bypasses `new`, so re-check here
        Self::new(self.location, self.scale)?;
        Ok(LogNormal::new(self.location, self.scale)?)
    }
}

/// One simulated measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub group: Channel,
    /// Response time in minutes, within [0, VALUE_MAX].
    pub value: f64,
}

/// Immutable generated dataset, group-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn values_for(&self, channel: Channel) -> Vec<f64> {
        self.samples.iter().filter(|s| s.group == channel).map(|s| s.value).collect()
    }

    /// `(channel, values)` for every channel present, in first-seen order.
    pub fn groups(&self) -> Vec<(Channel, Vec<f64>)> {
        let mut order: Vec<Channel> = Vec::new();
        for s in &self.samples {
            if !order.contains(&s.group) {
                order.push(s.group);
            }
        }
        order.into_iter().map(|c| (c, self.values_for(c))).collect()
    }
}

/// Deterministic random source for `seed`.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw `per_group` samples for every channel with its built-in parameters.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, per_group: usize) -> Result<Dataset, GenerateError> {
    let groups: Vec<(Channel, GroupParams)> = Channel::ALL.iter().map(|&c| (c, c.params())).collect();
    generate_with(rng, &groups, per_group)
}

/// Draw `per_group` samples for each `(channel, params)` in order, clamping
/// every value into [0, VALUE_MAX]. All parameters are validated before any
/// draw.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    groups: &[(Channel, GroupParams)],
    per_group: usize,
) -> Result<Dataset, GenerateError> {
    let dists = groups
        .iter()
        .map(|(c, p)| Ok((*c, p.distribution()?)))
        .collect::<Result<Vec<_>, GenerateError>>()?;

    let mut samples = Vec::with_capacity(groups.len() * per_group);
    for (group, dist) in dists {
        for _ in 0..per_group {
            let raw: f64 = rng.sample(dist);
            samples.push(Sample { group, value: raw.clamp(0.0, VALUE_MAX) });
        }
    }
    Ok(Dataset { samples })
}
