//! Styling parameters, sampling ranges, and their validation.

use crate::types::Rgb;
use rand::Rng;
use rand::distr::uniform::SampleUniform;
use std::fmt::Display;
use thiserror::Error;

/// Time a node takes to grow from minimum to full size, in time-units.
pub const GROWTH_DURATION: f64 = 250.0;

/// Branch sway: slow and shallow.
pub const BRANCH_SWAY_SPEED: f32 = 0.01;
pub const BRANCH_SWAY_AMPLITUDE: f32 = 2.0;

/// Leaf sway: faster and wider than the branches carrying them.
pub const LEAF_SWAY_SPEED: f32 = 0.02;
pub const LEAF_SWAY_AMPLITUDE: f32 = 6.0;

/// Per-leaf random shift applied to each channel of the base leaf color.
pub const LEAF_COLOR_SPREAD: i16 = 25;
/// Fixed transparency appended to every leaf color.
pub const LEAF_ALPHA: u8 = 200;

/// Wood color shared by every branch of every tree.
pub const BRANCH_COLOR: Rgb = Rgb::new(110, 72, 38);

/// Invalid factory configuration, rejected at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("inverted sampling range for {name}: min {min} > max {max}")]
    InvertedSpan {
        name: &'static str,
        min: String,
        max: String,
    },
}

/// Inclusive sampling range.
#[derive(Clone, Copy, Debug)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T> Span<T>
where
    T: SampleUniform + PartialOrd + Copy + Display,
{
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedSpan {
                name,
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }
        Ok(())
    }

    pub fn sample(&self, rng: &mut impl Rng) -> T {
        rng.random_range(self.min..=self.max)
    }
}

/// Global styling parameters for one generated tree.
///
/// Drawn fresh by the factory on every regeneration and passed down to
/// each node at construction, so nothing about a tree's look lives in
/// process-wide state. Per-node maxima are derived from these (scaled
/// down by branching depth).
#[derive(Clone, Copy, Debug)]
pub struct TreeParams {
    pub leaf_color: Rgb,
    pub max_leaf_size: f32,
    pub max_branch_length: f32,
    pub max_thickness: f32,
    pub max_depth: u32,
    pub growth_duration: f64,
}

/// Sampling ranges the factory draws [`TreeParams`] and root geometry
/// from. Validated once when the factory is built; an inverted range is
/// a programming error, not a runtime condition.
#[derive(Clone, Copy, Debug)]
pub struct FactoryRanges {
    pub leaf_red: Span<u8>,
    pub leaf_green: Span<u8>,
    pub leaf_blue: Span<u8>,
    pub max_leaf_size: Span<f32>,
    pub max_branch_length: Span<f32>,
    pub max_thickness: Span<f32>,
    pub max_depth: Span<u32>,
    pub root_length: Span<f32>,
    pub root_thickness: Span<f32>,
    pub taper: Span<f32>,
}

impl FactoryRanges {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.leaf_red.validate("leaf_red")?;
        self.leaf_green.validate("leaf_green")?;
        self.leaf_blue.validate("leaf_blue")?;
        self.max_leaf_size.validate("max_leaf_size")?;
        self.max_branch_length.validate("max_branch_length")?;
        self.max_thickness.validate("max_thickness")?;
        self.max_depth.validate("max_depth")?;
        self.root_length.validate("root_length")?;
        self.root_thickness.validate("root_thickness")?;
        self.taper.validate("taper")?;
        Ok(())
    }
}

impl Default for FactoryRanges {
    fn default() -> Self {
        Self {
            leaf_red: Span::new(10, 90),
            leaf_green: Span::new(120, 220),
            leaf_blue: Span::new(20, 120),
            max_leaf_size: Span::new(10.0, 24.0),
            max_branch_length: Span::new(130.0, 220.0),
            max_thickness: Span::new(8.0, 14.0),
            max_depth: Span::new(4, 7),
            root_length: Span::new(1.0, 12.0),
            root_thickness: Span::new(1.0, 5.0),
            taper: Span::new(0.55, 0.8),
        }
    }
}
