// Tunables for the hero particle field. Defaults reproduce the landing page
// visual: 50 slow indigo points, linked when closer than 100px.

use crate::color::{Color, ColorBand};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConnectionStrategy {
    /// Check every unordered pair.
    Pairwise,
    /// Bucket particles into cells the size of the link distance first.
    Grid,
}

impl Default for ConnectionStrategy {
    fn default() -> Self {
        ConnectionStrategy::Pairwise
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkStyle {
    /// Pairs at or beyond this distance are not linked.
    pub distance: f64,
    /// Opacity of a link between two coincident particles.
    pub max_opacity: f64,
    pub width: f64,
    pub color: Color,
}

impl Default for LinkStyle {
    fn default() -> Self {
        LinkStyle {
            distance: 100.0,
            max_opacity: 0.1,
            width: 0.5,
            color: Color::from_u32(0x6366f1ff),
        }
    }
}

impl LinkStyle {
    pub fn opacity(&self, distance: f64) -> f64 {
        self.max_opacity * (1.0 - distance / self.distance)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Each velocity component is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    pub color_band: ColorBand,
    pub link: LinkStyle,
    pub strategy: ConnectionStrategy,
}

impl FieldConfig {
    pub const DEFAULT_COUNT: usize = 50;

    pub fn with_count(self, count: usize) -> Self {
        FieldConfig { count, ..self }
    }

    pub fn with_strategy(self, strategy: ConnectionStrategy) -> Self {
        FieldConfig { strategy, ..self }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: FieldConfig::DEFAULT_COUNT,
            min_radius: 1.0,
            max_radius: 4.0,
            max_speed: 0.25,
            color_band: ColorBand::default(),
            link: LinkStyle::default(),
            strategy: ConnectionStrategy::default(),
        }
    }
}
