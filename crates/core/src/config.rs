//! Layout configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling how a net is sized and laid out.
///
/// All lengths are in centimeters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Glue allowance added around every face. Each dimension grows by
    /// `2 * gap` and the true box size is drawn as an inner outline.
    pub gap: f64,

    /// Inward offset of tab and flap outlines from their face edges.
    pub cut_gap: f64,

    /// Horizontal page margin.
    pub margin_x: f64,

    /// Vertical page margin.
    pub margin_y: f64,

    /// Stretch the mid (glue) faces as wide as the page allows.
    pub long_mid_faces: bool,

    /// Downgrade a length overflow from an error to a warning.
    pub allow_overflow: bool,

    /// Draw the dashed inset outlines of glue tabs and the closing flap.
    pub tab_outlines: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 0.0,
            cut_gap: 0.1,
            margin_x: 0.5,
            margin_y: 0.5,
            long_mid_faces: true,
            allow_overflow: true,
            tab_outlines: true,
        }
    }
}

impl LayoutConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glue allowance.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the tab outline offset.
    pub fn with_cut_gap(mut self, cut_gap: f64) -> Self {
        self.cut_gap = cut_gap;
        self
    }

    /// Sets both page margins.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin_x = margin;
        self.margin_y = margin;
        self
    }

    /// Sets the horizontal page margin.
    pub fn with_margin_x(mut self, margin: f64) -> Self {
        self.margin_x = margin;
        self
    }

    /// Sets the vertical page margin.
    pub fn with_margin_y(mut self, margin: f64) -> Self {
        self.margin_y = margin;
        self
    }

    /// Enables or disables long mid faces.
    pub fn with_long_mid_faces(mut self, enabled: bool) -> Self {
        self.long_mid_faces = enabled;
        self
    }

    /// Allows or forbids the net to overflow the page length.
    pub fn with_allow_overflow(mut self, allowed: bool) -> Self {
        self.allow_overflow = allowed;
        self
    }

    /// Enables or disables inset tab outlines.
    pub fn with_tab_outlines(mut self, enabled: bool) -> Self {
        self.tab_outlines = enabled;
        self
    }

    /// Returns true if a glue allowance is requested.
    pub fn has_gap(&self) -> bool {
        self.gap > 0.0
    }

    /// Checks that every length is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("gap", self.gap),
            ("cut_gap", self.cut_gap),
            ("margin_x", self.margin_x),
            ("margin_y", self.margin_y),
        ];

        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::ConfigError(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
