use alloc::string::String;

use crate::config::ConfigError;
use crate::range::Range;
use crate::text::Unit;

/// Everything needed to describe one plugin parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub range: Range,
    pub unit: Unit,
    /// Plain default value.
    pub default: f32,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.range.validate()?;

        // Descending linear ranges are allowed, so compare against the clamped value
        if self.range.clamp(self.default) != self.default {
            return Err(ConfigError::DefaultOutOfRange);
        }

        Ok(())
    }
}

/// A validated range + unit pair.
///
/// Holds no value of its own; the host owns the parameter state and asks
/// this for conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter {
    config: Config,
}

impl Parameter {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn range(&self) -> &Range {
        &self.config.range
    }

    pub fn unit(&self) -> Unit {
        self.config.unit
    }

    pub fn default_value(&self) -> f32 {
        self.config.default
    }

    pub fn default_normalized(&self) -> f32 {
        self.config.range.to_normalized(self.config.default)
    }

    pub fn text_for_value(&self, value: f32) -> String {
        self.config.unit.format(value)
    }

    /// Label for a knob position, after snapping to a legal value.
    pub fn text_for_normalized(&self, normalized: f32) -> String {
        let range = &self.config.range;
        self.text_for_value(range.from_normalized_snapped(normalized))
    }

    /// Plain value for user text, clamped into the range and snapped.
    pub fn value_for_text(&self, text: &str) -> f32 {
        let range = &self.config.range;
        range.snap(range.clamp(self.config.unit.parse(text)))
    }

    pub fn normalized_for_text(&self, text: &str) -> f32 {
        self.config.range.to_normalized(self.value_for_text(text))
    }
}
