use crate::components::PulsingDotsProps;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};
use yew::prelude::*;

pub const DEFAULT_TEXT: &str = "Loading...";
pub const DEFAULT_DOTS_COUNT: usize = 3;

/// Upper bound on dots decoded from JSON settings
pub const MAX_DOTS_COUNT: usize = 100;

/// Dot size. Deserializes from any JSON value: a missing field keeps the
/// default (`Small`), while `null`, a non-string or an unknown name selects `Large`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<Value>")]
pub enum DotSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl DotSize {
    /// Exact, case-sensitive match. Anything that isn't "small" or "medium" is large.
    pub fn from_name(name: &str) -> Self {
        match name {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            other => {
                debug!(size = other, "Unrecognized dot size, falling back to large");
                Self::Large
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl From<Option<Value>> for DotSize {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(Value::String(name)) => Self::from_name(&name),
            Some(other) => {
                debug!(size = %other, "Non-string dot size, falling back to large");
                Self::Large
            }
            None => Self::Large,
        }
    }
}

impl From<&str> for DotSize {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for DotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra container classes, given either as one string or as a list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraClasses {
    One(String),
    Many(Vec<String>),
}

impl From<ExtraClasses> for Classes {
    fn from(extra: ExtraClasses) -> Self {
        match extra {
            ExtraClasses::One(class) => Classes::from(class),
            ExtraClasses::Many(classes) => Classes::from(classes),
        }
    }
}

/// Display options for a pulsing dots indicator, as carried in JSON settings.
/// Every field is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    pub text: String,
    pub dots_count: i64,
    pub subtle: bool,
    pub size: DotSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<ExtraClasses>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            dots_count: 3,
            subtle: true,
            size: DotSize::default(),
            class_name: None,
        }
    }
}

impl DisplayConfig {
    pub fn from_json(input: &str) -> Result<Self> {
        let config = serde_json::from_str(input)
            .inspect_err(|error| warn!(%error, "Failed to parse pulsing dots config"))?;
        Ok(config)
    }

    /// Parses a JSON array of configs
    pub fn many_from_json(input: &str) -> Result<Vec<Self>> {
        let configs = serde_json::from_str(input)
            .inspect_err(|error| warn!(%error, "Failed to parse pulsing dots config list"))?;
        Ok(configs)
    }

    /// Number of dots to render. Negative counts render nothing and counts
    /// above `MAX_DOTS_COUNT` are capped.
    pub fn dots(&self) -> usize {
        if self.dots_count <= 0 {
            if self.dots_count < 0 {
                debug!(dots_count = self.dots_count, "Negative dot count, rendering no dots");
            }
            return 0;
        }
        match usize::try_from(self.dots_count) {
            Ok(count) if count <= MAX_DOTS_COUNT => count,
            _ => {
                warn!(dots_count = self.dots_count, "Dot count too large, capping");
                MAX_DOTS_COUNT
            }
        }
    }
}

impl From<DisplayConfig> for PulsingDotsProps {
    fn from(config: DisplayConfig) -> Self {
        let dots_count = config.dots();
        Self {
            text: AttrValue::from(config.text),
            dots_count,
            subtle: config.subtle,
            size: config.size,
            class: config.class_name.map(Classes::from).unwrap_or_default(),
        }
    }
}
