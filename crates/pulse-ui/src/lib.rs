//! Pulsing dots loading indicator for yew frontends.
//!
//! Renders a row of animated dots inside a `role="status"` container, with the
//! loading text kept visually hidden so only assistive technology announces it.

pub mod components;
pub mod error;
pub mod layout;
pub mod styles;
pub mod types;

pub use components::{PulsingDots, PulsingDotsProps};
pub use error::{ConfigError, Result};
pub use layout::{Dot, DotRow, dot_delay};
pub use styles::STYLESHEET;
pub use types::{DisplayConfig, DotSize, ExtraClasses};
