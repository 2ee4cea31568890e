//! Class names for the pulsing dots indicator and the stylesheet that gives them their look

use crate::types::DotSize;
use std::time::Duration;

/// Bundled stylesheet defining every class below, including the pulse keyframes.
/// Hosts that don't ship their own styles can inject it once per page.
pub const STYLESHEET: &str = include_str!("../assets/pulsing_dots.css");

// Outer container and its size modifiers
pub const CONTAINER: &str = "pulsing-dots";
pub const SMALL: &str = "pulsing-dots--small";
pub const MEDIUM: &str = "pulsing-dots--medium";
pub const LARGE: &str = "pulsing-dots--large";

// Dot row and dots
pub const DOTS_CONTAINER: &str = "pulsing-dots__row";
pub const DOT: &str = "pulsing-dots__dot";
pub const SUBTLE: &str = "pulsing-dots__dot--subtle";
pub const PRIMARY: &str = "pulsing-dots__dot--primary";

// Announced to assistive technology, never painted
pub const VISUALLY_HIDDEN: &str = "visually-hidden";

/// ARIA role of the outer container
pub const ROLE_STATUS: &str = "status";

/// Animation offset between neighbouring dots
pub const DELAY_STEP: Duration = Duration::from_millis(200);

pub const fn size_class(size: DotSize) -> &'static str {
    match size {
        DotSize::Small => SMALL,
        DotSize::Medium => MEDIUM,
        DotSize::Large => LARGE,
    }
}

pub const fn variant_class(subtle: bool) -> &'static str {
    if subtle { SUBTLE } else { PRIMARY }
}
