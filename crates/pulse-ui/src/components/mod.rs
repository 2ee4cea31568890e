mod pulsing_dots;

pub use pulsing_dots::{PulsingDots, PulsingDotsProps};
