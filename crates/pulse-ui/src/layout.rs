//! Framework-independent description of a pulsing dots indicator.
//!
//! `DotRow` holds every class name, delay and text the component renders, so the
//! shape of the output can be checked without a DOM.

use crate::components::PulsingDotsProps;
use crate::styles::{CONTAINER, DELAY_STEP, DOT, ROLE_STATUS, size_class, variant_class};
use std::time::Duration;
use yew::prelude::*;

/// Animation delay of the dot at `index`
pub fn dot_delay(index: usize) -> Duration {
    DELAY_STEP.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub classes: Classes,
    pub delay: Duration,
}

impl Dot {
    fn new(index: usize, subtle: bool) -> Self {
        Self {
            classes: classes!(DOT, variant_class(subtle)),
            delay: dot_delay(index),
        }
    }

    /// Inline style carrying the animation offset, e.g. `animation-delay: 0.4s;`
    pub fn style(&self) -> String {
        format!("animation-delay: {}s;", self.delay.as_secs_f64())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DotRow {
    pub container: Classes,
    pub dots: Vec<Dot>,
    pub text: AttrValue,
}

impl DotRow {
    pub fn new(props: &PulsingDotsProps) -> Self {
        let PulsingDotsProps {
            text,
            dots_count,
            subtle,
            size,
            class,
        } = props;

        Self {
            container: classes!(CONTAINER, size_class(*size), class.clone()),
            dots: (0..*dots_count).map(|index| Dot::new(index, *subtle)).collect(),
            text: text.clone(),
        }
    }

    pub const fn role(&self) -> &'static str {
        ROLE_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::{LARGE, MEDIUM, PRIMARY, SMALL, SUBTLE};
    use crate::types::{DisplayConfig, DotSize};

    fn row(json: &str) -> DotRow {
        let props = PulsingDotsProps::from(DisplayConfig::from_json(json).unwrap());
        DotRow::new(&props)
    }

    #[test]
    fn test_default_row() {
        let row = DotRow::new(&PulsingDotsProps::default());

        assert!(row.container.contains(CONTAINER));
        assert!(row.container.contains(SMALL));
        assert!(!row.container.contains(MEDIUM));
        assert!(!row.container.contains(LARGE));
        assert_eq!(row.dots.len(), 3);
        assert!(row.dots.iter().all(|dot| dot.classes.contains(SUBTLE)));
        assert_eq!(row.text.as_str(), "Loading...");
        assert_eq!(row.role(), "status");
    }

    #[test]
    fn test_dot_count_matches() {
        for count in [0, 1, 3, 7, 12] {
            let props = PulsingDotsProps {
                dots_count: count,
                ..PulsingDotsProps::default()
            };
            assert_eq!(DotRow::new(&props).dots.len(), count);
        }
    }

    #[test]
    fn test_exactly_one_size_class() {
        for (size, expected) in [
            (DotSize::Small, SMALL),
            (DotSize::Medium, MEDIUM),
            (DotSize::Large, LARGE),
        ] {
            let props = PulsingDotsProps {
                size,
                ..PulsingDotsProps::default()
            };
            let row = DotRow::new(&props);

            let size_classes = [SMALL, MEDIUM, LARGE]
                .into_iter()
                .filter(|class| row.container.contains(class))
                .collect::<Vec<_>>();
            assert_eq!(size_classes, vec![expected]);
        }
    }

    #[test]
    fn test_unknown_size_name_renders_large() {
        let row = row(r#"{"size": "xl"}"#);

        assert!(row.container.contains(LARGE));
        assert!(!row.container.contains(SMALL));
    }

    #[test]
    fn test_variant_is_exclusive() {
        let subtle = row(r#"{"subtle": true, "dotsCount": 4}"#);
        assert!(
            subtle
                .dots
                .iter()
                .all(|dot| dot.classes.contains(SUBTLE) && !dot.classes.contains(PRIMARY))
        );

        let primary = row(r#"{"subtle": false, "dotsCount": 4}"#);
        assert!(
            primary
                .dots
                .iter()
                .all(|dot| dot.classes.contains(PRIMARY) && !dot.classes.contains(SUBTLE))
        );
    }

    #[test]
    fn test_delays_are_staggered() {
        assert_eq!(dot_delay(0), Duration::ZERO);
        assert_eq!(dot_delay(1), Duration::from_millis(200));
        assert_eq!(dot_delay(2), Duration::from_millis(400));
        assert_eq!(dot_delay(10), Duration::from_secs(2));
    }

    #[test]
    fn test_dot_style() {
        let row = row(r#"{"dotsCount": 3}"#);
        let styles = row.dots.iter().map(Dot::style).collect::<Vec<_>>();

        assert_eq!(
            styles,
            vec![
                "animation-delay: 0s;",
                "animation-delay: 0.2s;",
                "animation-delay: 0.4s;",
            ]
        );
    }

    #[test]
    fn test_medium_primary_scenario() {
        let row = row(r#"{"dotsCount": 5, "size": "medium", "subtle": false}"#);

        assert!(row.container.contains(MEDIUM));
        assert_eq!(row.dots.len(), 5);
        let delays = row.dots.iter().map(|dot| dot.delay).collect::<Vec<_>>();
        assert_eq!(
            delays,
            [0, 200, 400, 600, 800].map(Duration::from_millis).to_vec()
        );
        assert!(row.dots.iter().all(|dot| dot.classes.contains(PRIMARY)));
    }

    #[test]
    fn test_extra_classes_follow_base_and_size() {
        let single = row(r#"{"className": "toolbar-status"}"#);
        assert!(single.container.contains("toolbar-status"));
        assert!(single.container.contains(CONTAINER));
        assert!(single.container.contains(SMALL));

        let many = row(r#"{"className": ["inline", "muted"], "size": "large"}"#);
        assert_eq!(
            many.container.to_string(),
            format!("{CONTAINER} {LARGE} inline muted")
        );
    }

    #[test]
    fn test_custom_text_is_verbatim() {
        let row = row(r#"{"text": "  Waiting for <sample> & co  "}"#);
        assert_eq!(row.text.as_str(), "  Waiting for <sample> & co  ");
    }
}
