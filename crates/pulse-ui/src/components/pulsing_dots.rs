use crate::layout::DotRow;
use crate::styles::{DOTS_CONTAINER, VISUALLY_HIDDEN};
use crate::types::{DEFAULT_DOTS_COUNT, DEFAULT_TEXT, DotSize};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PulsingDotsProps {
    /// Announced to screen readers, never shown
    #[prop_or(AttrValue::Static(DEFAULT_TEXT))]
    pub text: AttrValue,
    #[prop_or(DEFAULT_DOTS_COUNT)]
    pub dots_count: usize,
    #[prop_or(true)]
    pub subtle: bool,
    #[prop_or_default]
    pub size: DotSize,
    #[prop_or_default]
    pub class: Classes,
}

impl Default for PulsingDotsProps {
    fn default() -> Self {
        Self {
            text: AttrValue::Static(DEFAULT_TEXT),
            dots_count: DEFAULT_DOTS_COUNT,
            subtle: true,
            size: DotSize::default(),
            class: Classes::new(),
        }
    }
}

/// Row of pulsing dots with a status announcement for assistive technology
#[function_component(PulsingDots)]
pub fn pulsing_dots(props: &PulsingDotsProps) -> Html {
    let row = DotRow::new(props);

    html! {
        <div class={row.container.clone()} role={row.role()}>
            <div class={DOTS_CONTAINER}>
                {for row.dots.iter().enumerate().map(|(index, dot)| {
                    html! {
                        <div key={index} class={dot.classes.clone()} style={dot.style()}></div>
                    }
                })}
            </div>
            <span class={VISUALLY_HIDDEN}>{row.text.clone()}</span>
        </div>
    }
}
