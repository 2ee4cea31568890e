mod logging;

use pulse_ui::{DisplayConfig, PulsingDots, PulsingDotsProps, STYLESHEET};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const GALLERY: &str = include_str!("gallery.json");

fn describe(config: &DisplayConfig) -> String {
    let variant = if config.subtle { "subtle" } else { "primary" };
    format!("{} dots, {}, {variant}", config.dots(), config.size)
}

#[function_component(Gallery)]
fn gallery() -> Html {
    let configs = use_memo((), |_| DisplayConfig::many_from_json(GALLERY));

    match &*configs {
        Ok(configs) => html! {
            <div class="gallery">
                {for configs.iter().enumerate().map(|(index, config)| {
                    let props = PulsingDotsProps::from(config.clone());
                    html! {
                        <section key={index}>
                            <h2>{describe(config)}</h2>
                            <PulsingDots ..props />
                        </section>
                    }
                })}
            </div>
        },
        Err(error) => html! {
            <p class="error">{error.to_string()}</p>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let busy = use_state(|| true);

    let toggle_busy = {
        let busy = busy.clone();
        Callback::from(move |_| {
            tracing::debug!(busy = !*busy, "Toggling live indicator");
            busy.set(!*busy);
        })
    };

    html! {
        <>
            <style>{STYLESHEET}</style>
            <h1>{"Pulsing dots"}</h1>
            <p>
                <button onclick={toggle_busy}>
                    {if *busy { "Finish loading" } else { "Start loading" }}
                </button>
                {" "}
                if *busy {
                    <PulsingDots text="Refreshing results" size={pulse_ui::DotSize::Medium} />
                } else {
                    <span>{"Done"}</span>
                }
            </p>
            <Gallery />
        </>
    }
}

#[wasm_bindgen(start)]
#[allow(clippy::main_recursion)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    yew::Renderer::<App>::new().render();
}
