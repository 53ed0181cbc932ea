use yew::prelude::*;

mod booth;
mod browser;
mod config;
mod directory;
mod styles;
mod views;

use crate::booth::Booth;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Booth />
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }
    yew::Renderer::<App>::new().render();
}
