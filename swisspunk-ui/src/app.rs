use crate::components::{PaletteGenerator, Playground, Punkifier};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use swisspunk_core::PlaygroundConfig;

#[component]
pub fn PlaygroundApp(config: PlaygroundConfig) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Swiss Punk Playground" />
        <Playground config=config />
    }
}

#[component]
pub fn ResourcesApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Swiss Punk Resources" />
        <section class="resource-tool">
            <h2 class="tool-title">"PUNK-IFY YOUR TEXT"</h2>
            <Punkifier />
        </section>
        <section class="resource-tool">
            <h2 class="tool-title">"CLASHING PALETTE"</h2>
            <PaletteGenerator />
        </section>
    }
}
