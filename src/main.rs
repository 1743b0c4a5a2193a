// DesignHub landing page — Leptos 0.8 Edition

mod data;
mod sections;
mod state;

use leptos::prelude::*;
use sections::*;
use state::{Overlays, PortfolioForm};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // All page state lives here: the two overlay flags and the form values.
    // The form signal is owned by App, not the modal subtree, so closing the
    // modal leaves whatever the user typed in place.
    let (overlays, set_overlays) = signal(Overlays::default());
    let (form, set_form) = signal(PortfolioForm::default());

    view! {
        <Header overlays=overlays set_overlays=set_overlays />
        <PortfolioModal
            overlays=overlays
            set_overlays=set_overlays
            form=form
            set_form=set_form
        />
        <main>
            <Hero />
            <Features />
            <Trending />
        </main>
    }
}
