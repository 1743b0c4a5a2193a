use leptos::prelude::*;

use crate::state::Overlays;

#[component]
pub fn Header(
    overlays: ReadSignal<Overlays>,
    set_overlays: WriteSignal<Overlays>,
) -> impl IntoView {
    view! {
        <header class="header">
            <nav class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"◱"</span>
                    <span class="nav-title">"DesignHub"</span>
                </a>
                <div class="nav-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| set_overlays.update(|o| o.toggle_portfolio_modal())
                    >
                        "+ Create Portfolio"
                    </button>
                    <div class="nav-menu">
                        <button
                            class="btn btn-outline"
                            on:click=move |_| set_overlays.update(|o| o.toggle_quick_links())
                        >
                            "Quick Links ▾"
                        </button>
                        // Stays open until toggled again; no outside-click or
                        // Escape handling.
                        <Show when=move || overlays.get().quick_links>
                            <div class="quick-links">
                                <a href="#" class="quick-link">"Version Control System"</a>
                                <a href="#" class="quick-link">"Project Management"</a>
                            </div>
                        </Show>
                    </div>
                </div>
            </nav>
        </header>
    }
}
