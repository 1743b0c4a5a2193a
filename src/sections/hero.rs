use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">"Elevate Your Design Practice"</h1>
                <p class="hero-description">
                    "The ultimate platform for architects, interior designers, and urban planners "
                    "to showcase their work and connect with clients."
                </p>
            </div>
        </section>
    }
}
