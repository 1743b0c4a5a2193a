use leptos::prelude::*;

#[component]
pub fn Trending() -> impl IntoView {
    view! {
        <section class="trending">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Trending in Your Domain"</h2>
                    <p class="section-description">
                        "Discover the latest trends and inspirations in architecture and design."
                    </p>
                </div>
                <div class="trending-grid">
                    <TrendingCard
                        image="https://images.unsplash.com/photo-1600585154340-be6161a56a0c"
                        alt="Modern Architecture"
                        title="Modern Minimalism in Architecture"
                        description="Exploring the beauty of minimalist design in modern architecture."
                    />
                    <TrendingCard
                        image="https://images.unsplash.com/photo-1618221195710-dd6b41faaea6"
                        alt="Interior Design"
                        title="Sustainable Interior Design"
                        description="Incorporating eco-friendly materials in interior spaces."
                    />
                    <TrendingCard
                        image="https://images.unsplash.com/photo-1507149833265-60c372daea22"
                        alt="Urban Planning"
                        title="Future of Urban Spaces"
                        description="Innovative approaches to urban planning and development."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TrendingCard(
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="trending-card">
            <img src=image alt=alt class="trending-image" />
            <div class="trending-body">
                <h3 class="trending-title">{title}</h3>
                <p class="trending-description">{description}</p>
            </div>
        </article>
    }
}
