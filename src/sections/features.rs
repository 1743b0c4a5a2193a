use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="features-grid">
                    <FeatureCard
                        icon="▶"
                        title="Video Showcase"
                        description="Create and share compelling video content of your projects in both short and long formats."
                    />
                    <FeatureCard
                        icon="✎"
                        title="Creator Tools"
                        description="Professional tools for video creation and comprehensive analytics dashboard."
                    />
                    <FeatureCard
                        icon="↗"
                        title="Analytics"
                        description="Track your content performance with detailed insights and metrics."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
