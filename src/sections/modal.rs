use leptos::prelude::*;

use crate::data::{CATEGORIES, TEMPLATES};
use crate::state::{Overlays, PortfolioForm};

#[component]
pub fn PortfolioModal(
    overlays: ReadSignal<Overlays>,
    set_overlays: WriteSignal<Overlays>,
    form: ReadSignal<PortfolioForm>,
    set_form: WriteSignal<PortfolioForm>,
) -> impl IntoView {
    view! {
        <Show when=move || overlays.get().portfolio_modal>
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal-header">
                        <h2 class="modal-title">"Create Your Portfolio"</h2>
                        <button
                            class="modal-close"
                            on:click=move |_| set_overlays.update(|o| o.close_portfolio_modal())
                        >
                            "✕"
                        </button>
                    </div>

                    // The fields are required-marked but live outside any
                    // native <form>, so the browser never enforces them.
                    <div class="modal-fields">
                        <div class="field">
                            <label for="name" class="field-label">
                                "Portfolio Name"
                                <span class="field-required">"*"</span>
                            </label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                required=true
                                placeholder="E.g., Modern Residential Designs"
                                class="field-input"
                                prop:value=move || form.get().name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_form.update(|f| f.set_field("name", value));
                                }
                            />
                        </div>

                        <div class="field">
                            <label for="category" class="field-label">
                                "Category"
                                <span class="field-required">"*"</span>
                            </label>
                            <select
                                id="category"
                                name="category"
                                required=true
                                class="field-select"
                                prop:value=move || form.get().category
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_form.update(|f| f.set_field("category", value));
                                }
                            >
                                <option value="">"Select a category"</option>
                                {CATEGORIES
                                    .iter()
                                    .map(|&category| {
                                        view! { <option value=category>{category}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>

                        <div class="field">
                            <label for="images" class="field-label">"Upload Project Images"</label>
                            <div class="upload-box">
                                <div class="upload-glyph">"⬆"</div>
                                <div class="upload-cta">
                                    <label for="images" class="upload-trigger">
                                        "Upload files"
                                        // The 10MB limit is a hint only; nothing
                                        // checks the selected files.
                                        <input
                                            id="images"
                                            name="images"
                                            type="file"
                                            class="sr-only"
                                            multiple=true
                                            accept=".jpg,.png,.jpeg"
                                        />
                                    </label>
                                    " or drag and drop"
                                </div>
                                <p class="upload-hint">"PNG, JPG, JPEG up to 10MB"</p>
                            </div>
                        </div>

                        <div class="field">
                            <label for="description" class="field-label">"Description"</label>
                            <textarea
                                id="description"
                                name="description"
                                rows="4"
                                placeholder="Describe your project, key highlights, and unique design elements."
                                class="field-input"
                                prop:value=move || form.get().description
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_form.update(|f| f.set_field("description", value));
                                }
                            ></textarea>
                        </div>
                    </div>

                    <div class="modal-templates">
                        <h3 class="templates-title">"Choose a Portfolio Template"</h3>

                        // Decorative affordance, wired to nothing.
                        <div class="ai-option">
                            <button class="btn btn-ai">"✦ Create with AI"</button>
                            <p class="ai-caption">
                                "Let AI generate a unique portfolio layout based on your content"
                            </p>
                        </div>

                        <div class="template-grid">
                            {TEMPLATES
                                .iter()
                                .map(|template| {
                                    view! {
                                        <TemplateCard
                                            name=template.name
                                            image=template.image
                                            description=template.description
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="modal-actions">
                        <button
                            class="btn btn-muted"
                            on:click=move |_| set_overlays.update(|o| o.close_portfolio_modal())
                        >
                            "Cancel"
                        </button>
                        // Intentionally unwired: submitting neither closes the
                        // modal nor touches the form.
                        <button class="btn btn-submit">"Create Portfolio"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Hover affordance only; selecting a template binds no handler.
#[component]
fn TemplateCard(
    name: &'static str,
    image: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="template-card">
            <img src=image alt=name class="template-image" />
            <h4 class="template-name">{name}</h4>
            <p class="template-description">{description}</p>
        </div>
    }
}
