// web_app/components/gem.rs - Gem display components
//
// - GemImage: card image with a fallback when the file is missing
// - DescriptionAccordion: two-line clamp that expands in place
// - GemCard: one card in the grid
// - GemGrid: the grid for the current page, or the empty state

use leptos::prelude::*;
use crate::web_app::model::{Gem, FALLBACK_IMAGE};
use super::common::{Badge, EmptyState};

/// Card image resolved from the gem id
///
/// Switches to the placeholder image once the browser reports a load error.
#[component]
pub fn GemImage(
    /// Image path for this gem
    src: String,
    /// Alt text
    alt: String,
    /// Click handler (opens the modal)
    on_click: Callback<()>,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    let current_src = move || {
        if failed.get() {
            FALLBACK_IMAGE.to_string()
        } else {
            src.clone()
        }
    };

    view! {
        <img
            src=current_src
            alt=alt
            width="600"
            height="400"
            class="rounded-t-lg w-full h-[400px] object-cover cursor-pointer hover:opacity-90 transition"
            on:error=move |_| failed.set(true)
            on:click=move |_| on_click.run(())
        />
    }
}

/// Description text, clamped to two lines unless expanded
#[component]
pub fn DescriptionAccordion(
    text: String,
    expanded: Signal<bool>,
) -> impl IntoView {
    let class = move || {
        if expanded.get() {
            "text-gray-700 text-justify text-sm transition-all duration-300"
        } else {
            "text-gray-700 text-justify text-sm transition-all duration-300 line-clamp-2"
        }
    };

    view! {
        <p class=class>{text}</p>
    }
}

/// One gallery card
#[component]
pub fn GemCard(
    gem: Gem,
    /// Id of the expanded card, if any
    expanded_id: RwSignal<Option<String>>,
    /// Opens the modal with the given image path
    on_image_click: Callback<String>,
) -> impl IntoView {
    let image_src = gem.image_src();
    let modal_src = image_src.clone();
    let id = gem.id.clone();
    let toggle_id = gem.id.clone();

    let expanded = Signal::derive(move || expanded_id.get().as_deref() == Some(id.as_str()));

    let on_toggle = move |_| {
        expanded_id.update(|current| {
            *current = crate::web_app::model::toggle_expanded(current.as_deref(), &toggle_id);
        });
    };

    view! {
        <div class="flex flex-col bg-white border border-gray-200 rounded-xl shadow hover:shadow-lg transition">
            <GemImage
                src=image_src
                alt=gem.image_alt()
                on_click=Callback::new(move |()| on_image_click.run(modal_src.clone()))
            />

            <div class="p-5 flex flex-col gap-3">
                <h5 class="text-lg font-semibold text-gray-900">
                    {gem.name.clone()}
                </h5>

                <DescriptionAccordion text=gem.description.clone() expanded=expanded />

                <div class="flex items-center justify-between mt-auto">
                    <Badge>{gem.category.clone()}</Badge>

                    <button
                        type="button"
                        class="inline-flex items-center px-3 py-2 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 transition"
                        on:click=on_toggle
                    >
                        {move || if expanded.get() { "Show less" } else { "Read more" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Grid of cards for the current page
#[component]
pub fn GemGrid(
    /// Gems on the current page
    gems: Signal<Vec<Gem>>,
    expanded_id: RwSignal<Option<String>>,
    on_image_click: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
            <Show
                when=move || !gems.get().is_empty()
                fallback=|| view! { <EmptyState /> }
            >
                // Ids are not guaranteed unique, so the key includes the position
                <For
                    each=move || gems.get().into_iter().enumerate()
                    key=|(index, gem)| (*index, gem.id.clone())
                    children=move |(_, gem)| {
                        view! {
                            <GemCard
                                gem=gem
                                expanded_id=expanded_id
                                on_image_click=on_image_click
                            />
                        }
                    }
                />
            </Show>
        </div>
    }
}
