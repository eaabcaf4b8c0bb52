// web_app/pages/gallery.rs - Gallery page component
//
// Loads the sheet once when the page mounts and keeps all UI state locally:
// search text, current page, expanded card and modal image.

use leptos::prelude::*;
use crate::web_app::model::{self, filter_gems, page_slice, Gem, PaginationPosition, ITEMS_PER_PAGE};
use crate::web_app::components::*;
use crate::web_app::server_fns::load_gems;

/// Heading shown on the gallery
pub const GALLERY_TITLE: &str = "MICreations Gemini Prompts";

/// Footer credit line
pub const FOOTER_TEXT: &str = "© MICHAEL TRAJE";

/// Main gallery page component
///
/// A failed load is logged and rendered exactly like an empty sheet.
#[component]
pub fn GalleryPage() -> impl IntoView {
    // UI state
    let query = RwSignal::new(String::new());
    let current_page = RwSignal::new(1_usize);
    let expanded_id = RwSignal::new(None::<String>);
    let modal_image = RwSignal::new(None::<String>);

    // Fetched once per mount; never refetched on its own
    let gallery = Resource::new(
        || (),
        |_| async move {
            match load_gems().await {
                Ok(gems) => gems,
                Err(e) => {
                    leptos::logging::error!("Failed to fetch sheet data: {}", e);
                    Vec::new()
                }
            }
        },
    );

    let gems = Signal::derive(move || gallery.get().unwrap_or_default());

    let filtered = Memo::new(move |_| filter_gems(&gems.get(), &query.get()));

    let total_pages = Signal::derive(move || {
        model::total_pages(filtered.with(|f| f.len()), ITEMS_PER_PAGE)
    });

    let page_gems: Signal<Vec<Gem>> = Signal::derive(move || {
        filtered.with(|f| page_slice(f, current_page.get(), ITEMS_PER_PAGE))
    });

    let on_image_click = Callback::new(move |src: String| {
        modal_image.set(Some(src));
    });

    let on_close_modal = Callback::new(move |()| {
        modal_image.set(None);
    });

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            // Header
            <header class="bg-blue-700 text-white py-6 shadow-md">
                <h1 class="text-3xl font-bold text-center tracking-wide">
                    {GALLERY_TITLE}
                </h1>
            </header>

            // Main content
            <main class="container mx-auto flex-1 p-6">
                <Suspense fallback=move || view! { <Loading /> }>
                    {move || {
                        match gallery.get() {
                            None => view! { <Loading /> }.into_any(),
                            Some(_) => view! {
                                <SearchBar query=query current_page=current_page />

                                <Pagination
                                    current_page=current_page
                                    total_pages=total_pages
                                    position=PaginationPosition::Top
                                />

                                <GemGrid
                                    gems=page_gems
                                    expanded_id=expanded_id
                                    on_image_click=on_image_click
                                />

                                <Pagination
                                    current_page=current_page
                                    total_pages=total_pages
                                    position=PaginationPosition::Bottom
                                />
                            }.into_any(),
                        }
                    }}
                </Suspense>
            </main>

            // Footer
            <footer class="bg-gray-800 text-gray-200 text-center py-4 mt-10">
                <p class="text-sm">{FOOTER_TEXT}</p>
            </footer>

            // Image modal
            {move || {
                modal_image.get().map(|src| view! {
                    <ImageModal src=src on_close=on_close_modal />
                })
            }}
        </div>
    }
}
