// web_app/components/search.rs - Search and paging controls
//
// - SearchBar: live text filter over name, description and category
// - Pagination: previous/next plus a windowed strip of page numbers

use leptos::prelude::*;
use crate::web_app::model::{page_markers, PageMarker, PaginationPosition};

/// Search box
///
/// Filters as the user types. Any change jumps back to the first page.
#[component]
pub fn SearchBar(
    /// Current search text
    query: RwSignal<String>,
    /// Current page (1-based), reset on input
    current_page: RwSignal<usize>,
    #[prop(default = "Search Prompts...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-6 flex flex-col sm:flex-row justify-between items-center gap-4">
            <input
                type="text"
                placeholder=placeholder
                class="w-full p-3 border border-gray-300 rounded-xl shadow-sm \
                       focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || query.get()
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    current_page.set(1);
                }
            />
        </div>
    }
}

/// Pagination strip
///
/// Renders nothing when everything fits on one page.
#[component]
pub fn Pagination(
    /// Current page (1-based)
    current_page: RwSignal<usize>,
    /// Number of pages for the filtered gems
    total_pages: Signal<usize>,
    #[prop(default = PaginationPosition::Top)]
    position: PaginationPosition,
) -> impl IntoView {
    let nav_class = "px-4 py-2 bg-white border border-gray-300 rounded-xl shadow-sm text-black \
                     hover:bg-gray-100 disabled:opacity-40 disabled:cursor-not-allowed transition";

    let can_go_prev = move || current_page.get() > 1;
    let can_go_next = move || current_page.get() < total_pages.get();

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class=format!(
                "flex flex-wrap justify-center items-center gap-2 {}",
                position.spacing_class(),
            )>
                <button
                    type="button"
                    class=nav_class
                    disabled=move || !can_go_prev()
                    on:click=move |_| {
                        if can_go_prev() {
                            current_page.update(|p| *p -= 1);
                        }
                    }
                >
                    "← Previous"
                </button>

                <div class="flex flex-wrap justify-center gap-1">
                    {move || {
                        page_markers(current_page.get(), total_pages.get())
                            .into_iter()
                            .map(|marker| match marker {
                                PageMarker::Page(page) => view! {
                                    <PageButton page=page current_page=current_page />
                                }.into_any(),
                                PageMarker::Ellipsis(_) => view! {
                                    <span class="w-10 h-10 flex items-center justify-center text-gray-400">
                                        "..."
                                    </span>
                                }.into_any(),
                            })
                            .collect_view()
                    }}
                </div>

                <button
                    type="button"
                    class=nav_class
                    disabled=move || !can_go_next()
                    on:click=move |_| {
                        if can_go_next() {
                            current_page.update(|p| *p += 1);
                        }
                    }
                >
                    "Next →"
                </button>
            </div>
        </Show>
    }
}

/// A single numbered page button
#[component]
fn PageButton(page: usize, current_page: RwSignal<usize>) -> impl IntoView {
    let class = move || {
        if current_page.get() == page {
            "w-10 h-10 flex items-center justify-center rounded-xl border transition shadow-sm text-black \
             bg-blue-100 border-blue-400 font-bold"
        } else {
            "w-10 h-10 flex items-center justify-center rounded-xl border transition shadow-sm text-black \
             bg-white border-gray-300 hover:bg-blue-50"
        }
    };

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| current_page.set(page)
        >
            {page}
        </button>
    }
}
