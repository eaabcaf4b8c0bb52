// web_app/components/common.rs - Reusable UI components
//
// Small, composable pieces used across the gallery.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;

/// Loading indicator shown while the sheet is being fetched
#[component]
pub fn Loading(
    /// Optional message to display
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="text-center text-gray-500 text-lg font-medium animate-pulse">
                {message}
            </div>
        </div>
    }
}

/// Empty state for the grid
///
/// Used both when nothing matches and when the sheet could not be loaded.
#[component]
pub fn EmptyState(
    #[prop(default = "No results found.")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <p class="text-gray-500 text-center col-span-full">{message}</p>
    }
}

/// Pill-shaped category label
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="px-3 py-1 bg-gray-100 text-gray-700 text-xs rounded-full">
            {children()}
        </span>
    }
}

/// Runs `on_close` when `key` is Escape; returns whether it did
pub fn close_on_escape(key: &str, on_close: Callback<()>) -> bool {
    let closes = key == "Escape";
    if closes {
        on_close.run(());
    }
    closes
}

/// Full-size image overlay
///
/// Clicking the backdrop, the close button or pressing Escape closes it.
/// Clicks on the image itself are swallowed. Escape is heard on the window
/// while the modal is mounted, since focus stays on the page behind it.
#[component]
pub fn ImageModal(
    /// Image to show
    src: String,
    /// Callback when the modal should close
    on_close: Callback<()>,
    #[prop(default = "Full size image")]
    alt: &'static str,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        close_on_escape(&ev.key(), on_close);
    });
    on_cleanup(move || escape.remove());

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm"
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative bg-white rounded-xl overflow-hidden shadow-lg max-w-3xl w-full mx-4"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-3 right-3 bg-gray-800 text-white rounded-full px-2 py-1 text-sm hover:bg-red-600"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                <img
                    src=src
                    alt=alt
                    width="1200"
                    height="800"
                    class="w-full h-auto object-contain"
                />
            </div>
        </div>
    }
}
