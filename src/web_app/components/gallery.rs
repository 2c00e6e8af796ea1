// web_app/components/gallery.rs - Gallery display components
//
// Components for displaying search hits including:
// - PhotoCard: thumbnail link plus Likes/Views/Comments/Downloads
// - Gallery: grid of cards in response order
// - LoadMoreButton: next-page affordance
// - LightboxOverlay: full-size viewer with keyboard navigation

use leptos::ev;
use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use crate::web_app::model::{Card, InfoItem, INFO_SEPARATOR};

/// One labeled metadata line
#[component]
pub fn InfoLine(item: InfoItem) -> impl IntoView {
    view! {
        <p class="info-item text-xs text-gray-600 text-center">
            <b class="text-gray-900">{item.label}</b>{INFO_SEPARATOR}{item.value}
        </p>
    }
}

/// Card for one hit
///
/// The link points at the full-size image; clicking it opens the lightbox
/// instead of navigating away.
#[component]
pub fn PhotoCard(
    card: Card,
    /// Position in the gallery, passed back on click
    index: usize,
    on_open: Callback<usize>,
) -> impl IntoView {
    let loading = if card.lazy { "lazy" } else { "eager" };

    view! {
        <div class="photo-card bg-white rounded-xl shadow-sm hover:shadow-lg border border-gray-100 overflow-hidden transition-shadow">
            <a
                href=card.href
                class="block h-48 overflow-hidden"
                on:click=move |ev| {
                    ev.prevent_default();
                    on_open.run(index);
                }
            >
                <img
                    src=card.thumbnail_src
                    alt=card.alt
                    loading=loading
                    class="w-full h-full object-cover hover:scale-105 transition-transform"
                />
            </a>
            <div class="info grid grid-cols-4 gap-1 px-2 py-3">
                {card.info.into_iter().map(|item| view! { <InfoLine item /> }).collect_view()}
            </div>
        </div>
    }
}

/// Grid of rendered cards
#[component]
pub fn Gallery(
    cards: Signal<Vec<Card>>,
    on_open: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="gallery grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
            <For
                each=move || cards.get().into_iter().enumerate()
                key=|(index, card)| (*index, card.href.clone())
                children=move |(index, card)| view! {
                    <PhotoCard card index on_open />
                }
            />
        </div>
    }
}

/// "Load more" button, shown while more pages remain
#[component]
pub fn LoadMoreButton(
    #[prop(into)]
    visible: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="flex justify-center mt-10">
                <button
                    type="button"
                    class="load-more px-8 py-3 bg-white border border-gray-200 rounded-xl shadow-sm \
                           hover:bg-gray-50 hover:border-gray-300 transition-all font-semibold text-gray-700"
                    on:click=move |_| on_click.run(())
                >
                    "Load more"
                </button>
            </div>
        </Show>
    }
}

/// Key handled by the lightbox
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Next,
    Prev,
}

impl LightboxKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxKey::Close),
            "ArrowRight" => Some(LightboxKey::Next),
            "ArrowLeft" => Some(LightboxKey::Prev),
            _ => None,
        }
    }

    /// Key to act on, given whether the lightbox is showing a card
    pub fn for_overlay(open: bool, key: &str) -> Option<Self> {
        if open {
            Self::from_key(key)
        } else {
            None
        }
    }
}

/// Full-size viewer for the open card
///
/// The caption is the card's alt text, like the gallery's accessible
/// description. Keys are read at window level so they work without focus.
#[component]
pub fn LightboxOverlay(
    /// Open card with its position and the gallery size
    current: Signal<Option<(usize, usize, Card)>>,
    on_close: Callback<()>,
    on_next: Callback<()>,
    on_prev: Callback<()>,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event: KeyboardEvent| {
        let open = current.with_untracked(|c| c.is_some());
        match LightboxKey::for_overlay(open, &event.key()) {
            Some(LightboxKey::Close) => on_close.run(()),
            Some(LightboxKey::Next) => on_next.run(()),
            Some(LightboxKey::Prev) => on_prev.run(()),
            None => {}
        }
    });
    on_cleanup(move || handle.remove());

    move || {
        current.get().map(|(index, len, card)| view! {
            <div
                class="sl-overlay fixed inset-0 z-50 flex items-center justify-center p-4"
            >
                // Backdrop
                <div
                    class="absolute inset-0 bg-gray-900/80 backdrop-blur-sm"
                    on:click=move |_| on_close.run(())
                ></div>

                <button
                    type="button"
                    class="absolute left-4 text-white text-4xl px-3 z-10"
                    title="Previous"
                    on:click=move |_| on_prev.run(())
                >
                    "‹"
                </button>

                <figure class="relative max-w-5xl max-h-[90vh] flex flex-col items-center">
                    <img
                        src=card.href.clone()
                        alt=card.alt.clone()
                        class="max-h-[80vh] rounded-lg shadow-2xl"
                    />
                    <figcaption class="mt-3 text-white text-sm text-center">
                        {card.alt.clone()}
                        <span class="ml-3 opacity-60">{format!("{}/{}", index + 1, len)}</span>
                    </figcaption>
                </figure>

                <button
                    type="button"
                    class="absolute right-4 text-white text-4xl px-3 z-10"
                    title="Next"
                    on:click=move |_| on_next.run(())
                >
                    "›"
                </button>

                <button
                    type="button"
                    class="absolute top-4 right-4 text-white text-2xl z-10"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </div>
        })
    }
}
