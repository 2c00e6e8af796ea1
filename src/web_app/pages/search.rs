// web_app/pages/search.rs - Search page component
//
// Composes the search form, gallery, load-more button, toasts and lightbox
// around one `SearchController` held in a signal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::web_app::components::*;
use crate::web_app::controller::{FetchRequest, ImageSource, SearchController};
use crate::web_app::server_fns::ServerFnSource;

/// Main search page component
///
/// Every interaction mutates the controller; fetches run in the background
/// and their results are applied when they land. Overlapping requests are
/// not cancelled, the controller drops responses from superseded searches.
#[component]
pub fn SearchPage() -> impl IntoView {
    let controller = RwSignal::new(SearchController::new());

    let dispatch = move |request: Option<FetchRequest>| {
        let Some(request) = request else { return };
        spawn_local(async move {
            let result = ServerFnSource.fetch(&request.query, request.page).await;
            controller.update(|c| {
                c.apply_response(&request, result);
            });
        });
    };

    let on_search = Callback::new(move |raw: String| {
        dispatch(controller.try_update(|c| c.submit_search(&raw)).flatten());
    });

    let on_load_more = Callback::new(move |()| {
        dispatch(controller.try_update(|c| c.load_more()).flatten());
    });

    let on_dismiss = Callback::new(move |id: u64| {
        controller.update(|c| c.dismiss(id));
    });

    // Lightbox handlers
    let on_open = Callback::new(move |index: usize| {
        controller.update(|c| c.lightbox_mut().open(index));
    });
    let on_close = Callback::new(move |()| {
        controller.update(|c| c.lightbox_mut().close());
    });
    let on_next = Callback::new(move |()| {
        controller.update(|c| c.lightbox_mut().next());
    });
    let on_prev = Callback::new(move |()| {
        controller.update(|c| c.lightbox_mut().prev());
    });

    // Derived signals for the view
    let cards = Signal::derive(move || controller.with(|c| c.cards().to_vec()));
    let load_more_visible = Signal::derive(move || controller.with(|c| c.load_more_visible()));
    let loading = Signal::derive(move || controller.with(|c| c.is_loading()));
    let notifications = Signal::derive(move || controller.with(|c| c.notifications().to_vec()));
    let lightbox_current = Signal::derive(move || {
        controller.with(|c| {
            let index = c.lightbox().current()?;
            let card = c.lightbox_card()?.clone();
            Some((index, c.lightbox().len(), card))
        })
    });
    let status_line = Signal::derive(move || {
        controller.with(|c| {
            let session = c.session();
            (!c.cards().is_empty()).then(|| {
                format!(
                    "\"{}\": {} images, page {} of {}",
                    session.query,
                    c.cards().len(),
                    session.page,
                    session.total_pages
                )
            })
        })
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center gap-6">
                    <h1 class="text-xl font-bold text-blue-600 whitespace-nowrap">"Image Search"</h1>
                    <SearchForm on_search />
                </div>
            </header>

            // Main content
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <p class="text-sm text-gray-500 mb-4">{move || status_line.get()}</p>

                <Gallery cards on_open />

                <Show when=move || loading.get()>
                    <Loading message="Fetching images..." />
                </Show>

                <LoadMoreButton visible=load_more_visible on_click=on_load_more />
            </main>

            // Footer
            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"Images provided by Pixabay."</p>
                </div>
            </footer>

            <Toasts notifications on_dismiss />

            <LightboxOverlay current=lightbox_current on_close on_next on_prev />
        </div>
    }
}
