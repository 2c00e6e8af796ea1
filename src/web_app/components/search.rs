// web_app/components/search.rs - Search form
//
// A single text input named `searchQuery` and a submit button. The raw
// value is handed to the parent; trimming and validation belong to the
// controller.

use leptos::prelude::*;

/// Search form component
#[component]
pub fn SearchForm(
    /// Receives the raw input value on submit
    on_search: Callback<String>,
) -> impl IntoView {
    // Local state for the input (allows typing without triggering search on every keystroke)
    let local_query = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(local_query.get_untracked());
    };

    view! {
        <form on:submit=on_submit class="search-form w-full">
            <div class="flex gap-4">
                <div class="relative flex-1">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="text"
                        name="searchQuery"
                        autocomplete="off"
                        autofocus=true
                        placeholder="Search images..."
                        class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                               outline-none text-lg transition-all shadow-sm"
                        prop:value=move || local_query.get()
                        on:input=move |ev| local_query.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="px-8 py-3 bg-blue-600 text-white rounded-xl \
                           hover:bg-blue-700 active:bg-blue-800 transition-all \
                           font-semibold shadow-md hover:shadow-lg"
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}
