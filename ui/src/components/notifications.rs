// Inline notices
use leptos::*;

#[component]
pub fn InlineError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="rounded-md bg-red-50 p-4 mb-4">
            <p class="text-sm font-medium text-red-700 text-center">{message}</p>
        </div>
    }
}
