use leptos::*;
use leptos_router::*;
use crate::auth::{sign_out, use_auth};
use crate::state::LOGIN_PATH;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let state = auth.state;
    let signed_in = move || state.get().is_authenticated;

    let on_sign_out = move |_: ev::MouseEvent| {
        sign_out(&auth);
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <div class="min-h-screen bg-gray-100">
            <header class="bg-white shadow-sm">
                <div class="container mx-auto px-4 py-3 flex justify-between items-center">
                    <a href="/users?page=1" class="text-lg font-semibold text-blue-600">"userdesk"</a>
                    <Show when=signed_in>
                        <button
                            type="button"
                            class="text-sm text-gray-600 hover:text-gray-900"
                            on:click=on_sign_out.clone()
                        >
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </header>
            <main class="py-8 px-4">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn PageHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="mb-6 text-center">
            <h2 class="text-3xl font-bold text-blue-600">{title}</h2>
        </div>
    }
}

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="bg-white shadow-md rounded-lg p-6">
            {children()}
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_string());

    view! {
        <div class="flex justify-center items-center py-8">
            <svg class="animate-spin -ml-1 mr-3 h-8 w-8 text-blue-600" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
            </svg>
            <span class="text-gray-600">{label}</span>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] title: String, #[prop(into)] description: String) -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <h3 class="mt-2 text-sm font-semibold text-gray-900">{title}</h3>
            <p class="mt-1 text-sm text-gray-500">{description}</p>
        </div>
    }
}
