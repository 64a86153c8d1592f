// Button components
use leptos::*;

const ENABLED: &str = "bg-blue-500 text-white hover:bg-blue-600 transition";
const DISABLED: &str = "bg-gray-300 text-gray-500 cursor-not-allowed";

#[component]
pub fn PrimaryButton(
    #[prop(into)] text: String,
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || format!("px-4 py-2 rounded-md {}", if disabled.get() { DISABLED } else { ENABLED })
            disabled=move || disabled.get()
            on:click=move |_| on_click.call(())
        >
            {text}
        </button>
    }
}

#[component]
pub fn DangerButton(
    #[prop(into)] text: String,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="px-4 py-2 bg-red-500 text-white rounded-md hover:bg-red-600 transition"
            on:click=move |_| on_click.call(())
        >
            {text}
        </button>
    }
}

#[component]
pub fn SubmitButton(
    #[prop(into)] text: String,
    #[prop(into)] busy_text: String,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || busy.get()
            class=move || format!(
                "w-full py-2 px-4 rounded-md text-white font-semibold transition {}",
                if busy.get() { "bg-gray-400 cursor-not-allowed" } else { "bg-blue-500 hover:bg-blue-600" },
            )
        >
            {move || if busy.get() { busy_text.clone() } else { text.clone() }}
        </button>
    }
}
