use leptos::*;
use crate::api::{ApiClient, UserDirectory};
use crate::auth::{init_auth, use_auth};
use crate::components::buttons::SubmitButton;
use crate::components::forms::TextInput;
use crate::components::layout::{Card, PageHeader};
use crate::components::notifications::InlineError;
use crate::pages::navigator;
use crate::state::LoginForm;
use crate::utils::run_effects;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = use_auth();
    let navigate = navigator();
    let form = create_rw_signal(LoginForm::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let client = client.clone();
        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = client.login(&credentials).await;
            let effects = form
                .try_update(|f| f.apply_login(result, auth.tokens.as_ref()))
                .unwrap_or_default();
            init_auth(&auth);
            run_effects(effects, navigate, || {});
        });
    };

    view! {
        <div class="flex items-center justify-center">
            <div class="w-full max-w-md">
                <PageHeader title="Sign in"/>
                <Card>
                    {move || form.with(|f| f.error().map(|err| view! { <InlineError message=err.to_string()/> }))}
                    <form class="space-y-4" on:submit=on_submit>
                        <TextInput
                            label="Email address"
                            name="email"
                            input_type="email"
                            placeholder="Email address"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=move |value: String| form.update(|f| f.email = value)
                        />
                        <TextInput
                            label="Password"
                            name="password"
                            input_type="password"
                            placeholder="Password"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=move |value: String| form.update(|f| f.password = value)
                        />
                        <SubmitButton
                            text="Sign in"
                            busy_text="Signing in..."
                            busy=Signal::derive(move || form.with(|f| f.is_loading()))
                        />
                    </form>
                </Card>
            </div>
        </div>
    }
}
