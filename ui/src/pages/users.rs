// Users list and edit pages
use leptos::*;
use leptos_router::*;
use crate::api::{ApiClient, UserDirectory};
use crate::auth::use_auth;
use crate::components::buttons::{PrimaryButton, SubmitButton};
use crate::components::cards::UserCard;
use crate::components::forms::TextInput;
use crate::components::layout::{Card, EmptyState, LoadingSpinner, PageHeader};
use crate::components::notifications::InlineError;
use crate::pages::navigator;
use crate::state::list::parse_page;
use crate::state::{EditUser, Effect, UsersList};
use crate::types::{DraftField, UserId};
use crate::utils::run_effects;

fn fetch_page(client: ApiClient, list: RwSignal<UsersList>, page: u32) {
    spawn_local(async move {
        let result = client.list_users(page).await;
        let effects = list.try_update(|l| l.apply_fetch(result)).unwrap_or_default();
        run_effects(effects, |_| {}, || {});
    });
}

fn delete_user(client: ApiClient, list: RwSignal<UsersList>, id: UserId) {
    spawn_local(async move {
        let result = client.delete_user(id).await;
        let effects = list.try_update(|l| l.apply_delete(id, result)).unwrap_or_default();
        let page = list.with_untracked(|l| l.page());
        run_effects(effects, |_| {}, || fetch_page(client.clone(), list, page));
    });
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = use_auth();
    let navigate = navigator();
    let query = use_query_map();

    let page = create_memo(move |_| query.with(|q| parse_page(q.get("page").map(String::as_str))));
    let list = create_rw_signal(UsersList::new(page.get_untracked()));

    // Runs on mount and whenever the `page` query changes.
    create_effect({
        let client = client.clone();
        let navigate = navigate.clone();
        move |_| {
            let page = page.get();
            list.update(|l| l.set_page(page));

            match list.with_untracked(|l| l.guard(auth.tokens.as_ref())) {
                Some(redirect) => run_effects(vec![redirect], navigate.clone(), || {}),
                None => fetch_page(client.clone(), list, page),
            }
        }
    });

    let go_to = {
        let navigate = navigate.clone();
        move |effect: Option<Effect>| run_effects(effect.into_iter().collect(), navigate.clone(), || {})
    };

    let on_edit = Callback::new({
        let go_to = go_to.clone();
        move |id: UserId| go_to(Some(list.with_untracked(|l| l.edit(id))))
    });
    let on_delete = Callback::new(move |id: UserId| delete_user(client.clone(), list, id));

    let on_previous = {
        let go_to = go_to.clone();
        move |_: ()| go_to(list.with_untracked(|l| l.previous_page()))
    };
    let on_next = move |_: ()| go_to(list.with_untracked(|l| l.next_page()));

    view! {
        <div class="container mx-auto">
            <PageHeader title="Users List"/>

            <div class="mb-6 flex justify-center">
                <input
                    type="text"
                    placeholder="Search by name or email"
                    class="px-4 py-2 border rounded-md shadow-sm w-full max-w-md"
                    prop:value=move || list.with(|l| l.query().to_string())
                    on:input=move |ev| list.update(|l| l.set_query(event_target_value(&ev)))
                />
            </div>

            {move || {
                let users = list.with(|l| l.visible());
                if users.is_empty() {
                    view! {
                        <EmptyState title="No users" description="Nothing on this page matches the search."/>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                            {users
                                .into_iter()
                                .map(|user| view! { <UserCard user=user on_edit=on_edit on_delete=on_delete/> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}

            <div class="flex justify-center items-center mt-8 space-x-4">
                <PrimaryButton
                    text="Previous"
                    on_click=on_previous
                    disabled=Signal::derive(move || !list.with(|l| l.can_go_back()))
                />
                <PrimaryButton
                    text="Next"
                    on_click=on_next
                    disabled=Signal::derive(move || !list.with(|l| l.can_go_forward()))
                />
            </div>
        </div>
    }
}

#[component]
pub fn EditUserPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = navigator();
    let params = use_params_map();

    let id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|id| id.parse::<UserId>().ok()))
    });
    let form = create_rw_signal(EditUser::new(id.get_untracked()));

    create_effect({
        let client = client.clone();
        move |_| {
            form.set(EditUser::new(id.get()));
            let Some(id) = form.try_update(|f| f.begin_load()).flatten() else {
                return;
            };

            let client = client.clone();
            spawn_local(async move {
                let result = client.get_user(id).await;
                form.update(|f| f.apply_loaded(result));
            });
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some((id, draft)) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = client.update_user(id, &draft).await;
            let effects = form.try_update(|f| f.apply_submitted(result)).unwrap_or_default();
            run_effects(effects, navigate, || {});
        });
    };

    let field = move |field: DraftField| Signal::derive(move || form.with(|f| f.draft().get(field).to_string()));
    let set = move |field: DraftField| move |value: String| form.update(|f| f.set_field(field, value));

    view! {
        <div class="flex items-center justify-center">
            <div class="w-full max-w-md">
                <PageHeader title="Edit User"/>
                <Card>
                    {move || form.with(|f| f.error().map(|err| view! { <InlineError message=err.to_string()/> }))}
                    <Show
                        when=move || !form.with(|f| f.is_loading())
                        fallback=|| view! { <LoadingSpinner label="Loading user details..."/> }
                    >
                        <form class="space-y-4" on:submit=on_submit.clone()>
                            <TextInput
                                label="First Name"
                                name="first_name"
                                required=true
                                value=field(DraftField::FirstName)
                                on_input=set(DraftField::FirstName)
                            />
                            <TextInput
                                label="Last Name"
                                name="last_name"
                                required=true
                                value=field(DraftField::LastName)
                                on_input=set(DraftField::LastName)
                            />
                            <TextInput
                                label="Email"
                                name="email"
                                input_type="email"
                                required=true
                                value=field(DraftField::Email)
                                on_input=set(DraftField::Email)
                            />
                            <SubmitButton
                                text="Update"
                                busy_text="Updating..."
                                busy=Signal::derive(move || form.with(|f| f.is_loading()))
                            />
                        </form>
                    </Show>
                </Card>
            </div>
        </div>
    }
}
