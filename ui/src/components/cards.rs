// User card shown in the list grid
use leptos::*;
use crate::components::buttons::{DangerButton, PrimaryButton};
use crate::types::{User, UserId};

#[component]
pub fn UserCard(
    user: User,
    #[prop(into)] on_edit: Callback<UserId>,
    #[prop(into)] on_delete: Callback<UserId>,
) -> impl IntoView {
    let id = user.id;
    let name = user.full_name();

    view! {
        <div class="bg-white shadow-md rounded-lg p-4 flex flex-col items-center">
            <img src=user.avatar alt=user.first_name class="w-20 h-20 rounded-full mb-4"/>
            <h3 class="text-lg font-semibold text-gray-800">{name}</h3>
            <p class="text-sm text-gray-600">{user.email}</p>
            <div class="flex mt-4 space-x-2">
                <PrimaryButton text="Edit" on_click=move |_: ()| on_edit.call(id)/>
                <DangerButton text="Delete" on_click=move |_: ()| on_delete.call(id)/>
            </div>
        </div>
    }
}
