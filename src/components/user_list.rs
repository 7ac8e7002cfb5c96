//! User List Component

use leptos::prelude::*;

use crate::models::UserRecord;

/// Grid of user cards with edit/delete actions
#[component]
pub fn UserList(
    #[prop(into)] users: Signal<Vec<UserRecord>>,
    #[prop(into)] on_edit: Callback<UserRecord>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show
            when=move || users.with(|u| !u.is_empty())
            fallback=|| view! {
                <div class="no-users">"No users found. Add a user to get started."</div>
            }
        >
            <div class="user-list">
                <h2>"User List"</h2>
                <div class="users-grid">
                    <For
                        each=move || users.get()
                        // Whole record as key so an in-place replacement re-renders its card
                        key=|user: &UserRecord| user.clone()
                        children=move |user: UserRecord| {
                            let id = user.id;
                            let href = user.website_href();
                            let edit_target = user.clone();
                            view! {
                                <div class="user-card">
                                    <div class="user-info">
                                        <h3>{user.name}</h3>
                                        <p><strong>"Email:"</strong> " " {user.email}</p>
                                        <p><strong>"Phone:"</strong> " " {user.phone}</p>
                                        <p>
                                            <strong>"Website:"</strong> " "
                                            <a href=href target="_blank" rel="noopener noreferrer">
                                                {user.website}
                                            </a>
                                        </p>
                                        <p><strong>"Company:"</strong> " " {user.company.name}</p>
                                    </div>
                                    <div class="user-actions">
                                        <button
                                            class="btn btn-edit"
                                            on:click=move |_| on_edit.run(edit_target.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn-delete"
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
