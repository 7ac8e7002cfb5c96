//! User Form Component
//!
//! Controlled inputs for a blank draft or a copy of the user being edited.

use leptos::prelude::*;

use crate::models::{DraftField, UserDraft, UserRecord};

/// Form for adding a user, or editing `editing` when set
///
/// The form never clears itself after submit; the owner resets it by
/// changing `editing`.
#[component]
pub fn UserForm(
    #[prop(into)] editing: Signal<Option<UserRecord>>,
    #[prop(into)] on_submit: Callback<UserDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(UserDraft::default());

    // Reseed whenever the edit target changes
    Effect::new(move |_| {
        let seeded = editing.with(|user| user.as_ref().map(UserDraft::from).unwrap_or_default());
        draft.set(seeded);
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(draft.get());
    };

    let is_editing = move || editing.with(Option::is_some);

    view! {
        <div class="user-form-container">
            <h2>
                {move || match editing.get() {
                    Some(user) => format!("Edit User: {}", user.name),
                    None => "Add New User".to_string(),
                }}
            </h2>
            <form class="user-form" on:submit=handle_submit>
                {DraftField::ALL.into_iter().map(|field| view! {
                    <div class="form-group">
                        <label for=field.as_str()>{field.label()}</label>
                        <input
                            type=field.input_type()
                            id=field.as_str()
                            name=field.as_str()
                            required=true
                            prop:value=move || draft.with(|d| d.get(field).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.set(field, value));
                            }
                        />
                    </div>
                }).collect_view()}

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">
                        {move || if is_editing() { "Update User" } else { "Add User" }}
                    </button>
                    <Show when=is_editing>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
