//! User Dashboard Component
//!
//! Owns the dashboard state and wires the form and list to the controller.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpUserApi;
use crate::components::{UserForm, UserList};
use crate::config::ApiConfig;
use crate::controller::DashboardController;
use crate::models::{UserDraft, UserRecord};
use crate::store::DashboardState;

type Controller = DashboardController<HttpUserApi, RwSignal<DashboardState>>;

/// Clear the success banner after `ttl_millis`, unless a newer one replaced it
async fn clear_success_later(controller: &Controller, ticket: Option<u64>, ttl_millis: u32) {
    if let Some(ticket) = ticket {
        TimeoutFuture::new(ttl_millis).await;
        controller.clear_success(ticket);
    }
}

#[component]
pub fn UserDashboard(
    /// Remote service settings (build-time defaults when omitted)
    #[prop(optional)]
    config: Option<ApiConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_else(ApiConfig::from_build_env);
    let ttl = config.success_ttl_millis();
    let state = RwSignal::new(DashboardState::new());
    let controller: Controller = DashboardController::new(Arc::new(HttpUserApi::new(config)), state);

    // Load users on mount
    let loader = controller.clone();
    Effect::new(move |_| {
        let loader = loader.clone();
        spawn_local(async move {
            loader.load().await;
        });
    });

    let on_submit = {
        let controller = controller.clone();
        Callback::new(move |draft: UserDraft| {
            let controller = controller.clone();
            spawn_local(async move {
                let ticket = controller.submit(draft).await;
                clear_success_later(&controller, ticket, ttl).await;
            });
        })
    };

    let on_delete = {
        let controller = controller.clone();
        Callback::new(move |id: u32| {
            let controller = controller.clone();
            spawn_local(async move {
                let ticket = controller.delete(id).await;
                clear_success_later(&controller, ticket, ttl).await;
            });
        })
    };

    let on_edit = {
        let controller = controller.clone();
        Callback::new(move |user: UserRecord| controller.begin_edit(user))
    };

    let on_cancel = Callback::new(move |_: ()| controller.cancel_edit());

    // Memos so unrelated state changes (banners) don't reseed the form
    let users = Memo::new(move |_| state.with(|s| s.users().to_vec()));
    let editing = Memo::new(move |_| state.with(|s| s.editing().cloned()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));
    let success = Memo::new(move |_| state.with(|s| s.success().map(str::to_string)));

    view! {
        <Show
            when=move || !state.with(DashboardState::is_loading)
            fallback=|| view! { <div class="loading">"Loading users..."</div> }
        >
            <div class="user-dashboard">
                {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}
                {move || success.get().map(|message| view! { <div class="success-message">{message}</div> })}

                <UserForm editing=editing on_submit=on_submit on_cancel=on_cancel />

                <UserList users=users on_edit=on_edit on_delete=on_delete />
            </div>
        </Show>
    }
}
