//! User Dashboard App
//!
//! Static page chrome around the dashboard.

use leptos::prelude::*;

use crate::components::UserDashboard;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="App">
            <header class="App-header">
                <h1>"User Management Dashboard"</h1>
            </header>
            <main>
                <UserDashboard />
            </main>
        </div>
    }
}
