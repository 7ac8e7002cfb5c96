//! User Dashboard Entry Point

use leptos::prelude::*;
use user_dashboard::app::App;
use user_dashboard::{config, logging};

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());
    log::info!("[APP] Mounting user dashboard");
    mount_to_body(App);
}
