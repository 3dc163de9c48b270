//! Restaurant Admin Frontend Entry Point

use leptos::prelude::*;
use restaurant_admin_ui::app::App;
use restaurant_admin_ui::config::AppConfig;
use restaurant_admin_ui::logging;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    logging::init(config.log_level);
    log::info!("api base url: {}", config.api_base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
