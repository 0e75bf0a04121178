use std::panic::{self, PanicInfo};

use leptos::{mount_to_body, view};
use portal::PortalConfig;
use portal_web::app::App;

const CONFIG_YAML: &str = include_str!("../portal.yaml");

fn custom_panic_hook(info: &PanicInfo) {
    // print panic message only - not entire stack trace
    let message = info.to_string();
    log::error!("{}", message);
}

pub fn main() {
    let loaded = PortalConfig::from_yaml(CONFIG_YAML);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    let level = config
        .log_level_filter()
        .ok()
        .and_then(|filter| filter.to_level())
        .unwrap_or(log::Level::Info);
    _ = console_log::init_with_level(level);
    if let Err(err) = loaded {
        log::error!("{}, using defaults", err);
    }

    if cfg!(debug_assertions) {
        console_error_panic_hook::set_once();
    } else {
        panic::set_hook(Box::new(custom_panic_hook));
    }
    mount_to_body(move || view! { <App config /> })
}
