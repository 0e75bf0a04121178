use leptos::*;
use portal::{ConfigOptionMap, PortalConfig};

use crate::components::{AddTenantModal, DatabaseSinkConfig};
use crate::GlobalState;

#[component]
pub fn App(config: PortalConfig) -> impl IntoView {
    provide_context(GlobalState::new(config));

    let (options, set_options) = create_signal(ConfigOptionMap::new());
    let (show_add_tenant, set_show_add_tenant) = create_signal(false);
    // bumped whenever a tenant got created
    let (refreshes, set_refreshes) = create_signal(0u32);

    let close_modal_and_refresh = move |reload_data: bool| {
        set_show_add_tenant.set(false);
        if reload_data {
            set_refreshes.update(|count| *count += 1);
        }
    };

    let options_text = move || {
        options.with(|options| {
            options
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect::<Vec<_>>()
                .join("\n")
        })
    };

    view! {
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <nav class="py-2 px-4 text-lg font-medium bg-black">
                <div class="text-4xl font-sans font-bold text-white tracking-widest">"Console"</div>
            </nav>
            <main class="py-4">
                <h2 class="text-2xl font-bold mb-2">"PostgreSQL Notification Target"</h2>
                <DatabaseSinkConfig on_change=move |map: ConfigOptionMap| {
                    set_options.set(map)
                } />
                <pre class="mt-2 p-2 bg-gray-100 font-mono">{options_text}</pre>

                <h2 class="text-2xl font-bold mt-6 mb-2">"Tenants"</h2>
                <button
                    class="px-4 py-2 rounded bg-blue-600 text-white"
                    on:click=move |_| set_show_add_tenant.set(true)
                >
                    "Create Tenant"
                </button>
                <span class="ml-4 text-gray-600">
                    {move || format!("Tenants created: {}", refreshes.get())}
                </span>
                <Show when=move || show_add_tenant.get()>
                    <AddTenantModal close_modal_and_refresh />
                </Show>
            </main>
        </div>
    }
}
