mod add_tenant;
mod database_sink_config;
mod inputs;
mod submission_status_view;
mod zones_selector;

pub use add_tenant::AddTenantModal;
pub use database_sink_config::DatabaseSinkConfig;
