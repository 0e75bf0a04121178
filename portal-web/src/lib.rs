pub(crate) mod api;
pub(crate) mod base;
pub(crate) mod components;

pub mod app;

pub use api::FetchApi;
pub use base::state::GlobalState;
