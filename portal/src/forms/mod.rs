mod form_error;

pub mod database_sink;
pub mod tenant;
pub mod tenant_spec;

pub use form_error::FormError;
