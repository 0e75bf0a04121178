pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod connection;
pub(crate) mod forms;
pub(crate) mod task;
pub(crate) mod units;
pub(crate) mod validation;

pub use api::error::ApiError;
pub use api::invoke::{Invoke, Method};
pub use api::mkube::{
    create_tenant, list_storage_classes, STORAGE_CLASSES_PATH, TENANTS_PATH,
};
pub use config::{ConfigError, PortalConfig};
pub use connection::{
    parse, serialize, ConnectionFieldSet, SslMode, CONNECTION_KEYS,
};
pub use forms::database_sink::{
    ConfigOptionMap, DatabaseSinkAction, DatabaseSinkField, DatabaseSinkForm,
    EventFormat, FieldKind, SubscriptionId,
};
pub use forms::tenant::{
    SubmitState, TenantField, TenantForm, TenantOwner, FIX_ERRORS_MESSAGE,
};
pub use forms::tenant_spec::{TenantSpec, VolumeConfiguration, Zone};
pub use forms::FormError;
pub use task::Lifetime;
pub use units::KubernetesFactor;
pub use validation::{
    common_form_validation, ValidationErrors, ValidationField,
};
