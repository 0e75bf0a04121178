use lazy_static::lazy_static;
use regex::Regex;

use super::form_error::FormError;
use super::tenant_spec::{TenantSpec, VolumeConfiguration, Zone};
use crate::api::error::ApiError;
use crate::api::invoke::Invoke;
use crate::api::mkube::create_tenant;
use crate::units::KubernetesFactor;
use crate::validation::{
    common_form_validation, ValidationErrors, ValidationField,
};

pub const FIX_ERRORS_MESSAGE: &str =
    "Please fix the errors in the form and try again";
const TENANT_NAME_MESSAGE: &str = "Name only can contain lowercase letters, \
                                   numbers and '-'. Min. Length: 3";
const VOLUMES_PER_SERVER_MESSAGE: &str =
    "Volumes per server must be a whole number";

lazy_static! {
    static ref TENANT_NAME_PATTERN: Regex =
        Regex::new(r"^[a-z0-9-]{3,63}$").unwrap();
    static ref WHOLE_NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Owner of the create-tenant dialog.
pub trait TenantOwner {
    fn close_modal_and_refresh(&self, reload_data: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenantField {
    TenantName,
    Image,
    ServiceName,
    VolumesPerServer,
    VolumeSize,
    StorageClass,
    MountPath,
    AccessKey,
    SecretKey,
}

impl TenantField {
    /// Input id, also the key of its validation error.
    pub fn key(&self) -> &'static str {
        match self {
            TenantField::TenantName => "tenant-name",
            TenantField::Image => "image",
            TenantField::ServiceName => "service_name",
            TenantField::VolumesPerServer => "volumes_per_server",
            TenantField::VolumeSize => "volume_size",
            TenantField::StorageClass => "storage_class",
            TenantField::MountPath => "mount_path",
            TenantField::AccessKey => "access_key",
            TenantField::SecretKey => "secret_key",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TenantField::TenantName => "Tenant Name",
            TenantField::Image => "MinIO Image",
            TenantField::ServiceName => "Service Name",
            TenantField::VolumesPerServer => "Volumes per Server",
            TenantField::VolumeSize => "Size",
            TenantField::StorageClass => "Storage Class",
            TenantField::MountPath => "Mount Path",
            TenantField::AccessKey => "Access Key",
            TenantField::SecretKey => "Secret Key",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            TenantField::TenantName
                | TenantField::VolumesPerServer
                | TenantField::VolumeSize
        )
    }
}

/// State of the "create tenant" dialog.
///
/// Submission runs in two steps so the request can be awaited outside of
/// the state: [`TenantForm::begin_submit`] validates and produces the
/// request body, [`TenantForm::finish_submit`] takes the backend result.
#[derive(Debug, Clone)]
pub struct TenantForm {
    tenant_name: String,
    image: String,
    service_name: String,
    zones: Vec<Zone>,
    volumes_per_server: String,
    volume_configuration: VolumeConfiguration,
    size_factor: KubernetesFactor,
    mount_path: String,
    access_key: String,
    secret_key: String,
    enable_mcs: bool,
    enable_ssl: bool,
    storage_classes: Vec<String>,
    validation_errors: ValidationErrors,
    error: String,
    state: SubmitState,
}

impl Default for TenantForm {
    fn default() -> Self {
        Self {
            tenant_name: String::new(),
            image: String::new(),
            service_name: String::new(),
            zones: Vec::new(),
            volumes_per_server: "0".to_string(),
            volume_configuration: VolumeConfiguration::default(),
            size_factor: KubernetesFactor::default(),
            mount_path: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            enable_mcs: false,
            enable_ssl: false,
            storage_classes: Vec::new(),
            validation_errors: ValidationErrors::new(),
            error: String::new(),
            state: SubmitState::Idle,
        }
    }
}

impl TenantForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: TenantField) -> &str {
        match field {
            TenantField::TenantName => &self.tenant_name,
            TenantField::Image => &self.image,
            TenantField::ServiceName => &self.service_name,
            TenantField::VolumesPerServer => &self.volumes_per_server,
            TenantField::VolumeSize => &self.volume_configuration.size,
            TenantField::StorageClass => {
                &self.volume_configuration.storage_class
            }
            TenantField::MountPath => &self.mount_path,
            TenantField::AccessKey => &self.access_key,
            TenantField::SecretKey => &self.secret_key,
        }
    }

    /// Store an edit and drop the error shown for that field.
    pub fn set<S: Into<String>>(&mut self, field: TenantField, value: S) {
        let value = value.into();
        match field {
            TenantField::TenantName => self.tenant_name = value,
            TenantField::Image => self.image = value,
            TenantField::ServiceName => self.service_name = value,
            TenantField::VolumesPerServer => self.volumes_per_server = value,
            TenantField::VolumeSize => self.volume_configuration.size = value,
            TenantField::StorageClass => {
                self.volume_configuration.storage_class = value
            }
            TenantField::MountPath => self.mount_path = value,
            TenantField::AccessKey => self.access_key = value,
            TenantField::SecretKey => self.secret_key = value,
        }
        self.validation_errors.remove(field.key());
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn set_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
    }

    pub fn size_factor(&self) -> KubernetesFactor {
        self.size_factor
    }

    pub fn set_size_factor(&mut self, factor: KubernetesFactor) {
        self.size_factor = factor;
    }

    pub fn enable_mcs(&self) -> bool {
        self.enable_mcs
    }

    pub fn set_enable_mcs(&mut self, enabled: bool) {
        self.enable_mcs = enabled;
    }

    pub fn enable_ssl(&self) -> bool {
        self.enable_ssl
    }

    pub fn set_enable_ssl(&mut self, enabled: bool) {
        self.enable_ssl = enabled;
    }

    pub fn storage_classes(&self) -> &[String] {
        &self.storage_classes
    }

    pub fn field_error(&self, field: TenantField) -> Option<&str> {
        self.validation_errors.get(field.key()).map(|s| s.as_str())
    }

    /// Message shown on top of the form, empty when there is none.
    pub fn error_message(&self) -> &str {
        &self.error
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Result of the storage-class lookup done when the dialog opens. The
    /// first class becomes the selection. A failed lookup only gets logged.
    pub fn apply_storage_classes(
        &mut self,
        result: Result<Option<Vec<String>>, ApiError>,
    ) {
        match result {
            Ok(classes) => {
                self.storage_classes = classes.unwrap_or_default();
                self.volume_configuration.storage_class = self
                    .storage_classes
                    .first()
                    .cloned()
                    .unwrap_or_default();
            }
            Err(err) => {
                log::warn!("Unable to fetch storage classes: {}", err);
            }
        }
    }

    fn validation_fields(&self) -> Vec<ValidationField> {
        vec![
            ValidationField::new(TenantField::TenantName.key(), &self.tenant_name)
                .required(true)
                .pattern(TENANT_NAME_PATTERN.clone())
                .pattern_message(TENANT_NAME_MESSAGE),
            ValidationField::new(TenantField::Image.key(), &self.image),
            ValidationField::new(
                TenantField::ServiceName.key(),
                &self.service_name,
            ),
            ValidationField::new(
                TenantField::VolumesPerServer.key(),
                &self.volumes_per_server,
            )
            .required(true)
            .pattern(WHOLE_NUMBER_PATTERN.clone())
            .pattern_message(VOLUMES_PER_SERVER_MESSAGE),
            ValidationField::new(
                TenantField::VolumeSize.key(),
                &self.volume_configuration.size,
            )
            .required(true),
            ValidationField::new(TenantField::AccessKey.key(), &self.access_key),
            ValidationField::new(TenantField::SecretKey.key(), &self.secret_key),
        ]
    }

    /// Idle -> Submitting. Validates the form and returns the request body.
    /// On validation failure the form is back to Idle with the field errors
    /// and a general message set.
    pub fn begin_submit(&mut self) -> Result<TenantSpec, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.state = SubmitState::Submitting;

        let zones: Vec<Zone> = self
            .zones
            .iter()
            .filter(|zone| !zone.name.is_empty())
            .cloned()
            .collect();

        let mut errors = common_form_validation(&self.validation_fields());
        let volumes_per_server = match self.volumes_per_server.parse::<u32>() {
            Ok(count) => count,
            Err(_) => {
                errors
                    .entry(TenantField::VolumesPerServer.key().to_string())
                    .or_insert_with(|| VOLUMES_PER_SERVER_MESSAGE.to_string());
                0
            }
        };
        self.validation_errors = errors.clone();

        if !errors.is_empty() {
            log::debug!("tenant form invalid: {:?}", errors);
            self.state = SubmitState::Idle;
            self.error = FIX_ERRORS_MESSAGE.to_string();
            return Err(FormError::ValidationError(errors));
        }

        // the service always carries the tenant name, the service name
        // input is not sent
        Ok(TenantSpec {
            name: self.tenant_name.clone(),
            service_name: self.tenant_name.clone(),
            image: self.image.clone(),
            enable_ssl: self.enable_ssl,
            enable_mcs: self.enable_mcs,
            access_key: self.access_key.clone(),
            secret_key: self.secret_key.clone(),
            volumes_per_server,
            volume_configuration: VolumeConfiguration {
                size: format!(
                    "{}{}",
                    self.volume_configuration.size, self.size_factor
                ),
                storage_class: self.volume_configuration.storage_class.clone(),
            },
            mount_path: self.mount_path.clone(),
            zones,
        })
    }

    /// Submitting -> Idle. Returns true when the request succeeded and the
    /// dialog should close with a refresh.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> bool {
        self.state = SubmitState::Idle;
        match result {
            Ok(()) => {
                self.error.clear();
                true
            }
            Err(err) => {
                log::error!("Unable to create tenant: {}", err);
                self.error = err.to_string();
                false
            }
        }
    }

    /// Run a whole submission against `api`, closing the dialog through
    /// `owner` on success.
    pub async fn submit(
        &mut self,
        api: &dyn Invoke,
        owner: &dyn TenantOwner,
    ) -> Result<(), FormError> {
        let spec = self.begin_submit()?;
        let result = create_tenant(api, &spec).await;
        let failure = result.as_ref().err().map(|err| err.to_string());
        if self.finish_submit(result) {
            owner.close_modal_and_refresh(true);
        }
        match failure {
            Some(msg) => Err(FormError::SubmitError(msg)),
            None => Ok(()),
        }
    }

    pub fn cancel(&mut self, owner: &dyn TenantOwner) {
        self.error.clear();
        owner.close_modal_and_refresh(false);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::api::mkube::tests::FakeApi;
    use crate::api::mkube::TENANTS_PATH;
    use crate::validation::REQUIRED_MESSAGE;

    #[derive(Default)]
    struct RecordingOwner {
        closed: RefCell<Vec<bool>>,
    }

    impl TenantOwner for RecordingOwner {
        fn close_modal_and_refresh(&self, reload_data: bool) {
            self.closed.borrow_mut().push(reload_data);
        }
    }

    fn valid_form() -> TenantForm {
        let mut form = TenantForm::new();
        form.set(TenantField::TenantName, "tenant-1");
        form.set(TenantField::VolumesPerServer, "4");
        form.set(TenantField::VolumeSize, "100");
        form
    }

    #[test]
    fn test_empty_zone_names_are_dropped() {
        let mut form = valid_form();
        form.set_zones(vec![Zone::new("", 2), Zone::new("zone-1", 4)]);
        let spec = form.begin_submit().unwrap();
        assert_eq!(spec.zones, vec![Zone::new("zone-1", 4)]);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_volume_size_carries_unit() {
        let mut form = valid_form();
        let spec = form.begin_submit().unwrap();
        assert_eq!(spec.volume_configuration.size, "100Gi");

        let mut form = valid_form();
        form.set_size_factor(KubernetesFactor::Ti);
        let spec = form.begin_submit().unwrap();
        assert_eq!(spec.volume_configuration.size, "100Ti");
        assert_eq!(spec.volumes_per_server, 4);
    }

    #[test]
    fn test_service_name_is_tenant_name() {
        let mut form = valid_form();
        assert_eq!(form.begin_submit().unwrap().service_name, "tenant-1");

        let mut form = valid_form();
        form.set(TenantField::ServiceName, "other-svc");
        assert_eq!(form.value(TenantField::ServiceName), "other-svc");
        let spec = form.begin_submit().unwrap();
        assert_eq!(spec.name, "tenant-1");
        assert_eq!(spec.service_name, "tenant-1");
    }

    #[test]
    fn test_validation_failure_returns_to_idle() {
        let mut form = TenantForm::new();
        form.set(TenantField::TenantName, "AB");
        form.set(TenantField::VolumesPerServer, "");

        let err = form.begin_submit().unwrap_err();
        let errors = match err {
            FormError::ValidationError(errors) => errors,
            other => panic!("unexpected error: {:?}", other),
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["tenant-name"], TENANT_NAME_MESSAGE);
        assert_eq!(errors["volumes_per_server"], REQUIRED_MESSAGE);
        assert_eq!(errors["volume_size"], REQUIRED_MESSAGE);
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.error_message(), FIX_ERRORS_MESSAGE);
        assert_eq!(
            form.field_error(TenantField::TenantName),
            Some(TENANT_NAME_MESSAGE)
        );
    }

    #[test]
    fn test_non_numeric_volumes_per_server() {
        let mut form = valid_form();
        form.set(TenantField::VolumesPerServer, "four");
        assert!(form.begin_submit().is_err());
        assert_eq!(
            form.field_error(TenantField::VolumesPerServer),
            Some(VOLUMES_PER_SERVER_MESSAGE)
        );

        // digits only, but out of range
        form.set(TenantField::VolumesPerServer, "99999999999");
        assert!(form.begin_submit().is_err());
        assert!(form.field_error(TenantField::VolumesPerServer).is_some());
    }

    #[test]
    fn test_edit_clears_only_that_field_error() {
        let mut form = TenantForm::new();
        form.set(TenantField::VolumeSize, "");
        assert!(form.begin_submit().is_err());
        assert!(form.field_error(TenantField::TenantName).is_some());
        assert!(form.field_error(TenantField::VolumeSize).is_some());

        form.set(TenantField::TenantName, "x");
        assert!(form.field_error(TenantField::TenantName).is_none());
        assert!(form.field_error(TenantField::VolumeSize).is_some());
    }

    #[test]
    fn test_second_submit_is_refused() {
        let mut form = valid_form();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
        assert!(form.finish_submit(Ok(())));
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn test_finish_submit_failure_keeps_message() {
        let mut form = valid_form();
        form.begin_submit().unwrap();
        let closed = form.finish_submit(Err(ApiError::Http(
            500,
            "tenant exists".to_string(),
        )));
        assert!(!closed);
        assert_eq!(form.error_message(), "tenant exists");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_storage_classes() {
        let mut form = TenantForm::new();
        form.apply_storage_classes(Ok(Some(vec![
            "standard".to_string(),
            "fast".to_string(),
        ])));
        assert_eq!(form.storage_classes().len(), 2);
        assert_eq!(form.value(TenantField::StorageClass), "standard");

        form.apply_storage_classes(Err(ApiError::Connection("down".into())));
        assert_eq!(form.storage_classes().len(), 2);

        form.apply_storage_classes(Ok(None));
        assert!(form.storage_classes().is_empty());
        assert_eq!(form.value(TenantField::StorageClass), "");
    }

    #[tokio::test]
    async fn test_submit_success_closes_with_refresh() {
        let api = FakeApi::default();
        let owner = RecordingOwner::default();
        let mut form = valid_form();
        form.set_zones(vec![Zone::new("", 1), Zone::new("zone-1", 4)]);
        form.apply_storage_classes(Ok(Some(vec!["standard".to_string()])));
        form.set_enable_ssl(true);

        form.submit(&api, &owner).await.unwrap();

        assert_eq!(*owner.closed.borrow(), vec![true]);
        assert_eq!(form.error_message(), "");
        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, TENANTS_PATH);
        let body = calls[0].2.as_ref().unwrap();
        assert_eq!(body["zones"], json!([{"name": "zone-1", "servers": 4}]));
        assert_eq!(
            body["volume_configuration"],
            json!({"size": "100Gi", "storage_class": "standard"})
        );
        assert_eq!(body["enable_ssl"], true);
    }

    #[tokio::test]
    async fn test_submit_invalid_makes_no_call() {
        let api = FakeApi::default();
        let owner = RecordingOwner::default();
        let mut form = TenantForm::new();

        let result = form.submit(&api, &owner).await;
        assert!(matches!(result, Err(FormError::ValidationError(_))));
        assert!(api.calls.borrow().is_empty());
        assert!(owner.closed.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_surfaces_error() {
        let api = FakeApi::with_responses(vec![Err(ApiError::Http(
            400,
            "zone has no servers".to_string(),
        ))]);
        let owner = RecordingOwner::default();
        let mut form = valid_form();

        let result = form.submit(&api, &owner).await;
        assert_eq!(
            result,
            Err(FormError::SubmitError("zone has no servers".to_string()))
        );
        assert_eq!(form.error_message(), "zone has no servers");
        assert_eq!(form.state(), SubmitState::Idle);
        assert!(owner.closed.borrow().is_empty());
    }

    #[test]
    fn test_cancel() {
        let owner = RecordingOwner::default();
        let mut form = TenantForm::new();
        assert!(form.begin_submit().is_err());
        form.cancel(&owner);
        assert_eq!(form.error_message(), "");
        assert_eq!(*owner.closed.borrow(), vec![false]);
    }
}
