use serde_json::Value;

use super::error::ApiError;
use super::invoke::{Invoke, Method};
use crate::forms::tenant_spec::TenantSpec;

pub const STORAGE_CLASSES_PATH: &str = "/api/v1/mkube/storage-classes";
pub const TENANTS_PATH: &str = "/api/v1/mkube/tenants";

/// Storage classes known to the cluster. The backend answers `null` when
/// there are none.
pub async fn list_storage_classes(
    api: &dyn Invoke,
) -> Result<Option<Vec<String>>, ApiError> {
    let response = api.invoke(Method::Get, STORAGE_CLASSES_PATH, None).await?;
    match response {
        Value::Null => Ok(None),
        value => Ok(Some(serde_json::from_value(value)?)),
    }
}

pub async fn create_tenant(
    api: &dyn Invoke,
    spec: &TenantSpec,
) -> Result<(), ApiError> {
    let body = serde_json::to_value(spec)?;
    api.invoke(Method::Post, TENANTS_PATH, Some(body)).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    /// Records every call and answers from a queue of canned responses.
    #[derive(Default)]
    pub struct FakeApi {
        pub calls: RefCell<Vec<(Method, String, Option<Value>)>>,
        pub responses: RefCell<VecDeque<Result<Value, ApiError>>>,
    }

    impl FakeApi {
        pub fn with_responses(
            responses: Vec<Result<Value, ApiError>>,
        ) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                responses: RefCell::new(responses.into()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Invoke for FakeApi {
        async fn invoke(
            &self,
            method: Method,
            path: &str,
            body: Option<Value>,
        ) -> Result<Value, ApiError> {
            self.calls
                .borrow_mut()
                .push((method, path.to_string(), body));
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }
    }

    #[tokio::test]
    async fn test_list_storage_classes() {
        let api = FakeApi::with_responses(vec![
            Ok(json!(["standard", "fast"])),
            Ok(Value::Null),
            Ok(json!({"unexpected": true})),
        ]);
        let classes = list_storage_classes(&api).await.unwrap();
        assert_eq!(
            classes,
            Some(vec!["standard".to_string(), "fast".to_string()])
        );
        assert_eq!(list_storage_classes(&api).await.unwrap(), None);
        assert!(matches!(
            list_storage_classes(&api).await,
            Err(ApiError::Decode(_))
        ));

        let calls = api.calls.borrow();
        assert_eq!(calls[0].0, Method::Get);
        assert_eq!(calls[0].1, STORAGE_CLASSES_PATH);
        assert!(calls[0].2.is_none());
    }

    #[tokio::test]
    async fn test_create_tenant_posts_spec() {
        let api = FakeApi::default();
        let spec = TenantSpec {
            name: "tenant-1".to_string(),
            ..Default::default()
        };
        create_tenant(&api, &spec).await.unwrap();

        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Method::Post);
        assert_eq!(calls[0].1, TENANTS_PATH);
        assert_eq!(calls[0].2.as_ref().unwrap()["name"], "tenant-1");
    }

    #[tokio::test]
    async fn test_create_tenant_propagates_error() {
        let api = FakeApi::with_responses(vec![Err(ApiError::Http(
            400,
            "invalid zone".to_string(),
        ))]);
        let err = create_tenant(&api, &TenantSpec::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid zone");
    }
}
