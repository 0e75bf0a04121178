use async_trait::async_trait;
use portal::{ApiError, Invoke, Method, PortalConfig};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Backend calls through the browser fetch api.
#[derive(Debug, Clone)]
pub struct FetchApi {
    config: PortalConfig,
}

impl FetchApi {
    pub fn new(config: PortalConfig) -> Self {
        Self { config }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(u16, String), JsValue> {
        let url = self.config.api_url(path);
        log::debug!("{} {}", method, url);
        let window = web_sys::window()
            .ok_or_else(|| JsValue::from_str("No window available"))?;

        let request_init = RequestInit::new();
        request_init.set_method(method.as_str());
        request_init.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        if let Some(body) = body {
            headers.set("Content-Type", "application/json")?;
            request_init.set_body(&JsValue::from_str(&body.to_string()));
        }
        request_init.set_headers(&headers);

        let request = Request::new_with_str_and_init(&url, &request_init)?;
        let response_js =
            JsFuture::from(window.fetch_with_request(&request)).await?;
        let response: Response = response_js.dyn_into()?;
        let text = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default();
        Ok((response.status(), text))
    }
}

#[async_trait(?Send)]
impl Invoke for FetchApi {
    async fn invoke(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let (status, text) = self
            .send(method, path, body)
            .await
            .map_err(|e| ApiError::Connection(js_error_text(&e)))?;
        decode_response(status, &text)
    }
}

fn js_error_text(error: &JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{:?}", error))
}

/// 2xx bodies are JSON (or empty). Anything else carries the error text,
/// either plain or as the `message` of a JSON error object.
fn decode_response(status: u16, text: &str) -> Result<Value, ApiError> {
    if (200..300).contains(&status) {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        return Ok(serde_json::from_str(text)?);
    }
    let message = serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
        })
        .unwrap_or_else(|| text.trim().to_string());
    Err(ApiError::Http(status, message))
}

#[cfg(test)]
mod tests {
    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    use super::*;

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_decode_success() {
        assert_eq!(decode_response(200, "").unwrap(), Value::Null);
        assert_eq!(
            decode_response(200, r#"["standard"]"#).unwrap(),
            serde_json::json!(["standard"])
        );
        assert!(matches!(
            decode_response(201, "not json"),
            Err(ApiError::Decode(_))
        ));
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn test_decode_error_text() {
        let err = decode_response(
            500,
            r#"{"code": 500, "message": "tenant already exists"}"#,
        )
        .unwrap_err();
        assert_eq!(err, ApiError::Http(500, "tenant already exists".into()));

        let err = decode_response(403, "forbidden\n").unwrap_err();
        assert_eq!(err.to_string(), "forbidden");
    }
}
