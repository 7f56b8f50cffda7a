use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt as _;

mod harmony;
mod legacy;

/// Send one request through `app` and decode the JSON reply. An empty body
/// decodes to `Value::Null`.
async fn call(
  app:    &Router,
  method: &str,
  uri:    &str,
  body:   Option<Value>,
) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(json) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(json.to_string())
    }
    None => Body::empty(),
  };
  let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();

  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let json = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, json)
}
