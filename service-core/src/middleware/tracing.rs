use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach an `x-request-id` to the request and echo it on the response,
/// generating one when the client did not send any.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // A client-supplied id can contain bytes that are not a valid header
    // value; replace it with a generated one rather than dropping the header.
    let header_value = match HeaderValue::from_str(&request_id) {
        Ok(value) => value,
        Err(_) => {
            let generated = Uuid::new_v4().to_string();
            tracing::debug!(rejected = %request_id, "replacing malformed x-request-id");
            HeaderValue::from_str(&generated).expect("uuid v4 is always a valid header value")
        }
    };

    req.headers_mut()
        .insert(REQUEST_ID_HEADER, header_value.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, header_value);

    response
}
