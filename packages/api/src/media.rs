//! Image upload through the media service.
//!
//! Uploads are multipart form posts built from raw file bytes, so this
//! module is browser-only; other targets get the usual stub.

use crate::client::ApiError;
use crate::models::UploadedImage;

/// `POST /media/upload` — returns the public URL of the stored image.
#[cfg(target_arch = "wasm32")]
pub async fn upload_image(
    file_name: &str,
    mime_type: &str,
    bytes: &[u8],
) -> Result<UploadedImage, ApiError> {
    use crate::client::{self, Envelope};
    use gloo_net::http::Request;
    use wasm_bindgen::JsValue;
    use web_sys::RequestCredentials;

    fn js_err(value: JsValue) -> ApiError {
        ApiError::Network(format!("{value:?}"))
    }

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;

    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename("file", &blob, file_name)
        .map_err(js_err)?;

    let response = Request::post(&client::url("/media/upload"))
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(crate::client::api_failure(response.status(), None));
    }

    let envelope: Envelope<UploadedImage> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn upload_image(
    _file_name: &str,
    _mime_type: &str,
    _bytes: &[u8],
) -> Result<UploadedImage, ApiError> {
    Err(ApiError::Unsupported)
}
