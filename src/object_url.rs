//! Object URLs for attachments
//!
//! Turns a stored data URL back into a `blob:` URL the browser can open.
//! The URL is revoked when the `ObjectUrl` is dropped.

use board_core::codec;
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

fn js_err(err: JsValue) -> String {
    format!("{:?}", err)
}

impl ObjectUrl {
    /// Decode a data URL into a Blob of the recorded media type
    pub fn from_data_url(data_url: &str) -> Result<Self, String> {
        let decoded = codec::decode(data_url).map_err(|e| e.to_string())?;

        let bytes = js_sys::Uint8Array::from(decoded.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&decoded.media_type);

        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn open_in_new_tab(&self) -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        window
            .open_with_url_and_target(&self.url, "_blank")
            .map_err(js_err)?;
        Ok(())
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(err) = web_sys::Url::revoke_object_url(&self.url) {
            log::debug!("[FILES] Failed to revoke {}: {:?}", self.url, err);
        }
    }
}
