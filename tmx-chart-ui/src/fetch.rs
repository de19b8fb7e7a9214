//! Loading the daily CSV through the browser's `fetch`.
//!
//! The body is read as raw bytes so gzip-compressed sources go through the
//! same loader as plain CSV.

use anyhow::{anyhow, bail, Context};
use tmx_data::loader::load_bytes;
use tmx_data::LoadReport;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{:?}", err)
}

/// GET `url` and return the response body.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;
    if !response.ok() {
        bail!("{} returned HTTP {}", url, response.status());
    }
    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Fetch `url` and load the most recent `years_count` years from it.
pub async fn load_dataset(url: &str, years_count: usize) -> anyhow::Result<LoadReport> {
    let bytes = fetch_bytes(url)
        .await
        .with_context(|| format!("failed to fetch {}", url))?;
    log::info!("fetch: {} bytes from {}", bytes.len(), url);
    let report =
        load_bytes(&bytes, years_count).with_context(|| format!("failed to parse {}", url))?;
    Ok(report)
}
