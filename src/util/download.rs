//! Image download: fetch the bytes, wrap them in an object URL, and click
//! a synthetic anchor. Requires a browser environment.

/// Download `url` as `file_name`.
///
/// # Errors
///
/// Returns an error string if the fetch or any DOM step fails, or when not
/// running in a browser.
pub async fn save_image(url: &str, file_name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("fetch failed: {}", resp.status()));
        }
        let bytes = resp.binary().await.map_err(|e| e.to_string())?;

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
            .map_err(|_| "blob creation failed".to_owned())?;
        let object_url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "object url failed".to_owned())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "anchor creation failed".to_owned())?
            .dyn_into()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(&object_url);
        anchor.set_download(file_name);

        let body = document.body().ok_or_else(|| "no body".to_owned())?;
        body.append_child(&anchor).map_err(|_| "append failed".to_owned())?;
        anchor.click();
        let _ = body.remove_child(&anchor);
        let _ = web_sys::Url::revoke_object_url(&object_url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, file_name);
        Err("not available outside the browser".to_owned())
    }
}
