//! Save server-generated CSV text as a browser download.
//!
//! Requires a browser environment; native builds report an error instead.

pub const EXPORT_FILENAME: &str = "parking_data.csv";

/// Offer `csv` to the user as `filename`.
///
/// # Errors
///
/// Returns a description of the failing DOM call.
pub fn save_csv(filename: &str, csv: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let err = |e: JsValue| format!("{e:?}");
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(csv));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(err)?;

        let anchor = document
            .create_element("a")
            .map_err(err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(err)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (filename, csv);
        Err("downloads require a browser".to_owned())
    }
}
