//! Reading a picked file into a base64 data URL for the photo upload.
//!
//! Bridges the callback-based `FileReader` API to async with a oneshot
//! channel. Requires a browser environment.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Read `file` as a `data:` URL (base64).
///
/// # Errors
///
/// Returns a displayable message if the browser refuses the read or the
/// result is not a string.
#[cfg(feature = "hydrate")]
pub async fn file_to_base64(file: &web_sys::File) -> Result<String, String> {
    let reader =
        web_sys::FileReader::new().map_err(|_| "file reader unavailable".to_owned())?;
    let (tx, rx) = futures::channel::oneshot::channel::<Result<String, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    // loadend fires for both success and failure; a failed read leaves a
    // null result behind.
    let onloadend = {
        let reader = reader.clone();
        let tx = Rc::clone(&tx);
        Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            let outcome = reader
                .result()
                .ok()
                .and_then(|v| v.as_string())
                .ok_or_else(|| "could not read file".to_owned());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(outcome);
            }
        }) as Box<dyn FnMut(web_sys::ProgressEvent)>)
    };
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));

    reader
        .read_as_data_url(file)
        .map_err(|_| "could not read file".to_owned())?;
    let outcome = rx
        .await
        .map_err(|_| "file read interrupted".to_owned())?;
    drop(onloadend);
    outcome
}
