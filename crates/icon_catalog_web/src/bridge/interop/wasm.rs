use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAnchorElement, Response, Url, Window};

fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable".to_string())
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

async fn fetch_ok(url: &str) -> Result<Response, String> {
    let value = await_promise(window()?.fetch_with_str(url)).await?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| "fetch resolved to a non-Response value".to_string())?;
    if !response.ok() {
        return Err(format!(
            "GET {url} failed with status {}",
            response.status()
        ));
    }
    Ok(response)
}

pub async fn fetch_text(url: &str) -> Result<String, String> {
    let response = fetch_ok(url).await?;
    let text = await_promise(response.text().map_err(js_error_to_string)?).await?;
    text.as_string()
        .ok_or_else(|| "response body is not text".to_string())
}

pub async fn save_url_as_file(url: &str, file_name: &str) -> Result<(), String> {
    let response = fetch_ok(url).await?;
    let blob: Blob = await_promise(response.blob().map_err(js_error_to_string)?)
        .await?
        .dyn_into()
        .map_err(|_| "response body is not a Blob".to_string())?;

    let object_url = Url::create_object_url_with_blob(&blob).map_err(js_error_to_string)?;
    let result = click_download_link(&object_url, file_name);
    let _ = Url::revoke_object_url(&object_url);
    result
}

fn click_download_link(href: &str, file_name: &str) -> Result<(), String> {
    let document = window()?
        .document()
        .ok_or_else(|| "document is unavailable".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error_to_string)?
        .dyn_into()
        .map_err(|_| "created element is not an anchor".to_string())?;
    link.set_href(href);
    link.set_download(file_name);

    body.append_child(&link).map_err(js_error_to_string)?;
    link.click();
    body.remove_child(&link).map_err(js_error_to_string)?;
    Ok(())
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    match window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(js_error_to_string)?
    {
        Some(_) => Ok(()),
        None => Err(format!("browser blocked opening {url}")),
    }
}
