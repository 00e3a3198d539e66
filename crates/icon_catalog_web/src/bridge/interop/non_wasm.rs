fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_text(_url: &str) -> Result<String, String> {
    Err(unsupported())
}

pub async fn save_url_as_file(_url: &str, _file_name: &str) -> Result<(), String> {
    Err(unsupported())
}

pub async fn open_external_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}
