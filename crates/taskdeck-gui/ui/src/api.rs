use serde::{Serialize, de::DeserializeOwned};
use tauri_wasm::{args, invoke};

/// Marker payload for commands that take no arguments.
#[derive(Serialize)]
pub struct NoArgs {}

/// Invokes a backend command and decodes its result. Errors come back as
/// display strings ready for the error banner.
pub async fn invoke_tauri<R, A>(cmd: &str, payload: &A) -> Result<R, String>
where
    R: DeserializeOwned,
    A: Serialize + ?Sized,
{
    let encoded = args(payload).map_err(|e| format!("encoding {cmd} args failed: {e}"))?;
    let raw = invoke(cmd)
        .with_args(encoded)
        .await
        .map_err(|e| format!("{cmd} failed: {e:?}"))?;

    serde_wasm_bindgen::from_value(raw).map_err(|e| format!("decoding {cmd} result failed: {e}"))
}
