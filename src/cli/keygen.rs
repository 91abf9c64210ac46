use crate::error::Result;
use crate::keygen::generate_key;
use crate::method::Method;
use rand::thread_rng;
use serde_json::json;

/// Generate a random parameter for `method` and render it as CLI flags
pub fn run_keygen(method: Method, length: usize, as_json: bool) -> Result<String> {
    let key = generate_key(method, length, &mut thread_rng())?;
    if as_json {
        let value = json!({ "method": method, "key": key });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }
    Ok(format!("{}\n", key))
}
