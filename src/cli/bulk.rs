use crate::bulk::{bulk_decrypt, BulkOutcome, UNSUPPORTED_MESSAGE};
use crate::cli::transform::TextSource;
use crate::error::Result;
use crate::method::Method;
use serde_json::json;

/// Run every candidate key for `method` and render the report.
/// Unsupported methods produce the informational message, not an error.
pub fn run_bulk(method: Method, source: &TextSource, as_json: bool) -> Result<String> {
    let text = source.read()?;
    let outcome = bulk_decrypt(method, &text);

    if !as_json {
        return Ok(format!("{}\n", outcome));
    }

    let value = match &outcome {
        BulkOutcome::Report(report) => serde_json::to_value(report)?,
        BulkOutcome::Unsupported(method) => json!({
            "method": method,
            "supported": false,
            "message": UNSUPPORTED_MESSAGE,
        }),
    };
    Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
}
