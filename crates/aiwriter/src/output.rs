//! `--json` envelopes and shared human-readable bits

use aiwriter_core::AiWriterError;
use anyhow::Result;
use serde::Serialize;
use serde_json::json;

/// `{"success": true, "data": ...}` on stdout
pub fn print_success<T: Serialize>(data: &T) -> Result<()> {
    let envelope = json!({ "success": true, "data": data });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

/// `{"success": false, "data": {"message", "code"}}` on stdout
pub fn print_failure(err: &AiWriterError) -> Result<()> {
    let envelope = json!({
        "success": false,
        "data": { "message": err.to_string(), "code": err.code() },
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

/// Prints the failure envelope in JSON mode, then hands the error back
/// so `main` reports it and exits 1.
pub fn report<T>(result: aiwriter_core::Result<T>, json: bool) -> Result<T> {
    result.or_else(|err| {
        if json {
            print_failure(&err)?;
        }
        Err(err.into())
    })
}
