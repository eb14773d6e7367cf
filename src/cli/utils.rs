use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;

/// Print `data` as pretty JSON
pub fn output_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Output an empty collection in the appropriate format
pub fn output_empty_collection(
    output_format: &OutputFormat,
    collection_name: &str,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => output_json(&json!({ collection_name: [] })),
        OutputFormat::Text => {
            println!("{}", message);
            Ok(())
        }
    }
}
