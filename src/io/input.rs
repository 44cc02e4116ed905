use crate::constants::STDIO_MARKER;
use crate::error::AppError;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info};

/// Splits text into names: one per line, surrounding whitespace trimmed,
/// blank lines dropped. Order is preserved and duplicates are kept.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
///
/// # Examples
/// ```
/// use dupe_names::io::parse_names;
///
/// let names = parse_names("  Acme Inc \r\n\n\tGlobex\nAcme Inc\n");
/// assert_eq!(names, vec!["Acme Inc", "Globex", "Acme Inc"]);
/// ```
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the name list from a file, or from stdin when `source` is `-`.
///
/// # Returns
/// * `Ok(Vec<String>)` - Names in input order
/// * `Err(AppError::InputRead)` - The source is missing, unreadable or not valid UTF-8
pub async fn read_names(source: &str) -> Result<Vec<String>, AppError> {
    if source == STDIO_MARKER {
        return read_names_from(tokio::io::stdin(), "<stdin>").await;
    }

    let content = tokio::fs::read_to_string(source)
        .await
        .map_err(|e| AppError::input_read(source, e))?;
    Ok(names_from_content(&content, source))
}

/// Reads the name list from any async reader; `label` names it in errors and logs.
pub async fn read_names_from<R>(mut reader: R, label: &str) -> Result<Vec<String>, AppError>
where
    R: AsyncRead + Unpin,
{
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .await
        .map_err(|e| AppError::input_read(label, e))?;
    Ok(names_from_content(&content, label))
}

fn names_from_content(content: &str, label: &str) -> Vec<String> {
    let names = parse_names(content);
    debug!("Read {} bytes from {label}", content.len());
    info!("Loaded {} names from {label}", names.len());
    names
}
