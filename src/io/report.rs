use crate::constants::STDIO_MARKER;
use crate::constants::report::SCORE_PRECISION;
use crate::error::AppError;
use crate::matching::Match;
use std::fmt::Write as _;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Renders matches as report blocks, one per match:
///
/// ```text
/// Similarity 1.00:
/// Acme Inc
/// Acme Co
///
/// ```
///
/// No matches renders as an empty string.
pub fn render_report(matches: &[Match]) -> String {
    let mut out = String::new();
    for m in matches {
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "Similarity {:.prec$}:\n{}\n{}\n\n",
            m.score,
            m.first,
            m.second,
            prec = SCORE_PRECISION
        );
    }
    out
}

/// Writes the rendered report to a file, or to stdout when `destination` is `-`.
///
/// An existing file is truncated. Missing parent directories are an error.
pub async fn write_report(destination: &str, matches: &[Match]) -> Result<(), AppError> {
    let report = render_report(matches);

    if destination == STDIO_MARKER {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(report.as_bytes())
            .await
            .map_err(|e| AppError::report_write("<stdout>", e))?;
        stdout
            .flush()
            .await
            .map_err(|e| AppError::report_write("<stdout>", e))?;
    } else {
        tokio::fs::write(destination, report.as_bytes())
            .await
            .map_err(|e| AppError::report_write(destination, e))?;
    }

    info!("Wrote {} matches to {destination}", matches.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_single_block() {
        let report = render_report(&[Match::new("Acme Inc", "Acme Co", 1.0)]);
        assert_eq!(report, "Similarity 1.00:\nAcme Inc\nAcme Co\n\n");
    }

    #[test]
    fn test_render_rounds_to_two_places() {
        let report = render_report(&[
            Match::new("Northwind", "Northwnd", 0.9916666),
            Match::new("Contoso", "Contosso", 0.975),
        ]);
        let blocks: Vec<&str> = report.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "Similarity 0.99:\nNorthwind\nNorthwnd");
        assert!(blocks[1].starts_with("Similarity 0.97:") || blocks[1].starts_with("Similarity 0.98:"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_report(&[]), "");
    }

    #[test]
    fn test_render_keeps_original_text() {
        let report = render_report(&[Match::new("Société Générale", "SOCIÉTÉ GÉNÉRALE", 1.0)]);
        assert!(report.contains("\nSociété Générale\nSOCIÉTÉ GÉNÉRALE\n"));
    }

    #[tokio::test]
    async fn test_write_report_to_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("report.txt");
        let path_str = path.to_string_lossy();

        tokio::fs::write(&path, "stale content that must disappear")
            .await
            .unwrap();

        let matches = vec![
            Match::new("Acme Inc", "ACME INC", 1.0),
            Match::new("Globex", "Globex Corp", 1.0),
        ];
        write_report(&path_str, &matches).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(
            content,
            "Similarity 1.00:\nAcme Inc\nACME INC\n\nSimilarity 1.00:\nGlobex\nGlobex Corp\n\n"
        );
    }

    #[tokio::test]
    async fn test_write_empty_report_creates_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty.txt");

        write_report(&path.to_string_lossy(), &[]).await.unwrap();

        let metadata = tokio::fs::metadata(&path).await.unwrap();
        assert_eq!(metadata.len(), 0);
    }

    #[tokio::test]
    async fn test_write_report_to_stdout() {
        let matches = vec![Match::new("Acme Inc", "Acme Co", 1.0)];
        write_report("-", &matches).await.unwrap();
        assert!(!std::path::Path::new("-").exists());
    }

    #[tokio::test]
    async fn test_write_report_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("report.txt");

        let result = write_report(&path.to_string_lossy(), &[]).await;
        assert!(matches!(result, Err(AppError::ReportWrite { .. })));
    }
}
