//! Reading and parsing bulletin files.
//!
//! Files are read and parsed concurrently. A file that cannot be read is
//! logged and skipped so one bad path does not abort the whole run.

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use navwarn_core::MappedLocation;
use navwarn_parser::NavTextParser;
use tokio::io::AsyncReadExt;

enum BulletinOutcome {
    Parsed(MappedLocation),
    Failed(anyhow::Error),
}

async fn parse_text(text: String) -> anyhow::Result<MappedLocation> {
    let mapped = tokio::task::spawn_blocking(move || NavTextParser::new().parse(&text)).await?;
    Ok(mapped)
}

async fn parse_file(path: &Path) -> BulletinOutcome {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            return BulletinOutcome::Failed(
                anyhow::Error::new(e).context(format!("failed to read {}", path.display())),
            )
        }
    };
    match parse_text(text).await {
        Ok(mapped) => BulletinOutcome::Parsed(mapped),
        Err(e) => BulletinOutcome::Failed(e),
    }
}

/// Parses every file in `paths`, at most `max_concurrent` at a time.
///
/// Results come back in input order. Failed files are logged and left out.
///
/// # Errors
///
/// Returns an error when every file failed.
pub(crate) async fn parse_files(
    paths: &[PathBuf],
    max_concurrent: usize,
) -> anyhow::Result<Vec<MappedLocation>> {
    let mut results: Vec<(usize, &PathBuf, BulletinOutcome)> =
        stream::iter(paths.iter().enumerate())
            .map(|(index, path)| async move { (index, path, parse_file(path).await) })
            .buffer_unordered(max_concurrent.max(1))
            .collect()
            .await;
    results.sort_by_key(|(index, _, _)| *index);

    let mut parsed = Vec::with_capacity(results.len());
    let mut failed_files: usize = 0;
    for (_, path, outcome) in results {
        match outcome {
            BulletinOutcome::Parsed(mapped) => {
                tracing::debug!(
                    file = %path.display(),
                    locations = mapped.location().len(),
                    "parsed bulletin"
                );
                parsed.push(mapped);
            }
            BulletinOutcome::Failed(e) => {
                tracing::error!(file = %path.display(), error = %format!("{e:#}"), "bulletin failed");
                failed_files += 1;
            }
        }
    }

    let file_count = paths.len();
    if failed_files > 0 {
        tracing::warn!(failed_files, total_files = file_count, "some bulletins failed");
    }
    if file_count > 0 && failed_files == file_count {
        anyhow::bail!("all {failed_files} bulletin files failed");
    }

    Ok(parsed)
}

/// Reads one bulletin from standard input and parses it.
///
/// # Errors
///
/// Returns an error if stdin cannot be read as UTF-8.
pub(crate) async fn parse_stdin() -> anyhow::Result<MappedLocation> {
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    parse_text(text).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULLETIN: &str = "GULF OF MEXICO. HAZARDOUS OPERATIONS. \
        1. AREA BOUND BY 28-00N 090-00W, 28-00N 089-00W, 27-00N 089-00W.";

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("navwarn-runner-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn missing(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("navwarn-runner-missing-{}", std::process::id()))
            .join(name)
    }

    #[tokio::test]
    async fn results_keep_input_order() {
        let areas = ["NORTH", "SOUTH", "EAST", "WEST", "CENTRAL", "OUTER"];
        let paths: Vec<PathBuf> = areas
            .iter()
            .map(|area| write_fixture(&format!("order-{area}.txt"), &format!("{area} SEA. NOTHING.")))
            .collect();

        let parsed = parse_files(&paths, 3).await.unwrap();
        let names: Vec<_> = parsed
            .iter()
            .map(|m| m.location_name().unwrap_or_default())
            .collect();
        assert_eq!(
            names,
            ["NORTH SEA.", "SOUTH SEA.", "EAST SEA.", "WEST SEA.", "CENTRAL SEA.", "OUTER SEA."]
        );
    }

    #[tokio::test]
    async fn unreadable_file_is_skipped() {
        let paths = vec![
            write_fixture("partial-ok.txt", BULLETIN),
            missing("partial-missing.txt"),
        ];
        let parsed = parse_files(&paths, 4).await.unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].location_name(), Some("GULF OF MEXICO."));
    }

    #[tokio::test]
    async fn all_files_failing_is_an_error() {
        let paths = vec![missing("a.txt"), missing("b.txt")];
        let err = parse_files(&paths, 2).await.unwrap_err();
        assert!(err.to_string().contains("all 2 bulletin files failed"));
    }

    #[tokio::test]
    async fn zero_concurrency_is_clamped() {
        let paths = vec![write_fixture("clamped.txt", BULLETIN)];
        let parsed = parse_files(&paths, 0).await.unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[tokio::test]
    async fn parse_text_matches_direct_parse() {
        let mapped = parse_text(BULLETIN.to_string()).await.unwrap();
        assert_eq!(mapped, NavTextParser::new().parse(BULLETIN));
    }
}
