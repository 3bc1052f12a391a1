use std::io::{self, Write};

use tracing::info;

use crate::db::{DbError, VideoRepository};

/// Decision point in front of the destructive step. Injected so tests
/// can drive both the confirm and cancel paths without a console.
pub trait ConfirmationGate {
    fn confirm(&self, pending: i64) -> io::Result<bool>;
}

/// Interactive gate: prompts on stdout and accepts only a literal
/// "yes" (case-insensitive). Anything else cancels.
pub struct StdinGate;

impl ConfirmationGate for StdinGate {
    fn confirm(&self, pending: i64) -> io::Result<bool> {
        println!("\n=== Delete {pending} legacy enum videos? ===");
        print!("Type 'yes' to confirm deletion: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().eq_ignore_ascii_case("yes"))
    }
}

/// Gate behind the `--yes` flag.
pub struct AssumeYes;

impl ConfirmationGate for AssumeYes {
    fn confirm(&self, _pending: i64) -> io::Result<bool> {
        Ok(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No legacy rows were found; nothing to do.
    Clean,
    /// The operator declined; no rows were touched.
    Cancelled,
    /// The delete ran. `deleted` is the driver-reported affected-row
    /// count, `remaining` the post-check legacy count (expected zero).
    Deleted { deleted: u64, remaining: i64 },
}

#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("Confirmation prompt failed: {0}")]
    Prompt(#[from] io::Error),
}

/// Runs the full survey / review / confirm / delete / verify sequence
/// over the `videos` table. Strictly sequential; the only suspension
/// points are database I/O and the confirmation prompt.
pub async fn run_cleanup(
    repo: &VideoRepository,
    gate: &dyn ConfirmationGate,
) -> Result<Outcome, CleanupError> {
    println!("\n=== Checking Legacy Enum Values ===");
    let counts = repo.count_legacy_by_type().await?;

    if counts.is_empty() {
        println!("✓ No legacy enum values found. Database is clean!");
        print_distribution(repo).await?;
        return Ok(Outcome::Clean);
    }

    let total: i64 = counts.iter().map(|c| c.count).sum();
    for row in &counts {
        println!("  {}: {} videos", row.video_type, row.count);
    }
    println!("\n⚠ Total legacy enum videos to delete: {total}");

    println!("\n=== Video Details ===");
    for video in repo.find_legacy().await? {
        println!(
            "  ID: {}, Type: {}, Media: {}, File: {}, Title: {}",
            video.id,
            video.video_type,
            video.media_type,
            video.original_filename,
            video.title.as_deref().unwrap_or("(untitled)")
        );
    }

    if !gate.confirm(total)? {
        println!("\n✗ Deletion cancelled");
        info!("Cleanup cancelled by operator; no rows deleted");
        return Ok(Outcome::Cancelled);
    }

    let deleted = repo.delete_legacy().await?;
    println!("\n✓ Successfully deleted {deleted} legacy enum videos");

    let remaining = repo.count_legacy().await?;
    println!("✓ Remaining legacy enum videos: {remaining}");
    print_distribution(repo).await?;

    info!(deleted, remaining, "Cleanup finished");
    Ok(Outcome::Deleted { deleted, remaining })
}

async fn print_distribution(repo: &VideoRepository) -> Result<(), DbError> {
    println!("\n=== Current Video Types ===");
    for row in repo.type_distribution().await? {
        println!("  {}: {} videos", row.video_type, row.count);
    }
    Ok(())
}
