use sqlx::MySqlPool;
use tracing::{debug, instrument};

use crate::db::{DbError, Video, VideoTypeCount};

/// Legacy `video_type` values that were unified into `AI_GENERATED`.
/// These are the only values the cleanup is allowed to delete;
/// `AI_GENERATED` itself is still in use and must be kept.
pub const LEGACY_VIDEO_TYPES: [&str; 2] = ["RUNWAY_GENERATED", "VEO_GENERATED"];

#[derive(Clone)]
pub struct VideoRepository {
    pool: MySqlPool,
}

impl VideoRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Per-type counts restricted to the legacy set. Empty when the
    /// table is already clean.
    #[instrument(skip(self))]
    pub async fn count_legacy_by_type(&self) -> Result<Vec<VideoTypeCount>, DbError> {
        let counts = sqlx::query_as::<_, VideoTypeCount>(
            r#"
            SELECT video_type, COUNT(*) AS count
            FROM videos
            WHERE video_type IN (?, ?)
            GROUP BY video_type
            ORDER BY video_type
            "#,
        )
        .bind(LEGACY_VIDEO_TYPES[0])
        .bind(LEGACY_VIDEO_TYPES[1])
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} legacy video_type groups", counts.len());
        Ok(counts)
    }

    /// Total number of rows in the legacy set.
    #[instrument(skip(self))]
    pub async fn count_legacy(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM videos WHERE video_type IN (?, ?)",
        )
        .bind(LEGACY_VIDEO_TYPES[0])
        .bind(LEGACY_VIDEO_TYPES[1])
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Detail rows for operator review, ordered by id ascending.
    #[instrument(skip(self))]
    pub async fn find_legacy(&self) -> Result<Vec<Video>, DbError> {
        let videos = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, title, video_type, media_type, original_filename, uploaded_at
            FROM videos
            WHERE video_type IN (?, ?)
            ORDER BY id
            "#,
        )
        .bind(LEGACY_VIDEO_TYPES[0])
        .bind(LEGACY_VIDEO_TYPES[1])
        .fetch_all(&self.pool)
        .await?;

        debug!("Found {} legacy videos", videos.len());
        Ok(videos)
    }

    /// Deletes the legacy set and returns the driver-reported affected
    /// row count. The predicate binds the same two values as the reads,
    /// so `AI_GENERATED` can never match.
    #[instrument(skip(self))]
    pub async fn delete_legacy(&self) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM videos WHERE video_type IN (?, ?)")
            .bind(LEGACY_VIDEO_TYPES[0])
            .bind(LEGACY_VIDEO_TYPES[1])
            .execute(&self.pool)
            .await?;

        debug!("Deleted {} legacy videos", result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Counts grouped over every `video_type` present in the table.
    #[instrument(skip(self))]
    pub async fn type_distribution(&self) -> Result<Vec<VideoTypeCount>, DbError> {
        let counts = sqlx::query_as::<_, VideoTypeCount>(
            r#"
            SELECT video_type, COUNT(*) AS count
            FROM videos
            GROUP BY video_type
            ORDER BY video_type
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }
}
