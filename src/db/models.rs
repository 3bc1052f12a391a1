use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

// Database entity models

/// A row of the backend's `videos` table, limited to the columns the
/// cleanup report displays.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: i64,
    pub title: Option<String>,
    pub video_type: String,
    pub media_type: String,
    pub original_filename: String,
    pub uploaded_at: NaiveDateTime,
}

/// One `GROUP BY video_type` aggregation row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoTypeCount {
    pub video_type: String,
    pub count: i64,
}
