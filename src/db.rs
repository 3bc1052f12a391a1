pub mod error;
pub mod models;
pub mod video_repository;

pub use error::DbError;
pub use models::*;
pub use video_repository::{VideoRepository, LEGACY_VIDEO_TYPES};
