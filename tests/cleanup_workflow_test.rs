// End-to-end tests for the survey/confirm/delete/verify workflow,
// driving the confirmation gate with scripted answers instead of a
// console.

use std::io;
use std::sync::Mutex;

use kiosk_maintenance::cleanup::{run_cleanup, ConfirmationGate, Outcome};
use kiosk_maintenance::db::VideoRepository;
use serial_test::serial;

mod common;

/// Gate that records every prompt and returns a fixed answer.
struct ScriptedGate {
    answer: bool,
    prompts: Mutex<Vec<i64>>,
}

impl ScriptedGate {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<i64> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ConfirmationGate for ScriptedGate {
    fn confirm(&self, pending: i64) -> io::Result<bool> {
        self.prompts.lock().unwrap().push(pending);
        Ok(self.answer)
    }
}

#[tokio::test]
#[serial]
async fn clean_table_exits_without_consulting_the_gate() {
    let pool = common::test_pool().await;
    common::clear_videos(pool).await;
    common::insert_video(pool, 1, "AI_GENERATED", "keep").await;

    let repo = VideoRepository::new(pool.clone());
    let gate = ScriptedGate::new(true);

    let outcome = run_cleanup(&repo, &gate).await.unwrap();

    assert_eq!(outcome, Outcome::Clean);
    assert!(gate.prompts().is_empty());

    let distribution = repo.type_distribution().await.unwrap();
    assert_eq!(distribution.len(), 1);
    assert_eq!(distribution[0].video_type, "AI_GENERATED");
}

#[tokio::test]
#[serial]
async fn declining_the_gate_deletes_nothing() {
    let pool = common::test_pool().await;
    common::clear_videos(pool).await;
    common::insert_video(pool, 1, "RUNWAY_GENERATED", "runway").await;
    common::insert_video(pool, 2, "AI_GENERATED", "ai").await;
    common::insert_video(pool, 3, "VEO_GENERATED", "veo").await;

    let repo = VideoRepository::new(pool.clone());
    let gate = ScriptedGate::new(false);

    let outcome = run_cleanup(&repo, &gate).await.unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(gate.prompts(), vec![2]);
    assert_eq!(repo.count_legacy().await.unwrap(), 2);

    let distribution = repo.type_distribution().await.unwrap();
    let total: i64 = distribution.iter().map(|row| row.count).sum();
    assert_eq!(total, 3);
}

#[tokio::test]
#[serial]
async fn confirming_deletes_exactly_the_legacy_rows() {
    let pool = common::test_pool().await;
    common::clear_videos(pool).await;
    common::insert_video(pool, 1, "RUNWAY_GENERATED", "runway").await;
    common::insert_video(pool, 2, "AI_GENERATED", "ai survivor").await;
    common::insert_video(pool, 3, "VEO_GENERATED", "veo").await;

    let repo = VideoRepository::new(pool.clone());
    let gate = ScriptedGate::new(true);

    let outcome = run_cleanup(&repo, &gate).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Deleted {
            deleted: 2,
            remaining: 0
        }
    );
    assert_eq!(gate.prompts(), vec![2]);

    // The AI_GENERATED row survives unchanged.
    let survivor: (i64, String, Option<String>) =
        sqlx::query_as("SELECT id, video_type, title FROM videos ORDER BY id")
            .fetch_one(pool)
            .await
            .unwrap();
    assert_eq!(
        survivor,
        (
            2,
            "AI_GENERATED".to_string(),
            Some("ai survivor".to_string())
        )
    );
}
