//! Integration tests for the draw session manager.
//!
//! Verifies that sessions are isolated from each other and that concurrent
//! requests against one session are serialized.

use lottery_engine::input::{parse_entry_list, parse_manual_entries};
use lottery_engine::session::{
    DrawSessionManager, InputSource, RandomizationMode, SessionConfig, SessionError,
};
use lottery_engine::{DrawError, DrawStatus};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_sessions_are_isolated() {
    let manager = DrawSessionManager::default();
    let a = manager
        .create_session(
            parse_entry_list("1\nA\nB\n").unwrap(),
            InputSource::File {
                filename: "a.csv".to_string(),
            },
        )
        .await
        .unwrap();
    let b = manager
        .create_session(parse_manual_entries("X\nY\nZ", 2).unwrap(), InputSource::Manual)
        .await
        .unwrap();

    manager
        .shuffle(a.id, RandomizationMode::Random, None)
        .await
        .unwrap();
    manager.draw_winner(a.id).await.unwrap();

    let view_a = manager.view(a.id).await.unwrap();
    let view_b = manager.view(b.id).await.unwrap();
    assert_eq!(view_a.status, DrawStatus::Completed);
    assert_eq!(view_a.input_source, "CSV file: a.csv");
    assert_eq!(view_b.status, DrawStatus::Draft);
    assert!(view_b.winners.is_empty());

    assert!(manager.remove(a.id).await);
    assert!(manager.view(b.id).await.is_ok());
}

#[tokio::test]
async fn test_concurrent_draws_on_one_session_never_repeat_a_winner() {
    let manager = Arc::new(DrawSessionManager::new(SessionConfig::default()));
    let text = (1..=50)
        .map(|i| format!("REG-{i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let view = manager
        .create_session(parse_manual_entries(&text, 20).unwrap(), InputSource::Manual)
        .await
        .unwrap();
    manager
        .shuffle(view.id, RandomizationMode::Reproducible, None)
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..30 {
        let manager = manager.clone();
        let id = view.id;
        handles.push(tokio::spawn(async move { manager.draw_winner(id).await }));
    }

    let mut winners = Vec::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(outcome) => winners.push(outcome.winner),
            Err(SessionError::Draw(DrawError::DrawComplete)) => rejected += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(winners.len(), 20);
    assert_eq!(rejected, 10);

    let unique: HashSet<_> = winners.iter().map(|w| w.registration_no.clone()).collect();
    assert_eq!(unique.len(), 20);

    let ranks: HashSet<_> = winners.iter().map(|w| w.rank).collect();
    assert_eq!(ranks, (1..=20).collect::<HashSet<usize>>());
}

#[tokio::test]
async fn test_reproducible_sessions_match_direct_engine() {
    let manager = DrawSessionManager::default();
    let list = parse_entry_list("3\nA\nB\nC\nD\nE\n").unwrap();
    let view = manager
        .create_session(list.clone(), InputSource::Manual)
        .await
        .unwrap();
    manager
        .shuffle(view.id, RandomizationMode::Reproducible, Some("match".to_string()))
        .await
        .unwrap();

    let mut draw = list.into_draw(Some("match".to_string())).unwrap();
    draw.shuffle().unwrap();

    for _ in 0..3 {
        let from_session = manager.draw_winner(view.id).await.unwrap().winner;
        let direct = draw.pick_next().unwrap();
        assert_eq!(from_session.registration_no, direct.registration_no);
        assert_eq!(from_session.rank, direct.rank);
    }

    let view = manager.view(view.id).await.unwrap();
    assert_eq!(view.input_hash.as_deref(), Some(draw.input_hash()));
    assert!(view.is_completed);
}
