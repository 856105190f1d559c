//! Tests for the per-tick fetch and diff cycle.

use super::test_fixtures::{ScriptedSource, device};
use super::tracker::Tracker;
use crate::monitor::DeviceChange;
use crate::router::RouterError;

fn kinds(changes: &[crate::monitor::ChangedDevice]) -> Vec<(u8, DeviceChange)> {
    changes
        .iter()
        .map(|c| (c.mac().as_bytes()[5], c.change))
        .collect()
}

#[tokio::test]
async fn first_tick_reports_every_device_as_added() {
    let source = ScriptedSource::returning_snapshots(vec![vec![device(1), device(2)]]).shared();
    let mut tracker = Tracker::new(source);

    let changes = tracker.tick().await.unwrap();

    assert_eq!(
        kinds(&changes),
        [(1, DeviceChange::Added), (2, DeviceChange::Added)]
    );
}

#[tokio::test]
async fn later_tick_reports_difference_from_previous() {
    let source = ScriptedSource::returning_snapshots(vec![
        vec![device(0xa), device(0xb)],
        vec![device(0xb), device(0xc)],
    ])
    .shared();
    let mut tracker = Tracker::new(source);

    tracker.tick().await.unwrap();
    let changes = tracker.tick().await.unwrap();

    assert_eq!(
        kinds(&changes),
        [(0xc, DeviceChange::Added), (0xa, DeviceChange::Removed)]
    );
}

#[tokio::test]
async fn unchanged_snapshot_reports_nothing() {
    let source = ScriptedSource::returning_snapshots(vec![vec![device(1)], vec![device(1)]]).shared();
    let mut tracker = Tracker::new(source);

    tracker.tick().await.unwrap();

    assert!(tracker.tick().await.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_failure_keeps_previous_baseline() {
    let source = ScriptedSource::new(vec![
        Ok(vec![device(1)]),
        Err(RouterError::FetchFailed { code: 2 }),
        Ok(vec![device(1), device(2)]),
    ])
    .shared();
    let mut tracker = Tracker::new(source);

    tracker.tick().await.unwrap();
    let failed = tracker.tick().await;
    let changes = tracker.tick().await.unwrap();

    assert!(matches!(failed, Err(RouterError::FetchFailed { code: 2 })));
    assert_eq!(kinds(&changes), [(2, DeviceChange::Added)]);
}

#[tokio::test]
async fn login_failure_skips_fetch() {
    let source = ScriptedSource::returning_snapshots(vec![vec![device(1)]])
        .with_logins(vec![Err(RouterError::AuthFailed { code: 401 })])
        .shared();
    let mut tracker = Tracker::new(source.clone());

    let result = tracker.tick().await;

    assert!(matches!(result, Err(RouterError::AuthFailed { code: 401 })));
    assert_eq!(source.login_calls(), 1);
    assert_eq!(source.fetch_calls(), 0);
}

#[tokio::test]
async fn logs_in_before_every_fetch() {
    let source = ScriptedSource::returning_snapshots(vec![vec![device(1)]]).shared();
    let mut tracker = Tracker::new(source.clone());

    tracker.tick().await.unwrap();
    tracker.tick().await.unwrap();
    tracker.tick().await.unwrap();

    assert_eq!(source.login_calls(), 3);
    assert_eq!(source.fetch_calls(), 3);
}
