//! Contract Test: Diff Translation Order
//!
//! Constraints verified:
//! - Creates, then updates (new side), then deletes, each in diff order
//! - One change per endpoint; nothing merged or deduplicated
//! - Deletes carry no targets
//! - An empty diff produces no changes and no remote calls

mod common;

use common::*;
use plural_dns_core::{ChangeAction, Changes, PluralProvider, Provider, translate};

#[test]
fn empty_diff_translates_to_nothing() {
    assert!(translate(&Changes::default()).is_empty());
}

#[tokio::test]
async fn empty_diff_makes_no_calls() {
    let client = RecordingClient::new();
    let log = RecordingClient::sharing_log_with(&client);
    let provider = PluralProvider::new(Box::new(client));

    provider.apply_changes(&Changes::default()).await.unwrap();

    assert!(log.calls().is_empty());
}

#[test]
fn length_is_sum_of_groups() {
    let diffs = [
        (1, 0, 0),
        (0, 2, 0),
        (0, 0, 3),
        (2, 1, 1),
        (5, 3, 4),
    ];

    for (creates, updates, deletes) in diffs {
        let changes = Changes {
            create: (0..creates)
                .map(|i| endpoint(&format!("c{}.example.com", i), "A", &["1.1.1.1"]))
                .collect(),
            update_old: (0..updates)
                .map(|i| endpoint(&format!("u{}.example.com", i), "A", &["1.1.1.1"]))
                .collect(),
            update_new: (0..updates)
                .map(|i| endpoint(&format!("u{}.example.com", i), "A", &["2.2.2.2"]))
                .collect(),
            delete: (0..deletes)
                .map(|i| endpoint(&format!("d{}.example.com", i), "A", &["3.3.3.3"]))
                .collect(),
        };

        assert_eq!(
            translate(&changes).len(),
            creates + updates + deletes,
            "diff ({}, {}, {})",
            creates,
            updates,
            deletes
        );
    }
}

#[tokio::test]
async fn creates_then_updates_then_deletes() {
    let client = RecordingClient::new();
    let log = RecordingClient::sharing_log_with(&client);
    let provider = PluralProvider::new(Box::new(client));

    let changes = Changes {
        create: vec![
            endpoint("a.example.com", "A", &["10.0.0.1"]),
            endpoint("b.example.com", "A", &["10.0.0.2"]),
        ],
        update_old: vec![endpoint("c.example.com", "CNAME", &["old.example.com"])],
        update_new: vec![endpoint("c.example.com", "CNAME", &["new.example.com"])],
        delete: vec![endpoint("d.example.com", "TXT", &["\"heritage=external-dns\""])],
    };

    provider.apply_changes(&changes).await.unwrap();

    assert_eq!(
        log.calls(),
        vec![
            Call::create("a.example.com", "A", &["10.0.0.1"]),
            Call::create("b.example.com", "A", &["10.0.0.2"]),
            Call::create("c.example.com", "CNAME", &["new.example.com"]),
            Call::delete("d.example.com", "TXT"),
        ]
    );
}

#[test]
fn deletes_never_carry_targets() {
    let changes = Changes {
        delete: vec![
            endpoint("a.example.com", "A", &["1.1.1.1", "2.2.2.2"]),
            endpoint("b.example.com", "TXT", &["text"]),
            endpoint("c.example.com", "A", &[]),
        ],
        ..Default::default()
    };

    for change in translate(&changes) {
        assert_eq!(change.action, ChangeAction::Delete);
        assert!(change.record.records.is_empty());
    }
}

#[tokio::test]
async fn delete_and_recreate_in_one_diff_runs_both() {
    let client = RecordingClient::new();
    let log = RecordingClient::sharing_log_with(&client);
    let provider = PluralProvider::new(Box::new(client));

    let changes = Changes {
        create: vec![endpoint("a.example.com", "A", &["1.1.1.1"])],
        delete: vec![endpoint("a.example.com", "A", &["9.9.9.9"])],
        ..Default::default()
    };

    provider.apply_changes(&changes).await.unwrap();

    assert_eq!(
        log.calls(),
        vec![
            Call::create("a.example.com", "A", &["1.1.1.1"]),
            Call::delete("a.example.com", "A"),
        ]
    );
}
