//! Tests for the bulk delete policy: scope checks, the ambiguity guard and
//! partial failure reporting.

#![allow(clippy::expect_used)]

use mvm_types::MicroVm;
use mvmctl_cli::application::ports::RemoteStore;
use mvmctl_cli::application::services::bulk_delete::{self, DeleteOutcome};
use mvmctl_cli::domain::{ListFilter, MissingScope, ResolveError, Selection, StoreError};
use mvmctl_cli::infra::reference_store::{MissingDelete, ReferenceStore};

use crate::helpers::{
    FailOnDelete, RecordingReporter, UidlessListing, all_vms, seed, seeded, uids,
};

async fn scoped(store: &impl RemoteStore, name: &str, namespace: &str) -> Vec<MicroVm> {
    store
        .list(&ListFilter::new(name, namespace))
        .await
        .expect("list")
}

#[tokio::test]
async fn test_ambiguous_match_deletes_nothing() {
    let (store, ids) = seeded(&[("foo", "bar"), ("foo", "bar")]).await;
    let reporter = RecordingReporter::default();

    let outcome = bulk_delete::delete(&store, &Selection::by_name("foo", "bar"), &reporter)
        .await
        .expect("delete");

    let DeleteOutcome::Ambiguous(candidates) = outcome else {
        panic!("expected ambiguous outcome, got {outcome:?}");
    };
    assert_eq!(uids(&candidates), ids);
    assert_eq!(scoped(&store, "foo", "bar").await.len(), 2);
    assert!(reporter.events().is_empty());
}

#[tokio::test]
async fn test_all_deletes_every_match() {
    let (store, ids) = seeded(&[("foo", "bar"), ("keep", "bar"), ("foo", "bar")]).await;
    let reporter = RecordingReporter::default();

    let selection = Selection::by_name("foo", "bar").with_all(true);
    let outcome = bulk_delete::delete(&store, &selection, &reporter)
        .await
        .expect("delete");

    assert_eq!(
        outcome,
        DeleteOutcome::Deleted(vec![ids[0].clone(), ids[2].clone()])
    );
    assert!(scoped(&store, "foo", "bar").await.is_empty());
    assert_eq!(uids(&all_vms(&store).await), vec![ids[1].clone()]);
}

#[tokio::test]
async fn test_single_match_is_deleted_without_all() {
    let (store, ids) = seeded(&[("foo", "bar"), ("foo", "baz")]).await;
    let reporter = RecordingReporter::default();

    let outcome = bulk_delete::delete(&store, &Selection::by_name("foo", "bar"), &reporter)
        .await
        .expect("delete");

    assert_eq!(outcome, DeleteOutcome::Deleted(vec![ids[0].clone()]));
    assert_eq!(store.len(), 1);
    assert_eq!(
        reporter.events(),
        vec![
            format!("step: deleting {}...", ids[0]),
            format!("success: deleted {}", ids[0]),
        ]
    );
}

#[tokio::test]
async fn test_name_without_namespace_is_missing_scope() {
    let (store, _) = seeded(&[("foo", "bar")]).await;
    let reporter = RecordingReporter::default();

    let selection = Selection::new(None, Some("foo".into()), None, false);
    let err = bulk_delete::delete(&store, &selection, &reporter)
        .await
        .expect_err("missing namespace");
    assert!(err.deleted.is_empty());
    assert!(matches!(
        err.source,
        ResolveError::MissingScope(MissingScope::Namespace)
    ));
    assert_eq!(err.to_string(), "required: --namespace");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_all_with_name_but_no_namespace_deletes_everything() {
    let (store, ids) = seeded(&[("foo", "bar"), ("x", "baz")]).await;
    let selection = Selection::new(None, Some("foo".into()), None, true);

    let outcome = bulk_delete::delete(&store, &selection, &RecordingReporter::default())
        .await
        .expect("delete");

    assert_eq!(outcome, DeleteOutcome::Deleted(ids));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_missing_name_and_namespace_without_all() {
    let (store, _) = seeded(&[("foo", "bar")]).await;
    let reporter = RecordingReporter::default();

    let ns_only = Selection::new(None, None, Some("bar".into()), false);
    let err = bulk_delete::delete(&store, &ns_only, &reporter)
        .await
        .expect_err("missing name");
    assert_eq!(err.to_string(), "required: --name");

    let err = bulk_delete::delete(&store, &Selection::default(), &reporter)
        .await
        .expect_err("missing both");
    assert_eq!(err.to_string(), "required: --namespace, --name");
    assert_eq!(err.code(), "missing_scope");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_all_with_namespace_clears_namespace() {
    let (store, ids) = seeded(&[("a", "bar"), ("b", "baz"), ("c", "bar")]).await;
    let selection = Selection::new(None, None, Some("bar".into()), true);

    let outcome = bulk_delete::delete(&store, &selection, &RecordingReporter::default())
        .await
        .expect("delete");

    assert_eq!(
        outcome,
        DeleteOutcome::Deleted(vec![ids[0].clone(), ids[2].clone()])
    );
    assert_eq!(uids(&all_vms(&store).await), vec![ids[1].clone()]);
}

#[tokio::test]
async fn test_all_without_scope_clears_store() {
    let (store, _) = seeded(&[("a", "bar"), ("b", "baz")]).await;
    let selection = Selection::default().with_all(true);

    let outcome = bulk_delete::delete(&store, &selection, &RecordingReporter::default())
        .await
        .expect("delete");

    let DeleteOutcome::Deleted(deleted) = outcome else {
        panic!("expected deletes");
    };
    assert_eq!(deleted.len(), 2);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_all_with_no_matches_deletes_nothing() {
    let (store, _) = seeded(&[("foo", "bar")]).await;
    let selection = Selection::by_name("nope", "bar").with_all(true);

    let outcome = bulk_delete::delete(&store, &selection, &RecordingReporter::default())
        .await
        .expect("delete");

    assert_eq!(outcome, DeleteOutcome::Deleted(Vec::new()));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_uid_deletes_only_that_microvm_even_with_all() {
    let (store, ids) = seeded(&[("foo", "bar"), ("foo", "bar")]).await;
    let selection = Selection::by_uid(ids[1].clone()).with_all(true);

    let outcome = bulk_delete::delete(&store, &selection, &RecordingReporter::default())
        .await
        .expect("delete");

    assert_eq!(outcome, DeleteOutcome::Deleted(vec![ids[1].clone()]));
    assert_eq!(uids(&all_vms(&store).await), vec![ids[0].clone()]);
    let err = store.get(&ids[1]).await.expect_err("deleted");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_unknown_uid_fails_by_default() {
    let (store, _) = seeded(&[("foo", "bar")]).await;

    let err = bulk_delete::delete(
        &store,
        &Selection::by_uid("missing"),
        &RecordingReporter::default(),
    )
    .await
    .expect_err("not found");

    assert!(matches!(
        err.source,
        ResolveError::Store(StoreError::NotFound { .. })
    ));
    assert_eq!(err.code(), "not_found");
}

#[tokio::test]
async fn test_unknown_uid_succeeds_when_store_ignores_missing() {
    let store = ReferenceStore::new().with_missing_delete(MissingDelete::Ignore);
    seed(&store, "foo", "bar").await;

    let outcome = bulk_delete::delete(
        &store,
        &Selection::by_uid("missing"),
        &RecordingReporter::default(),
    )
    .await
    .expect("ignored");

    assert_eq!(outcome, DeleteOutcome::Deleted(vec!["missing".to_string()]));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_failure_mid_batch_stops_and_reports_progress() {
    let (inner, ids) = seeded(&[("foo", "bar"), ("foo", "bar"), ("foo", "bar")]).await;
    let store = FailOnDelete {
        inner,
        fail_uid: ids[1].clone(),
    };
    let selection = Selection::by_name("foo", "bar").with_all(true);

    let err = bulk_delete::delete(&store, &selection, &RecordingReporter::default())
        .await
        .expect_err("partial");

    assert_eq!(err.deleted, vec![ids[0].clone()]);
    assert_eq!(err.code(), "partial_delete");
    assert_eq!(
        err.to_string(),
        format!("connection reset by peer (already deleted: {})", ids[0])
    );
    // the first delete is kept, the rest are never attempted
    assert_eq!(
        uids(&all_vms(&store).await),
        vec![ids[1].clone(), ids[2].clone()]
    );
}

#[tokio::test]
async fn test_listed_microvm_without_uid_stops_the_batch() {
    let (inner, ids) = seeded(&[("a", "bar")]).await;
    let store = UidlessListing { inner };
    let selection = Selection::new(None, None, Some("bar".into()), true);

    let err = bulk_delete::delete(&store, &selection, &RecordingReporter::default())
        .await
        .expect_err("uid-less record");

    assert_eq!(err.deleted, ids);
    assert_eq!(err.code(), "partial_delete");
    assert!(matches!(
        err.source,
        ResolveError::Store(StoreError::Transport(_))
    ));
    assert!(err.to_string().contains("listed MicroVM bar/ghost has no uid"));
}
