//! Tests for selection resolution against the reference store.

#![allow(clippy::expect_used)]

use mvm_types::MicroVmSpec;
use mvmctl_cli::application::ports::RemoteStore;
use mvmctl_cli::application::services::locate;
use mvmctl_cli::domain::{ResolveError, Selection, StoreError};
use mvmctl_cli::infra::reference_store::ReferenceStore;

use crate::helpers::{UnreachableStore, seeded, uids};

#[tokio::test]
async fn test_resolve_unknown_uid_is_not_found() {
    let (store, _) = seeded(&[("foo", "bar")]).await;
    let err = locate::resolve(&store, &Selection::by_uid("missing"))
        .await
        .expect_err("unknown uid");
    assert!(matches!(
        err,
        ResolveError::Store(StoreError::NotFound { ref uid }) if uid == "missing"
    ));
    assert_eq!(err.code(), "not_found");
}

#[tokio::test]
async fn test_resolve_uid_ignores_name_and_namespace() {
    let (store, ids) = seeded(&[("foo", "bar"), ("other", "elsewhere")]).await;
    let selection = Selection::new(
        Some(ids[1].clone()),
        Some("foo".into()),
        Some("bar".into()),
        false,
    );
    let found = locate::resolve(&store, &selection).await.expect("resolve");
    assert_eq!(uids(&found), vec![ids[1].clone()]);
}

#[tokio::test]
async fn test_resolve_by_name_returns_every_match_in_store_order() {
    let (store, ids) = seeded(&[("foo", "bar"), ("baz", "bar"), ("foo", "bar")]).await;
    let found = locate::resolve(&store, &Selection::by_name("foo", "bar"))
        .await
        .expect("resolve");
    assert_eq!(uids(&found), vec![ids[0].clone(), ids[2].clone()]);
}

#[tokio::test]
async fn test_resolve_namespace_only_returns_namespace() {
    let (store, ids) = seeded(&[("a", "bar"), ("b", "baz"), ("c", "bar")]).await;
    let selection = Selection::new(None, None, Some("bar".into()), true);
    let found = locate::resolve(&store, &selection).await.expect("resolve");
    assert_eq!(uids(&found), vec![ids[0].clone(), ids[2].clone()]);
}

#[tokio::test]
async fn test_resolve_empty_result_is_not_an_error() {
    let (store, _) = seeded(&[("foo", "bar")]).await;
    let found = locate::resolve(&store, &Selection::by_name("nope", "bar"))
        .await
        .expect("resolve");
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_resolve_existing_names_the_scope_on_no_match() {
    let (store, _) = seeded(&[("foo", "bar")]).await;
    let err = locate::resolve_existing(&store, &Selection::by_name("nope", "bar"))
        .await
        .expect_err("no match");
    assert_eq!(err.to_string(), "MicroVM bar/nope not found");
    assert_eq!(err.code(), "not_found");
}

#[tokio::test]
async fn test_resolve_twice_gives_same_result() {
    let (store, _) = seeded(&[("foo", "bar"), ("foo", "bar")]).await;
    let selection = Selection::by_name("foo", "bar");
    let first = locate::resolve(&store, &selection).await.expect("first");
    let second = locate::resolve(&store, &selection).await.expect("second");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_resolve_passes_transport_errors_through() {
    let err = locate::resolve(&UnreachableStore, &Selection::by_name("foo", "bar"))
        .await
        .expect_err("transport");
    assert_eq!(err.code(), "transport");
    assert_eq!(err.to_string(), "connection refused");
}

#[tokio::test]
async fn test_get_after_create_returns_same_identity() {
    let store = ReferenceStore::new();
    let created = store
        .create(&MicroVmSpec::named("foo", "bar"))
        .await
        .expect("create");
    let uid = created.uid().expect("uid assigned");

    let fetched = store.get(uid).await.expect("get");
    assert_eq!(fetched.uid(), Some(uid));
    assert_eq!(fetched.name(), "foo");
    assert_eq!(fetched.namespace(), "bar");

    let resolved = locate::resolve(&store, &Selection::by_uid(uid))
        .await
        .expect("resolve");
    assert_eq!(resolved, vec![created]);
}
