use shorthand::alias::AliasStore;
use shorthand::domain::AliasValue;
use shorthand::store::MemoryDocumentStore;
use shorthand::testkit;

#[tokio::test]
async fn update_then_fetch_returns_value() {
    let store = testkit::memory_store("aliases");

    store.update("prod", "00D1", Some("orgs")).await.unwrap();

    let value = store.fetch("prod", Some("orgs")).await.unwrap();
    assert_eq!(value, Some(AliasValue::from("00D1")));
}

#[tokio::test]
async fn equal_value_displaces_differently_named_alias() {
    let store = testkit::memory_store("aliases");

    store.update("x", 1i64, Some("orgs")).await.unwrap();
    store.update("y", 1i64, Some("orgs")).await.unwrap();

    assert_eq!(store.fetch("x", Some("orgs")).await.unwrap(), None);
    assert_eq!(
        store.fetch("y", Some("orgs")).await.unwrap(),
        Some(AliasValue::from(1i64))
    );
}

#[tokio::test]
async fn string_and_number_values_do_not_displace_each_other() {
    let store = testkit::memory_store("aliases");

    store.update("text", "1", Some("orgs")).await.unwrap();
    store.update("numeric", 1i64, Some("orgs")).await.unwrap();

    let aliases = store.list(Some("orgs")).await.unwrap();
    assert_eq!(aliases.len(), 2);
}

#[tokio::test]
async fn remove_then_fetch_returns_none() {
    let store = testkit::seeded_store("aliases", &[("orgs", "prod", "00D1")]).await;

    store.remove("prod", Some("orgs")).await.unwrap();

    assert_eq!(store.fetch("prod", Some("orgs")).await.unwrap(), None);
}

#[tokio::test]
async fn remove_missing_alias_is_not_an_error() {
    let store = testkit::memory_store("aliases");

    store.remove("ghost", Some("orgs")).await.unwrap();

    assert_eq!(store.fetch("ghost", Some("orgs")).await.unwrap(), None);
}

#[tokio::test]
async fn unset_removes_all_listed_names() {
    let store = testkit::seeded_store(
        "aliases",
        &[("orgs", "a", "1"), ("orgs", "b", "2"), ("orgs", "c", "3")],
    )
    .await;

    store.unset(["a", "b"], Some("orgs")).await.unwrap();

    let aliases = store.list(Some("orgs")).await.unwrap();
    assert_eq!(aliases.len(), 1);
    assert!(aliases.contains_key("c"));
}

#[tokio::test]
async fn list_on_never_written_group_is_empty() {
    let store = testkit::memory_store("aliases");

    let aliases = store.list(Some("orgs")).await.unwrap();
    assert!(aliases.is_empty());
}

#[tokio::test]
async fn by_value_round_trips_through_fetch() {
    let store = testkit::seeded_store("aliases", &[("orgs", "prod", "00D1")]).await;

    let name = store.by_value("00D1", Some("orgs")).await.unwrap().unwrap();
    let value = store.fetch(&name, Some("orgs")).await.unwrap();
    assert_eq!(value, Some(AliasValue::from("00D1")));
}

#[tokio::test]
async fn by_value_returns_none_when_nothing_matches() {
    let store = testkit::seeded_store("aliases", &[("orgs", "prod", "00D1")]).await;

    assert_eq!(store.by_value("00D2", Some("orgs")).await.unwrap(), None);
    assert_eq!(store.by_value("00D1", Some("sandboxes")).await.unwrap(), None);
}

#[tokio::test]
async fn update_values_sets_all_pairs() {
    let store = testkit::memory_store("aliases");

    let applied = store
        .update_values([("a", "1"), ("b", "2")], Some("orgs"))
        .await
        .unwrap();
    assert_eq!(applied.len(), 2);

    let aliases = store.list(Some("orgs")).await.unwrap();
    assert_eq!(aliases.get("a"), Some(&AliasValue::from("1")));
    assert_eq!(aliases.get("b"), Some(&AliasValue::from("2")));
}

#[tokio::test]
async fn update_values_later_pair_displaces_earlier() {
    let store = testkit::memory_store("aliases");

    store
        .update_values([("a", "1"), ("b", "1")], Some("orgs"))
        .await
        .unwrap();

    let aliases = store.list(Some("orgs")).await.unwrap();
    assert_eq!(aliases.len(), 1);
    assert_eq!(aliases.get("b"), Some(&AliasValue::from("1")));
}

#[tokio::test]
async fn uniqueness_displacement_shows_in_list() {
    let store = testkit::memory_store("aliases");

    store.update("a", "1", Some("orgs")).await.unwrap();
    store.update("b", "1", Some("orgs")).await.unwrap();

    let aliases = store.list(Some("orgs")).await.unwrap();
    assert_eq!(aliases.len(), 1);
    assert_eq!(aliases.get("b"), Some(&AliasValue::from("1")));
}

#[tokio::test]
async fn groups_are_isolated() {
    let store = testkit::memory_store("aliases");

    store.update("a", "1", None).await.unwrap();

    assert!(store.list(Some("orgs")).await.unwrap().is_empty());
    assert_eq!(
        store.fetch("a", None).await.unwrap(),
        Some(AliasValue::from("1"))
    );
}

#[tokio::test]
async fn default_group_is_configurable() {
    let store = AliasStore::new(MemoryDocumentStore::new(), "aliases")
        .with_default_group("orgs");

    store.update("prod", "00D1", None).await.unwrap();

    assert_eq!(
        store.fetch("prod", Some("orgs")).await.unwrap(),
        Some(AliasValue::from("00D1"))
    );
    assert_eq!(store.fetch("prod", Some("default")).await.unwrap(), None);
}

#[tokio::test]
async fn update_values_returns_applied_pairs() {
    let store = testkit::memory_store("aliases");

    let applied = store
        .update_values([("a", "1"), ("b", "2")], None)
        .await
        .unwrap();

    assert_eq!(applied.get("a"), Some(&AliasValue::from("1")));
    assert_eq!(applied.get("b"), Some(&AliasValue::from("2")));
}
