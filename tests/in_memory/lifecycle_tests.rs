//! Stamping across the full lifecycle of a record.

use super::helpers::{alice, catalog, register_articles, runtime};
use crate::test_helpers::{Article, User};
use rstest::rstest;
use signable::signable::{
    adapters::memory::InMemorySchemaCatalog,
    domain::{HookContext, SignatureRole},
};
use std::io;
use tokio::runtime::Runtime;

#[rstest]
fn article_lifecycle_records_each_actor(
    runtime: io::Result<Runtime>,
    catalog: InMemorySchemaCatalog,
    alice: User,
) {
    let rt = runtime.expect("runtime");
    let behavior = register_articles(&rt, &catalog).expect("registration");
    let bob = User::new(7, "bob");
    let carol = User::new(99, "carol");

    let mut article = Article::new("Draft");
    behavior
        .before_save(&mut article, &HookContext::new(&alice))
        .expect("create");
    article.mark_saved();

    article.retitle("Published");
    behavior
        .before_save(&mut article, &HookContext::new(&bob))
        .expect("update");
    article.mark_saved();

    behavior
        .before_delete(&mut article, &HookContext::new(&carol))
        .expect("delete");

    assert_eq!(article.created_by, Some(42));
    assert_eq!(article.updated_by, Some(7));
    assert_eq!(article.deleted_by, Some(99));
}

#[rstest]
fn later_updates_overwrite_the_updater_but_keep_the_creator(
    runtime: io::Result<Runtime>,
    catalog: InMemorySchemaCatalog,
    alice: User,
) {
    let rt = runtime.expect("runtime");
    let behavior = register_articles(&rt, &catalog).expect("registration");
    let bob = User::new(7, "bob");

    let mut article = Article::new("Draft");
    behavior
        .before_save(&mut article, &HookContext::new(&alice))
        .expect("create");
    article.mark_saved();

    for editor in [&bob, &alice, &bob] {
        article.retitle("Edited");
        let outcome = behavior
            .before_save(&mut article, &HookContext::new(editor))
            .expect("update");
        assert_eq!(outcome.stamped_roles(), [SignatureRole::Updated]);
        article.mark_saved();
    }

    assert_eq!(article.created_by, Some(42));
    assert_eq!(article.updated_by, Some(7));
}

#[rstest]
fn first_save_of_an_edited_draft_stamps_both_roles(
    runtime: io::Result<Runtime>,
    catalog: InMemorySchemaCatalog,
    alice: User,
) {
    let rt = runtime.expect("runtime");
    let behavior = register_articles(&rt, &catalog).expect("registration");

    let mut article = Article::new("Draft");
    article.retitle("Better draft");
    let outcome = behavior
        .before_save(&mut article, &HookContext::new(&alice))
        .expect("create");

    assert_eq!(
        outcome.stamped_roles(),
        [SignatureRole::Created, SignatureRole::Updated]
    );
    assert_eq!(article.created_by, Some(42));
    assert_eq!(article.updated_by, Some(42));
}

#[rstest]
fn class_without_delete_column_deletes_silently(
    runtime: io::Result<Runtime>,
    alice: User,
) {
    let rt = runtime.expect("runtime");
    let schema = InMemorySchemaCatalog::new()
        .with_column("article", "created_by", signable::signable::domain::ColumnType::Integer);
    let behavior = register_articles(&rt, &schema).expect("registration");

    let mut article = Article::existing("Old");
    let outcome = behavior
        .before_delete(&mut article, &HookContext::new(&alice))
        .expect("delete");

    assert!(outcome.stamped_roles().is_empty());
    assert_eq!(article, Article::existing("Old"));
    assert!(behavior.column_for(SignatureRole::Deleted).is_none());
}
