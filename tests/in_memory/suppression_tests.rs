//! One-shot and per-operation suppression of stamping.

use super::helpers::{alice, catalog, register_articles, runtime};
use crate::test_helpers::{Article, Comment, User};
use rstest::rstest;
use serde_json::json;
use signable::signable::{
    adapters::memory::{InMemorySchemaCatalog, StaticConfiguration},
    domain::{HookContext, columns_key},
    services::SignableBehavior,
};
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[rstest]
fn disabled_behavior_skips_one_save_then_resumes(
    runtime: io::Result<Runtime>,
    catalog: InMemorySchemaCatalog,
    alice: User,
) {
    let rt = runtime.expect("runtime");
    let behavior = register_articles(&rt, &catalog).expect("registration");

    behavior.disable();
    let mut imported = Article::new("Imported");
    let outcome = behavior
        .before_save(&mut imported, &HookContext::new(&alice))
        .expect("save");
    assert!(outcome.is_suppressed());

    let mut written = Article::new("Written");
    behavior
        .before_save(&mut written, &HookContext::new(&alice))
        .expect("save");

    assert_eq!(imported.created_by, None);
    assert_eq!(written.created_by, Some(42));
}

#[rstest]
fn per_operation_suppression_targets_only_its_operation(
    runtime: io::Result<Runtime>,
    catalog: InMemorySchemaCatalog,
    alice: User,
) {
    let rt = runtime.expect("runtime");
    let behavior = register_articles(&rt, &catalog).expect("registration");
    let other = behavior.clone();

    let mut imported = Article::new("Imported");
    let mut written = Article::new("Written");
    behavior
        .before_save(
            &mut imported,
            &HookContext::new(&alice).with_stamping_suppressed(),
        )
        .expect("save");
    other
        .before_save(&mut written, &HookContext::new(&alice))
        .expect("save");

    assert_eq!(imported.created_by, None);
    assert_eq!(written.created_by, Some(42));
}

#[rstest]
fn clones_share_their_latch(
    runtime: io::Result<Runtime>,
    catalog: InMemorySchemaCatalog,
    alice: User,
) {
    let rt = runtime.expect("runtime");
    let behavior = register_articles(&rt, &catalog).expect("registration");
    let clone = behavior.clone();

    behavior.disable();
    let mut article = Article::new("Imported");
    let outcome = clone
        .before_save(&mut article, &HookContext::new(&alice))
        .expect("save");

    assert!(outcome.is_suppressed());
    assert!(behavior.enabled());
}

#[rstest]
fn independent_latches_do_not_interfere(
    runtime: io::Result<Runtime>,
    catalog: InMemorySchemaCatalog,
    alice: User,
) {
    let rt = runtime.expect("runtime");
    let first = register_articles(&rt, &catalog).expect("registration");
    let second = register_articles(&rt, &catalog).expect("registration");
    assert!(!Arc::ptr_eq(first.latch(), second.latch()));

    first.disable();
    let mut article = Article::new("Written");
    second
        .before_save(&mut article, &HookContext::new(&alice))
        .expect("save");

    assert_eq!(article.created_by, Some(42));
    assert!(!first.enabled());
}

#[rstest]
fn disabling_one_class_suppresses_the_next_hook_of_another(
    runtime: io::Result<Runtime>,
    catalog: InMemorySchemaCatalog,
    alice: User,
) {
    let rt = runtime.expect("runtime");
    let comment_config = StaticConfiguration::new()
        .with_value(columns_key("Comment"), json!({ "created": "author" }));
    let articles = rt
        .block_on(SignableBehavior::<Article>::register(
            &catalog,
            &StaticConfiguration::new(),
        ))
        .expect("registration");
    let comments = rt
        .block_on(SignableBehavior::<Comment>::register(
            &catalog,
            &comment_config,
        ))
        .expect("registration");

    articles.disable();
    let mut comment = Comment::new("Nice post");
    let outcome = comments
        .before_save(&mut comment, &HookContext::new(&alice))
        .expect("save");
    assert!(outcome.is_suppressed());
    assert_eq!(comment.author, None);
    assert!(articles.enabled());

    let mut article = Article::new("Written");
    articles
        .before_save(&mut article, &HookContext::new(&alice))
        .expect("save");
    assert_eq!(article.created_by, Some(42));
}
