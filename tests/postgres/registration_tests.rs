//! Registering and running behaviours against a live schema.

use crate::postgres::helpers::{CatalogContext, catalog_context};
use crate::test_helpers::{Article, Comment, User};
use rstest::rstest;
use serde_json::json;
use signable::signable::{
    adapters::memory::StaticConfiguration,
    domain::{HookContext, SignatureRole, columns_key},
    services::{SignableBehavior, SignableError, SuppressionLatch},
};
use std::sync::Arc;

#[rstest]
fn article_columns_bind_to_the_declared_types(catalog_context: Option<CatalogContext>) {
    let Some(context) = catalog_context else {
        return;
    };
    let alice = User::new(42, "alice");
    let behavior = context
        .rt
        .block_on(SignableBehavior::<Article>::register(
            &context.catalog,
            &StaticConfiguration::new(),
        ))
        .expect("registration should succeed")
        .with_latch(Arc::new(SuppressionLatch::new()));

    let mut draft = Article::new("Hello");
    behavior
        .before_save(&mut draft, &HookContext::new(&alice))
        .expect("save should stamp");
    assert_eq!(draft.created_by, Some(42));

    let mut published = Article::existing("Hello");
    let result = behavior.before_delete(&mut published, &HookContext::new(&alice));
    assert!(
        matches!(
            &result,
            Err(SignableError::UnsupportedColumnType {
                role: SignatureRole::Deleted,
                ..
            })
        ),
        "timestamp deleted_by should be rejected, got {result:?}"
    );
    assert_eq!(published.deleted_by, None);
}

#[rstest]
fn varchar_column_receives_the_display_string(catalog_context: Option<CatalogContext>) {
    let Some(context) = catalog_context else {
        return;
    };
    let config = StaticConfiguration::new()
        .with_value(columns_key("Comment"), json!({ "created": "author" }));
    let behavior = context
        .rt
        .block_on(SignableBehavior::<Comment>::register(
            &context.catalog,
            &config,
        ))
        .expect("registration should succeed")
        .with_latch(Arc::new(SuppressionLatch::new()));

    let mut comment = Comment::new("Nice post");
    behavior
        .before_save(&mut comment, &HookContext::new(&User::new(42, "alice")))
        .expect("save should stamp");

    assert_eq!(comment.author.as_deref(), Some("alice"));
}
