//! Shared world state for signable hook BDD scenarios.

use crate::test_helpers::{Article, Comment, User};
use rstest::fixture;
use signable::signable::{
    adapters::memory::{InMemorySchemaCatalog, StaticConfiguration},
    domain::HookOutcome,
    ports::SignableRecord,
    services::{SignableBehavior, SignableError, SuppressionLatch},
};
use std::sync::Arc;

/// Scenario world for signable hook behaviour tests.
pub struct SignableWorld {
    pub catalog: InMemorySchemaCatalog,
    pub config: StaticConfiguration,
    pub actor: Option<User>,
    pub article: Option<Article>,
    pub comment: Option<Comment>,
    pub disable_before_hook: bool,
    pub latch: Arc<SuppressionLatch>,
    pub article_behavior: Option<SignableBehavior<Article>>,
    pub last_result: Option<Result<HookOutcome, SignableError>>,
}

impl SignableWorld {
    /// Creates a world with an empty schema and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: InMemorySchemaCatalog::new(),
            config: StaticConfiguration::new(),
            actor: None,
            article: None,
            comment: None,
            disable_before_hook: false,
            latch: Arc::new(SuppressionLatch::new()),
            article_behavior: None,
            last_result: None,
        }
    }

    /// Returns the acting user set by a given step.
    pub fn actor(&self) -> Result<User, eyre::Report> {
        self.actor
            .clone()
            .ok_or_else(|| eyre::eyre!("missing acting user in scenario world"))
    }

    /// Returns the article under test.
    pub fn article(&self) -> Result<&Article, eyre::Report> {
        self.article
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing article in scenario world"))
    }

    /// Returns the article behaviour, registering it on first use.
    ///
    /// A pending "stamping is disabled" step is applied at registration.
    pub fn register_articles(&mut self) -> Result<SignableBehavior<Article>, eyre::Report> {
        if let Some(behavior) = &self.article_behavior {
            return Ok(behavior.clone());
        }
        let behavior = self.register::<Article>()?;
        if self.disable_before_hook {
            behavior.disable();
        }
        self.article_behavior = Some(behavior.clone());
        Ok(behavior)
    }

    /// Registers the behaviour for `R` on the scenario's latch.
    ///
    /// Every class in a scenario shares one latch, standing in for the
    /// process-wide one so parallel scenarios do not interfere.
    pub fn register<R: SignableRecord>(&self) -> Result<SignableBehavior<R>, eyre::Report> {
        let behavior = run_async(SignableBehavior::<R>::register(&self.catalog, &self.config))?;
        Ok(behavior.with_latch(Arc::clone(&self.latch)))
    }
}

impl Default for SignableWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SignableWorld {
    SignableWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
