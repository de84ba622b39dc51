//! Per-operation hook context and hook outcomes.

use super::SignatureRole;

/// Context the host supplies with each lifecycle hook invocation.
///
/// The context carries the acting principal explicitly and may ask for
/// stamping to be skipped for this one operation.
///
/// # Examples
///
/// ```rust
/// use signable::signable::domain::HookContext;
///
/// let actor = "system";
/// let context = HookContext::new(&actor).with_stamping_suppressed();
/// assert!(context.suppresses_stamping());
/// ```
#[derive(Debug)]
pub struct HookContext<'a, A: ?Sized> {
    actor: &'a A,
    suppress_stamping: bool,
}

impl<'a, A: ?Sized> HookContext<'a, A> {
    /// Creates a context attributing the operation to `actor`.
    #[must_use]
    pub const fn new(actor: &'a A) -> Self {
        Self {
            actor,
            suppress_stamping: false,
        }
    }

    /// Skips stamping for the operation this context accompanies.
    #[must_use]
    pub const fn with_stamping_suppressed(mut self) -> Self {
        self.suppress_stamping = true;
        self
    }

    /// Returns the acting principal.
    #[must_use]
    pub const fn actor(&self) -> &'a A {
        self.actor
    }

    /// Returns `true` when stamping is suppressed for this operation.
    #[must_use]
    pub const fn suppresses_stamping(&self) -> bool {
        self.suppress_stamping
    }
}

impl<A: ?Sized> Clone for HookContext<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for HookContext<'_, A> {}

/// Result of a lifecycle hook that let the host operation continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Stamping ran; `roles` lists the roles written, in evaluation order.
    Stamped {
        /// Roles whose columns received a value.
        roles: Vec<SignatureRole>,
    },
    /// Stamping was skipped for this invocation.
    Suppressed,
}

impl HookOutcome {
    /// Returns the roles written by the hook.
    #[must_use]
    pub fn stamped_roles(&self) -> &[SignatureRole] {
        match self {
            Self::Stamped { roles } => roles,
            Self::Suppressed => &[],
        }
    }

    /// Returns `true` when stamping was skipped.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }
}
