//! One-shot stamping suppression switch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static PROCESS_LATCH: OnceLock<Arc<SuppressionLatch>> = OnceLock::new();

/// Enable flag whose `disable` suppresses exactly the next hook invocation.
///
/// Checking and re-arming happen in one atomic step. Registered behaviours
/// share [`SuppressionLatch::process_wide`] unless given their own, so a
/// `disable` suppresses whichever hook runs first, for any class and on any
/// thread. Callers that need to target one operation should prefer
/// [`HookContext::with_stamping_suppressed`](crate::signable::domain::HookContext::with_stamping_suppressed).
///
/// # Examples
///
/// ```rust
/// use signable::signable::services::SuppressionLatch;
///
/// let latch = SuppressionLatch::new();
/// latch.disable();
/// assert!(!latch.admit());
/// assert!(latch.admit());
/// ```
#[derive(Debug)]
pub struct SuppressionLatch {
    enabled: AtomicBool,
}

impl SuppressionLatch {
    /// Creates an enabled latch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }

    /// Returns the latch shared by every behaviour registered without an
    /// explicit one.
    #[must_use]
    pub fn process_wide() -> Arc<Self> {
        Arc::clone(PROCESS_LATCH.get_or_init(|| Arc::new(Self::new())))
    }

    /// Returns `true` when hooks will stamp.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Suppresses the next hook invocation.
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    /// Cancels a pending suppression.
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    /// Lets a hook through, consuming a pending suppression.
    ///
    /// Returns `false` when the hook must skip stamping; the latch is enabled
    /// again afterwards either way.
    #[must_use]
    pub fn admit(&self) -> bool {
        self.enabled.swap(true, Ordering::AcqRel)
    }
}

impl Default for SuppressionLatch {
    fn default() -> Self {
        Self::new()
    }
}
