//! Lifecycle hooks stamping records with the acting user.

use super::{SignableError, SignableResult, SuppressionLatch, load_class_config};
use crate::signable::{
    domain::{
        ColumnIdentifier, ColumnType, HookContext, HookOutcome, RepresentationKind, SignatureRole,
        StampValue, TableName, UserInfoMapping,
    },
    ports::{Actor, ConfigurationProvider, SchemaCatalog, Setter, SignableRecord},
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Signable behaviour registered for one record type.
///
/// Registration resolves, once, which column each role writes to, how that
/// column is typed and which setter fills it. The hooks then only consult
/// those bindings.
pub struct SignableBehavior<R: SignableRecord> {
    table: TableName,
    user_methods: UserInfoMapping,
    bindings: Vec<RoleBinding<R>>,
    latch: Arc<SuppressionLatch>,
}

struct RoleBinding<R> {
    role: SignatureRole,
    column: ColumnIdentifier,
    target: BindingTarget<R>,
}

enum BindingTarget<R> {
    Stamp {
        kind: RepresentationKind,
        setter: Setter<R>,
    },
    Unsupported {
        declared: ColumnType,
    },
}

struct PlannedStamp<R> {
    role: SignatureRole,
    setter: Setter<R>,
    value: StampValue,
}

impl<R: SignableRecord> SignableBehavior<R> {
    /// Registers the behaviour for `R`.
    ///
    /// The behaviour consults [`SuppressionLatch::process_wide`], so
    /// [`disable`](Self::disable) on any registered class suppresses the next
    /// hook of every class. Use [`with_latch`](Self::with_latch) to isolate it.
    ///
    /// Roles whose configured column is absent from the catalog stay unbound
    /// and are skipped by the hooks. Roles bound to a column of unsupported
    /// type fail when a hook needs them.
    ///
    /// # Errors
    ///
    /// Returns [`SignableError::InvalidConfiguration`] for malformed
    /// configuration, [`SignableError::Domain`] for an invalid table name,
    /// [`SignableError::Catalog`] when the catalog cannot be read, and
    /// [`SignableError::MissingSetter`] when a stampable column has no
    /// setter on `R`.
    pub async fn register<C, P>(catalog: &C, config: &P) -> SignableResult<Self>
    where
        C: SchemaCatalog + ?Sized,
        P: ConfigurationProvider + ?Sized,
    {
        let table = TableName::new(R::TABLE_NAME)?;
        let class_config = load_class_config(config, R::CLASS_NAME)?;
        let setters = R::setters();
        let mut bindings = Vec::with_capacity(SignatureRole::ALL.len());

        for role in SignatureRole::ALL {
            let Some(column) = class_config.resolve_column(&table, role) else {
                debug!(class = R::CLASS_NAME, %role, "role not configured");
                continue;
            };
            let Some(declared) = catalog.column_type(&column).await? else {
                debug!(class = R::CLASS_NAME, %role, %column, "column absent from schema");
                continue;
            };
            let target = match declared.representation() {
                Some(kind) => {
                    let setter = setters
                        .get(&column)
                        .ok_or_else(|| SignableError::MissingSetter {
                            role,
                            column: column.clone(),
                        })?;
                    BindingTarget::Stamp { kind, setter }
                }
                None => BindingTarget::Unsupported { declared },
            };
            bindings.push(RoleBinding {
                role,
                column,
                target,
            });
        }

        Ok(Self {
            table,
            user_methods: class_config.user_methods,
            bindings,
            latch: SuppressionLatch::process_wide(),
        })
    }

    /// Replaces the process-wide latch with `latch`.
    #[must_use]
    pub fn with_latch(mut self, latch: Arc<SuppressionLatch>) -> Self {
        self.latch = latch;
        self
    }

    /// Returns the latch consulted by the hooks.
    #[must_use]
    pub const fn latch(&self) -> &Arc<SuppressionLatch> {
        &self.latch
    }

    /// Returns the table of the registered class.
    #[must_use]
    pub const fn table(&self) -> &TableName {
        &self.table
    }

    /// Returns the column bound to `role`, if the role is in use.
    #[must_use]
    pub fn column_for(&self, role: SignatureRole) -> Option<&ColumnIdentifier> {
        self.binding(role).map(|binding| &binding.column)
    }

    /// Returns the current flag of the latch, process-wide by default.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.latch.enabled()
    }

    /// Suppresses stamping for the next hook invocation only.
    pub fn disable(&self) {
        self.latch.disable();
    }

    /// Re-enables stamping.
    pub fn enable(&self) {
        self.latch.enable();
    }

    /// Hook run immediately before `record` is persisted.
    ///
    /// Stamps the created role for new records and the updated role for
    /// modified ones; a new, modified record receives both.
    ///
    /// # Errors
    ///
    /// Returns [`SignableError::UnsupportedColumnType`] when a needed role is
    /// bound to a column of unsupported type, and propagates actor and setter
    /// failures. No setter runs when the hook fails before stamping.
    pub fn before_save<A>(
        &self,
        record: &mut R,
        context: &HookContext<'_, A>,
    ) -> SignableResult<HookOutcome>
    where
        A: Actor + ?Sized,
    {
        if !self.admit(context) {
            return Ok(HookOutcome::Suppressed);
        }

        let mut roles = Vec::with_capacity(2);
        if record.is_new() {
            roles.push(SignatureRole::Created);
        }
        if record.is_modified() {
            roles.push(SignatureRole::Updated);
        }
        self.stamp(record, &roles, context.actor())
    }

    /// Hook run immediately before `record` is deleted.
    ///
    /// # Errors
    ///
    /// See [`SignableBehavior::before_save`].
    pub fn before_delete<A>(
        &self,
        record: &mut R,
        context: &HookContext<'_, A>,
    ) -> SignableResult<HookOutcome>
    where
        A: Actor + ?Sized,
    {
        if !self.admit(context) {
            return Ok(HookOutcome::Suppressed);
        }
        self.stamp(record, &[SignatureRole::Deleted], context.actor())
    }

    fn admit<A: ?Sized>(&self, context: &HookContext<'_, A>) -> bool {
        if !self.latch.admit() {
            debug!(class = R::CLASS_NAME, "stamping disabled for this call");
            return false;
        }
        if context.suppresses_stamping() {
            debug!(class = R::CLASS_NAME, "stamping suppressed by caller");
            return false;
        }
        true
    }

    fn binding(&self, role: SignatureRole) -> Option<&RoleBinding<R>> {
        self.bindings.iter().find(|binding| binding.role == role)
    }

    fn stamp<A>(
        &self,
        record: &mut R,
        roles: &[SignatureRole],
        actor: &A,
    ) -> SignableResult<HookOutcome>
    where
        A: Actor + ?Sized,
    {
        // Every value is fetched before the first setter runs.
        let mut planned = Vec::with_capacity(roles.len());
        for role in roles {
            if let Some(stamp) = self.plan(*role, actor)? {
                planned.push(stamp);
            }
        }

        let mut stamped = Vec::with_capacity(planned.len());
        for PlannedStamp {
            role,
            setter,
            value,
        } in planned
        {
            setter(record, value)?;
            debug!(class = R::CLASS_NAME, %role, "record stamped");
            stamped.push(role);
        }
        Ok(HookOutcome::Stamped { roles: stamped })
    }

    fn plan<A>(&self, role: SignatureRole, actor: &A) -> SignableResult<Option<PlannedStamp<R>>>
    where
        A: Actor + ?Sized,
    {
        let Some(binding) = self.binding(role) else {
            return Ok(None);
        };
        match &binding.target {
            BindingTarget::Unsupported { declared } => Err(SignableError::UnsupportedColumnType {
                role,
                column: binding.column.clone(),
                declared: declared.clone(),
            }),
            BindingTarget::Stamp { kind, setter } => {
                let value = actor.info(self.user_methods.accessor(*kind))?;
                Ok(Some(PlannedStamp {
                    role,
                    setter: *setter,
                    value,
                }))
            }
        }
    }
}

impl<R: SignableRecord> Clone for SignableBehavior<R> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            user_methods: self.user_methods.clone(),
            bindings: self.bindings.clone(),
            latch: Arc::clone(&self.latch),
        }
    }
}

impl<R> Clone for RoleBinding<R> {
    fn clone(&self) -> Self {
        Self {
            role: self.role,
            column: self.column.clone(),
            target: self.target.clone(),
        }
    }
}

impl<R> Clone for BindingTarget<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Stamp { kind, setter } => Self::Stamp {
                kind: *kind,
                setter: *setter,
            },
            Self::Unsupported { declared } => Self::Unsupported {
                declared: declared.clone(),
            },
        }
    }
}

impl<R: SignableRecord> fmt::Debug for SignableBehavior<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound: Vec<String> = self
            .bindings
            .iter()
            .map(|binding| format!("{} -> {}", binding.role, binding.column))
            .collect();
        f.debug_struct("SignableBehavior")
            .field("class", &R::CLASS_NAME)
            .field("table", &self.table)
            .field("bindings", &bound)
            .field("enabled", &self.latch.enabled())
            .finish_non_exhaustive()
    }
}
