use pig_domain::session::PlayerIdentity;
use pig_domain::statistics::ExecutionContext;

// =============================================================================
// CompleteGameCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteGameCommand {
    identity: PlayerIdentity,
}

impl CompleteGameCommand {
    #[must_use]
    pub const fn new(identity: PlayerIdentity) -> Self {
        Self { identity }
    }

    #[must_use]
    pub const fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }
}

// =============================================================================
// InitializeStatisticsCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeStatisticsCommand {
    caller: PlayerIdentity,
    context: ExecutionContext,
}

impl InitializeStatisticsCommand {
    #[must_use]
    pub const fn new(caller: PlayerIdentity, context: ExecutionContext) -> Self {
        Self { caller, context }
    }

    /// Initialisation with write access to the canonical slot.
    #[must_use]
    pub const fn module_owned(caller: PlayerIdentity) -> Self {
        Self::new(caller, ExecutionContext::ModuleOwned)
    }

    /// Initialisation that may only write the caller's own slot.
    #[must_use]
    pub const fn restricted(caller: PlayerIdentity) -> Self {
        Self::new(caller, ExecutionContext::Restricted)
    }

    #[must_use]
    pub const fn caller(&self) -> &PlayerIdentity {
        &self.caller
    }

    #[must_use]
    pub const fn context(&self) -> ExecutionContext {
        self.context
    }
}
