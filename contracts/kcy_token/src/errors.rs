/// Which cooldown a rejected sender is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum CooldownClass {
    /// The 2h window between ordinary outgoing transfers.
    Standard,
    /// The 24h window on exempt → normal payouts.
    Extended,
}

/// Direction of a blocked liquidity-pair movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum LiquidityFlow {
    /// Tokens sent into a pair outside the router.
    Deposit,
    /// Tokens pulled out of a pair outside the router.
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Caller is not the contract owner.
    NotOwner,
    /// Caller is not a non-owner exempt-slot holder.
    NotMultiSig,
    /// Sender is not exempt and the launch lock has not expired.
    TradingLocked,
    /// A pause is active and one of the parties is not exempt.
    Paused,
    /// `pause` called while a pause is already running.
    AlreadyPaused,
    SenderBlacklisted,
    RecipientBlacklisted,
    /// Amount exceeds the per-transaction cap of the resolved route.
    ExceedsMaxTransaction,
    /// Recipient's resulting balance would exceed the wallet cap.
    ExceedsMaxWallet,
    CooldownActive(CooldownClass),
    InsufficientBalance,
    InsufficientAllowance,
    /// Transfer, approval or configuration targeting the null account.
    ZeroAddressTarget,
    SlotsLocked,
    PairsLocked,
    DexLocked,
    LiquidityRoleViolation(LiquidityFlow),
    /// The one-time initial distribution already ran.
    AlreadyDistributed,
    /// A mutating message was entered while another was in progress.
    ReentrancyDetected,
    /// A privileged reconfiguration happened less than 48h ago.
    ReconfigurationCooldown,
    CannotBlacklistOwner,
    CannotBlacklistContract,
    /// Exempt-slot index outside `0..EXEMPT_SLOT_COUNT`.
    InvalidSlotIndex,
    /// Fee or limit schedule failed validation.
    InvalidSchedule,
    /// An arithmetic operation overflowed.
    Overflow,
}

pub type Result<T> = core::result::Result<T, Error>;
