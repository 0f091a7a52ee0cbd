//! Limit enforcer.
//!
//! Limits depend on the ordered (sender, recipient) role pair. The pair is
//! first resolved to a [`Route`]; the route decides which caps apply and
//! where the cooldown timestamp lives.

use crate::errors::{CooldownClass, Error, LiquidityFlow, Result};
use crate::roles::Roles;
use crate::schedule::LimitSchedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Exempt ↔ exempt, owner payouts, and pair movements not involving a
    /// normal account.
    Unrestricted,
    /// Router or pair paying out to a normal account (a DEX buy).
    DexDistribution,
    /// Exempt-slot or contract paying out to a normal account.
    ExemptToNormal,
    NormalToExempt,
    /// A router-assisted deposit into a liquidity pair.
    NormalToPair,
    NormalToNormal,
}

/// Where a route reads and writes its cooldown timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownKey {
    None,
    /// The sender's own last outgoing transfer.
    Sender,
    /// The last payout from this source to this recipient.
    SourceRecipient,
}

impl Route {
    pub fn resolve(sender: &Roles, recipient: &Roles) -> Self {
        let dex_source = sender.is_router || (sender.is_liquidity_pair && !sender.is_exempt());
        if recipient.is_normal() {
            if sender.is_owner {
                Route::Unrestricted
            } else if dex_source {
                Route::DexDistribution
            } else if sender.is_exempt() {
                Route::ExemptToNormal
            } else {
                Route::NormalToNormal
            }
        } else if !sender.is_normal() {
            Route::Unrestricted
        } else if recipient.is_exempt() {
            Route::NormalToExempt
        } else {
            Route::NormalToPair
        }
    }

    pub fn cooldown_key(&self) -> CooldownKey {
        match self {
            Route::Unrestricted => CooldownKey::None,
            Route::DexDistribution => CooldownKey::SourceRecipient,
            _ => CooldownKey::Sender,
        }
    }

    /// Only normal recipients are wallet-capped.
    pub fn caps_wallet(&self) -> bool {
        matches!(self, Route::NormalToNormal | Route::DexDistribution)
    }

    fn max_transaction(&self, limits: &LimitSchedule) -> Option<u128> {
        match self {
            Route::Unrestricted => None,
            Route::ExemptToNormal => Some(limits.max_exempt_to_normal),
            _ => Some(limits.max_transaction),
        }
    }

    fn cooldown(&self, limits: &LimitSchedule) -> Option<(u64, CooldownClass)> {
        match self {
            Route::Unrestricted => None,
            Route::ExemptToNormal => Some((limits.exempt_to_normal_cooldown, CooldownClass::Extended)),
            _ => Some((limits.cooldown, CooldownClass::Standard)),
        }
    }
}

/// Pairs only move through the router. Exempt senders may deposit
/// directly; an exempt pair may pay out directly.
pub fn check_liquidity_roles(sender: &Roles, recipient: &Roles, caller_is_router: bool) -> Result<()> {
    if caller_is_router {
        return Ok(());
    }
    if recipient.is_liquidity_pair && !sender.is_exempt() {
        return Err(Error::LiquidityRoleViolation(LiquidityFlow::Deposit));
    }
    if sender.is_liquidity_pair && !sender.is_exempt() {
        return Err(Error::LiquidityRoleViolation(LiquidityFlow::Withdrawal));
    }
    Ok(())
}

/// A missing record never blocks. Otherwise the window closes at
/// exactly `last + window`.
pub fn cooldown_elapsed(last: Option<u64>, now: u64, window: u64) -> bool {
    last.map_or(true, |at| now >= at.saturating_add(window))
}

/// Inputs the route checks read, gathered by the caller before any write.
#[derive(Debug, Clone, Copy)]
pub struct Movement {
    pub amount: u128,
    /// Recipient balance once the net amount lands.
    pub recipient_after: u128,
    /// Timestamp stored under the route's [`CooldownKey`].
    pub last_sent: Option<u64>,
    pub now: u64,
}

/// Max transaction, then cooldown, then max wallet.
pub fn enforce(route: Route, movement: &Movement, limits: &LimitSchedule) -> Result<()> {
    if let Some(cap) = route.max_transaction(limits) {
        if movement.amount > cap {
            return Err(Error::ExceedsMaxTransaction);
        }
    }
    if let Some((window, class)) = route.cooldown(limits) {
        if !cooldown_elapsed(movement.last_sent, movement.now, window) {
            return Err(Error::CooldownActive(class));
        }
    }
    if route.caps_wallet() && movement.recipient_after > limits.max_wallet {
        return Err(Error::ExceedsMaxWallet);
    }
    Ok(())
}
