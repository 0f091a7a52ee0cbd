//! Lock, pause and blacklist checks.
//!
//! Both timers are deadlines compared against the clock reading of the
//! current message. Nothing ever clears them: trading unlocks and pauses
//! expire purely by time passing, and there is no unpause operation.

use crate::errors::{Error, Result};
use crate::roles::Roles;

pub fn is_trading_enabled(now: u64, trading_enabled_at: u64) -> bool {
    now >= trading_enabled_at
}

pub fn is_paused(now: u64, paused_until: u64) -> bool {
    now < paused_until
}

/// Milliseconds until `deadline`, zero once it has passed.
pub fn time_until(now: u64, deadline: u64) -> u64 {
    deadline.saturating_sub(now)
}

/// Trading lock first, then pause.
///
/// Before launch only exempt senders move tokens. During a pause any
/// transfer with a normal party is refused.
pub fn check_lock_and_pause(
    sender: &Roles,
    recipient: &Roles,
    now: u64,
    trading_enabled_at: u64,
    paused_until: u64,
) -> Result<()> {
    if !is_trading_enabled(now, trading_enabled_at) && !sender.is_exempt() {
        return Err(Error::TradingLocked);
    }
    if is_paused(now, paused_until) && (sender.is_normal() || recipient.is_normal()) {
        return Err(Error::Paused);
    }
    Ok(())
}

/// Exempt parties bypass the deny-set entirely.
pub fn check_blacklist(
    sender: &Roles,
    sender_blacklisted: bool,
    recipient: &Roles,
    recipient_blacklisted: bool,
) -> Result<()> {
    if sender_blacklisted && !sender.is_exempt() {
        return Err(Error::SenderBlacklisted);
    }
    if recipient_blacklisted && !recipient.is_exempt() {
        return Err(Error::RecipientBlacklisted);
    }
    Ok(())
}
