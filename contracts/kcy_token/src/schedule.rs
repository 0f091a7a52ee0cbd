//! Fee and limit schedules.
//!
//! Rates and caps shipped in several revisions of the token, so they are
//! configuration handed to the constructor, not constants baked into the
//! gate. The defaults are the unified 0.08% fee with 2 000 / 4 000 token
//! caps.

use crate::constants::*;
use crate::errors::{Error, Result};

/// Proportional fee split applied to the gross amount of a fee-bearing
/// transfer: `burn = gross * burn_rate / denominator`, likewise for the
/// owner share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct FeeSchedule {
    pub burn_rate: u128,
    pub owner_rate: u128,
    pub denominator: u128,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            burn_rate: BURN_RATE,
            owner_rate: OWNER_RATE,
            denominator: FEE_DENOMINATOR,
        }
    }
}

impl FeeSchedule {
    pub fn validate(&self) -> Result<()> {
        if self.denominator == 0 {
            return Err(Error::InvalidSchedule);
        }
        let total = self
            .burn_rate
            .checked_add(self.owner_rate)
            .ok_or(Error::InvalidSchedule)?;
        if total > self.denominator {
            return Err(Error::InvalidSchedule);
        }
        Ok(())
    }
}

/// Per-route caps and sender cooldowns. Amounts are in base units,
/// cooldowns in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct LimitSchedule {
    pub max_transaction: u128,
    pub max_wallet: u128,
    pub max_exempt_to_normal: u128,
    pub cooldown: u64,
    pub exempt_to_normal_cooldown: u64,
}

impl Default for LimitSchedule {
    fn default() -> Self {
        Self {
            max_transaction: MAX_TRANSACTION,
            max_wallet: MAX_WALLET,
            max_exempt_to_normal: MAX_EXEMPT_TO_NORMAL,
            cooldown: STANDARD_COOLDOWN,
            exempt_to_normal_cooldown: EXEMPT_TO_NORMAL_COOLDOWN,
        }
    }
}

impl LimitSchedule {
    /// Caps must nest: exempt payout <= transaction <= wallet.
    pub fn validate(&self) -> Result<()> {
        if self.max_exempt_to_normal > self.max_transaction
            || self.max_transaction > self.max_wallet
        {
            return Err(Error::InvalidSchedule);
        }
        Ok(())
    }
}
