//! Fee calculator.

use crate::errors::{Error, Result};
use crate::roles::Roles;
use crate::schedule::FeeSchedule;

/// How a gross amount is divided. `burn + owner_fee + net == gross`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub burn: u128,
    pub owner_fee: u128,
    pub net: u128,
}

impl FeeSplit {
    pub fn untaxed(gross: u128) -> Self {
        Self { burn: 0, owner_fee: 0, net: gross }
    }

    /// Both shares round down, so amounts below one denominator unit
    /// carry no fee at all.
    pub fn compute(gross: u128, schedule: &FeeSchedule) -> Result<Self> {
        let burn = share(gross, schedule.burn_rate, schedule.denominator)?;
        let owner_fee = share(gross, schedule.owner_rate, schedule.denominator)?;
        let net = gross
            .checked_sub(burn)
            .and_then(|rest| rest.checked_sub(owner_fee))
            .ok_or(Error::Overflow)?;
        Ok(Self { burn, owner_fee, net })
    }
}

fn share(gross: u128, rate: u128, denominator: u128) -> Result<u128> {
    gross
        .checked_mul(rate)
        .ok_or(Error::Overflow)?
        .checked_div(denominator)
        .ok_or(Error::Overflow)
}

/// Fees are only charged when a normal account is a party, and never
/// when the owner is.
pub fn is_fee_free(sender: &Roles, recipient: &Roles) -> bool {
    sender.is_owner || recipient.is_owner || !(sender.is_normal() || recipient.is_normal())
}

pub fn split_for(
    gross: u128,
    sender: &Roles,
    recipient: &Roles,
    schedule: &FeeSchedule,
) -> Result<FeeSplit> {
    if is_fee_free(sender, recipient) {
        Ok(FeeSplit::untaxed(gross))
    } else {
        FeeSplit::compute(gross, schedule)
    }
}
