//! Role classification.
//!
//! An account can satisfy several role predicates at once (the owner is
//! always exempt, a pair can also sit in an exempt slot), so the classifier
//! returns the individual flags rather than a single enum. The limit and
//! fee rules read `is_exempt()` and `is_liquidity_pair` as orthogonal
//! inputs.

use ink::primitives::AccountId;

use crate::constants::{EXEMPT_SLOT_COUNT, ZERO_ADDRESS};
use crate::errors::{Error, Result};

pub fn zero_account() -> AccountId {
    AccountId::from(ZERO_ADDRESS)
}

/// The four owner-assigned exempt slots, replaced in place.
///
/// Unused slots hold the zero account, which never matches a real caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct ExemptSlots {
    slots: [AccountId; EXEMPT_SLOT_COUNT],
}

impl Default for ExemptSlots {
    fn default() -> Self {
        Self { slots: [zero_account(); EXEMPT_SLOT_COUNT] }
    }
}

impl ExemptSlots {
    pub fn from_slots(slots: [AccountId; EXEMPT_SLOT_COUNT]) -> Self {
        Self { slots }
    }

    pub fn as_array(&self) -> [AccountId; EXEMPT_SLOT_COUNT] {
        self.slots
    }

    pub fn contains(&self, account: &AccountId) -> bool {
        *account != zero_account() && self.slots.iter().any(|slot| slot == account)
    }

    pub fn replace(&mut self, index: u8, account: AccountId) -> Result<()> {
        let slot = self
            .slots
            .get_mut(usize::from(index))
            .ok_or(Error::InvalidSlotIndex)?;
        *slot = account;
        Ok(())
    }
}

/// Configuration the classifier reads. Borrowed from storage for the
/// duration of one message.
pub struct RoleContext<'a> {
    pub owner: AccountId,
    pub contract: AccountId,
    pub router: AccountId,
    pub slots: &'a ExemptSlots,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    pub is_owner: bool,
    pub is_contract: bool,
    pub is_exempt_slot: bool,
    pub is_router: bool,
    pub is_liquidity_pair: bool,
}

impl Roles {
    /// Owner ∪ contract ∪ exempt slot ∪ router.
    pub fn is_exempt(&self) -> bool {
        self.is_owner || self.is_contract || self.is_exempt_slot || self.is_router
    }

    /// Neither exempt nor a pair.
    pub fn is_normal(&self) -> bool {
        !self.is_exempt() && !self.is_liquidity_pair
    }
}

/// `is_liquidity_pair` comes from the pair registry, looked up by the caller.
pub fn classify(account: AccountId, ctx: &RoleContext<'_>, is_liquidity_pair: bool) -> Roles {
    let real = account != zero_account();
    Roles {
        is_owner: account == ctx.owner,
        is_contract: account == ctx.contract,
        is_exempt_slot: ctx.slots.contains(&account),
        is_router: real && account == ctx.router,
        is_liquidity_pair: real && is_liquidity_pair,
    }
}
