#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod constants;
pub mod errors;
pub mod fees;
pub mod gate;
pub mod limits;
pub mod roles;
pub mod schedule;

#[ink::contract]
mod kcy_token {
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;

    use crate::constants::*;
    use crate::errors::Error;
    use crate::fees::{self, FeeSplit};
    use crate::gate;
    use crate::limits::{self, CooldownKey, Movement, Route};
    use crate::roles::{self, ExemptSlots, RoleContext, Roles};
    use crate::schedule::{FeeSchedule, LimitSchedule};

    /// Recipients of the one-time treasury distribution.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct DistributionWallets {
        pub marketing: AccountId,
        pub team: AccountId,
        pub advisor: AccountId,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub struct ExemptAddresses {
        pub slots: [AccountId; EXEMPT_SLOT_COUNT],
        pub router: AccountId,
        pub factory: AccountId,
        pub slots_locked: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum LockTarget {
        ExemptSlots,
        DexAddresses,
        LiquidityPairs,
    }

    #[ink(storage)]
    pub struct KcyToken {
        // ── Ledger ──
        total_supply: Balance,
        total_burned: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
        /// Last successful cooldown-bearing send, keyed by sender.
        last_transfer: Mapping<AccountId, Timestamp>,
        /// Last router or pair payout, keyed by (source, recipient).
        dex_cooldowns: Mapping<(AccountId, AccountId), Timestamp>,
        blacklist: Mapping<AccountId, bool>,
        liquidity_pairs: Mapping<AccountId, bool>,

        // ── Roles ──
        owner: AccountId,
        exempt_slots: ExemptSlots,
        router: AccountId,
        factory: AccountId,
        slots_locked: bool,
        dex_locked: bool,
        pairs_locked: bool,

        // ── Timers ──
        trading_enabled_at: Timestamp,
        paused_until: Timestamp,
        last_reconfiguration: Option<Timestamp>,

        // ── Configuration ──
        fees: FeeSchedule,
        limits: LimitSchedule,
        wallets: DistributionWallets,
        distribution_completed: bool,

        entered: bool,
    }

    // ── Events ──

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct DistributionSent {
        #[ink(topic)]
        recipient: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct InitialDistributionCompleted {
        total: Balance,
    }

    #[ink(event)]
    pub struct PauseActivated {
        until: Timestamp,
        triggered_by_reconfiguration: bool,
    }

    #[ink(event)]
    pub struct BlacklistUpdated {
        #[ink(topic)]
        account: AccountId,
        blacklisted: bool,
    }

    #[ink(event)]
    pub struct ExemptSlotsUpdated {
        slots: [AccountId; EXEMPT_SLOT_COUNT],
    }

    #[ink(event)]
    pub struct DexAddressesUpdated {
        #[ink(topic)]
        router: AccountId,
        factory: AccountId,
    }

    #[ink(event)]
    pub struct LiquidityPairUpdated {
        #[ink(topic)]
        pair: AccountId,
        is_pair: bool,
    }

    #[ink(event)]
    pub struct ConfigurationLocked {
        target: LockTarget,
    }

    #[ink(event)]
    pub struct ConfigurationUnlocked {
        target: LockTarget,
        #[ink(topic)]
        by: AccountId,
    }

    #[ink(event)]
    pub struct TokensBurned {
        #[ink(topic)]
        from: AccountId,
        amount: Balance,
        total_supply: Balance,
    }

    /// Every post-transfer value, computed before anything is written.
    struct TransferPlan {
        from: AccountId,
        to: AccountId,
        split: FeeSplit,
        cooldown: CooldownKey,
        from_after: Balance,
        to_after: Balance,
        owner_after: Option<Balance>,
        supply_after: Balance,
        burned_after: Balance,
    }

    impl KcyToken {
        /// Deploys with the default 0.08% fee and 2 000 / 4 000 token caps.
        #[ink(constructor)]
        pub fn new(router: AccountId, factory: AccountId, wallets: DistributionWallets) -> Self {
            Self::init(router, factory, wallets, FeeSchedule::default(), LimitSchedule::default())
        }

        #[ink(constructor)]
        pub fn with_schedule(
            router: AccountId,
            factory: AccountId,
            wallets: DistributionWallets,
            fees: FeeSchedule,
            limits: LimitSchedule,
        ) -> Result<Self, Error> {
            fees.validate()?;
            limits.validate()?;
            Ok(Self::init(router, factory, wallets, fees, limits))
        }

        fn init(
            router: AccountId,
            factory: AccountId,
            wallets: DistributionWallets,
            fees: FeeSchedule,
            limits: LimitSchedule,
        ) -> Self {
            let caller = Self::env().caller();
            let treasury = Self::env().account_id();
            let now = Self::env().block_timestamp();

            let mut balances = Mapping::default();
            balances.insert(caller, &OWNER_SUPPLY);
            balances.insert(treasury, &TREASURY_SUPPLY);

            Self::env().emit_event(Transfer { from: None, to: Some(caller), value: OWNER_SUPPLY });
            Self::env().emit_event(Transfer { from: None, to: Some(treasury), value: TREASURY_SUPPLY });

            Self {
                total_supply: TOTAL_SUPPLY,
                total_burned: 0,
                balances,
                allowances: Mapping::default(),
                last_transfer: Mapping::default(),
                dex_cooldowns: Mapping::default(),
                blacklist: Mapping::default(),
                liquidity_pairs: Mapping::default(),
                owner: caller,
                exempt_slots: ExemptSlots::default(),
                router,
                factory,
                slots_locked: false,
                dex_locked: false,
                pairs_locked: false,
                trading_enabled_at: now.saturating_add(TRADING_LOCK_DURATION),
                paused_until: 0,
                last_reconfiguration: None,
                fees,
                limits,
                wallets,
                distribution_completed: false,
                entered: false,
            }
        }

        // =====================================================================
        // Token views
        // =====================================================================

        #[ink(message)]
        pub fn name(&self) -> ink::prelude::string::String {
            TOKEN_NAME.into()
        }

        #[ink(message)]
        pub fn symbol(&self) -> ink::prelude::string::String {
            TOKEN_SYMBOL.into()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn total_burned(&self) -> Balance {
            self.total_burned
        }

        #[ink(message)]
        pub fn balance_of(&self, owner: AccountId) -> Balance {
            self.balances.get(owner).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get((owner, spender)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner
        }

        // =====================================================================
        // Transfers
        // =====================================================================

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<(), Error> {
            let caller = self.env().caller();
            self.guarded(|this| {
                let now = this.env().block_timestamp();
                let plan = this.plan_transfer(caller, caller, to, value, now)?;
                this.commit_transfer(plan, now);
                Ok(())
            })
        }

        /// The caller is the spender. The allowance only moves when the
        /// transfer itself goes through.
        #[ink(message)]
        pub fn transfer_from(&mut self, from: AccountId, to: AccountId, value: Balance) -> Result<(), Error> {
            let caller = self.env().caller();
            self.guarded(|this| {
                let allowance = this.allowance(from, caller);
                if value > allowance {
                    return Err(Error::InsufficientAllowance);
                }
                let now = this.env().block_timestamp();
                let plan = this.plan_transfer(caller, from, to, value, now)?;
                if allowance != Balance::MAX {
                    this.allowances.insert((from, caller), &(allowance - value));
                }
                this.commit_transfer(plan, now);
                Ok(())
            })
        }

        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            self.guarded(|this| this.set_allowance(owner, spender, value))
        }

        #[ink(message)]
        pub fn increase_allowance(&mut self, spender: AccountId, delta: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            self.guarded(|this| {
                let value = this.allowance(owner, spender).checked_add(delta).ok_or(Error::Overflow)?;
                this.set_allowance(owner, spender, value)
            })
        }

        #[ink(message)]
        pub fn decrease_allowance(&mut self, spender: AccountId, delta: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            self.guarded(|this| {
                let value = this
                    .allowance(owner, spender)
                    .checked_sub(delta)
                    .ok_or(Error::InsufficientAllowance)?;
                this.set_allowance(owner, spender, value)
            })
        }

        fn set_allowance(&mut self, owner: AccountId, spender: AccountId, value: Balance) -> Result<(), Error> {
            if spender == roles::zero_account() {
                return Err(Error::ZeroAddressTarget);
            }
            self.allowances.insert((owner, spender), &value);
            self.env().emit_event(Approval { owner, spender, value });
            Ok(())
        }

        /// Runs every gate stage against current storage without writing.
        fn plan_transfer(
            &self,
            caller: AccountId,
            from: AccountId,
            to: AccountId,
            value: Balance,
            now: Timestamp,
        ) -> Result<TransferPlan, Error> {
            if to == roles::zero_account() {
                return Err(Error::ZeroAddressTarget);
            }

            let sender = self.roles_of(from);
            let recipient = self.roles_of(to);

            gate::check_lock_and_pause(&sender, &recipient, now, self.trading_enabled_at, self.paused_until)?;
            gate::check_blacklist(&sender, self.is_blacklisted(from), &recipient, self.is_blacklisted(to))?;
            let caller_is_router = caller != roles::zero_account() && caller == self.router;
            limits::check_liquidity_roles(&sender, &recipient, caller_is_router)?;

            let route = Route::resolve(&sender, &recipient);
            let split = fees::split_for(value, &sender, &recipient, &self.fees)?;

            let from_balance = self.balance_of(from);
            let recipient_base = if to == from {
                from_balance.saturating_sub(value)
            } else {
                self.balance_of(to)
            };
            let to_after = recipient_base.checked_add(split.net).ok_or(Error::Overflow)?;

            let cooldown = route.cooldown_key();
            let last_sent = match cooldown {
                CooldownKey::None => None,
                CooldownKey::Sender => self.last_transfer.get(from),
                CooldownKey::SourceRecipient => self.dex_cooldowns.get((from, to)),
            };
            let movement = Movement { amount: value, recipient_after: to_after, last_sent, now };
            limits::enforce(route, &movement, &self.limits)?;

            let from_after = from_balance.checked_sub(value).ok_or(Error::InsufficientBalance)?;

            // A non-zero owner fee implies the owner is neither party.
            let owner_after = if split.owner_fee > 0 {
                Some(self.balance_of(self.owner).checked_add(split.owner_fee).ok_or(Error::Overflow)?)
            } else {
                None
            };
            let supply_after = self.total_supply.checked_sub(split.burn).ok_or(Error::Overflow)?;
            let burned_after = self.total_burned.checked_add(split.burn).ok_or(Error::Overflow)?;

            Ok(TransferPlan {
                from,
                to,
                split,
                cooldown,
                from_after,
                to_after,
                owner_after,
                supply_after,
                burned_after,
            })
        }

        fn commit_transfer(&mut self, plan: TransferPlan, now: Timestamp) {
            let TransferPlan { from, to, split, .. } = plan;

            self.balances.insert(from, &plan.from_after);
            self.balances.insert(to, &plan.to_after);
            if let Some(owner_after) = plan.owner_after {
                self.balances.insert(self.owner, &owner_after);
            }
            self.total_supply = plan.supply_after;
            self.total_burned = plan.burned_after;

            match plan.cooldown {
                CooldownKey::None => {}
                CooldownKey::Sender => {
                    self.last_transfer.insert(from, &now);
                }
                CooldownKey::SourceRecipient => {
                    self.dex_cooldowns.insert((from, to), &now);
                }
            }

            self.env().emit_event(Transfer { from: Some(from), to: Some(to), value: split.net });
            if split.owner_fee > 0 {
                self.env().emit_event(Transfer { from: Some(from), to: Some(self.owner), value: split.owner_fee });
            }
            if split.burn > 0 {
                self.env().emit_event(Transfer { from: Some(from), to: None, value: split.burn });
            }
        }

        // =====================================================================
        // Roles & gate views
        // =====================================================================

        fn roles_of(&self, account: AccountId) -> Roles {
            let ctx = RoleContext {
                owner: self.owner,
                contract: self.env().account_id(),
                router: self.router,
                slots: &self.exempt_slots,
            };
            roles::classify(account, &ctx, self.liquidity_pairs.get(account).unwrap_or(false))
        }

        #[ink(message)]
        pub fn is_trading_enabled(&self) -> bool {
            gate::is_trading_enabled(self.env().block_timestamp(), self.trading_enabled_at)
        }

        #[ink(message)]
        pub fn time_until_trading_enabled(&self) -> Timestamp {
            gate::time_until(self.env().block_timestamp(), self.trading_enabled_at)
        }

        #[ink(message)]
        pub fn trading_enabled_time(&self) -> Timestamp {
            self.trading_enabled_at
        }

        #[ink(message)]
        pub fn is_paused(&self) -> bool {
            gate::is_paused(self.env().block_timestamp(), self.paused_until)
        }

        #[ink(message)]
        pub fn time_until_unpaused(&self) -> Timestamp {
            gate::time_until(self.env().block_timestamp(), self.paused_until)
        }

        #[ink(message)]
        pub fn paused_until(&self) -> Timestamp {
            self.paused_until
        }

        /// Owner, contract, exempt slot or router.
        #[ink(message)]
        pub fn is_exempt_address(&self, account: AccountId) -> bool {
            self.roles_of(account).is_exempt()
        }

        #[ink(message)]
        pub fn is_exempt_slot(&self, account: AccountId) -> bool {
            self.exempt_slots.contains(&account)
        }

        #[ink(message)]
        pub fn is_blacklisted(&self, account: AccountId) -> bool {
            self.blacklist.get(account).unwrap_or(false)
        }

        #[ink(message)]
        pub fn is_liquidity_pair(&self, account: AccountId) -> bool {
            self.liquidity_pairs.get(account).unwrap_or(false)
        }

        #[ink(message)]
        pub fn get_exempt_addresses(&self) -> ExemptAddresses {
            ExemptAddresses {
                slots: self.exempt_slots.as_array(),
                router: self.router,
                factory: self.factory,
                slots_locked: self.slots_locked,
            }
        }

        #[ink(message)]
        pub fn exempt_slots_locked(&self) -> bool {
            self.slots_locked
        }

        #[ink(message)]
        pub fn dex_addresses_locked(&self) -> bool {
            self.dex_locked
        }

        #[ink(message)]
        pub fn liquidity_pairs_locked(&self) -> bool {
            self.pairs_locked
        }

        #[ink(message)]
        pub fn last_transfer_time(&self, account: AccountId) -> Option<Timestamp> {
            self.last_transfer.get(account)
        }

        /// Zero when no reconfiguration has happened yet.
        #[ink(message)]
        pub fn reconfiguration_available_at(&self) -> Timestamp {
            self.last_reconfiguration
                .map_or(0, |at| at.saturating_add(RECONFIGURATION_COOLDOWN))
        }

        #[ink(message)]
        pub fn fee_schedule(&self) -> FeeSchedule {
            self.fees
        }

        #[ink(message)]
        pub fn limit_schedule(&self) -> LimitSchedule {
            self.limits
        }

        #[ink(message)]
        pub fn distribution_wallets(&self) -> DistributionWallets {
            self.wallets
        }

        #[ink(message)]
        pub fn initial_distribution_completed(&self) -> bool {
            self.distribution_completed
        }

        // =====================================================================
        // Pause & blacklist
        // =====================================================================

        /// 48h pause. There is no unpause; it expires on its own.
        #[ink(message)]
        pub fn pause(&mut self) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                let now = this.env().block_timestamp();
                if gate::is_paused(now, this.paused_until) {
                    return Err(Error::AlreadyPaused);
                }
                this.paused_until = now.saturating_add(PAUSE_DURATION);
                this.env().emit_event(PauseActivated {
                    until: this.paused_until,
                    triggered_by_reconfiguration: false,
                });
                Ok(())
            })
        }

        #[ink(message)]
        pub fn set_blacklist(&mut self, account: AccountId, blacklisted: bool) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if account == roles::zero_account() {
                    return Err(Error::ZeroAddressTarget);
                }
                this.ensure_blacklistable(account)?;
                this.write_blacklist(account, blacklisted);
                Ok(())
            })
        }

        /// Zero entries are skipped. One protected entry rejects the whole batch.
        #[ink(message)]
        pub fn set_blacklist_batch(&mut self, accounts: Vec<AccountId>, blacklisted: bool) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                for account in accounts.iter() {
                    this.ensure_blacklistable(*account)?;
                }
                for account in accounts {
                    if account != roles::zero_account() {
                        this.write_blacklist(account, blacklisted);
                    }
                }
                Ok(())
            })
        }

        #[ink(message)]
        pub fn remove_from_blacklist(&mut self, account: AccountId) -> Result<(), Error> {
            self.ensure_multisig()?;
            self.guarded(|this| {
                this.write_blacklist(account, false);
                Ok(())
            })
        }

        fn ensure_blacklistable(&self, account: AccountId) -> Result<(), Error> {
            if account == self.owner {
                return Err(Error::CannotBlacklistOwner);
            }
            if account == self.env().account_id() {
                return Err(Error::CannotBlacklistContract);
            }
            Ok(())
        }

        fn write_blacklist(&mut self, account: AccountId, blacklisted: bool) {
            self.blacklist.insert(account, &blacklisted);
            self.env().emit_event(BlacklistUpdated { account, blacklisted });
        }

        // =====================================================================
        // Reconfiguration: exempt slots, DEX addresses, liquidity pairs
        // =====================================================================

        #[ink(message)]
        pub fn update_exempt_slots(&mut self, slots: [AccountId; EXEMPT_SLOT_COUNT]) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if this.slots_locked {
                    return Err(Error::SlotsLocked);
                }
                let now = this.ensure_reconfiguration_window()?;
                this.exempt_slots = ExemptSlots::from_slots(slots);
                this.env().emit_event(ExemptSlotsUpdated { slots });
                this.mark_reconfigured(now);
                Ok(())
            })
        }

        #[ink(message)]
        pub fn update_exempt_slot(&mut self, index: u8, account: AccountId) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if this.slots_locked {
                    return Err(Error::SlotsLocked);
                }
                let now = this.ensure_reconfiguration_window()?;
                let mut slots = this.exempt_slots;
                slots.replace(index, account)?;
                this.exempt_slots = slots;
                this.env().emit_event(ExemptSlotsUpdated { slots: slots.as_array() });
                this.mark_reconfigured(now);
                Ok(())
            })
        }

        #[ink(message)]
        pub fn lock_exempt_slots_forever(&mut self) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if this.slots_locked {
                    return Err(Error::SlotsLocked);
                }
                this.slots_locked = true;
                this.env().emit_event(ConfigurationLocked { target: LockTarget::ExemptSlots });
                Ok(())
            })
        }

        #[ink(message)]
        pub fn unlock_exempt_slots(&mut self) -> Result<(), Error> {
            let by = self.ensure_multisig()?;
            self.guarded(|this| {
                this.slots_locked = false;
                this.env().emit_event(ConfigurationUnlocked { target: LockTarget::ExemptSlots, by });
                Ok(())
            })
        }

        #[ink(message)]
        pub fn update_dex_addresses(&mut self, router: AccountId, factory: AccountId) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if this.dex_locked {
                    return Err(Error::DexLocked);
                }
                let now = this.ensure_reconfiguration_window()?;
                if router == roles::zero_account() || factory == roles::zero_account() {
                    return Err(Error::ZeroAddressTarget);
                }
                this.router = router;
                this.factory = factory;
                this.env().emit_event(DexAddressesUpdated { router, factory });
                this.mark_reconfigured(now);
                Ok(())
            })
        }

        #[ink(message)]
        pub fn lock_dex_addresses(&mut self) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if this.dex_locked {
                    return Err(Error::DexLocked);
                }
                this.dex_locked = true;
                this.env().emit_event(ConfigurationLocked { target: LockTarget::DexAddresses });
                Ok(())
            })
        }

        #[ink(message)]
        pub fn unlock_dex_addresses(&mut self) -> Result<(), Error> {
            let by = self.ensure_multisig()?;
            self.guarded(|this| {
                this.dex_locked = false;
                this.env().emit_event(ConfigurationUnlocked { target: LockTarget::DexAddresses, by });
                Ok(())
            })
        }

        #[ink(message)]
        pub fn set_liquidity_pair(&mut self, pair: AccountId, is_pair: bool) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if this.pairs_locked {
                    return Err(Error::PairsLocked);
                }
                let now = this.ensure_reconfiguration_window()?;
                if pair == roles::zero_account() {
                    return Err(Error::ZeroAddressTarget);
                }
                this.write_pair(pair, is_pair);
                this.mark_reconfigured(now);
                Ok(())
            })
        }

        /// Zero entries are skipped.
        #[ink(message)]
        pub fn set_liquidity_pair_batch(&mut self, pairs: Vec<AccountId>, is_pair: bool) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if this.pairs_locked {
                    return Err(Error::PairsLocked);
                }
                let now = this.ensure_reconfiguration_window()?;
                for pair in pairs {
                    if pair != roles::zero_account() {
                        this.write_pair(pair, is_pair);
                    }
                }
                this.mark_reconfigured(now);
                Ok(())
            })
        }

        #[ink(message)]
        pub fn lock_liquidity_pairs_forever(&mut self) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if this.pairs_locked {
                    return Err(Error::PairsLocked);
                }
                this.pairs_locked = true;
                this.env().emit_event(ConfigurationLocked { target: LockTarget::LiquidityPairs });
                Ok(())
            })
        }

        #[ink(message)]
        pub fn unlock_liquidity_pairs(&mut self) -> Result<(), Error> {
            let by = self.ensure_multisig()?;
            self.guarded(|this| {
                this.pairs_locked = false;
                this.env().emit_event(ConfigurationUnlocked { target: LockTarget::LiquidityPairs, by });
                Ok(())
            })
        }

        fn write_pair(&mut self, pair: AccountId, is_pair: bool) {
            self.liquidity_pairs.insert(pair, &is_pair);
            self.env().emit_event(LiquidityPairUpdated { pair, is_pair });
        }

        /// Returns the clock reading the reconfiguration will be stamped with.
        fn ensure_reconfiguration_window(&self) -> Result<Timestamp, Error> {
            let now = self.env().block_timestamp();
            if let Some(at) = self.last_reconfiguration {
                if now < at.saturating_add(RECONFIGURATION_COOLDOWN) {
                    return Err(Error::ReconfigurationCooldown);
                }
            }
            Ok(now)
        }

        fn mark_reconfigured(&mut self, now: Timestamp) {
            self.last_reconfiguration = Some(now);
            self.paused_until = now.saturating_add(PAUSE_DURATION);
            self.env().emit_event(PauseActivated {
                until: self.paused_until,
                triggered_by_reconfiguration: true,
            });
        }

        // =====================================================================
        // Treasury
        // =====================================================================

        /// Pays the marketing, team and advisor allocations out of the
        /// contract's own balance, once.
        #[ink(message)]
        pub fn distribute_initial_allocations(&mut self) -> Result<(), Error> {
            self.ensure_owner()?;
            self.guarded(|this| {
                if this.distribution_completed {
                    return Err(Error::AlreadyDistributed);
                }
                let treasury = this.env().account_id();
                let owner = this.owner;
                let payouts = [
                    (this.wallets.marketing, MARKETING_ALLOCATION),
                    (this.wallets.team, TEAM_ALLOCATION),
                    (this.wallets.advisor, ADVISOR_ALLOCATION),
                ];
                let skipped = |wallet: AccountId| {
                    wallet == owner || wallet == treasury || wallet == roles::zero_account()
                };

                let mut total: Balance = 0;
                for (wallet, amount) in payouts.iter() {
                    if !skipped(*wallet) {
                        total = total.checked_add(*amount).ok_or(Error::Overflow)?;
                    }
                }
                if this.balance_of(treasury) < total {
                    return Err(Error::InsufficientBalance);
                }

                for (wallet, amount) in payouts {
                    if skipped(wallet) {
                        continue;
                    }
                    this.debit_balance(treasury, amount)?;
                    this.credit_balance(wallet, amount)?;
                    this.env().emit_event(Transfer { from: Some(treasury), to: Some(wallet), value: amount });
                    this.env().emit_event(DistributionSent { recipient: wallet, amount });
                }

                this.distribution_completed = true;
                this.env().emit_event(InitialDistributionCompleted { total });
                Ok(())
            })
        }

        /// Destroys owner tokens outside the transfer gate.
        #[ink(message)]
        pub fn burn(&mut self, amount: Balance) -> Result<(), Error> {
            let owner = self.ensure_owner()?;
            self.guarded(|this| {
                let supply_after = this.total_supply.checked_sub(amount).ok_or(Error::InsufficientBalance)?;
                let burned_after = this.total_burned.checked_add(amount).ok_or(Error::Overflow)?;
                this.debit_balance(owner, amount)?;
                this.total_supply = supply_after;
                this.total_burned = burned_after;
                this.env().emit_event(Transfer { from: Some(owner), to: None, value: amount });
                this.env().emit_event(TokensBurned { from: owner, amount, total_supply: supply_after });
                Ok(())
            })
        }

        /// Moves treasury tokens to the owner outside the transfer gate.
        #[ink(message)]
        pub fn withdraw_circulation_tokens(&mut self, amount: Balance) -> Result<(), Error> {
            let owner = self.ensure_owner()?;
            self.guarded(|this| {
                let treasury = this.env().account_id();
                this.debit_balance(treasury, amount)?;
                this.credit_balance(owner, amount)?;
                this.env().emit_event(Transfer { from: Some(treasury), to: Some(owner), value: amount });
                Ok(())
            })
        }

        fn debit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            let updated = balance.checked_sub(amount).ok_or(Error::InsufficientBalance)?;
            self.balances.insert(account, &updated);
            Ok(())
        }

        fn credit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            let updated = balance.checked_add(amount).ok_or(Error::Overflow)?;
            self.balances.insert(account, &updated);
            Ok(())
        }

        // ── Access & guard ──

        fn ensure_owner(&self) -> Result<AccountId, Error> {
            let caller = self.env().caller();
            if caller != self.owner {
                return Err(Error::NotOwner);
            }
            Ok(caller)
        }

        /// A current exempt-slot holder other than the owner.
        fn ensure_multisig(&self) -> Result<AccountId, Error> {
            let caller = self.env().caller();
            if caller == self.owner || !self.exempt_slots.contains(&caller) {
                return Err(Error::NotMultiSig);
            }
            Ok(caller)
        }

        fn guarded<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
            if self.entered {
                return Err(Error::ReentrancyDetected);
            }
            self.entered = true;
            let result = op(self);
            self.entered = false;
            result
        }
    }

    // =========================================================================
    // TESTS
    // =========================================================================

}
