//! Supply, allocation and timing constants for the KCY1 token.
//!
//! All durations are in milliseconds, the unit of `block_timestamp()`.

pub const DECIMALS: u8 = 18;
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000u128;

pub const TOKEN_NAME: &str = "KCY-meme-1";
pub const TOKEN_SYMBOL: &str = "KCY1";

// ── Supply ───────────────────────────────────────────────────────────────────

pub const TOTAL_SUPPLY: u128 = 100_000_000 * ONE_TOKEN;

/// Held by the contract's own account until distributed or withdrawn.
pub const TREASURY_SUPPLY: u128 = 4_000_000 * ONE_TOKEN;

/// Minted to the deployer: 96M.
pub const OWNER_SUPPLY: u128 = TOTAL_SUPPLY - TREASURY_SUPPLY;

pub const MARKETING_ALLOCATION: u128 = 1_500_000 * ONE_TOKEN;
pub const TEAM_ALLOCATION: u128 = 1_000_000 * ONE_TOKEN;
pub const ADVISOR_ALLOCATION: u128 = 1_500_000 * ONE_TOKEN;

// ── Time ─────────────────────────────────────────────────────────────────────

pub const ONE_HOUR: u64 = 60 * 60 * 1_000;

/// Trading stays locked for non-exempt senders this long after deployment.
pub const TRADING_LOCK_DURATION: u64 = 48 * ONE_HOUR;

/// Length of every pause, manual or triggered by a reconfiguration.
pub const PAUSE_DURATION: u64 = 48 * ONE_HOUR;

/// Minimum gap between two privileged reconfigurations.
pub const RECONFIGURATION_COOLDOWN: u64 = 48 * ONE_HOUR;

// ── Default schedule (unified 0.08%, 2k / 4k caps) ───────────────────────────

pub const FEE_DENOMINATOR: u128 = 100_000;
pub const BURN_RATE: u128 = 30; // 0.03%
pub const OWNER_RATE: u128 = 50; // 0.05%

pub const MAX_TRANSACTION: u128 = 2_000 * ONE_TOKEN;
pub const MAX_WALLET: u128 = 4_000 * ONE_TOKEN;
pub const MAX_EXEMPT_TO_NORMAL: u128 = 100 * ONE_TOKEN;

pub const STANDARD_COOLDOWN: u64 = 2 * ONE_HOUR;
pub const EXEMPT_TO_NORMAL_COOLDOWN: u64 = 24 * ONE_HOUR;

// ── Roles ────────────────────────────────────────────────────────────────────

pub const EXEMPT_SLOT_COUNT: usize = 4;

/// The null account. Never a valid transfer or approval target.
pub const ZERO_ADDRESS: [u8; 32] = [0u8; 32];
