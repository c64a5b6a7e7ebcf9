use alloy::primitives::U256;
use thiserror::Error;

/// Decimals used by the SBX token when none are configured.
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Whole tokens allocated to the genesis fractal.
pub const GENESIS_ALLOCATION_TOKENS: u64 = 1_000_000;

/// Thirty days, in seconds.
pub const GENESIS_DURATION_SECS: u64 = 30 * 24 * 60 * 60;

pub const GENESIS_BRANCHES: u32 = 8;

const GENESIS_DESCRIPTION: &str = "
                In the realm of infinite scale
                Where blockchain meets poetic tale
                We propose a fractal distribution
                Each holder a star in our constellation

                Phase 1: Genesis Distribution
                - 1,000,000 SBX tokens
                - 30 days duration
                - 8 fractal branches

                Criteria:
                1. Early community members
                2. Content creators
                3. Technical contributors
                4. Ecosystem builders
                5. Liquidity providers
                6. Governance participants
                7. Social engagement leaders
                8. Cross-chain ambassadors

                Each branch will create its own micro-economy
                Growing the network in a self-similar pattern
                As above, so below
                The fractal nature of value flows
            ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProposalError {
    #[error("{amount} tokens with {decimals} decimals does not fit in 256 bits")]
    AllocationOverflow { amount: u64, decimals: u8 },
}

/// A fractal airdrop proposal. Only the allocation and the description end up
/// on chain; duration and branches are informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fractal {
    pub name: String,
    /// Allocation in token base units.
    pub allocation: U256,
    /// Distribution window in seconds.
    pub duration: u64,
    pub branches: u32,
    pub description: String,
}

impl Fractal {
    /// The first distribution: one million tokens spread across eight branches
    /// over thirty days.
    pub fn genesis(decimals: u8) -> Result<Self, ProposalError> {
        Ok(Self {
            name: "Genesis Fractal".into(),
            allocation: scale_to_base_units(GENESIS_ALLOCATION_TOKENS, decimals)?,
            duration: GENESIS_DURATION_SECS,
            branches: GENESIS_BRANCHES,
            description: GENESIS_DESCRIPTION.into(),
        })
    }
}

/// Converts a whole-token amount into base units, `amount * 10^decimals`.
pub fn scale_to_base_units(amount: u64, decimals: u8) -> Result<U256, ProposalError> {
    let overflow = ProposalError::AllocationOverflow { amount, decimals };
    let factor = U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .ok_or(overflow.clone())?;
    U256::from(amount).checked_mul(factor).ok_or(overflow)
}
