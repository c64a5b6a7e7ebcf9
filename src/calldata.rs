use alloy::primitives::{Address, Bytes, U256, keccak256};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::proposal::Fractal;

#[cfg(test)]
mod tests;

sol! {
    #[sol(rpc)]
    interface IFractalGovernance {
        function propose(
            address[] targets,
            uint256[] values,
            bytes[] calldatas,
            string description
        ) external returns (uint256 proposalId);

        function hashProposal(
            address[] targets,
            uint256[] values,
            bytes[] calldatas,
            bytes32 descriptionHash
        ) external view returns (uint256);
    }

    #[sol(rpc)]
    interface ISbxToken {
        function mint(address to, uint256 amount) external;
    }
}

/// ABI-encoded `mint(to, amount)` on the token contract, selector included.
pub fn encode_mint(to: Address, amount: U256) -> Bytes {
    ISbxToken::mintCall { to, amount }.abi_encode().into()
}

/// Arguments of a single `propose` call. Every list holds exactly one entry:
/// the mint on the token contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalCall {
    pub targets: Vec<Address>,
    pub values: Vec<U256>,
    pub calldatas: Vec<Bytes>,
    pub description: String,
}

impl ProposalCall {
    /// Proposes minting the fractal allocation from `token` into the
    /// `governance` treasury.
    pub fn new(governance: Address, token: Address, fractal: &Fractal) -> Self {
        Self {
            targets: vec![token],
            values: vec![U256::ZERO],
            calldatas: vec![encode_mint(governance, fractal.allocation)],
            description: fractal.description.clone(),
        }
    }

    /// The id the governor will assign to this proposal:
    /// `keccak256(abi.encode(targets, values, calldatas, keccak256(description)))`.
    pub fn proposal_id(&self) -> U256 {
        let call = IFractalGovernance::hashProposalCall {
            targets: self.targets.clone(),
            values: self.values.clone(),
            calldatas: self.calldatas.clone(),
            descriptionHash: keccak256(self.description.as_bytes()),
        };

        let mut encoded = Vec::new();
        call.abi_encode_raw(&mut encoded);
        U256::from_be_bytes(*keccak256(&encoded))
    }

    /// Full calldata of the `propose` transaction.
    pub fn encode_propose(&self) -> Bytes {
        IFractalGovernance::proposeCall::from(self.clone())
            .abi_encode()
            .into()
    }
}

impl From<ProposalCall> for IFractalGovernance::proposeCall {
    fn from(call: ProposalCall) -> Self {
        Self {
            targets: call.targets,
            values: call.values,
            calldatas: call.calldatas,
            description: call.description,
        }
    }
}
