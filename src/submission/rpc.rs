use alloy::network::ReceiptResponse;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{PendingTransactionError, Provider};
use thiserror::Error;
use tracing::{debug, info};

use super::SubmitProposal;
use crate::calldata::{IFractalGovernance, ProposalCall};

/// Sends `propose` to the governance contract through a JSON-RPC provider.
/// The provider is expected to carry a wallet for signing.
pub struct RpcSubmitter<P> {
    provider: P,
    governance: Address,
}

impl<P: Provider> RpcSubmitter<P> {
    pub fn new(provider: P, governance: Address) -> Self {
        Self {
            provider,
            governance,
        }
    }
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Contract call failed")]
    Contract(#[from] alloy::contract::Error),

    #[error("Failed waiting for transaction receipt")]
    Pending(#[from] PendingTransactionError),

    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
}

impl<P: Provider> SubmitProposal for RpcSubmitter<P> {
    type Error = SubmitError;

    async fn submit_proposal(&mut self, call: &ProposalCall) -> Result<TxHash, Self::Error> {
        let governance: IFractalGovernance::IFractalGovernanceInstance<&P> =
            IFractalGovernance::new(self.governance, &self.provider);

        let pending = governance
            .propose(
                call.targets.clone(),
                call.values.clone(),
                call.calldatas.clone(),
                call.description.clone(),
            )
            .send()
            .await?;

        info!(tx_hash = %pending.tx_hash(), "Proposal sent, waiting for receipt");

        let receipt = pending.get_receipt().await?;
        confirmed(&receipt)
    }
}

/// Hash of the transaction behind `receipt`, or `Reverted` if it failed.
fn confirmed<R: ReceiptResponse>(receipt: &R) -> Result<TxHash, SubmitError> {
    let tx_hash = receipt.transaction_hash();
    debug!(
        %tx_hash,
        block_number = ?receipt.block_number(),
        gas_used = receipt.gas_used(),
        "Received receipt"
    );

    if !receipt.status() {
        return Err(SubmitError::Reverted(tx_hash));
    }

    Ok(tx_hash)
}
