mod rpc;

use std::io::Write;

use alloy::primitives::{Address, TxHash};
use anyhow::Context as _;
use tracing::info;

use crate::calldata::ProposalCall;
use crate::config::Config;
use crate::proposal::Fractal;
pub use rpc::{RpcSubmitter, SubmitError};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Something that can put a `propose` call on chain and wait for it to land.
pub trait SubmitProposal {
    type Error;
    fn submit_proposal(
        &mut self,
        call: &ProposalCall,
    ) -> impl std::future::Future<Output = Result<TxHash, Self::Error>>;
}

/// Proposes minting the fractal allocation into the governance treasury and
/// returns the hash of the confirmed transaction.
pub async fn propose<S>(
    submitter: &mut S,
    governance: Address,
    token: Address,
    fractal: &Fractal,
) -> anyhow::Result<TxHash>
where
    S: SubmitProposal,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    info!(
        name = %fractal.name,
        allocation = %fractal.allocation,
        duration = fractal.duration,
        branches = fractal.branches,
        "Preparing proposal"
    );

    let call = ProposalCall::new(governance, token, fractal);
    info!(
        %governance,
        %token,
        proposal_id = %call.proposal_id(),
        "Submitting proposal"
    );

    let tx_hash = submitter
        .submit_proposal(&call)
        .await
        .context("failed to submit proposal")?;

    info!(%tx_hash, "Proposal confirmed");
    Ok(tx_hash)
}

/// Encodes the proposal without sending it. Returns the `propose` calldata,
/// hex encoded with a `0x` prefix.
pub fn dry_run(config: &Config) -> anyhow::Result<String> {
    let fractal = Fractal::genesis(config.token_decimals)?;
    let call = ProposalCall::new(config.governance_address, config.token_address, &fractal);
    info!(proposal_id = %call.proposal_id(), "Dry run, not sending the proposal");
    Ok(format!("0x{}", hex::encode(call.encode_propose())))
}

/// Writes the outcome of a submission and returns the process exit code.
pub fn report(
    outcome: &anyhow::Result<TxHash>,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> u8 {
    match outcome {
        Ok(tx_hash) => match writeln!(stdout, "Proposal created with tx hash: {tx_hash}") {
            Ok(()) => EXIT_SUCCESS,
            Err(err) => {
                let _ = writeln!(
                    stderr,
                    "Error: proposal {tx_hash} was created but could not be reported: {err}"
                );
                EXIT_FAILURE
            }
        },
        Err(err) => {
            // stderr may be gone; the exit code still carries the failure
            let _ = writeln!(stderr, "Error: {err:?}");
            EXIT_FAILURE
        }
    }
}
