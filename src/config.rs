use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use anyhow::Context as _;
use clap::Parser;
use clap::error::ErrorKind;
use url::Url;

use crate::deployments::{Deployments, GOVERNANCE_CONTRACT, TOKEN_CONTRACT};
use crate::proposal::DEFAULT_TOKEN_DECIMALS;

/// The configuration parameters for the application.
///
/// These can either be passed on the command line, or pulled from environment variables.
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
///
/// See `.env.sample` in the repository root for details.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fractal-propose",
    about = "Submit the genesis fractal airdrop proposal to the governance contract"
)]
pub struct ConfigInput {
    /// JSON-RPC endpoint of the chain the governance contract lives on. Not needed for dry runs.
    #[arg(long, env)]
    pub rpc_url: Option<Url>,

    /// Hex encoded private key of the proposer account. Not needed for dry runs.
    #[arg(long, env, hide_env_values = true)]
    pub private_key: Option<String>,

    /// Address of the governance contract. Looked up in the deployments directory if omitted.
    #[arg(long, env)]
    pub governance_address: Option<Address>,

    /// Address of the SBX token contract. Looked up in the deployments directory if omitted.
    #[arg(long, env)]
    pub token_address: Option<Address>,

    /// Output directory of `hardhat-deploy`
    #[arg(long, env, default_value = "deployments")]
    pub deployments_dir: PathBuf,

    /// Network sub-directory to read deployments from
    #[arg(long, env, default_value = "localhost")]
    pub network: String,

    /// Decimals of the SBX token, used to scale the allocation into base units
    #[arg(long, env, default_value_t = DEFAULT_TOKEN_DECIMALS)]
    pub token_decimals: u8,

    /// Print the encoded `propose` calldata instead of sending a transaction
    #[arg(long, env)]
    pub dry_run: bool,
}

pub struct Config {
    /// JSON-RPC endpoint of the chain the governance contract lives on.
    /// Always present unless `dry_run` is set.
    pub rpc_url: Option<Url>,

    /// Signs the proposal transaction. Always present unless `dry_run` is set.
    pub signer: Option<PrivateKeySigner>,

    /// Address of the governance contract, the proposal target and mint recipient
    pub governance_address: Address,

    /// Address of the SBX token contract
    pub token_address: Address,

    /// Decimals of the SBX token
    pub token_decimals: u8,

    /// Only encode the proposal, never touch the network
    pub dry_run: bool,
}

impl Config {
    pub fn parse() -> anyhow::Result<Self> {
        Self::try_parse_from(std::env::args_os())
    }

    /// Parses the given arguments. Help and version requests print and exit,
    /// every other problem is returned as an error.
    pub fn try_parse_from<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let input = match ConfigInput::try_parse_from(args) {
            Ok(input) => input,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(err) => return Err(anyhow::Error::new(err).context("invalid arguments")),
        };
        Self::from_input(input)
    }

    pub fn from_input(input: ConfigInput) -> anyhow::Result<Self> {
        let deployments = Deployments::new(&input.deployments_dir, &input.network);

        let governance_address = match input.governance_address {
            Some(address) => address,
            None => deployments
                .address(GOVERNANCE_CONTRACT)
                .context("governance address not configured")?,
        };
        let token_address = match input.token_address {
            Some(address) => address,
            None => deployments
                .address(TOKEN_CONTRACT)
                .context("token address not configured")?,
        };

        let rpc_url = match (input.rpc_url, input.dry_run) {
            (Some(url), _) => Some(url),
            (None, true) => None,
            (None, false) => anyhow::bail!("an RPC url is required to submit the proposal"),
        };

        let signer = match (&input.private_key, input.dry_run) {
            (Some(key), _) => Some(Self::load_signer(key)?),
            (None, true) => None,
            (None, false) => anyhow::bail!("a private key is required to submit the proposal"),
        };

        Ok(Self {
            rpc_url,
            signer,
            governance_address,
            token_address,
            token_decimals: input.token_decimals,
            dry_run: input.dry_run,
        })
    }

    fn load_signer(key: &str) -> anyhow::Result<PrivateKeySigner> {
        PrivateKeySigner::from_str(key.trim()).context("invalid private key")
    }
}
