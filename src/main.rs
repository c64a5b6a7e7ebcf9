use std::process::ExitCode;

use alloy::primitives::TxHash;
use alloy::providers::ProviderBuilder;
use anyhow::Context as _;
use fractal_propose::submission::{EXIT_FAILURE, dry_run};
use fractal_propose::{Config, Fractal, RpcSubmitter, propose, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing `.env` file is fine, configuration can come from the environment
    dotenv::dotenv().ok();

    // Logs go to stderr, stdout only carries the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::parse() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:?}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if config.dry_run {
        return match dry_run(&config) {
            Ok(calldata) => {
                println!("{calldata}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                ExitCode::from(EXIT_FAILURE)
            }
        };
    }

    let outcome = run(config).await;
    ExitCode::from(report(
        &outcome,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    ))
}

async fn run(config: Config) -> anyhow::Result<TxHash> {
    let fractal = Fractal::genesis(config.token_decimals)?;
    let signer = config
        .signer
        .context("a private key is required to submit the proposal")?;
    let rpc_url = config
        .rpc_url
        .context("an RPC url is required to submit the proposal")?;

    info!(
        proposer = %signer.address(),
        %rpc_url,
        "Connecting to chain"
    );
    let provider = ProviderBuilder::new().wallet(signer).connect_http(rpc_url);

    let mut submitter = RpcSubmitter::new(provider, config.governance_address);
    propose(
        &mut submitter,
        config.governance_address,
        config.token_address,
        &fractal,
    )
    .await
}

