//! Contract addresses recorded by `hardhat-deploy`.
//!
//! Each deployed contract leaves an artifact at
//! `<deployments>/<network>/<ContractName>.json` whose `address` field is the
//! deployed address.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use alloy::primitives::Address;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const GOVERNANCE_CONTRACT: &str = "FractalGovernance";
pub const TOKEN_CONTRACT: &str = "SBXToken";

#[derive(Error, Debug)]
pub enum DeploymentError {
    #[error("Could not read deployment artifact {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed deployment artifact {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid address {address:?} in {path}")]
    InvalidAddress { path: PathBuf, address: String },
}

#[derive(Deserialize)]
struct Artifact {
    address: String,
}

/// A single network's directory of deployment artifacts.
#[derive(Debug, Clone)]
pub struct Deployments {
    dir: PathBuf,
}

impl Deployments {
    pub fn new(root: impl AsRef<Path>, network: &str) -> Self {
        Self {
            dir: root.as_ref().join(network),
        }
    }

    pub fn artifact_path(&self, contract: &str) -> PathBuf {
        self.dir.join(format!("{contract}.json"))
    }

    /// Looks up the deployed address of `contract`.
    pub fn address(&self, contract: &str) -> Result<Address, DeploymentError> {
        let path = self.artifact_path(contract);
        debug!(contract, path = %path.display(), "Reading deployment artifact");

        let contents = std::fs::read_to_string(&path).map_err(|source| DeploymentError::Read {
            path: path.clone(),
            source,
        })?;
        let artifact: Artifact =
            serde_json::from_str(&contents).map_err(|source| DeploymentError::Malformed {
                path: path.clone(),
                source,
            })?;

        Address::from_str(&artifact.address).map_err(|_| DeploymentError::InvalidAddress {
            path,
            address: artifact.address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_artifact(root: &Path, network: &str, contract: &str, contents: &str) {
        let dir = root.join(network);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{contract}.json")), contents).unwrap();
    }

    #[test]
    fn reads_address_from_artifact() {
        let root = tempfile::tempdir().unwrap();
        write_artifact(
            root.path(),
            "sepolia",
            GOVERNANCE_CONTRACT,
            r#"{
                "address": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
                "abi": [],
                "transactionHash": "0x00"
            }"#,
        );

        let deployments = Deployments::new(root.path(), "sepolia");
        let address = deployments.address(GOVERNANCE_CONTRACT).unwrap();
        assert_eq!(
            address,
            Address::from_str("0x5fbdb2315678afecb367f032d93f642f64180aa3").unwrap()
        );
    }

    #[test]
    fn missing_artifact_is_a_read_error() {
        let root = tempfile::tempdir().unwrap();
        let deployments = Deployments::new(root.path(), "localhost");

        let err = deployments.address(TOKEN_CONTRACT).unwrap_err();
        assert!(matches!(err, DeploymentError::Read { .. }));
        assert!(err.to_string().contains("SBXToken.json"));
    }

    #[test]
    fn artifact_without_address_is_malformed() {
        let root = tempfile::tempdir().unwrap();
        write_artifact(root.path(), "localhost", TOKEN_CONTRACT, r#"{ "abi": [] }"#);

        let deployments = Deployments::new(root.path(), "localhost");
        assert!(matches!(
            deployments.address(TOKEN_CONTRACT),
            Err(DeploymentError::Malformed { .. })
        ));
    }

    #[test]
    fn artifact_with_garbage_address_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        write_artifact(
            root.path(),
            "localhost",
            TOKEN_CONTRACT,
            r#"{ "address": "not-an-address" }"#,
        );

        let deployments = Deployments::new(root.path(), "localhost");
        assert!(matches!(
            deployments.address(TOKEN_CONTRACT),
            Err(DeploymentError::InvalidAddress { .. })
        ));
    }
}
