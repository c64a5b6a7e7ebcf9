pub mod calldata;
pub mod config;
pub mod deployments;
pub mod proposal;
pub mod submission;

pub use calldata::{ProposalCall, encode_mint};
pub use config::Config;
pub use proposal::Fractal;
pub use submission::{RpcSubmitter, SubmitProposal, propose, report};
