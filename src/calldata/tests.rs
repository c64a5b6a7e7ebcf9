use alloy::primitives::{Address, B256, U256, address, keccak256};
use alloy::sol_types::{SolCall, SolValue};

use super::{IFractalGovernance, ISbxToken, ProposalCall, encode_mint};
use crate::proposal::{DEFAULT_TOKEN_DECIMALS, Fractal};

const GOVERNANCE: Address = address!("0x5fbdb2315678afecb367f032d93f642f64180aa3");
const TOKEN: Address = address!("0xe7f1725e7734ce288f8367e1bb143e90bb3f0512");

fn genesis_call() -> ProposalCall {
    let fractal = Fractal::genesis(DEFAULT_TOKEN_DECIMALS).expect("genesis fractal");
    ProposalCall::new(GOVERNANCE, TOKEN, &fractal)
}

#[test]
fn mint_calldata_decodes_to_governance_and_allocation() {
    let fractal = Fractal::genesis(DEFAULT_TOKEN_DECIMALS).unwrap();
    let data = encode_mint(GOVERNANCE, fractal.allocation);

    assert_eq!(&data[..4], &[0x40, 0xc1, 0x0f, 0x19]);
    // selector + two static words
    assert_eq!(data.len(), 4 + 32 + 32);

    let decoded = ISbxToken::mintCall::abi_decode(&data).expect("decode mint");
    assert_eq!(decoded.to, GOVERNANCE);
    assert_eq!(decoded.amount, fractal.allocation);
}

#[test]
fn propose_arguments_have_a_single_entry() {
    let call = genesis_call();

    assert_eq!(call.targets.len(), 1);
    assert_eq!(call.values.len(), 1);
    assert_eq!(call.calldatas.len(), 1);

    assert_eq!(call.targets[0], TOKEN);
    assert_eq!(call.values[0], U256::ZERO);
    assert!(call.description.contains("Genesis Distribution"));
}

#[test]
fn propose_calldata_round_trips_arguments() {
    let call = genesis_call();
    let data = call.encode_propose();

    let selector = keccak256("propose(address[],uint256[],bytes[],string)");
    assert_eq!(&data[..4], &selector[..4]);

    let decoded = IFractalGovernance::proposeCall::abi_decode(&data).expect("decode propose");
    assert_eq!(decoded.targets, call.targets);
    assert_eq!(decoded.values, call.values);
    assert_eq!(decoded.calldatas, call.calldatas);
    assert_eq!(decoded.description, call.description);

    let mint = ISbxToken::mintCall::abi_decode(&decoded.calldatas[0]).expect("decode mint");
    assert_eq!(mint.to, GOVERNANCE);
}

#[test]
fn proposal_id_hashes_arguments_with_description_hash() {
    let call = genesis_call();
    let description_hash: B256 = keccak256(call.description.as_bytes());

    let encoded = (
        call.targets.clone(),
        call.values.clone(),
        call.calldatas.clone(),
        description_hash,
    )
        .abi_encode_params();
    let expected = U256::from_be_bytes(*keccak256(encoded));

    assert_eq!(call.proposal_id(), expected);
}

#[test]
fn proposal_id_depends_on_description() {
    let call = genesis_call();
    let mut edited = call.clone();
    edited.description.push_str("\n#amended");

    assert_ne!(call.proposal_id(), edited.proposal_id());
}
