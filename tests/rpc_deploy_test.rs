//! End-to-end deployment against a local anvil node.
//!
//! Ignored by default: run with `cargo test -- --ignored` when `anvil` is on PATH.

use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::providers::{Provider, ProviderBuilder};
use borrow_lowb_deployer::deploy::{select_and_deploy, ContractArtifact, DeploymentExecutor, RpcExecutor};
use borrow_lowb_deployer::{
    ActiveSelection, Config, DeployError, DeploymentRecord, DeploymentRequest, DeploymentStatus,
    Network, NetworkProfile, ProfileRegistry,
};
use std::path::Path;

// anvil's first default account
const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

// Init code that returns its trailing 64 bytes (the constructor args) as runtime code:
// PUSH1 0x40 DUP1 CODESIZE SUB PUSH1 0 CODECOPY PUSH1 0x40 PUSH1 0 RETURN
const ECHO_ARGS_BYTECODE: &str = "0x604080380360003960406000f3";

// INVALID opcode: the creation always fails
const REVERTING_BYTECODE: &str = "0xfe";

fn artifact(bytecode: &str) -> ContractArtifact {
    ContractArtifact::from_json(
        Path::new("BorrowLowb.json"),
        "BorrowLowb",
        &format!(r#"{{ "contractName": "BorrowLowb", "bytecode": "{bytecode}" }}"#),
    )
    .unwrap()
}

fn config_for(anvil: &AnvilInstance, receipt_timeout_secs: u64) -> Config {
    let endpoint = anvil.endpoint();
    Config::from_lookup(move |key| match key {
        "RPC_URL" => Some(endpoint.clone()),
        "PRIVATE_KEY" => Some(DEV_KEY.to_string()),
        "RECEIPT_TIMEOUT_SECS" => Some(receipt_timeout_secs.to_string()),
        _ => None,
    })
    .unwrap()
}

fn testnet_request() -> DeploymentRequest {
    DeploymentRequest::for_profile(&NetworkProfile::builtin(Network::Testnet))
}

#[tokio::test]
#[ignore = "requires anvil"]
async fn deploys_on_matching_chain_with_constructor_args() {
    let anvil = Anvil::new().chain_id(97).try_spawn().unwrap();
    let config = config_for(&anvil, 30);
    let executor = RpcExecutor::new(&config, Network::Testnet, artifact(ECHO_ARGS_BYTECODE)).unwrap();

    let selection = ActiveSelection::resolve(Some("testnet"), &ProfileRegistry::builtin()).unwrap();
    let result = select_and_deploy(&selection, &executor).await;
    let outcome = result.as_ref().unwrap();

    assert!(!outcome.simulated);
    assert!(outcome.tx_hash.is_some());
    assert!(outcome.gas_used.unwrap_or_default() > 0);
    let contract_address = outcome.contract_address.expect("receipt carries contract address");

    let provider = ProviderBuilder::new().on_http(anvil.endpoint_url());
    let code = provider.get_code_at(contract_address).await.unwrap();
    let expected = testnet_request().encoded_constructor_args();
    assert_eq!(&code[..], &expected[..]);
    assert_eq!(&code[12..32], selection.profile().lp_address.as_slice());
    assert_eq!(&code[44..64], selection.profile().router_address.as_slice());

    let record = DeploymentRecord::from_result(selection.profile(), &result);
    assert_eq!(record.status, DeploymentStatus::Success);
    assert_eq!(record.chain_id, 97);
}

#[tokio::test]
#[ignore = "requires anvil"]
async fn chain_mismatch_sends_nothing() {
    let anvil = Anvil::new().chain_id(1337).try_spawn().unwrap();
    let config = config_for(&anvil, 30);
    let executor = RpcExecutor::new(&config, Network::Testnet, artifact(ECHO_ARGS_BYTECODE)).unwrap();

    let err = executor.deploy(&testnet_request()).await.unwrap_err();
    assert!(matches!(
        err,
        DeployError::ChainMismatch { expected: 97, actual: 1337, .. }
    ));
    assert!(err.is_preflight());

    let provider = ProviderBuilder::new().on_http(anvil.endpoint_url());
    let nonce = provider.get_transaction_count(executor.deployer()).await.unwrap();
    assert_eq!(nonce, 0);
}

#[tokio::test]
#[ignore = "requires anvil"]
async fn failed_creation_is_an_executor_error() {
    let anvil = Anvil::new().chain_id(97).try_spawn().unwrap();
    let config = config_for(&anvil, 30);
    let executor = RpcExecutor::new(&config, Network::Testnet, artifact(REVERTING_BYTECODE)).unwrap();

    let err = executor.deploy(&testnet_request()).await.unwrap_err();
    match err {
        DeployError::Executor { contract, .. } => assert_eq!(contract, "BorrowLowb"),
        other => panic!("expected executor failure, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires anvil"]
async fn missing_receipt_times_out() {
    let anvil = Anvil::new().chain_id(97).arg("--no-mining").try_spawn().unwrap();
    let config = config_for(&anvil, 10);
    assert_eq!(config.receipt_timeout_secs, 10);
    let executor = RpcExecutor::new(&config, Network::Testnet, artifact(ECHO_ARGS_BYTECODE)).unwrap();

    let err = executor.deploy(&testnet_request()).await.unwrap_err();
    match err {
        DeployError::Executor { message, .. } => {
            assert!(message.contains("no receipt"), "{message}");
            assert!(message.contains("10 seconds"), "{message}");
        }
        other => panic!("expected receipt timeout, got {other:?}"),
    }
}
