#![cfg(test)]

//! Deposit-escrow tests run against the real governance-params contract so
//! the threshold snapshot exercises the actual cross-contract cap read.

use soroban_sdk::{symbol_short, testutils::Address as _, token, Address, Env, String, Vec};

use governance_params_contract::{
    GovernanceParamsContract, GovernanceParamsContractClient, ProposalKind as ParamsProposalKind,
};

use crate::helper::FN_TREASURY_TRANSFER;
use crate::test::{MockGovernor, MockGovernorClient, MockRoles, MockRolesClient};
use crate::{GrantEscrowContract, GrantEscrowContractClient, ProposalAction, ProposalKind};

const GRANT_DEPOSIT_CAP: i128 = 1_000;

struct DepositSetup<'a> {
    client: GrantEscrowContractClient<'a>,
    params: GovernanceParamsContractClient<'a>,
    governor: MockGovernorClient<'a>,
    token: token::Client<'a>,
    token_admin: token::StellarAssetClient<'a>,
    governance: Address,
    proposer: Address,
    receiver: Address,
}

fn setup(env: &Env) -> DepositSetup<'_> {
    // Treasury authorization for fund_grant happens in a nested frame.
    env.mock_all_auths_allowing_non_root_auth();

    let roles_id = env.register(MockRoles, ());
    let roles = MockRolesClient::new(env, &roles_id);
    let governor_id = env.register(MockGovernor, ());
    let governor = MockGovernorClient::new(env, &governor_id);

    let params_id = env.register(GovernanceParamsContract, ());
    let params = GovernanceParamsContractClient::new(env, &params_id);
    params.init(&roles_id);

    let governance = Address::generate(env);
    roles.grant(&governance, &symbol_short!("GOVERN"));
    params.register_proposal_kind(&ParamsProposalKind::Grant, &GRANT_DEPOSIT_CAP, &governance);

    let token_admin = Address::generate(env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token = token::Client::new(env, &token_contract.address());
    let token_admin_client = token::StellarAssetClient::new(env, &token_contract.address());

    let treasury = Address::generate(env);
    token_admin_client.mint(&treasury, &1_000_000);

    let contract_id = env.register(GrantEscrowContract, ());
    let client = GrantEscrowContractClient::new(env, &contract_id);
    client.init(&governor_id, &roles_id, &params_id, &treasury, &token_contract.address(), &0);

    DepositSetup {
        client,
        params,
        governor,
        token,
        token_admin: token_admin_client,
        governance,
        proposer: Address::generate(env),
        receiver: Address::generate(env),
    }
}

fn create_grant(env: &Env, s: &DepositSetup, proposal_id: u64, amounts: &[i128]) {
    let mut amount_vec = Vec::new(env);
    let mut actions = Vec::new(env);
    for amount in amounts {
        amount_vec.push_back(*amount);
        actions.push_back(ProposalAction {
            target: Address::generate(env),
            function: FN_TREASURY_TRANSFER,
        });
    }
    s.client.create_milestones(
        &proposal_id,
        &String::from_str(env, "ipfs://grant-details"),
        &s.proposer,
        &s.receiver,
        &amount_vec,
        &actions,
        &s.governance,
    );
}

#[test]
fn snapshot_clamps_dynamic_value_to_cap() {
    let env = Env::default();
    let s = setup(&env);

    let snapshot = s
        .client
        .snapshot_threshold(&1, &ProposalKind::Grant, &5_000, &s.governance);
    assert_eq!(snapshot, GRANT_DEPOSIT_CAP);

    let record = s.client.deposit_record(&1);
    assert_eq!(record.proposal_kind, ProposalKind::Grant);
    assert_eq!(record.snapshot_threshold, GRANT_DEPOSIT_CAP);
    assert_eq!(record.total_deposited, 0);
}

#[test]
fn snapshot_keeps_dynamic_value_below_cap() {
    let env = Env::default();
    let s = setup(&env);

    let snapshot = s
        .client
        .snapshot_threshold(&1, &ProposalKind::Grant, &400, &s.governance);
    assert_eq!(snapshot, 400);
}

#[test]
fn snapshot_survives_later_parameter_changes() {
    let env = Env::default();
    let s = setup(&env);

    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &400, &s.governance);

    // Moving the base parameter afterwards never rewrites a frozen snapshot.
    s.params
        .set_deposit_threshold_base(&ParamsProposalKind::Grant, &9_999, &s.governance);
    assert_eq!(s.client.deposit_record(&1).snapshot_threshold, 400);
}

// Scenario: two depositors cross the snapshot threshold together.
#[test]
fn deposits_accumulate_until_threshold_reached() {
    let env = Env::default();
    let s = setup(&env);

    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &300, &s.governance);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    s.token_admin.mint(&alice, &500);
    s.token_admin.mint(&bob, &500);

    s.client.deposit(&1, &alice, &100);
    assert!(!s.client.is_threshold_reached(&1));
    assert_eq!(s.client.deposit_of(&1, &alice), 100);

    s.client.deposit(&1, &bob, &150);
    assert!(!s.client.is_threshold_reached(&1));

    s.client.deposit(&1, &alice, &50);
    assert!(s.client.is_threshold_reached(&1));

    assert_eq!(s.client.deposit_of(&1, &alice), 150);
    assert_eq!(s.client.deposit_of(&1, &bob), 150);
    assert_eq!(s.client.deposit_record(&1).total_deposited, 300);
    assert_eq!(s.token.balance(&s.client.address), 300);
    assert_eq!(s.token.balance(&alice), 350);
    assert_eq!(s.token.balance(&bob), 350);
}

#[test]
#[should_panic(expected = "Error(Contract, #19)")]
fn deposit_before_snapshot_rejected() {
    let env = Env::default();
    let s = setup(&env);

    let alice = Address::generate(&env);
    s.token_admin.mint(&alice, &500);
    s.client.deposit(&1, &alice, &100);
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")]
fn zero_deposit_rejected() {
    let env = Env::default();
    let s = setup(&env);

    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &300, &s.governance);
    let alice = Address::generate(&env);
    s.client.deposit(&1, &alice, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")]
fn deposit_tally_overflow_rejected() {
    let env = Env::default();
    let s = setup(&env);

    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &300, &s.governance);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    s.token_admin.mint(&alice, &i128::MAX);
    s.token_admin.mint(&bob, &500);

    s.client.deposit(&1, &alice, &i128::MAX);
    s.client.deposit(&1, &bob, &1);
}

#[test]
#[should_panic(expected = "Error(Contract, #20)")]
fn snapshot_twice_rejected() {
    let env = Env::default();
    let s = setup(&env);

    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &300, &s.governance);
    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &300, &s.governance);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn snapshot_requires_governance_capability() {
    let env = Env::default();
    let s = setup(&env);

    let stranger = Address::generate(&env);
    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &300, &stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #18)")]
fn grantee_cannot_deposit_own_grant() {
    let env = Env::default();
    let s = setup(&env);

    create_grant(&env, &s, 1, &[100, 200]);
    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &300, &s.governance);

    s.token_admin.mint(&s.receiver, &500);
    s.client.deposit(&1, &s.receiver, &100);
}

#[test]
fn grantee_may_deposit_on_other_proposals() {
    let env = Env::default();
    let s = setup(&env);

    create_grant(&env, &s, 1, &[100, 200]);
    s.params
        .register_proposal_kind(&ParamsProposalKind::Standard, &500, &s.governance);
    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &300, &s.governance);
    s.client
        .snapshot_threshold(&2, &ProposalKind::Standard, &200, &s.governance);

    s.token_admin.mint(&s.receiver, &500);
    s.client.deposit(&2, &s.receiver, &150);

    assert_eq!(s.client.deposit_of(&2, &s.receiver), 150);
    assert_eq!(s.client.deposit_record(&2).total_deposited, 150);
}

#[test]
#[should_panic(expected = "Error(Contract, #19)")]
fn threshold_query_without_record_rejected() {
    let env = Env::default();
    let s = setup(&env);

    s.client.is_threshold_reached(&42);
}

// Deposits and the milestone lifecycle share the proposal id but use
// separate records; funding a grant leaves deposit tallies untouched.
#[test]
fn deposits_independent_of_grant_funding() {
    let env = Env::default();
    let s = setup(&env);

    create_grant(&env, &s, 1, &[100, 200]);
    s.client
        .snapshot_threshold(&1, &ProposalKind::Grant, &300, &s.governance);

    let alice = Address::generate(&env);
    s.token_admin.mint(&alice, &500);
    s.client.deposit(&1, &alice, &300);

    s.governor.set_state(&1, &7);
    s.client.fund_grant(&1, &s.governance);

    assert_eq!(s.client.deposit_record(&1).total_deposited, 300);
    assert!(s.client.is_threshold_reached(&1));
    assert_eq!(s.client.escrow_balance(&1), 300);
}
