#![cfg(test)]
//! Legacy-default seeding and upgrade-survival behavior.

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Ledger},
    Address, Env,
};

use crate::test::{MockRoles, MockRolesClient};
use crate::{GovernanceParamsContract, GovernanceParamsContractClient, ParamKind, ProposalKind};

fn set_sequence(env: &Env, sequence: u32) {
    env.ledger().with_mut(|li| {
        li.sequence_number = sequence;
    });
}

fn setup(env: &Env) -> (GovernanceParamsContractClient<'_>, Address, Address) {
    let contract_id = env.register(GovernanceParamsContract {}, ());
    let client = GovernanceParamsContractClient::new(env, &contract_id);

    let roles_id = env.register(MockRoles {}, ());
    let roles = MockRolesClient::new(env, &roles_id);

    let governance = Address::generate(env);
    let upgrader = Address::generate(env);

    env.mock_all_auths();
    client.init(&roles_id);
    roles.grant(&governance, &symbol_short!("GOVERN"));
    roles.grant(&upgrader, &symbol_short!("UPGRADER"));

    (client, governance, upgrader)
}

#[test]
fn test_legacy_default_resolves_pre_history() {
    let env = Env::default();
    let (client, governance, upgrader) = setup(&env);

    client
        .seed_legacy_default(&ParamKind::QuorumNumerator, &12, &upgrader);
    client
        .register_proposal_kind(&ProposalKind::Standard, &500, &governance);

    // No checkpoints yet: every timepoint resolves to the seeded value.
    assert_eq!(
        client
            .value_at(&ParamKind::QuorumNumerator, &ProposalKind::Standard, &0),
        12
    );
    assert_eq!(client.quorum_numerator(&ProposalKind::Standard), 12);

    // A checkpoint at sequence 50 does not disturb pre-history queries.
    set_sequence(&env, 50);
    client
        .set_quorum_numerator(&ProposalKind::Standard, &20, &governance);
    assert_eq!(
        client
            .value_at(&ParamKind::QuorumNumerator, &ProposalKind::Standard, &10),
        12
    );
    assert_eq!(
        client
            .value_at(&ParamKind::QuorumNumerator, &ProposalKind::Standard, &50),
        20
    );
}

#[test]
fn test_legacy_default_applies_to_every_kind() {
    let env = Env::default();
    let (client, _governance, upgrader) = setup(&env);

    client
        .seed_legacy_default(&ParamKind::VotingThreshold, &70, &upgrader);

    assert_eq!(client.voting_threshold(&ProposalKind::Standard), 70);
    assert_eq!(client.voting_threshold(&ProposalKind::Grant), 70);
    // Other parameters keep their hard defaults.
    assert_eq!(client.required_level(&ProposalKind::Standard), 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #8)")]
fn test_seed_twice_rejected() {
    let env = Env::default();
    let (client, _governance, upgrader) = setup(&env);

    client
        .seed_legacy_default(&ParamKind::QuorumNumerator, &12, &upgrader);
    client
        .seed_legacy_default(&ParamKind::QuorumNumerator, &13, &upgrader);
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")]
fn test_seed_after_checkpoints_rejected() {
    let env = Env::default();
    let (client, governance, upgrader) = setup(&env);

    client
        .register_proposal_kind(&ProposalKind::Grant, &800, &governance);
    set_sequence(&env, 30);
    client
        .set_quorum_numerator(&ProposalKind::Grant, &6, &governance);

    // History exists under the grant kind, so the seed for this parameter
    // must not clobber it, regardless of proposal kind.
    client
        .seed_legacy_default(&ParamKind::QuorumNumerator, &12, &upgrader);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_seed_requires_upgrader_capability() {
    let env = Env::default();
    let (client, governance, _upgrader) = setup(&env);

    // Governance alone is not enough for the migration routine.
    client
        .seed_legacy_default(&ParamKind::QuorumNumerator, &12, &governance);
}

#[test]
fn test_history_survives_simulated_upgrade() {
    let env = Env::default();
    let (client, governance, _upgrader) = setup(&env);

    client
        .register_proposal_kind(&ProposalKind::Standard, &500, &governance);

    set_sequence(&env, 100);
    client
        .set_quorum_numerator(&ProposalKind::Standard, &8, &governance);

    // Simulated upgrade: sequences advance, no new checkpoint is written,
    // and the schema version the proxy validates is exposed.
    set_sequence(&env, 200);
    assert_eq!(client.schema_version(), 2);
    assert_eq!(
        client
            .value_at(&ParamKind::QuorumNumerator, &ProposalKind::Standard, &100),
        8
    );
    assert_eq!(client.quorum_numerator(&ProposalKind::Standard), 8);
}
