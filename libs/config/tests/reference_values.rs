//! Reference registry values and load-time invariants

use aln_config::{
    governance_address, reference, ApiTier, BciSafetyLevel, GovernanceAddress, NanoswarmClass,
    ProposalKind, RegulatoryRegime, Service, Subsystem, TpsTarget, TreasuryRoutingPurpose,
};

#[test]
fn test_reference_validates() {
    reference().validate().expect("reference registry must be valid");
}

#[test]
fn test_network_values() {
    let network = &reference().network;
    assert_eq!(network.block_time_ms, 5_000);
    assert_eq!(network.max_transactions_per_block, 1_000);

    let gas = network.gas_limits;
    assert_eq!((gas.min, gas.max, gas.block_limit), (21_000, 10_000_000, 30_000_000));
    assert!(gas.min <= gas.max && gas.max <= gas.block_limit);

    let price = network.gas_price;
    assert_eq!((price.minimum, price.default, price.maximum), (1, 100, 1_000_000));
}

#[test]
fn test_governance_values() {
    let periods = reference().governance;
    assert_eq!(periods.min_voting, 1_000);
    assert_eq!(periods.default_voting, 17_280);
    assert_eq!(periods.max_voting, 100_000);
    assert!(periods.min_voting <= periods.default_voting);
    assert!(periods.default_voting <= periods.max_voting);

    for kind in ProposalKind::ALL {
        let req = reference().requirement(*kind);
        assert!(req.quorum > 0.0 && req.quorum <= 1.0, "{} quorum", kind);
        assert!(req.threshold > 0.0 && req.threshold <= 1.0, "{} threshold", kind);
    }
}

#[test]
fn test_tps_targets() {
    let expected = [
        (Subsystem::ChatRouter, 10_000, 100_000),
        (Subsystem::Wallet, 15_000, 150_000),
        (Subsystem::Governance, 5_000, 50_000),
        (Subsystem::Agent, 8_000, 80_000),
        (Subsystem::Migration, 2_000, 10_000),
        (Subsystem::TotalNetwork, 200_000, 500_000),
    ];

    for (subsystem, baseline, burst) in expected {
        let target = reference().tps_target(subsystem);
        assert_eq!(target, TpsTarget::new(baseline, burst), "{}", subsystem);
        assert!(target.burst >= target.baseline);
    }
}

#[test]
fn test_chat_limits_and_retention() {
    let limits = reference().chat_limits;
    assert_eq!(limits.max_chat_context_id_length, 36);
    assert_eq!(limits.max_transcript_hash_length, 64);
    assert_eq!(limits.max_jurisdiction_tags, 10);
    assert_eq!(reference().audit_retention_ms, 7 * 365 * 24 * 60 * 60 * 1000);
}

#[test]
fn test_safety_limits() {
    let safety = reference().safety;
    assert_eq!(safety.max_uint64, u64::MAX);
    assert_eq!(safety.min_amount, 0);
    assert_eq!(safety.max_transfer_amount, 1_000_000_000_000_000_000);
    assert_eq!(safety.max_delegation, 10_000_000_000_000_000_000);
}

#[test]
fn test_ports_rate_limits_and_policies() {
    let registry = reference();
    let ports: Vec<u16> = Service::ALL.iter().map(|s| registry.port(*s)).collect();
    assert_eq!(ports, [3000, 3001, 8080, 9090]);

    let limits: Vec<u32> = ApiTier::ALL.iter().map(|t| registry.rate_limit(*t)).collect();
    assert_eq!(limits, [1_000, 10_000, 50_000, 100]);

    assert_eq!(registry.policy_version(RegulatoryRegime::Jfmip), "24-01");
    assert_eq!(registry.policy_version(RegulatoryRegime::Fatf), "R16-2019");
}

#[test]
fn test_keyed_categories_parse_their_keys() {
    for kind in ProposalKind::ALL {
        assert_eq!(kind.as_str().parse::<ProposalKind>().unwrap(), *kind);
    }
    assert!("parameter_change".parse::<ProposalKind>().is_err());

    let err = "SOMETHING_ELSE".parse::<Subsystem>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown subsystem: SOMETHING_ELSE");

    assert_eq!(TreasuryRoutingPurpose::ALL.len(), 3);
    assert_eq!(NanoswarmClass::ALL.len(), 4);
    assert_eq!(BciSafetyLevel::ALL.len(), 3);
}

#[test]
fn test_governance_addresses() {
    for addr in GovernanceAddress::ALL {
        assert_eq!(governance_address(addr.as_str()), Some(addr.address()));
    }
    assert_eq!(
        governance_address("POLICY_REGISTRY"),
        Some("aln1policy000000000000000000000000000")
    );
    assert_eq!(governance_address("UNKNOWN"), None);
}

#[test]
fn test_registry_serializes() {
    let json = serde_json::to_value(reference()).unwrap();
    assert_eq!(json["treasury"]["address"], "ALN18sd2ujv24ual9c9pshtxys6j8knh6xaek9z83t");
    assert_eq!(json["treasury"]["is_live"], false);
    assert_eq!(json["safety"]["max_uint64"], "18446744073709551615");
    assert_eq!(json["jurisdictions"].as_array().unwrap().len(), 9);

    let toml = toml::to_string(reference()).unwrap();
    assert!(toml.contains("block_time_ms = 5000"));
}
