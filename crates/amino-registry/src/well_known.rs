//! # Generated Codecs for the Well-Known Names
//!
//! [`amino_codecs!`](crate::amino_codecs) turns a list of names into
//! `encode_*` / `decode_*` function pairs that move JSON text in and out of
//! Amino through a sealed [`Registry`](crate::Registry). This module applies
//! it to every name in [`names`](crate::names); applications can invoke the
//! macro for their own types the same way.
//!
//! Each function only succeeds if the registry's catalog declares the type.

use crate::names::*;

/// Generate `encode_*(registry, json, length_prefixed)` and
/// `decode_*(registry, amino, length_prefixed)` for each `name`.
///
/// ```
/// use amino_registry::{amino_codecs, Catalog, Registry};
///
/// amino_codecs! {
///     encode_coin, decode_coin => "Coin";
/// }
///
/// let catalog = Catalog::from_yaml_str(
///     "types:\n  - name: Coin\n    fields:\n      - { name: denom, kind: string }\n",
/// )
/// .unwrap();
/// let registry = Registry::from_catalog(&catalog).unwrap();
/// let amino = encode_coin(&registry, br#"{"denom":"uluna"}"#, false).unwrap();
/// assert_eq!(amino.to_hex(), "0A05756C756E61");
/// assert_eq!(decode_coin(&registry, amino.as_bytes(), false).unwrap(), br#"{"denom":"uluna"}"#);
/// ```
#[macro_export]
macro_rules! amino_codecs {
    ($($encode:ident, $decode:ident => $name:expr;)*) => {
        $(
            #[doc = concat!("Encode JSON as ", stringify!($name), ".")]
            pub fn $encode(
                registry: &$crate::Registry,
                json: &[u8],
                length_prefixed: bool,
            ) -> ::std::result::Result<$crate::AminoBytes, $crate::RegistryError> {
                registry.encode_json($name, json, length_prefixed)
            }

            #[doc = concat!("Decode ", stringify!($name), " to JSON.")]
            pub fn $decode(
                registry: &$crate::Registry,
                amino: &[u8],
                length_prefixed: bool,
            ) -> ::std::result::Result<::std::vec::Vec<u8>, $crate::RegistryError> {
                registry.decode_json($name, amino, length_prefixed)
            }
        )*
    };
}

// ─── Interfaces ──────────────────────────────────────────────────────

crate::amino_codecs! {
    encode_info, decode_info => INFO;
    encode_msg, decode_msg => MSG;
    encode_tx, decode_tx => TX;
    encode_account, decode_account => ACCOUNT;
    encode_vesting_account, decode_vesting_account => VESTING_ACCOUNT;
    encode_content, decode_content => CONTENT;
    encode_blockchain_message, decode_blockchain_message => BLOCKCHAIN_MESSAGE;
    encode_consensus_message, decode_consensus_message => CONSENSUS_MESSAGE;
    encode_wal_message, decode_wal_message => WAL_MESSAGE;
    encode_pub_key, decode_pub_key => PUB_KEY;
    encode_priv_key, decode_priv_key => PRIV_KEY;
    encode_evidence_message, decode_evidence_message => EVIDENCE_MESSAGE;
    encode_mempool_message, decode_mempool_message => MEMPOOL_MESSAGE;
    encode_packet, decode_packet => PACKET;
    encode_pex_message, decode_pex_message => PEX_MESSAGE;
    encode_remote_signer_msg, decode_remote_signer_msg => REMOTE_SIGNER_MSG;
    encode_tm_event_data, decode_tm_event_data => TM_EVENT_DATA;
    encode_evidence, decode_evidence => EVIDENCE;
}

// ─── Concrete types ──────────────────────────────────────────────────

crate::amino_codecs! {
    encode_tendermint_priv_key_ledger_secp256k1, decode_tendermint_priv_key_ledger_secp256k1 => TENDERMINT_PRIV_KEY_LEDGER_SECP256K1;
    encode_crypto_keys_hd_bip44_params, decode_crypto_keys_hd_bip44_params => CRYPTO_KEYS_HD_BIP44_PARAMS;
    encode_crypto_keys_local_info, decode_crypto_keys_local_info => CRYPTO_KEYS_LOCAL_INFO;
    encode_crypto_keys_ledger_info, decode_crypto_keys_ledger_info => CRYPTO_KEYS_LEDGER_INFO;
    encode_crypto_keys_offline_info, decode_crypto_keys_offline_info => CRYPTO_KEYS_OFFLINE_INFO;
    encode_crypto_keys_multi_info, decode_crypto_keys_multi_info => CRYPTO_KEYS_MULTI_INFO;
    encode_auth_account, decode_auth_account => AUTH_ACCOUNT;
    encode_auth_base_vesting_account, decode_auth_base_vesting_account => AUTH_BASE_VESTING_ACCOUNT;
    encode_auth_continuous_vesting_account, decode_auth_continuous_vesting_account => AUTH_CONTINUOUS_VESTING_ACCOUNT;
    encode_auth_delayed_vesting_account, decode_auth_delayed_vesting_account => AUTH_DELAYED_VESTING_ACCOUNT;
    encode_auth_std_tx, decode_auth_std_tx => AUTH_STD_TX;
    encode_cosmos_sdk_base_account, decode_cosmos_sdk_base_account => COSMOS_SDK_BASE_ACCOUNT;
    encode_cosmos_sdk_base_vesting_account, decode_cosmos_sdk_base_vesting_account => COSMOS_SDK_BASE_VESTING_ACCOUNT;
    encode_cosmos_sdk_continuous_vesting_account, decode_cosmos_sdk_continuous_vesting_account => COSMOS_SDK_CONTINUOUS_VESTING_ACCOUNT;
    encode_cosmos_sdk_delayed_vesting_account, decode_cosmos_sdk_delayed_vesting_account => COSMOS_SDK_DELAYED_VESTING_ACCOUNT;
    encode_terra_msg_send, decode_terra_msg_send => TERRA_MSG_SEND;
    encode_terra_msg_multi_send, decode_terra_msg_multi_send => TERRA_MSG_MULTI_SEND;
    encode_terra_msg_verify_invariant, decode_terra_msg_verify_invariant => TERRA_MSG_VERIFY_INVARIANT;
    encode_terra_msg_withdraw_delegation_reward, decode_terra_msg_withdraw_delegation_reward => TERRA_MSG_WITHDRAW_DELEGATION_REWARD;
    encode_terra_msg_withdraw_validator_commission, decode_terra_msg_withdraw_validator_commission => TERRA_MSG_WITHDRAW_VALIDATOR_COMMISSION;
    encode_terra_msg_modify_withdraw_address, decode_terra_msg_modify_withdraw_address => TERRA_MSG_MODIFY_WITHDRAW_ADDRESS;
    encode_terra_msg_submit_proposal, decode_terra_msg_submit_proposal => TERRA_MSG_SUBMIT_PROPOSAL;
    encode_terra_msg_deposit, decode_terra_msg_deposit => TERRA_MSG_DEPOSIT;
    encode_terra_msg_vote, decode_terra_msg_vote => TERRA_MSG_VOTE;
    encode_terra_text_proposal, decode_terra_text_proposal => TERRA_TEXT_PROPOSAL;
    encode_terra_software_upgrade_proposal, decode_terra_software_upgrade_proposal => TERRA_SOFTWARE_UPGRADE_PROPOSAL;
    encode_terra_parameter_change_proposal, decode_terra_parameter_change_proposal => TERRA_PARAMETER_CHANGE_PROPOSAL;
    encode_terra_msg_ibc_transfer, decode_terra_msg_ibc_transfer => TERRA_MSG_IBC_TRANSFER;
    encode_terra_msg_ibc_receive, decode_terra_msg_ibc_receive => TERRA_MSG_IBC_RECEIVE;
    encode_terra_msg_unjail, decode_terra_msg_unjail => TERRA_MSG_UNJAIL;
    encode_terra_msg_create_validator, decode_terra_msg_create_validator => TERRA_MSG_CREATE_VALIDATOR;
    encode_terra_msg_edit_validator, decode_terra_msg_edit_validator => TERRA_MSG_EDIT_VALIDATOR;
    encode_terra_msg_delegate, decode_terra_msg_delegate => TERRA_MSG_DELEGATE;
    encode_terra_msg_undelegate, decode_terra_msg_undelegate => TERRA_MSG_UNDELEGATE;
    encode_terra_msg_begin_redelegate, decode_terra_msg_begin_redelegate => TERRA_MSG_BEGIN_REDELEGATE;
    encode_tendermint_blockchain_block_request, decode_tendermint_blockchain_block_request => TENDERMINT_BLOCKCHAIN_BLOCK_REQUEST;
    encode_tendermint_blockchain_block_response, decode_tendermint_blockchain_block_response => TENDERMINT_BLOCKCHAIN_BLOCK_RESPONSE;
    encode_tendermint_blockchain_no_block_response, decode_tendermint_blockchain_no_block_response => TENDERMINT_BLOCKCHAIN_NO_BLOCK_RESPONSE;
    encode_tendermint_blockchain_status_response, decode_tendermint_blockchain_status_response => TENDERMINT_BLOCKCHAIN_STATUS_RESPONSE;
    encode_tendermint_blockchain_status_request, decode_tendermint_blockchain_status_request => TENDERMINT_BLOCKCHAIN_STATUS_REQUEST;
    encode_tendermint_new_round_step_message, decode_tendermint_new_round_step_message => TENDERMINT_NEW_ROUND_STEP_MESSAGE;
    encode_tendermint_new_valid_block_message, decode_tendermint_new_valid_block_message => TENDERMINT_NEW_VALID_BLOCK_MESSAGE;
    encode_tendermint_proposal, decode_tendermint_proposal => TENDERMINT_PROPOSAL;
    encode_tendermint_proposal_pol, decode_tendermint_proposal_pol => TENDERMINT_PROPOSAL_POL;
    encode_tendermint_block_part, decode_tendermint_block_part => TENDERMINT_BLOCK_PART;
    encode_tendermint_vote, decode_tendermint_vote => TENDERMINT_VOTE;
    encode_tendermint_has_vote, decode_tendermint_has_vote => TENDERMINT_HAS_VOTE;
    encode_tendermint_vote_set_maj23, decode_tendermint_vote_set_maj23 => TENDERMINT_VOTE_SET_MAJ23;
    encode_tendermint_vote_set_bits, decode_tendermint_vote_set_bits => TENDERMINT_VOTE_SET_BITS;
    encode_tendermint_wal_event_data_round_state, decode_tendermint_wal_event_data_round_state => TENDERMINT_WAL_EVENT_DATA_ROUND_STATE;
    encode_tendermint_wal_msg_info, decode_tendermint_wal_msg_info => TENDERMINT_WAL_MSG_INFO;
    encode_tendermint_wal_timeout_info, decode_tendermint_wal_timeout_info => TENDERMINT_WAL_TIMEOUT_INFO;
    encode_tendermint_wal_end_height_message, decode_tendermint_wal_end_height_message => TENDERMINT_WAL_END_HEIGHT_MESSAGE;
    encode_tendermint_pub_key_ed25519, decode_tendermint_pub_key_ed25519 => TENDERMINT_PUB_KEY_ED25519;
    encode_tendermint_priv_key_ed25519, decode_tendermint_priv_key_ed25519 => TENDERMINT_PRIV_KEY_ED25519;
    encode_tendermint_pub_key_secp256k1, decode_tendermint_pub_key_secp256k1 => TENDERMINT_PUB_KEY_SECP256K1;
    encode_tendermint_priv_key_secp256k1, decode_tendermint_priv_key_secp256k1 => TENDERMINT_PRIV_KEY_SECP256K1;
    encode_tendermint_pub_key_multisig_threshold, decode_tendermint_pub_key_multisig_threshold => TENDERMINT_PUB_KEY_MULTISIG_THRESHOLD;
    encode_tendermint_evidence_evidence_list_message, decode_tendermint_evidence_evidence_list_message => TENDERMINT_EVIDENCE_EVIDENCE_LIST_MESSAGE;
    encode_tendermint_mempool_tx_message, decode_tendermint_mempool_tx_message => TENDERMINT_MEMPOOL_TX_MESSAGE;
    encode_tendermint_p2p_packet_ping, decode_tendermint_p2p_packet_ping => TENDERMINT_P2P_PACKET_PING;
    encode_tendermint_p2p_packet_pong, decode_tendermint_p2p_packet_pong => TENDERMINT_P2P_PACKET_PONG;
    encode_tendermint_p2p_packet_msg, decode_tendermint_p2p_packet_msg => TENDERMINT_P2P_PACKET_MSG;
    encode_tendermint_p2p_pex_request_message, decode_tendermint_p2p_pex_request_message => TENDERMINT_P2P_PEX_REQUEST_MESSAGE;
    encode_tendermint_p2p_pex_addrs_message, decode_tendermint_p2p_pex_addrs_message => TENDERMINT_P2P_PEX_ADDRS_MESSAGE;
    encode_tendermint_remotesigner_pub_key_request, decode_tendermint_remotesigner_pub_key_request => TENDERMINT_REMOTESIGNER_PUB_KEY_REQUEST;
    encode_tendermint_remotesigner_pub_key_response, decode_tendermint_remotesigner_pub_key_response => TENDERMINT_REMOTESIGNER_PUB_KEY_RESPONSE;
    encode_tendermint_remotesigner_sign_vote_request, decode_tendermint_remotesigner_sign_vote_request => TENDERMINT_REMOTESIGNER_SIGN_VOTE_REQUEST;
    encode_tendermint_remotesigner_signed_vote_response, decode_tendermint_remotesigner_signed_vote_response => TENDERMINT_REMOTESIGNER_SIGNED_VOTE_RESPONSE;
    encode_tendermint_remotesigner_sign_proposal_request, decode_tendermint_remotesigner_sign_proposal_request => TENDERMINT_REMOTESIGNER_SIGN_PROPOSAL_REQUEST;
    encode_tendermint_remotesigner_signed_proposal_response, decode_tendermint_remotesigner_signed_proposal_response => TENDERMINT_REMOTESIGNER_SIGNED_PROPOSAL_RESPONSE;
    encode_tendermint_remotesigner_ping_request, decode_tendermint_remotesigner_ping_request => TENDERMINT_REMOTESIGNER_PING_REQUEST;
    encode_tendermint_remotesigner_ping_response, decode_tendermint_remotesigner_ping_response => TENDERMINT_REMOTESIGNER_PING_RESPONSE;
    encode_tendermint_event_new_block, decode_tendermint_event_new_block => TENDERMINT_EVENT_NEW_BLOCK;
    encode_tendermint_event_new_block_header, decode_tendermint_event_new_block_header => TENDERMINT_EVENT_NEW_BLOCK_HEADER;
    encode_tendermint_event_tx, decode_tendermint_event_tx => TENDERMINT_EVENT_TX;
    encode_tendermint_event_round_state, decode_tendermint_event_round_state => TENDERMINT_EVENT_ROUND_STATE;
    encode_tendermint_event_new_round, decode_tendermint_event_new_round => TENDERMINT_EVENT_NEW_ROUND;
    encode_tendermint_event_complete_proposal, decode_tendermint_event_complete_proposal => TENDERMINT_EVENT_COMPLETE_PROPOSAL;
    encode_tendermint_event_vote, decode_tendermint_event_vote => TENDERMINT_EVENT_VOTE;
    encode_tendermint_event_validator_set_updates, decode_tendermint_event_validator_set_updates => TENDERMINT_EVENT_VALIDATOR_SET_UPDATES;
    encode_tendermint_event_proposal_string, decode_tendermint_event_proposal_string => TENDERMINT_EVENT_PROPOSAL_STRING;
    encode_tendermint_duplicate_vote_evidence, decode_tendermint_duplicate_vote_evidence => TENDERMINT_DUPLICATE_VOTE_EVIDENCE;
    encode_tendermint_mock_good_evidence, decode_tendermint_mock_good_evidence => TENDERMINT_MOCK_GOOD_EVIDENCE;
    encode_tendermint_mock_random_good_evidence, decode_tendermint_mock_random_good_evidence => TENDERMINT_MOCK_RANDOM_GOOD_EVIDENCE;
    encode_tendermint_mock_bad_evidence, decode_tendermint_mock_bad_evidence => TENDERMINT_MOCK_BAD_EVIDENCE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Registry};

    const KEYS: &str = r#"
interfaces:
  - name: PubKey
types:
  - name: tendermint/PubKeyEd25519
    registered: true
    implements: [PubKey]
    value: { kind: bytes, length: 32 }
"#;

    fn registry() -> Registry {
        Registry::from_catalog(&Catalog::from_yaml_str(KEYS).unwrap()).unwrap()
    }

    #[test]
    fn test_ed25519_pub_key_codec() {
        let reg = registry();
        let json = br#"{"type":"tendermint/PubKeyEd25519","value":"AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE="}"#;
        let amino = encode_tendermint_pub_key_ed25519(&reg, json, false).unwrap();
        assert_eq!(amino.to_hex(), format!("1624DE6420{}", "01".repeat(32)));

        let via_interface = encode_pub_key(&reg, json, false).unwrap();
        assert_eq!(via_interface, amino);

        let back = decode_pub_key(&reg, amino.as_bytes(), false).unwrap();
        assert_eq!(back, json.to_vec());
        let back = decode_tendermint_pub_key_ed25519(&reg, amino.as_bytes(), false).unwrap();
        assert_eq!(back, json.to_vec());
    }

    #[test]
    fn test_length_prefixed_codec() {
        let reg = registry();
        let json = br#"{"type":"tendermint/PubKeyEd25519","value":"AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE="}"#;
        let amino = encode_tendermint_pub_key_ed25519(&reg, json, true).unwrap();
        assert_eq!(&amino.as_bytes()[..1], &[0x25]);
        assert_eq!(amino.len(), 38);
    }

    #[test]
    fn test_names_absent_from_catalog_fail() {
        let reg = registry();
        assert!(matches!(
            encode_auth_std_tx(&reg, b"{}", false),
            Err(crate::RegistryError::UnknownType(_))
        ));
        assert!(matches!(
            decode_msg(&reg, &[], false),
            Err(crate::RegistryError::UnknownType(_))
        ));
    }
}
