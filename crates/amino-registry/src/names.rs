//! # Well-Known Names
//!
//! Registered names of the concrete types exchanged by Tendermint nodes,
//! Cosmos SDK clients and Terra applications. The string is the wire
//! identity: its SHA-256 yields the prefix bytes, so a single changed
//! character produces a different type.

// ─── Keys and keybase entries ────────────────────────────────────────

pub const TENDERMINT_PRIV_KEY_LEDGER_SECP256K1: &str = "tendermint/PrivKeyLedgerSecp256k1";
pub const CRYPTO_KEYS_HD_BIP44_PARAMS: &str = "crypto/keys/hd/BIP44Params";
pub const CRYPTO_KEYS_LOCAL_INFO: &str = "crypto/keys/localInfo";
pub const CRYPTO_KEYS_LEDGER_INFO: &str = "crypto/keys/ledgerInfo";
pub const CRYPTO_KEYS_OFFLINE_INFO: &str = "crypto/keys/offlineInfo";
pub const CRYPTO_KEYS_MULTI_INFO: &str = "crypto/keys/multiInfo";

// ─── Accounts and transactions ───────────────────────────────────────

pub const AUTH_ACCOUNT: &str = "auth/Account";
pub const AUTH_BASE_VESTING_ACCOUNT: &str = "auth/BaseVestingAccount";
pub const AUTH_CONTINUOUS_VESTING_ACCOUNT: &str = "auth/ContinuousVestingAccount";
pub const AUTH_DELAYED_VESTING_ACCOUNT: &str = "auth/DelayedVestingAccount";
pub const AUTH_STD_TX: &str = "auth/StdTx";
pub const COSMOS_SDK_BASE_ACCOUNT: &str = "cosmos-sdk/BaseAccount";
pub const COSMOS_SDK_BASE_VESTING_ACCOUNT: &str = "cosmos-sdk/BaseVestingAccount";
pub const COSMOS_SDK_CONTINUOUS_VESTING_ACCOUNT: &str = "cosmos-sdk/ContinuousVestingAccount";
pub const COSMOS_SDK_DELAYED_VESTING_ACCOUNT: &str = "cosmos-sdk/DelayedVestingAccount";

// ─── Terra messages and proposals ────────────────────────────────────

pub const TERRA_MSG_SEND: &str = "pay/MsgSend";
pub const TERRA_MSG_MULTI_SEND: &str = "pay/MsgMultiSend";
pub const TERRA_MSG_VERIFY_INVARIANT: &str = "crisis/MsgVerifyInvariant";
pub const TERRA_MSG_WITHDRAW_DELEGATION_REWARD: &str = "distribution/MsgWithdrawDelegationReward";
pub const TERRA_MSG_WITHDRAW_VALIDATOR_COMMISSION: &str = "distribution/MsgWithdrawValidatorCommission";
pub const TERRA_MSG_MODIFY_WITHDRAW_ADDRESS: &str = "distribution/MsgModifyWithdrawAddress";
pub const TERRA_MSG_SUBMIT_PROPOSAL: &str = "gov/MsgSubmitProposal";
pub const TERRA_MSG_DEPOSIT: &str = "gov/MsgDeposit";
pub const TERRA_MSG_VOTE: &str = "gov/MsgVote";
pub const TERRA_TEXT_PROPOSAL: &str = "gov/TextProposal";
pub const TERRA_SOFTWARE_UPGRADE_PROPOSAL: &str = "gov/SoftwareUpgradeProposal";
pub const TERRA_PARAMETER_CHANGE_PROPOSAL: &str = "gov/ParameterChangeProposal";
pub const TERRA_MSG_IBC_TRANSFER: &str = "ibc/MsgIBCTransfer";
pub const TERRA_MSG_IBC_RECEIVE: &str = "ibc/MsgIBCReceive";
pub const TERRA_MSG_UNJAIL: &str = "staking/MsgUnjail";
pub const TERRA_MSG_CREATE_VALIDATOR: &str = "staking/MsgCreateValidator";
pub const TERRA_MSG_EDIT_VALIDATOR: &str = "staking/MsgEditValidator";
pub const TERRA_MSG_DELEGATE: &str = "staking/MsgDelegate";
pub const TERRA_MSG_UNDELEGATE: &str = "staking/MsgUndelegate";
pub const TERRA_MSG_BEGIN_REDELEGATE: &str = "staking/MsgBeginRedelegate";

// ─── Block sync ──────────────────────────────────────────────────────

pub const TENDERMINT_BLOCKCHAIN_BLOCK_REQUEST: &str = "tendermint/blockchain/BlockRequest";
pub const TENDERMINT_BLOCKCHAIN_BLOCK_RESPONSE: &str = "tendermint/blockchain/BlockResponse";
pub const TENDERMINT_BLOCKCHAIN_NO_BLOCK_RESPONSE: &str = "tendermint/blockchain/NoBlockResponse";
pub const TENDERMINT_BLOCKCHAIN_STATUS_RESPONSE: &str = "tendermint/blockchain/StatusResponse";
pub const TENDERMINT_BLOCKCHAIN_STATUS_REQUEST: &str = "tendermint/blockchain/StatusRequest";

// ─── Consensus messages ──────────────────────────────────────────────

pub const TENDERMINT_NEW_ROUND_STEP_MESSAGE: &str = "tendermint/NewRoundStepMessage";
pub const TENDERMINT_NEW_VALID_BLOCK_MESSAGE: &str = "tendermint/NewValidBlockMessage";
pub const TENDERMINT_PROPOSAL: &str = "tendermint/Proposal";
pub const TENDERMINT_PROPOSAL_POL: &str = "tendermint/ProposalPOL";
pub const TENDERMINT_BLOCK_PART: &str = "tendermint/BlockPart";
pub const TENDERMINT_VOTE: &str = "tendermint/Vote";
pub const TENDERMINT_HAS_VOTE: &str = "tendermint/HasVote";
pub const TENDERMINT_VOTE_SET_MAJ23: &str = "tendermint/VoteSetMaj23";
pub const TENDERMINT_VOTE_SET_BITS: &str = "tendermint/VoteSetBits";

// ─── Consensus write-ahead log ───────────────────────────────────────

pub const TENDERMINT_WAL_EVENT_DATA_ROUND_STATE: &str = "tendermint/wal/EventDataRoundState";
pub const TENDERMINT_WAL_MSG_INFO: &str = "tendermint/wal/MsgInfo";
pub const TENDERMINT_WAL_TIMEOUT_INFO: &str = "tendermint/wal/TimeoutInfo";
pub const TENDERMINT_WAL_END_HEIGHT_MESSAGE: &str = "tendermint/wal/EndHeightMessage";

// ─── Public and private keys ─────────────────────────────────────────

pub const TENDERMINT_PUB_KEY_ED25519: &str = "tendermint/PubKeyEd25519";
pub const TENDERMINT_PRIV_KEY_ED25519: &str = "tendermint/PrivKeyEd25519";
pub const TENDERMINT_PUB_KEY_SECP256K1: &str = "tendermint/PubKeySecp256k1";
pub const TENDERMINT_PRIV_KEY_SECP256K1: &str = "tendermint/PrivKeySecp256k1";
pub const TENDERMINT_PUB_KEY_MULTISIG_THRESHOLD: &str = "tendermint/PubKeyMultisigThreshold";

// ─── Evidence, mempool and p2p ───────────────────────────────────────

pub const TENDERMINT_EVIDENCE_EVIDENCE_LIST_MESSAGE: &str = "tendermint/evidence/EvidenceListMessage";
pub const TENDERMINT_MEMPOOL_TX_MESSAGE: &str = "tendermint/mempool/TxMessage";
pub const TENDERMINT_P2P_PACKET_PING: &str = "tendermint/p2p/PacketPing";
pub const TENDERMINT_P2P_PACKET_PONG: &str = "tendermint/p2p/PacketPong";
pub const TENDERMINT_P2P_PACKET_MSG: &str = "tendermint/p2p/PacketMsg";
pub const TENDERMINT_P2P_PEX_REQUEST_MESSAGE: &str = "tendermint/p2p/PexRequestMessage";
pub const TENDERMINT_P2P_PEX_ADDRS_MESSAGE: &str = "tendermint/p2p/PexAddrsMessage";

// ─── Remote signer ───────────────────────────────────────────────────

pub const TENDERMINT_REMOTESIGNER_PUB_KEY_REQUEST: &str = "tendermint/remotesigner/PubKeyRequest";
pub const TENDERMINT_REMOTESIGNER_PUB_KEY_RESPONSE: &str = "tendermint/remotesigner/PubKeyResponse";
pub const TENDERMINT_REMOTESIGNER_SIGN_VOTE_REQUEST: &str = "tendermint/remotesigner/SignVoteRequest";
pub const TENDERMINT_REMOTESIGNER_SIGNED_VOTE_RESPONSE: &str = "tendermint/remotesigner/SignedVoteResponse";
pub const TENDERMINT_REMOTESIGNER_SIGN_PROPOSAL_REQUEST: &str = "tendermint/remotesigner/SignProposalRequest";
pub const TENDERMINT_REMOTESIGNER_SIGNED_PROPOSAL_RESPONSE: &str = "tendermint/remotesigner/SignedProposalResponse";
pub const TENDERMINT_REMOTESIGNER_PING_REQUEST: &str = "tendermint/remotesigner/PingRequest";
pub const TENDERMINT_REMOTESIGNER_PING_RESPONSE: &str = "tendermint/remotesigner/PingResponse";

// ─── Events ──────────────────────────────────────────────────────────

pub const TENDERMINT_EVENT_NEW_BLOCK: &str = "tendermint/event/NewBlock";
pub const TENDERMINT_EVENT_NEW_BLOCK_HEADER: &str = "tendermint/event/NewBlockHeader";
pub const TENDERMINT_EVENT_TX: &str = "tendermint/event/Tx";
pub const TENDERMINT_EVENT_ROUND_STATE: &str = "tendermint/event/RoundState";
pub const TENDERMINT_EVENT_NEW_ROUND: &str = "tendermint/event/NewRound";
pub const TENDERMINT_EVENT_COMPLETE_PROPOSAL: &str = "tendermint/event/CompleteProposal";
pub const TENDERMINT_EVENT_VOTE: &str = "tendermint/event/Vote";
pub const TENDERMINT_EVENT_VALIDATOR_SET_UPDATES: &str = "tendermint/event/ValidatorSetUpdates";
pub const TENDERMINT_EVENT_PROPOSAL_STRING: &str = "tendermint/event/ProposalString";

// ─── Evidence types ──────────────────────────────────────────────────

pub const TENDERMINT_DUPLICATE_VOTE_EVIDENCE: &str = "tendermint/DuplicateVoteEvidence";
pub const TENDERMINT_MOCK_GOOD_EVIDENCE: &str = "tendermint/MockGoodEvidence";
pub const TENDERMINT_MOCK_RANDOM_GOOD_EVIDENCE: &str = "tendermint/MockRandomGoodEvidence";
pub const TENDERMINT_MOCK_BAD_EVIDENCE: &str = "tendermint/MockBadEvidence";

// ─── Interfaces ──────────────────────────────────────────────────────

pub const INFO: &str = "Info";
pub const MSG: &str = "Msg";
pub const TX: &str = "Tx";
pub const ACCOUNT: &str = "Account";
pub const VESTING_ACCOUNT: &str = "VestingAccount";
pub const CONTENT: &str = "Content";
pub const BLOCKCHAIN_MESSAGE: &str = "BlockchainMessage";
pub const CONSENSUS_MESSAGE: &str = "ConsensusMessage";
pub const WAL_MESSAGE: &str = "WALMessage";
pub const PUB_KEY: &str = "PubKey";
pub const PRIV_KEY: &str = "PrivKey";
pub const EVIDENCE_MESSAGE: &str = "EvidenceMessage";
pub const MEMPOOL_MESSAGE: &str = "MempoolMessage";
pub const PACKET: &str = "Packet";
pub const PEX_MESSAGE: &str = "PexMessage";
pub const REMOTE_SIGNER_MSG: &str = "RemoteSignerMsg";
pub const TM_EVENT_DATA: &str = "TMEventData";
pub const EVIDENCE: &str = "Evidence";

/// Every concrete name above, in declaration order.
pub const CONCRETE_NAMES: &[&str] = &[
    TENDERMINT_PRIV_KEY_LEDGER_SECP256K1,
    CRYPTO_KEYS_HD_BIP44_PARAMS,
    CRYPTO_KEYS_LOCAL_INFO,
    CRYPTO_KEYS_LEDGER_INFO,
    CRYPTO_KEYS_OFFLINE_INFO,
    CRYPTO_KEYS_MULTI_INFO,
    AUTH_ACCOUNT,
    AUTH_BASE_VESTING_ACCOUNT,
    AUTH_CONTINUOUS_VESTING_ACCOUNT,
    AUTH_DELAYED_VESTING_ACCOUNT,
    AUTH_STD_TX,
    COSMOS_SDK_BASE_ACCOUNT,
    COSMOS_SDK_BASE_VESTING_ACCOUNT,
    COSMOS_SDK_CONTINUOUS_VESTING_ACCOUNT,
    COSMOS_SDK_DELAYED_VESTING_ACCOUNT,
    TERRA_MSG_SEND,
    TERRA_MSG_MULTI_SEND,
    TERRA_MSG_VERIFY_INVARIANT,
    TERRA_MSG_WITHDRAW_DELEGATION_REWARD,
    TERRA_MSG_WITHDRAW_VALIDATOR_COMMISSION,
    TERRA_MSG_MODIFY_WITHDRAW_ADDRESS,
    TERRA_MSG_SUBMIT_PROPOSAL,
    TERRA_MSG_DEPOSIT,
    TERRA_MSG_VOTE,
    TERRA_TEXT_PROPOSAL,
    TERRA_SOFTWARE_UPGRADE_PROPOSAL,
    TERRA_PARAMETER_CHANGE_PROPOSAL,
    TERRA_MSG_IBC_TRANSFER,
    TERRA_MSG_IBC_RECEIVE,
    TERRA_MSG_UNJAIL,
    TERRA_MSG_CREATE_VALIDATOR,
    TERRA_MSG_EDIT_VALIDATOR,
    TERRA_MSG_DELEGATE,
    TERRA_MSG_UNDELEGATE,
    TERRA_MSG_BEGIN_REDELEGATE,
    TENDERMINT_BLOCKCHAIN_BLOCK_REQUEST,
    TENDERMINT_BLOCKCHAIN_BLOCK_RESPONSE,
    TENDERMINT_BLOCKCHAIN_NO_BLOCK_RESPONSE,
    TENDERMINT_BLOCKCHAIN_STATUS_RESPONSE,
    TENDERMINT_BLOCKCHAIN_STATUS_REQUEST,
    TENDERMINT_NEW_ROUND_STEP_MESSAGE,
    TENDERMINT_NEW_VALID_BLOCK_MESSAGE,
    TENDERMINT_PROPOSAL,
    TENDERMINT_PROPOSAL_POL,
    TENDERMINT_BLOCK_PART,
    TENDERMINT_VOTE,
    TENDERMINT_HAS_VOTE,
    TENDERMINT_VOTE_SET_MAJ23,
    TENDERMINT_VOTE_SET_BITS,
    TENDERMINT_WAL_EVENT_DATA_ROUND_STATE,
    TENDERMINT_WAL_MSG_INFO,
    TENDERMINT_WAL_TIMEOUT_INFO,
    TENDERMINT_WAL_END_HEIGHT_MESSAGE,
    TENDERMINT_PUB_KEY_ED25519,
    TENDERMINT_PRIV_KEY_ED25519,
    TENDERMINT_PUB_KEY_SECP256K1,
    TENDERMINT_PRIV_KEY_SECP256K1,
    TENDERMINT_PUB_KEY_MULTISIG_THRESHOLD,
    TENDERMINT_EVIDENCE_EVIDENCE_LIST_MESSAGE,
    TENDERMINT_MEMPOOL_TX_MESSAGE,
    TENDERMINT_P2P_PACKET_PING,
    TENDERMINT_P2P_PACKET_PONG,
    TENDERMINT_P2P_PACKET_MSG,
    TENDERMINT_P2P_PEX_REQUEST_MESSAGE,
    TENDERMINT_P2P_PEX_ADDRS_MESSAGE,
    TENDERMINT_REMOTESIGNER_PUB_KEY_REQUEST,
    TENDERMINT_REMOTESIGNER_PUB_KEY_RESPONSE,
    TENDERMINT_REMOTESIGNER_SIGN_VOTE_REQUEST,
    TENDERMINT_REMOTESIGNER_SIGNED_VOTE_RESPONSE,
    TENDERMINT_REMOTESIGNER_SIGN_PROPOSAL_REQUEST,
    TENDERMINT_REMOTESIGNER_SIGNED_PROPOSAL_RESPONSE,
    TENDERMINT_REMOTESIGNER_PING_REQUEST,
    TENDERMINT_REMOTESIGNER_PING_RESPONSE,
    TENDERMINT_EVENT_NEW_BLOCK,
    TENDERMINT_EVENT_NEW_BLOCK_HEADER,
    TENDERMINT_EVENT_TX,
    TENDERMINT_EVENT_ROUND_STATE,
    TENDERMINT_EVENT_NEW_ROUND,
    TENDERMINT_EVENT_COMPLETE_PROPOSAL,
    TENDERMINT_EVENT_VOTE,
    TENDERMINT_EVENT_VALIDATOR_SET_UPDATES,
    TENDERMINT_EVENT_PROPOSAL_STRING,
    TENDERMINT_DUPLICATE_VOTE_EVIDENCE,
    TENDERMINT_MOCK_GOOD_EVIDENCE,
    TENDERMINT_MOCK_RANDOM_GOOD_EVIDENCE,
    TENDERMINT_MOCK_BAD_EVIDENCE,
];
