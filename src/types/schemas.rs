// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Response schemas for the mirror node REST endpoints consumed by the
//! concrete caches.
//!
//! Fields the mirror node may omit or return as `null` are modeled as
//! `Option` with `#[serde(default)]`, so schema evolution on the server side
//! does not break decoding. The pagination cursor in [`Links`] is carried for
//! completeness but never followed: each cache holds a single-page snapshot
//! of its resource.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// Pagination links attached to listing responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Path of the next page, if any. Not followed by the caches.
    #[serde(default)]
    pub next: Option<String>,
}

/// Response body of `GET api/v1/contracts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractsResponse {
    /// One page of contracts, most recently created first.
    #[serde(default)]
    pub contracts: Vec<Contract>,
    /// Pagination links.
    #[serde(default)]
    pub links: Option<Links>,
}

/// A single contract entity as returned by the mirror node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Identifier of the contract (`shard.realm.num`).
    #[serde(default)]
    pub contract_id: Option<EntityId>,
    /// EVM address of the contract, hex encoded.
    #[serde(default)]
    pub evm_address: Option<String>,
    /// File holding the contract bytecode, if recorded.
    #[serde(default)]
    pub file_id: Option<EntityId>,
    /// Contract memo.
    #[serde(default)]
    pub memo: Option<String>,
    /// Whether the contract has been deleted.
    #[serde(default)]
    pub deleted: bool,
    /// Consensus timestamp of creation, in `seconds.nanoseconds` form.
    #[serde(default)]
    pub created_timestamp: Option<String>,
    /// Consensus timestamp at which the contract expires.
    #[serde(default)]
    pub expiration_timestamp: Option<String>,
    /// Auto-renew period in seconds.
    #[serde(default)]
    pub auto_renew_period: Option<i64>,
}

/// Response body of `GET api/v1/tokens/{token_id}/balances`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenBalancesResponse {
    /// Consensus timestamp the balance snapshot was taken at.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// One page of account balances for the token.
    #[serde(default)]
    pub balances: Vec<TokenDistribution>,
    /// Pagination links.
    #[serde(default)]
    pub links: Option<Links>,
}

/// Balance of a single account for one token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDistribution {
    /// Account holding the balance.
    #[serde(default)]
    pub account: Option<EntityId>,
    /// Balance in the token's smallest denomination.
    #[serde(default)]
    pub balance: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_contracts_response() {
        let json = r#"{
            "contracts": [
                {
                    "contract_id": "0.0.5001",
                    "evm_address": "0x0000000000000000000000000000000000001389",
                    "file_id": "0.0.5000",
                    "memo": "sample contract",
                    "deleted": false,
                    "created_timestamp": "1633032000.123456789",
                    "auto_renew_period": 7776000
                }
            ],
            "links": { "next": "/api/v1/contracts?limit=100&contract.id=lt:0.0.5001" }
        }"#;

        let response: ContractsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.contracts.len(), 1);

        let contract = &response.contracts[0];
        assert_eq!(contract.contract_id, Some(EntityId::from_num(5001)));
        assert_eq!(contract.auto_renew_period, Some(7776000));
        assert!(!contract.deleted);
        assert!(response.links.unwrap().next.is_some());
    }

    #[test]
    fn test_decode_token_balances_response() {
        let json = r#"{
            "timestamp": "1633032000.000000000",
            "balances": [
                { "account": "0.0.2001", "balance": 1000 },
                { "account": "0.0.2002", "balance": 0 }
            ],
            "links": { "next": null }
        }"#;

        let response: TokenBalancesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.balances.len(), 2);
        assert_eq!(response.balances[0].balance, 1000);
        assert_eq!(response.balances[1].account, Some(EntityId::from_num(2002)));
    }

    #[test]
    fn test_decode_tolerates_missing_fields() {
        // The mirror node omits fields freely; decoding must not require them.
        let response: ContractsResponse = serde_json::from_str(r#"{"contracts":[{}]}"#).unwrap();
        assert_eq!(response.contracts.len(), 1);
        assert!(response.contracts[0].contract_id.is_none());

        let balances: TokenBalancesResponse = serde_json::from_str("{}").unwrap();
        assert!(balances.balances.is_empty());
    }
}
