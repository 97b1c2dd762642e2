// SPDX-FileCopyrightText: 2026 Mirrorscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Mirror node entity identifier type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a mirror node entity in `shard.realm.num` form.
///
/// Accounts, contracts, tokens, and files all share this identifier shape
/// (e.g. `0.0.1234`). The mirror node REST API renders it as a string, so
/// this type serializes to and from its display form.
///
/// # Examples
///
/// ```
/// use mirrorscan::EntityId;
///
/// let id: EntityId = "0.0.1234".parse().unwrap();
/// assert_eq!(id.num(), 1234);
/// assert_eq!(id.to_string(), "0.0.1234");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    shard: u64,
    realm: u64,
    num: u64,
}

impl EntityId {
    /// Create an identifier from explicit shard, realm, and entity numbers.
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    /// Create an identifier in the default shard and realm (`0.0.num`).
    ///
    /// # Examples
    ///
    /// ```
    /// use mirrorscan::EntityId;
    ///
    /// assert_eq!(EntityId::from_num(42).to_string(), "0.0.42");
    /// ```
    pub const fn from_num(num: u64) -> Self {
        Self::new(0, 0, num)
    }

    /// Shard number of this entity.
    pub const fn shard(&self) -> u64 {
        self.shard
    }

    /// Realm number of this entity.
    pub const fn realm(&self) -> u64 {
        self.realm
    }

    /// Entity number within its realm.
    pub const fn num(&self) -> u64 {
        self.num
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

/// Error returned when a string is not a valid `shard.realm.num` identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid entity id {input:?}: expected shard.realm.num")]
pub struct InvalidEntityId {
    /// The string that failed to parse
    pub input: String,
}

impl FromStr for EntityId {
    type Err = InvalidEntityId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidEntityId {
            input: s.to_string(),
        };

        let mut parts = s.split('.');
        let shard = parts.next().ok_or_else(invalid)?;
        let realm = parts.next().ok_or_else(invalid)?;
        let num = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            shard: shard.parse().map_err(|_| invalid())?,
            realm: realm.parse().map_err(|_| invalid())?,
            num: num.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
