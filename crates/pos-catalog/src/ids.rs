//! Product identifiers.
//!
//! The product API assigns integer ids. A client creating a product proposes
//! a random one; `0` means "not assigned yet".

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (exclusive) for client-proposed ids.
pub const PROPOSED_ID_RANGE: i64 = 1_000_000;

/// Identifier of a product in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// The placeholder id of a product the API has not seen yet.
    pub const UNASSIGNED: ProductId = ProductId(0);

    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Propose a random id in `0..PROPOSED_ID_RANGE` for a new product.
    pub fn generate() -> Self {
        Self(rand::thread_rng().gen_range(0..PROPOSED_ID_RANGE))
    }

    pub fn is_unassigned(&self) -> bool {
        self.0 == 0
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
