use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types of wallet aggregates (accounts, etc.)
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// String form used in routes and storage keys
    fn as_string(&self) -> String;

    /// Parse an ID back from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}
