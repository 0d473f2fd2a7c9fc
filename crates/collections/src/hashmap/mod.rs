mod hash_table;

pub use hash_table::{Chains, HASHSIZE, HashTable, Iter};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("A hash table needs at least one bucket")]
    ZeroBuckets,
}
