//! Name to definition table built from singly-linked bucket chains.

#[macro_use]
mod macros;
pub mod hashmap;
pub mod linked_list;

pub use hashmap::{HashTable, TableError};
pub use linked_list::{List, Node};
