use crate::linked_list::{self, List, Node};

use super::TableError;

/// Bucket count used by [`HashTable::new`].
pub const HASHSIZE: usize = 101;

/// Maps names to definitions.
///
/// Every bucket is a [`List`] chain; a new name is pushed at the head of its
/// chain. The number of buckets is fixed for the life of the table.
#[derive(Debug)]
pub struct HashTable {
    buckets: Vec<List>,
    items: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    /// Creates a new, empty table with [`HASHSIZE`] buckets
    pub fn new() -> Self {
        Self {
            buckets: (0..HASHSIZE).map(|_| List::new()).collect(),
            items: 0,
        }
    }

    /// Creates a new, empty table with `cap` many buckets
    pub fn with_buckets(cap: usize) -> Result<Self, TableError> {
        if cap == 0 {
            return Err(TableError::ZeroBuckets);
        }

        Ok(Self {
            buckets: (0..cap).map(|_| List::new()).collect(),
            items: 0,
        })
    }

    /// Returns the number of names in the table
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, or "slots" of the table
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Installs `defn` under `name`, returning the definition it replaced
    /// (if there was any)
    pub fn install(&mut self, name: &str, defn: &str) -> Option<String> {
        let i = self.idx(name);

        match self.buckets[i].find_mut(name) {
            Some(n) => Some(std::mem::replace(&mut n.defn, defn.to_owned())),
            None => {
                self.buckets[i].push(name, defn);
                self.items += 1;

                None
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.buckets[self.idx(name)].find(name).map(Node::defn)
    }

    /// Removes `name` from the table, returning its definition
    pub fn undefine(&mut self, name: &str) -> Option<String> {
        let i = self.idx(name);
        let node = self.buckets[i].remove(name)?;
        self.items -= 1;

        Some(node.defn)
    }

    /// Removes every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.items = 0;
    }

    // [adapters]

    /// Iterates over every node, bucket by bucket, each chain head first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chains: self.chains(),
            current: None,
            remaining: self.items,
        }
    }

    /// Iterates over `(bucket index, chain)` for every bucket, empty or not
    pub fn chains(&self) -> Chains<'_> {
        self.buckets.iter().enumerate()
    }

    /// `h = c + 31 * h` over the bytes of `name`
    pub fn hash(name: &str) -> u32 {
        name.bytes()
            .fold(0u32, |h, c| u32::from(c).wrapping_add(h.wrapping_mul(31)))
    }

    // [private]

    fn idx(&self, name: &str) -> usize {
        Self::hash(name) as usize % self.bucket_count()
    }
}

pub type Chains<'a> = std::iter::Enumerate<std::slice::Iter<'a, List>>;

pub struct Iter<'a> {
    chains: Chains<'a>,
    current: Option<linked_list::Iter<'a>>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(node);
            }
            let (_, bucket) = self.chains.next()?;
            self.current = Some(bucket.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
