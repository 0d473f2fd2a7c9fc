//! Word index tree.
//!
//! An unbalanced binary search tree keyed on normalized words. Every
//! [`WordEntry`] owns its two subtrees; nothing points back up. Traversal and
//! teardown use an explicit stack, so a tree built from already sorted input
//! (a single long chain) is handled without deep recursion.

use std::{cmp::Ordering, fmt, str::FromStr};

use log::{debug, trace};

use crate::{IndexError, normalize::normalize};

type Link = Option<Box<WordEntry>>;

/// One distinct word, with the lines it was seen on.
pub struct WordEntry {
    word: Box<str>,
    lines: Vec<usize>,
    left: Link,
    right: Link,
}

impl WordEntry {
    /// A leaf entry for the first occurrence of `word`.
    pub fn create(word: impl Into<Box<str>>, line: usize) -> Box<Self> {
        Box::new(Self {
            word: word.into(),
            lines: vec![line],
            left: None,
            right: None,
        })
    }

    /// Releases `entry` and hands its subtrees back without touching them.
    pub fn destroy(mut entry: Box<Self>) -> [Link; 2] {
        [entry.left.take(), entry.right.take()]
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of occurrences, always `lines().len()`.
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Line numbers in the order the occurrences were added.
    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    fn record(&mut self, line: usize) {
        self.lines.push(line);
    }
}

impl fmt::Debug for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordEntry")
            .field("word", &self.word)
            .field("count", &self.count())
            .field("lines", &self.lines)
            .finish()
    }
}

/// Visiting order for [`WordTree::traverse`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// left, self, right: ascending keys
    In,
    /// self, left, right
    Pre,
    /// left, right, self
    Post,
    /// right, self, left: descending keys
    Reverse,
}

impl Order {
    pub const ALL: [Order; 4] = [Order::In, Order::Pre, Order::Post, Order::Reverse];

    pub fn name(self) -> &'static str {
        match self {
            Order::In => "in order",
            Order::Pre => "pre order",
            Order::Post => "post order",
            Order::Reverse => "reverse order",
        }
    }
}

impl FromStr for Order {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Order::In),
            "pre" => Ok(Order::Pre),
            "post" => Ok(Order::Post),
            "reverse" => Ok(Order::Reverse),
            other => Err(IndexError::UnknownOrder(other.to_owned())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Words of a text, each with its occurrence count and line numbers.
#[derive(Default)]
pub struct WordTree {
    root: Link,
    size: usize,
}

impl WordTree {
    pub const fn new() -> Self {
        Self { root: None, size: 0 }
    }

    /// Number of distinct words.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Records one occurrence of `word` on `line`.
    ///
    /// The word is normalized first. A new key gets a fresh entry, a known
    /// key gets `line` appended to its entry. Returns the entry either way.
    ///
    /// # Errors
    ///
    /// [`IndexError::InvalidInput`] when `word` is `None`; the tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordindex::WordTree;
    ///
    /// let mut tree = WordTree::new();
    /// tree.add("The", 1).unwrap();
    /// let the = tree.add("the", 3).unwrap();
    ///
    /// assert_eq!(the.word(), "the");
    /// assert_eq!(the.lines(), &[1, 3]);
    /// assert!(tree.add(None, 4).is_err());
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn add<'w>(
        &mut self,
        word: impl Into<Option<&'w str>>,
        line: usize,
    ) -> Result<&WordEntry, IndexError> {
        let Some(raw) = word.into() else {
            debug!(target: "add", "rejected absent word for line {line}");
            return Err(IndexError::InvalidInput);
        };
        let key = normalize(raw);

        // stops on the matching entry or on the empty link where it belongs
        let mut link = &mut self.root;
        while let Some(ord) = link
            .as_deref()
            .map(|node| key.as_str().cmp(&node.word))
            .filter(|ord| ord.is_ne())
        {
            if let Some(node) = link {
                link = if ord.is_lt() { &mut node.left } else { &mut node.right };
            }
        }

        let mut fresh = false;
        let entry = link.get_or_insert_with(|| {
            fresh = true;
            WordEntry::create(key, line)
        });
        if fresh {
            self.size += 1;
            trace!(target: "add", "new word {:?} on line {line}", entry.word);
        } else {
            entry.record(line);
            trace!(target: "add", "{:?} seen {} times", entry.word, entry.count());
        }

        Ok(&**entry)
    }

    /// Looks a word up, normalizing it the same way [`WordTree::add`] does.
    pub fn find(&self, word: &str) -> Option<&WordEntry> {
        let key = normalize(word);
        let mut curr = self.root.as_deref();
        while let Some(node) = curr {
            curr = match key.as_str().cmp(&node.word) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Lazily walks the entries in `order`. Calling it again starts over.
    pub fn traverse(&self, order: Order) -> Traverse<'_> {
        Traverse::new(self, order)
    }

    /// Shorthand for `self.traverse(Order::In)`
    pub fn iter(&self) -> Traverse<'_> {
        self.traverse(Order::In)
    }

    /// Destroys every entry. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        let mut destroyed = 0;
        let mut stack: Vec<Box<WordEntry>> = self.root.take().into_iter().collect();

        while let Some(entry) = stack.pop() {
            stack.extend(WordEntry::destroy(entry).into_iter().flatten());
            destroyed += 1;
        }

        debug_assert_eq!(destroyed, self.size, "size out of sync with the nodes");
        self.size = 0;
        if destroyed > 0 {
            debug!(target: "clear", "destroyed {destroyed} entries");
        }
    }
}

impl Drop for WordTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for WordTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a WordTree {
    type Item = &'a WordEntry;
    type IntoIter = Traverse<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// [iterators]

enum Step<'a> {
    /// Subtree still to be expanded
    Expand(&'a WordEntry),
    /// Entry ready to be yielded
    Yield(&'a WordEntry),
}

/// Iterator returned by [`WordTree::traverse`].
///
/// Holds at most a few frames per level of the tree on its own stack.
pub struct Traverse<'a> {
    order: Order,
    stack: Vec<Step<'a>>,
    remaining: usize,
}

impl<'a> Traverse<'a> {
    fn new(tree: &'a WordTree, order: Order) -> Self {
        Self {
            order,
            stack: tree.root.as_deref().map(Step::Expand).into_iter().collect(),
            remaining: tree.size,
        }
    }

    fn push_child(&mut self, child: &'a Link) {
        if let Some(node) = child.as_deref() {
            self.stack.push(Step::Expand(node));
        }
    }
}

impl<'a> Iterator for Traverse<'a> {
    type Item = &'a WordEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Step::Yield(node) => {
                    self.remaining -= 1;
                    return Some(node);
                }
                // pushed in reverse of the visiting order
                Step::Expand(node) => match self.order {
                    Order::In => {
                        self.push_child(&node.right);
                        self.stack.push(Step::Yield(node));
                        self.push_child(&node.left);
                    }
                    Order::Pre => {
                        self.push_child(&node.right);
                        self.push_child(&node.left);
                        self.stack.push(Step::Yield(node));
                    }
                    Order::Post => {
                        self.stack.push(Step::Yield(node));
                        self.push_child(&node.right);
                        self.push_child(&node.left);
                    }
                    Order::Reverse => {
                        self.push_child(&node.left);
                        self.stack.push(Step::Yield(node));
                        self.push_child(&node.right);
                    }
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Traverse<'_> {}
