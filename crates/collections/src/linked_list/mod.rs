use crate::boxnode;

/// Singly-linked bucket chain of `(name, defn)` nodes.
///
/// New nodes go to the front, so a chain reads newest first.
pub struct List {
    head: Option<Box<Node>>,
    len: usize,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl List {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push<S: Into<String>>(&mut self, name: S, defn: S) {
        self.push_boxed(boxnode!(name, defn));
    }

    fn push_boxed(&mut self, mut boxed: Box<Node>) {
        boxed.next = self.head.take();
        self.head = Some(boxed);
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Node> {
        match self.head.take() {
            None => None,
            Some(mut node) => {
                self.head = node.next.take();
                self.len -= 1;
                Some(*node)
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Node> {
        self.iter().find(|n| n.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Node> {
        let mut curr = self.head.as_deref_mut();
        while let Some(node) = curr {
            if node.name == name {
                return Some(node);
            }
            curr = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the first node named `name`, wherever it sits in the chain.
    /// The remaining nodes keep their order.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|n| n.name != name) {
            // checked just above
            if let Some(node) = link {
                link = &mut node.next;
            }
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        Some(*removed)
    }

    /// Drops every node, iteratively.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

impl Drop for List {
    fn drop(&mut self) {
        // node goes out of scope one at a time, no recursive drop
        self.clear();
    }
}

impl std::fmt::Debug for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Node {
    pub(crate) name: String,
    pub(crate) defn: String,
    pub(crate) next: Option<Box<Node>>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defn(&self) -> &str {
        &self.defn
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.defn == other.defn
    }
}
impl Eq for Node {}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.name, self.defn)
    }
}

// [iterators]

pub struct Iter<'a> {
    current: Option<&'a Node>,
    len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;
    fn next(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            None => None,
            Some(node) => {
                self.current = node.next.as_deref();
                self.len -= 1;
                Some(node)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> Iter<'a> {
    pub fn new(list: &'a List) -> Self {
        Self {
            current: list.head.as_deref(),
            len: list.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::List;
    use crate::node;

    fn names(list: &List) -> Vec<&str> {
        list.iter().map(|n| n.name()).collect()
    }

    #[test]
    pub fn push() {
        let mut list = List::new();

        for i in 0..10 {
            let k = format!("name{i}");
            let v = format!("defn{i}");
            list.push(k, v);
        }

        assert_eq!(10, list.len());
        assert_eq!(list.iter().next(), Some(&node!("name9", "defn9")));
    }

    #[test]
    fn pop() {
        let mut list = List::new();

        // Check empty list behaves right
        assert!(list.pop().is_none());

        list.push("k1", "v1");
        list.push("k2", "v2");
        list.push("k3", "v3");

        let p = list.pop().unwrap();
        assert_eq!(p.name, "k3");
        assert_eq!(p.defn, "v3");

        let p = list.pop().unwrap();
        assert_eq!(p.name, "k2");

        // Push some more just to make sure nothing's corrupted
        list.push("k5", "v5");
        let p = list.pop().unwrap();
        assert_eq!(p.name, "k5");

        let p = list.pop().unwrap();
        assert_eq!(p.name, "k1");
        assert!(list.pop().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn find() {
        let mut list = List::new();
        list.push("cat", "animal that likes fish");
        list.push("dog", "animal that hates cats");

        assert_eq!(list.find("cat"), Some(&node!("cat", "animal that likes fish")));
        assert_eq!(list.find("pig"), None);

        list.find_mut("dog").unwrap().defn = "barks".into();
        assert_eq!(list.find("dog").unwrap().defn(), "barks");
    }

    #[test]
    fn remove_head_interior_tail() {
        let mut list = List::new();
        for k in ["e", "d", "c", "b", "a"] {
            list.push(k, k);
        }
        assert_eq!(names(&list), ["a", "b", "c", "d", "e"]);

        assert_eq!(list.remove("c"), Some(node!("c", "c")));
        assert_eq!(names(&list), ["a", "b", "d", "e"]);

        assert_eq!(list.remove("a"), Some(node!("a", "a")));
        assert_eq!(names(&list), ["b", "d", "e"]);

        assert_eq!(list.remove("e"), Some(node!("e", "e")));
        assert_eq!(names(&list), ["b", "d"]);

        assert_eq!(list.remove("zzz"), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn clear_long_chain() {
        let mut list = List::new();
        for i in 0..200_000 {
            list.push(format!("{i}"), String::new());
        }
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn iter() {
        let mut list = List::new();

        for i in 0..10 {
            list.push(format!("name{i}"), format!("defn{i}"));
        }

        for (i, e) in list.iter().enumerate() {
            let k = format!("name{}", 10 - (i + 1));
            let v = format!("defn{}", 10 - (i + 1));
            assert_eq!(e, &node!(k, v));
        }
        assert_eq!(list.iter().size_hint(), (10, Some(10)));
    }
}
