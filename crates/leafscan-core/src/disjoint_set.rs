use crate::error::{LeafscanError, Result};

/// Per-element link: a root records the size of its set, any other
/// element records its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Link {
    Root { size: usize },
    Parent(usize),
}

/// Array-backed union-find over the elements `0..n`.
///
/// Uses union-by-size and full path compression, so a sequence of `m`
/// operations costs `O(m α(n))`. Elements only ever point toward a root.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    links: Vec<Link>,
    num_sets: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            links: vec![Link::Root { size: 1 }; n],
            num_sets: n,
        }
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Root of the set containing `id`.
    ///
    /// Every element visited on the way is re-linked directly to the root.
    pub fn find(&mut self, id: usize) -> Result<usize> {
        self.check(id)?;
        Ok(self.find_root(id).0)
    }

    /// Merge the sets containing `p` and `q`.
    ///
    /// Returns `false` without touching anything when they already share a
    /// root. On a size tie the root of `p` survives.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;

        let (root_p, size_p) = self.find_root(p);
        let (root_q, size_q) = self.find_root(q);
        if root_p == root_q {
            return Ok(false);
        }

        let (survivor, absorbed) = if size_p >= size_q {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.links[absorbed] = Link::Parent(survivor);
        self.links[survivor] = Link::Root {
            size: size_p + size_q,
        };
        self.num_sets -= 1;
        Ok(true)
    }

    /// True if `p` and `q` belong to the same set.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Number of elements in the set containing `id`.
    pub fn set_size(&mut self, id: usize) -> Result<usize> {
        self.check(id)?;
        Ok(self.find_root(id).1)
    }

    pub fn is_root(&self, id: usize) -> Result<bool> {
        self.check(id)?;
        Ok(matches!(self.links[id], Link::Root { .. }))
    }

    fn check(&self, id: usize) -> Result<()> {
        if id >= self.links.len() {
            return Err(LeafscanError::ElementOutOfRange {
                id,
                len: self.links.len(),
            });
        }
        Ok(())
    }

    /// Returns `(root, size)`. Caller guarantees `id` is in range.
    fn find_root(&mut self, id: usize) -> (usize, usize) {
        let mut root = id;
        let size = loop {
            match self.links[root] {
                Link::Root { size } => break size,
                Link::Parent(parent) => root = parent,
            }
        };

        // Second pass: point the whole path at the root.
        let mut current = id;
        while let Link::Parent(parent) = self.links[current] {
            self.links[current] = Link::Parent(root);
            current = parent;
        }

        (root, size)
    }
}
