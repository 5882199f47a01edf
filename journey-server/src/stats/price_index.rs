//! Price-keyed binary search tree for fare range queries.
//!
//! Built fresh per query batch: load the fares for one request, answer the
//! range query, drop the tree. Items sharing a price are bucketed at one
//! node rather than rejected or chained as duplicate nodes.

/// An item with an optional price.
///
/// Items without a price (or with a NaN price) are tolerated: the index
/// skips them silently and counts them, so callers can report "N of M
/// records had no usable price".
pub trait Priced {
    fn price(&self) -> Option<f64>;
}

#[derive(Debug)]
struct Node<T> {
    price: f64,
    items: Vec<T>,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(price: f64, item: T) -> Self {
        Self {
            price,
            items: vec![item],
            left: None,
            right: None,
        }
    }
}

/// A binary search tree keyed by price.
///
/// No rebalancing: trees live for one request over modest fare lists.
#[derive(Debug)]
pub struct PriceIndex<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
    skipped: usize,
}

impl<T: Priced> Default for PriceIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Priced> PriceIndex<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            skipped: 0,
        }
    }

    /// Build an index from an iterator of items.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut index = Self::new();
        for item in items {
            index.insert(item);
        }
        index
    }

    /// Insert an item, keyed by its price.
    ///
    /// Items without a finite price are skipped, not rejected: incomplete
    /// fare records are expected in practice.
    pub fn insert(&mut self, item: T) {
        let price = match item.price() {
            Some(p) if p.is_finite() => p,
            _ => {
                self.skipped += 1;
                return;
            }
        };

        let mut node = &mut self.root;
        while let Some(n) = node {
            if price < n.price {
                node = &mut n.left;
            } else if price > n.price {
                node = &mut n.right;
            } else {
                n.items.push(item);
                self.len += 1;
                return;
            }
        }
        *node = Some(Box::new(Node::new(price, item)));
        self.len += 1;
    }

    /// Number of indexed items (bucket contents, not nodes).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of items skipped for lacking a usable price.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// All items priced within `[min, max]`, in ascending price order.
    ///
    /// Pruned in-order walk: a subtree is only descended when its keys can
    /// still fall inside the range.
    pub fn find_in_range(&self, min: f64, max: f64) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = if node.price > min {
                    node.left.as_deref()
                } else {
                    None
                };
            }
            let Some(node) = stack.pop() else { break };
            if node.price >= min && node.price <= max {
                out.extend(node.items.iter());
            }
            current = if node.price < max {
                node.right.as_deref()
            } else {
                None
            };
        }

        out
    }

    /// The lowest indexed price, or `None` for an empty index.
    ///
    /// The explicit `None` replaces a sentinel zero so an empty index
    /// cannot be mistaken for one holding free fares.
    pub fn min_price(&self) -> Option<f64> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node.price)
    }

    /// The highest indexed price, or `None` for an empty index.
    pub fn max_price(&self) -> Option<f64> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.price)
    }

    /// All items in ascending price order (level order within a bucket is
    /// insertion order).
    pub fn in_order(&self) -> Vec<&T> {
        self.find_in_range(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Consume the index and return the items in ascending price order.
    pub fn into_sorted(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        // Iterative in-order drain; nodes are detached as they are visited
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut current = self.root.take();

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(mut node) = stack.pop() else { break };
            out.append(&mut node.items);
            current = node.right.take();
        }

        out
    }
}
