//! Pattern Memory — n-gram context → counts of the outcome that followed.
//!
//! The table stores raw counts only; consumers apply Laplace smoothing.
//! It is rebuilt from the full store on every change, never patched.

use std::collections::BTreeMap;
use std::fmt;

use dicecast_core::models::Category;
use serde::{Serialize, Serializer};

/// Counts of the outcome that followed a context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub big: u32,
    pub small: u32,
}

impl OutcomeCounts {
    pub fn record(&mut self, next: Category) {
        match next {
            Category::Big => self.big += 1,
            Category::Small => self.small += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.big + self.small
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Laplace-smoothed `P(next = Big)`: `(big + 1) / (total + 2)`.
    pub fn smoothed_big(&self) -> f64 {
        (self.big as f64 + 1.0) / (self.total() as f64 + 2.0)
    }

    /// The more frequent follower, `None` on a tie.
    pub fn leader(&self) -> Option<Category> {
        match self.big.cmp(&self.small) {
            std::cmp::Ordering::Greater => Some(Category::Big),
            std::cmp::Ordering::Less => Some(Category::Small),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Share of the leading follower in `[0.5, 1]`; `0.5` when empty.
    pub fn lopsidedness(&self) -> f64 {
        if self.is_empty() {
            return 0.5;
        }
        self.big.max(self.small) as f64 / self.total() as f64
    }
}

/// A fixed-length run of categories used as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context(Vec<Category>);

impl Context {
    pub fn new(seq: &[Category]) -> Self {
        Self(seq.to_vec())
    }

    /// Parse a token string such as `"BSB"`.
    pub fn from_tokens(tokens: &str) -> Option<Self> {
        tokens
            .chars()
            .map(Category::from_token)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Category::render(&self.0))
    }
}

impl Serialize for Context {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A successful lookup at one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMatch {
    pub order: usize,
    pub context: Context,
    pub counts: OutcomeCounts,
}

/// Frequency table keyed by `(order, context)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatternMemory {
    orders: Vec<usize>,
    table: BTreeMap<usize, BTreeMap<Context, OutcomeCounts>>,
}

impl PatternMemory {
    /// An empty memory tracking the given orders.
    pub fn new(orders: &[usize]) -> Self {
        let mut orders: Vec<usize> = orders.iter().copied().filter(|&n| n > 0).collect();
        orders.sort_unstable();
        orders.dedup();
        Self {
            orders,
            table: BTreeMap::new(),
        }
    }

    /// Build a memory from a full category sequence.
    pub fn build(orders: &[usize], seq: &[Category]) -> Self {
        let mut memory = Self::new(orders);
        memory.rebuild(seq);
        memory
    }

    /// Discard all counts and recount every window of `n + 1` outcomes.
    pub fn rebuild(&mut self, seq: &[Category]) {
        self.table.clear();
        for &n in &self.orders {
            let level = self.table.entry(n).or_default();
            for window in seq.windows(n + 1) {
                level
                    .entry(Context::new(&window[..n]))
                    .or_default()
                    .record(window[n]);
            }
        }
    }

    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    /// Counts for a context of length `n`; `None` when absent.
    pub fn lookup(&self, n: usize, context: &[Category]) -> Option<OutcomeCounts> {
        if context.len() != n {
            return None;
        }
        self.table
            .get(&n)?
            .get(&Context::new(context))
            .copied()
            .filter(|c| !c.is_empty())
    }

    /// Try each tracked order from longest to shortest against the tail of
    /// `seq`, returning the first context with recorded data.
    pub fn lookup_longest(&self, seq: &[Category]) -> Option<ContextMatch> {
        self.matches_longest_first(seq).next()
    }

    /// Every tracked order with data for the tail of `seq`, longest first.
    pub fn matches_longest_first<'a>(
        &'a self,
        seq: &'a [Category],
    ) -> impl Iterator<Item = ContextMatch> + 'a {
        self.orders
            .iter()
            .rev()
            .filter(move |&&n| seq.len() >= n)
            .filter_map(move |&n| {
                let context = &seq[seq.len() - n..];
                self.lookup(n, context).map(|counts| ContextMatch {
                    order: n,
                    context: Context::new(context),
                    counts,
                })
            })
    }

    pub fn is_empty(&self) -> bool {
        self.table.values().all(BTreeMap::is_empty)
    }

    /// Introspection snapshot: `{ "3": { "BSB": {"big": 2, "small": 1} } }`.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.table)
    }
}
