use std::{collections::BTreeMap, mem};

use crate::value::Value;

/// A rule with fully resolved selectors, ready for emission.
#[derive(Debug, Clone)]
pub(crate) struct CssRule {
    /// The comma-joined, already cross-multiplied selector text
    pub selector: String,
    pub styles: Vec<Style>,
    /// Whether this rule is the first emitted for a new top-level statement,
    /// which is where the emitter separates output with a blank line
    pub group_start: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Style {
    pub property: String,
    pub value: Value,
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub(super) struct CssTreeIdx(usize);

/// Rules in evaluation order with parent links.
///
/// Nested rules are visited (and therefore inserted) after their parent's own
/// declarations but potentially interleaved with later siblings, so the final
/// document order is recovered here by a pre-order walk rather than taken from
/// insertion order.
#[derive(Debug, Clone)]
pub(super) struct CssTree {
    // None is a tombstone left behind once a rule has been collected
    rules: Vec<Option<CssRule>>,
    parent_to_child: BTreeMap<CssTreeIdx, Vec<CssTreeIdx>>,
    /// Which top-level statement each child of `ROOT` came from, parallel to
    /// `parent_to_child[ROOT]`. A top-level mixin call can contribute several
    /// children from one statement.
    root_stmt: Vec<usize>,
    current_stmt: usize,
}

impl CssTree {
    pub const ROOT: CssTreeIdx = CssTreeIdx(0);

    pub fn new() -> Self {
        Self {
            rules: vec![None],
            parent_to_child: BTreeMap::new(),
            root_stmt: Vec::new(),
            current_stmt: 0,
        }
    }

    /// Marks the start of the next top-level statement. Children of `ROOT`
    /// added before the next call belong to the same statement.
    pub fn next_stmt(&mut self) {
        self.current_stmt += 1;
    }

    pub fn add_child(&mut self, rule: CssRule, parent: CssTreeIdx) -> CssTreeIdx {
        let idx = CssTreeIdx(self.rules.len());
        self.rules.push(Some(rule));
        if parent == Self::ROOT {
            self.root_stmt.push(self.current_stmt);
        }
        self.parent_to_child.entry(parent).or_default().push(idx);
        idx
    }

    pub fn add_style(&mut self, idx: CssTreeIdx, style: Style) {
        if let Some(rule) = &mut self.rules[idx.0] {
            rule.styles.push(style);
        }
    }

    /// Flatten into document order, dropping rules with no declarations and
    /// marking the first surviving rule under each top-level statement.
    pub fn finish(mut self) -> Vec<CssRule> {
        let mut out = Vec::new();

        let roots = self
            .parent_to_child
            .get(&Self::ROOT)
            .cloned()
            .unwrap_or_default();
        let stmts = mem::take(&mut self.root_stmt);

        let mut last_stmt = None;
        for (root, stmt) in roots.into_iter().zip(stmts) {
            let start = out.len();
            self.collect(root, &mut out);
            if out.len() > start && last_stmt != Some(stmt) {
                out[start].group_start = true;
                last_stmt = Some(stmt);
            }
        }

        out
    }

    fn collect(&mut self, idx: CssTreeIdx, out: &mut Vec<CssRule>) {
        if let Some(rule) = self.rules[idx.0].take() {
            if !rule.styles.is_empty() {
                out.push(rule);
            }
        }

        let children = self
            .parent_to_child
            .get(&idx)
            .cloned()
            .unwrap_or_default();

        for child in children {
            self.collect(child, out);
        }
    }
}
