//! Navigation tree derived from the sidebar configuration.
//!
//! The tree is an arena: every node lives in a `Vec` and is addressed by its
//! [`NodeId`]. Expansion state elsewhere is keyed by `NodeId`, so two entries
//! that share a display title never share a collapse toggle.

use tracing::warn;

use crate::navigation::NavigationEntry;
use crate::route::Route;

/// Stable identifier of a node within one [`NavTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A renderable navigation node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    pub id: NodeId,
    pub title: String,
    pub route: Route,
    /// 0 for top-level entries
    pub depth: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl NavNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// An entry that was left out of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub title: String,
    pub reason: String,
    /// Number of descendants dropped along with the entry
    pub dropped_children: usize,
}

/// One visible row of the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow<'a> {
    pub node: &'a NavNode,
    /// Only meaningful when the node has children
    pub expanded: bool,
}

/// Arena-backed navigation tree
#[derive(Debug, Clone, Default)]
pub struct NavTree {
    nodes: Vec<NavNode>,
    roots: Vec<NodeId>,
    skipped: Vec<SkippedEntry>,
}

impl NavTree {
    /// Build the tree from configuration entries.
    ///
    /// Entries without a usable path are skipped (with their children) and
    /// logged; rendering never fails because of a malformed entry.
    pub fn build(entries: &[NavigationEntry]) -> Self {
        let mut tree = Self::default();
        for entry in entries {
            if let Some(id) = tree.insert(entry, None, 0) {
                tree.roots.push(id);
            }
        }
        tree
    }

    fn insert(
        &mut self,
        entry: &NavigationEntry,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Option<NodeId> {
        let route = match entry.route() {
            Ok(route) => route,
            Err(e) => {
                warn!("Skipping navigation entry: {}", e);
                self.skipped.push(SkippedEntry {
                    title: entry.title.clone(),
                    reason: e.to_string(),
                    dropped_children: count_descendants(entry),
                });
                return None;
            }
        };

        let id = NodeId(self.nodes.len());
        self.nodes.push(NavNode {
            id,
            title: entry.title.clone(),
            route,
            depth,
            parent,
            children: Vec::new(),
        });

        let children: Vec<NodeId> = entry
            .children
            .iter()
            .filter_map(|child| self.insert(child, Some(id), depth + 1))
            .collect();
        self.nodes[id.0].children = children;

        Some(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&NavNode> {
        self.nodes.get(id.0)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavNode> {
        self.nodes.iter()
    }

    /// IDs of every node that has children
    pub fn group_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().filter(|n| n.has_children()).map(|n| n.id)
    }

    pub fn find_by_route(&self, route: &Route) -> Option<NodeId> {
        self.nodes.iter().find(|n| &n.route == route).map(|n| n.id)
    }

    /// Visible rows in display order given the current expansion predicate
    pub fn visible_rows(&self, is_expanded: impl Fn(NodeId) -> bool) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::with_capacity(self.nodes.len());
        for &root in &self.roots {
            self.push_rows(root, &is_expanded, &mut rows);
        }
        rows
    }

    fn push_rows<'a>(
        &'a self,
        id: NodeId,
        is_expanded: &impl Fn(NodeId) -> bool,
        rows: &mut Vec<TreeRow<'a>>,
    ) {
        let node = &self.nodes[id.0];
        let expanded = node.has_children() && is_expanded(id);
        rows.push(TreeRow { node, expanded });
        if expanded {
            for &child in &node.children {
                self.push_rows(child, is_expanded, rows);
            }
        }
    }

    /// Rows whose title matches `query` (case-insensitive), plus their
    /// ancestors. Groups are shown expanded while filtering.
    pub fn filtered_rows(&self, query: &str) -> Vec<TreeRow<'_>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.visible_rows(|_| true);
        }

        // Children always have a larger index than their parent, so a reverse
        // pass sees every child before its parent.
        let mut keep = vec![false; self.nodes.len()];
        for node in self.nodes.iter().rev() {
            let own = node.title.to_lowercase().contains(&needle);
            let child = node.children.iter().any(|c| keep[c.0]);
            keep[node.id.0] = own || child;
        }

        self.visible_rows(|_| true)
            .into_iter()
            .filter(|row| keep[row.node.id.0])
            .collect()
    }
}

fn count_descendants(entry: &NavigationEntry) -> usize {
    entry
        .children
        .iter()
        .map(|c| 1 + count_descendants(c))
        .sum()
}
