//! Dependency tracking for cascading recalculation
//!
//! Maps a referenced cell name to the set of cells whose formulas reference
//! it. The graph is kept acyclic by the recalculation engine: candidate
//! edges are inserted tentatively, checked with [`DependencyGraph::is_reachable`],
//! and rolled back if they would close a cycle.

use ahash::AHashMap;
use std::collections::HashSet;

/// Dependency graph between cells, keyed by cell name
///
/// An edge `precedent -> dependent` means the dependent's formula references
/// the precedent; when the precedent's value changes, the dependent must be
/// recomputed.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Referenced name -> names of cells that depend on it
    dependents: AHashMap<String, HashSet<String>>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge: `dependent` depends on `precedent`
    pub fn add_edge(&mut self, precedent: &str, dependent: &str) {
        self.dependents
            .entry(precedent.to_string())
            .or_default()
            .insert(dependent.to_string());
    }

    /// Remove the edge `precedent -> dependent` if present
    ///
    /// Empty entries are dropped so the map stays sparse.
    pub fn remove_edge(&mut self, precedent: &str, dependent: &str) {
        if let Some(deps) = self.dependents.get_mut(precedent) {
            deps.remove(dependent);
            if deps.is_empty() {
                self.dependents.remove(precedent);
            }
        }
    }

    /// Whether the edge `precedent -> dependent` exists
    pub fn has_edge(&self, precedent: &str, dependent: &str) -> bool {
        self.dependents
            .get(precedent)
            .is_some_and(|deps| deps.contains(dependent))
    }

    /// Iterate over the names of cells that depend on `precedent`
    pub fn dependents(&self, precedent: &str) -> impl Iterator<Item = &str> {
        self.dependents
            .get(precedent)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Depth-first reachability from `from` to `target` along dependent edges
    ///
    /// Called with `from == target` after tentative insertion, this detects
    /// whether the candidate edges would close a cycle through that cell.
    pub fn is_reachable(&self, from: &str, target: &str) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = self.dependents(from).collect();

        while let Some(name) = stack.pop() {
            if name == target {
                return true;
            }
            if visited.insert(name) {
                stack.extend(self.dependents(name));
            }
        }

        false
    }

    /// Total number of edges, mainly for tests and diagnostics
    pub fn edge_count(&self) -> usize {
        self.dependents.values().map(HashSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_and_remove_edge() {
        let mut graph = DependencyGraph::new();
        graph.add_edge("B1", "A1");

        assert!(graph.has_edge("B1", "A1"));
        assert_eq!(graph.dependents("B1").collect::<Vec<_>>(), vec!["A1"]);
        assert_eq!(graph.edge_count(), 1);

        graph.remove_edge("B1", "A1");
        assert!(!graph.has_edge("B1", "A1"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_missing_edge_is_harmless() {
        let mut graph = DependencyGraph::new();
        graph.remove_edge("B1", "A1");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_two_cycle_detected() {
        let mut graph = DependencyGraph::new();
        // A1 = "=B1" commits B1 -> A1
        graph.add_edge("B1", "A1");
        // candidate B1 = "=A1" adds A1 -> B1, closing the cycle
        graph.add_edge("A1", "B1");

        assert!(graph.is_reachable("B1", "B1"));
        assert!(graph.is_reachable("A1", "A1"));
    }

    #[test]
    fn test_chain_cycle_detected() {
        let mut graph = DependencyGraph::new();
        graph.add_edge("B1", "A1"); // A1 references B1
        graph.add_edge("C1", "B1"); // B1 references C1
        assert!(!graph.is_reachable("C1", "C1"));

        graph.add_edge("A1", "C1"); // C1 references A1, closing the loop
        assert!(graph.is_reachable("C1", "C1"));
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let mut graph = DependencyGraph::new();
        // B1 and C1 both reference A1; D1 references both
        graph.add_edge("A1", "B1");
        graph.add_edge("A1", "C1");
        graph.add_edge("B1", "D1");
        graph.add_edge("C1", "D1");

        assert!(!graph.is_reachable("A1", "A1"));
        assert!(graph.is_reachable("A1", "D1"));
    }
}
