use fxhash::FxBuildHasher;
/// This module implements an unweighted breadth-first search in the style of
/// [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
/// Visited nodes are interned in an [IndexMap] so parent links are plain
/// indices into the map and the frontier is a queue of indices.
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::warn;

use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SearchOutcome<N> {
    /// The goal was dequeued; the nodes run from the start to the goal
    /// inclusive.
    Found(Vec<N>),
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The expansion cap was hit before the search settled either way.
    Capped,
}

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &parent)| {
            *i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Breadth-first search from `start` until `success` holds for a dequeued
/// node. The start node is seeded unconditionally; `successors` decides which
/// neighbours are admissible. With `expansion_limit` set, at most that many
/// nodes are expanded before the search gives up as [SearchOutcome::Capped].
pub(crate) fn bfs<N, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
    expansion_limit: Option<usize>,
) -> SearchOutcome<N>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);
    let mut expanded: usize = 0;
    while let Some(index) = frontier.pop_front() {
        let node_successors = {
            let (node, _) = parents.get_index(index).unwrap();
            if success(node) {
                return SearchOutcome::Found(reverse_path(&parents, index));
            }
            if let Some(limit) = expansion_limit {
                if expanded >= limit {
                    warn!("expansion cap of {} hit before the search settled", limit);
                    return SearchOutcome::Capped;
                }
            }
            successors(node)
        };
        expanded += 1;
        for successor in node_successors {
            if let Vacant(e) = parents.entry(successor) {
                let successor_ix = e.index();
                e.insert(index);
                frontier.push_back(successor_ix);
            }
        }
    }
    SearchOutcome::Exhausted
}
