//! The expand / goal-test loop shared by every strategy.
//!
//! Each call to [`run`] builds its own frontier, visited set and parent
//! arena, so consecutive searches never observe each other.

use log::{debug, trace};
use serde::Serialize;
use std::fmt;

use crate::frontier::{Fifo, Frontier, Lifo, MinPriority, NodeId, SearchNode};
use crate::heuristic::Heuristic;
use crate::puzzle::{Fingerprint, Move, State};
use crate::visited::VisitedSet;

/// How the frontier is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    AStar(Heuristic),
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::AStar(Heuristic::MisplacedTiles),
        Strategy::AStar(Heuristic::Manhattan),
        Strategy::AStar(Heuristic::LinearConflict),
    ];

    /// Whether the strategy always finds a shortest path when one exists.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Strategy::BreadthFirst)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "breadth first"),
            Strategy::DepthFirst => write!(f, "depth first"),
            Strategy::AStar(h) => write!(f, "A* ({})", h),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStatus {
    Found,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

/// Bookkeeping that is not part of the outcome proper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Successors admitted to the frontier.
    pub generated: u64,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
    /// Distinct states recorded, the initial state included.
    pub visited: usize,
    /// Nodes still on the frontier when the search stopped.
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub strategy: Strategy,
    pub status: SearchStatus,
    /// Nodes popped and found not to be the goal.
    pub expanded: u64,
    /// Depth of the goal node when found, otherwise of the last node popped.
    pub depth: u32,
    /// Fingerprints from the initial state to the goal. Empty unless found.
    pub path: Vec<Fingerprint>,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Slides of the blank along `path`.
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| Move::between(pair[0].blank(), pair[1].blank()))
            .collect()
    }
}

/// Searches from `initial` toward [`GOAL`](crate::puzzle::GOAL) until the
/// goal is reached or every reachable state has been expanded.
pub fn run(initial: &State, strategy: Strategy) -> SearchResult {
    match strategy {
        Strategy::BreadthFirst => drive(initial, strategy, Fifo::default(), |_, _| 0),
        Strategy::DepthFirst => drive(initial, strategy, Lifo::default(), |_, _| 0),
        Strategy::AStar(h) => drive(initial, strategy, MinPriority::default(), move |s, depth| {
            h.evaluate(s) + depth
        }),
    }
}

pub fn search_bfs(initial: &State) -> SearchResult {
    run(initial, Strategy::BreadthFirst)
}

pub fn search_dfs(initial: &State) -> SearchResult {
    run(initial, Strategy::DepthFirst)
}

pub fn search_astar_misplaced(initial: &State) -> SearchResult {
    run(initial, Strategy::AStar(Heuristic::MisplacedTiles))
}

pub fn search_astar_manhattan(initial: &State) -> SearchResult {
    run(initial, Strategy::AStar(Heuristic::Manhattan))
}

pub fn search_astar_linear_conflict(initial: &State) -> SearchResult {
    run(initial, Strategy::AStar(Heuristic::LinearConflict))
}

/// Parent links of every node admitted to the frontier, indexed by [`NodeId`].
#[derive(Debug, Default)]
struct Arena {
    nodes: Vec<(Fingerprint, Option<NodeId>)>,
}

impl Arena {
    fn add(&mut self, key: Fingerprint, parent: Option<NodeId>) -> NodeId {
        self.nodes.push((key, parent));
        self.nodes.len() - 1
    }

    fn path_to(&self, id: NodeId) -> Vec<Fingerprint> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let (key, parent) = self.nodes[current];
            path.push(key);
            cursor = parent;
        }
        path.reverse();
        path
    }
}

fn drive<F, P>(initial: &State, strategy: Strategy, mut frontier: F, priority: P) -> SearchResult
where
    F: Frontier,
    P: Fn(&State, u32) -> u32,
{
    debug!("{} search from {}", strategy, initial.fingerprint());

    let mut visited = VisitedSet::new();
    let mut arena = Arena::default();
    let mut stats = SearchStats::default();
    let mut expanded = 0u64;
    let mut last_depth = 0u32;

    let root = arena.add(initial.fingerprint(), None);
    visited.insert(initial.fingerprint(), 0);
    frontier.push(SearchNode {
        state: *initial,
        depth: 0,
        id: root,
        priority: priority(initial, 0),
    });
    stats.peak_frontier = frontier.len();

    while let Some(front) = frontier.peek() {
        if front.state.is_goal() {
            stats.visited = visited.len();
            stats.remaining = frontier.len();
            debug!(
                "{}: found goal at depth {} after {} expansions",
                strategy, front.depth, expanded
            );
            return SearchResult {
                strategy,
                status: SearchStatus::Found,
                expanded,
                depth: front.depth,
                path: arena.path_to(front.id),
                stats,
            };
        }

        let Some(node) = frontier.pop() else {
            break;
        };
        trace!(
            "expanding {} depth={} priority={}",
            node.state.fingerprint(),
            node.depth,
            node.priority
        );
        last_depth = node.depth;
        expanded += 1;

        let depth = node.depth + 1;
        for next in node.state.successors() {
            let key = next.fingerprint();
            if !visited.insert(key, depth) {
                continue;
            }
            let id = arena.add(key, Some(node.id));
            frontier.push(SearchNode {
                state: next,
                depth,
                id,
                priority: priority(&next, depth),
            });
            stats.generated += 1;
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    stats.visited = visited.len();
    debug!(
        "{}: exhausted {} states, last depth {}",
        strategy, expanded, last_depth
    );
    SearchResult {
        strategy,
        status: SearchStatus::Exhausted,
        expanded,
        depth: last_depth,
        path: Vec::new(),
        stats,
    }
}
