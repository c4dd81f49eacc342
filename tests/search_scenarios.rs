use eight_puzzle::puzzle::{Fingerprint, State, GOAL};
use eight_puzzle::search::{
    run, search_astar_linear_conflict, search_astar_manhattan, search_astar_misplaced, search_bfs,
    search_dfs, SearchResult, SearchStatus, Strategy,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// States in either parity class.
const COMPONENT_SIZE: usize = 181_440;

fn state(s: &str) -> State {
    s.parse().unwrap()
}

fn scrambled(seed: u64, slides: usize) -> State {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut current = GOAL;
    for _ in 0..slides {
        let options = current.successors();
        current = options[rng.gen_range(0..options.len())];
    }
    current
}

fn assert_valid_path(initial: &State, result: &SearchResult) {
    let path = &result.path;
    assert_eq!(path.first(), Some(&initial.fingerprint()));
    assert_eq!(path.last(), Some(&GOAL.fingerprint()));
    assert_eq!(path.len(), result.depth as usize + 1);
    for pair in path.windows(2) {
        let from = State::from(pair[0]);
        let to = State::from(pair[1]);
        assert!(
            from.successors().contains(&to),
            "{} -> {} is not a slide",
            pair[0],
            pair[1]
        );
    }
    assert_eq!(result.moves().len(), result.depth as usize);
}

#[test]
fn solved_input_is_found_immediately() {
    let searches: [fn(&State) -> SearchResult; 5] = [
        search_bfs,
        search_dfs,
        search_astar_misplaced,
        search_astar_manhattan,
        search_astar_linear_conflict,
    ];
    for search in searches {
        let result = search(&GOAL);
        assert_eq!(result.status, SearchStatus::Found);
        assert_eq!(result.depth, 0);
        assert_eq!(result.expanded, 0);
        let path: Vec<String> = result.path.iter().map(Fingerprint::to_string).collect();
        assert_eq!(path, vec!["123456780"]);
    }
}

#[test]
fn one_slide_from_goal() {
    let initial = state("1,2,3,4,5,6,7,0,8");
    for strategy in Strategy::ALL {
        let result = run(&initial, strategy);
        if strategy == Strategy::DepthFirst {
            assert!(result.is_found());
            assert_valid_path(&initial, &result);
            continue;
        }
        assert_eq!(result.depth, 1, "{strategy}");
        let path: Vec<String> = result.path.iter().map(|k| k.to_string()).collect();
        assert_eq!(path, vec!["123456708", "123456780"]);
    }
}

#[test]
fn swapped_tiles_with_blank_home_are_unreachable() {
    let initial = state("213456780");
    assert!(!initial.is_solvable());

    for strategy in Strategy::ALL {
        let result = run(&initial, strategy);
        assert_eq!(result.status, SearchStatus::Exhausted, "{strategy}");
        assert!(result.path.is_empty());
        assert_eq!(result.expanded as usize, COMPONENT_SIZE, "{strategy}");
        assert_eq!(result.stats.visited, COMPONENT_SIZE);
        assert_eq!(result.stats.remaining, 0);
    }
}

#[test]
fn bfs_solves_hardest_instance_in_31() {
    let initial = state("867254301");
    let result = search_bfs(&initial);
    assert!(result.is_found());
    assert_eq!(result.depth, 31);
    assert_valid_path(&initial, &result);
}

#[test]
fn bfs_is_never_beaten() {
    for seed in 0..6 {
        let initial = scrambled(seed, 40);
        let shortest = search_bfs(&initial);
        assert!(shortest.is_found());
        assert_valid_path(&initial, &shortest);

        for strategy in Strategy::ALL {
            let result = run(&initial, strategy);
            assert!(result.is_found(), "{strategy} from {}", initial.fingerprint());
            assert_valid_path(&initial, &result);
            assert!(result.depth >= shortest.depth, "{strategy}");
            // Every slide flips the blank's square colour.
            assert_eq!(result.depth % 2, shortest.depth % 2);
        }
    }
}

#[test]
fn informed_searches_expand_fewer_than_bfs() {
    let initial = scrambled(17, 60);
    let misplaced = search_astar_misplaced(&initial);
    let manhattan = search_astar_manhattan(&initial);
    let blind = search_bfs(&initial);
    assert!(manhattan.expanded <= blind.expanded);
    assert!(misplaced.expanded <= blind.expanded);
}

#[test]
fn expanded_counts_popped_states() {
    for strategy in Strategy::ALL {
        let initial = scrambled(8, 25);
        let result = run(&initial, strategy);
        assert_eq!(
            result.stats.visited as u64,
            result.expanded + result.stats.remaining as u64,
            "{strategy}"
        );
        assert_eq!(result.stats.visited as u64, result.stats.generated + 1);
    }
}

#[test]
fn repeated_runs_agree() {
    let initial = scrambled(29, 30);
    for strategy in Strategy::ALL {
        let first = run(&initial, strategy);
        let second = run(&initial, strategy);
        assert_eq!(first, second, "{strategy}");
    }
}
