//! End-to-end MCTS search tests.

use std::time::{Duration, Instant};

use rust_connect4::{
    Board, GameState, MCTSConfig, MCTSSearch, Player, COLS,
};

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_search_empty_board_returns_legal_column() {
    let state = GameState::new(Player::Red);
    let config = MCTSConfig::default().with_iter_limit(2000);
    let mut search = MCTSSearch::new(config);

    let col = search.search(&state).expect("empty board is not terminal");
    assert!(col < COLS);
    assert!(state.legal_moves().contains(&col));
}

#[test]
fn test_search_only_returns_open_columns() {
    // The no-line fill pattern from the draw tests, with column 5 left
    // empty: the only legal move is 5.
    let inverted = [false, false, true, true, false, false, true];
    let mut board = Board::new();
    for col in [0, 1, 2, 3, 4, 6] {
        for k in 0..6 {
            let red = (k % 2 == 0) != inverted[col];
            let player = if red { Player::Red } else { Player::Yellow };
            board.drop_piece(col, player).unwrap();
        }
    }
    let state = GameState::from_board(board, Player::Red);
    assert!(!state.is_terminal(), "setup must leave the game undecided");
    assert_eq!(state.legal_moves().as_slice(), &[5]);

    let mut search = MCTSSearch::new(MCTSConfig::default().with_iter_limit(200));
    assert_eq!(search.search(&state), Some(5));
}

#[test]
fn test_search_with_low_iterations_still_answers() {
    let state = GameState::new(Player::Red);
    let mut search = MCTSSearch::new(MCTSConfig::default().with_iter_limit(1));

    let col = search.search(&state).expect("one iteration is enough");
    assert!(col < COLS);
}

// =============================================================================
// Tactical Tests
// =============================================================================

#[test]
fn test_search_takes_immediate_horizontal_win() {
    // Red has three in a row on the bottom at columns 0-2; column 3 is open.
    // Yellow's replies sit in columns 5 and 6, far from anything.
    let mut board = Board::new();
    for col in 0..3 {
        board.drop_piece(col, Player::Red).unwrap();
    }
    board.drop_piece(5, Player::Yellow).unwrap();
    board.drop_piece(6, Player::Yellow).unwrap();
    board.drop_piece(6, Player::Yellow).unwrap();
    let state = GameState::from_board(board, Player::Red);

    // The winning move should dominate visit counts across repeated runs.
    for seed in 0..5 {
        let config = MCTSConfig::default().with_iter_limit(2000).with_seed(seed);
        let mut search = MCTSSearch::new(config);
        assert_eq!(
            search.search(&state),
            Some(3),
            "seed {seed} missed the immediate win"
        );
    }
}

#[test]
fn test_search_takes_immediate_vertical_win() {
    let mut board = Board::new();
    for _ in 0..3 {
        board.drop_piece(2, Player::Yellow).unwrap();
    }
    board.drop_piece(0, Player::Red).unwrap();
    board.drop_piece(1, Player::Red).unwrap();
    board.drop_piece(6, Player::Red).unwrap();
    let state = GameState::from_board(board, Player::Yellow);

    let config = MCTSConfig::default().with_iter_limit(2000);
    let mut search = MCTSSearch::new(config);
    assert_eq!(search.search(&state), Some(2));
}

// =============================================================================
// Terminal Positions
// =============================================================================

#[test]
fn test_won_board_returns_no_move() {
    let mut board = Board::new();
    for col in 0..4 {
        board.drop_piece(col, Player::Red).unwrap();
    }
    let state = GameState::from_board(board, Player::Yellow);

    let mut search = MCTSSearch::new(MCTSConfig::default());
    assert_eq!(search.search(&state), None);
    assert_eq!(search.stats().iterations, 0);
}

#[test]
fn test_drawn_board_returns_no_move() {
    // Columns 0,1,4,5 alternate R,Y,... from the bottom; columns 2,3,6
    // alternate Y,R,... This fills the board with no four-in-a-row.
    let inverted = [false, false, true, true, false, false, true];
    let mut board = Board::new();
    for col in 0..COLS {
        for k in 0..6 {
            let red = (k % 2 == 0) != inverted[col];
            let player = if red { Player::Red } else { Player::Yellow };
            board.drop_piece(col, player).unwrap();
        }
    }
    let state = GameState::from_board(board, Player::Red);
    assert!(state.is_terminal());

    let mut search = MCTSSearch::new(MCTSConfig::default());
    assert_eq!(search.search(&state), None);
}

// =============================================================================
// Budget Tests
// =============================================================================

#[test]
fn test_time_budget_respected() {
    let state = GameState::new(Player::Red);
    let limit = Duration::from_millis(100);
    let config = MCTSConfig::default().with_time_limit(limit);
    let mut search = MCTSSearch::new(config);

    let start = Instant::now();
    let col = search.search(&state);
    let elapsed = start.elapsed();

    assert!(col.is_some());
    assert!(search.stats().iterations > 0);
    // One iteration of overrun is allowed; a whole rollout takes far less
    // than the slack here.
    assert!(
        elapsed < limit + Duration::from_millis(150),
        "search took {elapsed:?} against a {limit:?} budget"
    );
}

#[test]
fn test_time_budget_takes_precedence_over_iterations() {
    let state = GameState::new(Player::Red);
    // An iteration limit of 1 would stop immediately; the time budget must
    // win and run many more iterations than that.
    let config = MCTSConfig::default()
        .with_iter_limit(1)
        .with_time_limit(Duration::from_millis(50));
    let mut search = MCTSSearch::new(config);

    search.search(&state);
    assert!(search.stats().iterations > 1);
}

#[test]
fn test_zero_iteration_budget_falls_back_to_random_legal_move() {
    let state = GameState::new(Player::Red);
    let mut search = MCTSSearch::new(MCTSConfig::default().with_iter_limit(0));

    let col = search.search(&state).expect("fallback must produce a move");
    assert!(state.legal_moves().contains(&col));
    assert_eq!(search.stats().iterations, 0);
}

// =============================================================================
// Determinism and Diagnostics
// =============================================================================

#[test]
fn test_same_seed_same_move() {
    let mut state = GameState::new(Player::Red);
    state.apply_move(3).unwrap();
    state.apply_move(2).unwrap();

    let config = MCTSConfig::default().with_iter_limit(400).with_seed(99);
    let mut a = MCTSSearch::new(config.clone());
    let mut b = MCTSSearch::new(config);

    assert_eq!(a.search(&state), b.search(&state));
    assert_eq!(a.move_visits(), b.move_visits());
}

#[test]
fn test_visit_counts_sum_to_iterations() {
    let state = GameState::new(Player::Red);
    let mut search = MCTSSearch::new(MCTSConfig::default().with_iter_limit(500));

    search.search(&state);

    let total: u32 = search.move_visits().iter().map(|&(_, v)| v).sum();
    assert_eq!(total, 500);
}

#[test]
fn test_tree_is_rebuilt_per_call() {
    let state = GameState::new(Player::Red);
    let mut search = MCTSSearch::new(MCTSConfig::default().with_iter_limit(50));

    search.search(&state);
    let first_size = search.tree().len();

    search.search(&state);
    let second_size = search.tree().len();

    // 50 iterations expand at most 50 nodes plus the root; a persisted tree
    // would keep growing.
    assert!(first_size <= 51);
    assert!(second_size <= 51);
}

#[test]
fn test_stats_populated() {
    let state = GameState::new(Player::Red);
    let mut search = MCTSSearch::new(MCTSConfig::default().with_iter_limit(200));

    search.search(&state);
    let stats = search.stats();

    assert_eq!(stats.iterations, 200);
    assert_eq!(stats.simulations, 200);
    assert!(stats.nodes_expanded > 0);
    assert!(stats.max_depth >= 1);
    assert!(stats.avg_rollout_length() > 0.0);
}
