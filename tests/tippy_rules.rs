//! Tippy rules and engine behavior through the public API

use tippy::{
    Engine, EngineConfig, GameError, GameState, Mark, Outcome, Player, Pos, SearchError,
    StrategyKind, TippyMove, TippyState,
};

#[test]
fn center_move_on_empty_board() {
    let start = TippyState::new(Player::P1, 3).unwrap();
    let next = start.apply_move(&TippyMove::new(1, 1)).unwrap();

    assert_eq!(next.board().get(Pos::new(1, 1)), Mark::X);
    assert_eq!(next.next_player(), Player::P2);
    let moves = next.possible_next_moves();
    assert_eq!(moves.len(), 8);
    assert!(!moves.contains(&TippyMove::new(1, 1)));
}

#[test]
fn rough_outcome_boundary_cases() {
    let empty = TippyState::new(Player::P1, 3).unwrap();
    assert_eq!(empty.rough_outcome(), 0.0);

    let ahead = TippyState::parse(Player::P1, &["_ X _", "O X X", "O O _"]).unwrap();
    assert_eq!(ahead.rough_outcome(), 1.0);

    let behind = TippyState::parse(Player::P1, &["X O _", "O O X", "_ _ X"]).unwrap();
    assert_eq!(behind.rough_outcome(), -1.0);
}

#[test]
fn outcome_requires_finished_game() {
    let state = TippyState::new(Player::P2, 5).unwrap();
    assert_eq!(state.outcome(), Err(GameError::NotOver));
}

#[test]
fn winning_shapes_end_the_game() {
    // Horizontal S for O on a 4×4 board
    let state = TippyState::parse(
        Player::P1,
        &["X _ _ _", "_ _ O O", "X O O _", "X _ _ _"],
    )
    .unwrap();
    assert!(state.is_over());
    assert!(state.winner(Player::P2));
    assert_eq!(state.outcome(), Ok(Outcome::Lose));
}

#[test]
fn engines_finish_a_game() {
    let mut p1 = Engine::new(EngineConfig::new(StrategyKind::Pruning).with_seed(1));
    let mut p2 = Engine::new(EngineConfig::new(StrategyKind::Memoize).with_seed(2));
    let mut state = TippyState::new(Player::P1, 3).unwrap();
    while !state.is_over() {
        let engine = match state.next_player() {
            Player::P1 => &mut p1,
            Player::P2 => &mut p2,
        };
        let mv = engine.suggest_move(&state).unwrap();
        state = state.apply_move(&mv).unwrap();
    }
    assert!(state.outcome().is_ok());
    assert_eq!(p1.suggest(&state), Err(SearchError::GameOver));
}

#[test]
fn config_file_drives_engine() {
    let config = EngineConfig::from_toml_str("strategy = \"myopic\"\ndepth = 1\nseed = 4\n").unwrap();
    let mut engine = Engine::new(config);
    let state = TippyState::new(Player::P1, 4).unwrap();
    let result = engine.suggest(&state).unwrap();
    assert_eq!(result.strategy, StrategyKind::Myopic);
    assert!(state.possible_next_moves().contains(&result.best_move));
}
