use padel_core::{
    MatchConfig, MatchEngine, PerTeam, PlayerSlot, Resolution, ScoreAction, Side, Team,
    TiebreakMode,
};

fn win_game(engine: &mut MatchEngine, team: Team) {
    for _ in 0..4 {
        engine.point(team);
    }
}

/// Plays games alternately until the score is 5-5, then returns.
fn reach_five_all(engine: &mut MatchEngine) {
    for _ in 0..5 {
        win_game(engine, Team::A);
        win_game(engine, Team::B);
    }
    assert_eq!(engine.current_state().games, PerTeam::splat(5));
}

#[test]
fn tiebreak_is_entered_at_six_all() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    reach_five_all(&mut engine);

    win_game(&mut engine, Team::A);
    let state = engine.current_state();
    assert_eq!(state.games, PerTeam::new(6, 5));
    assert!(!state.in_tiebreak);

    win_game(&mut engine, Team::B);
    let state = engine.current_state();
    assert!(state.in_tiebreak);
    assert_eq!(state.games, PerTeam::splat(6));
    assert_eq!(state.points, PerTeam::splat(0));
    assert_eq!(state.server_side, Side::Right);
}

#[test]
fn advantage_mode_needs_a_two_game_lead() {
    let config = MatchConfig::builder()
        .tiebreak_mode(TiebreakMode::Advantage)
        .build()
        .unwrap();
    let mut engine = MatchEngine::new(config);
    reach_five_all(&mut engine);

    win_game(&mut engine, Team::A);
    win_game(&mut engine, Team::B);
    assert!(!engine.current_state().in_tiebreak);
    assert_eq!(engine.current_state().games, PerTeam::splat(6));

    win_game(&mut engine, Team::A);
    assert_eq!(engine.current_state().games, PerTeam::new(7, 6));

    win_game(&mut engine, Team::A);
    assert_eq!(engine.current_state().sets, PerTeam::new(1, 0));
    assert_eq!(engine.current_state().games, PerTeam::splat(0));
}

#[test]
fn tiebreak_win_is_recorded_in_history() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    reach_five_all(&mut engine);
    win_game(&mut engine, Team::A);
    win_game(&mut engine, Team::B);

    for _ in 0..6 {
        engine.point(Team::A);
    }
    for _ in 0..5 {
        engine.point(Team::B);
    }
    assert_eq!(engine.current_state().tiebreak, PerTeam::new(6, 5));
    let serving_before = engine.current_state().serving_team;
    let len_before = engine.history_len();

    assert_eq!(
        engine.execute(&ScoreAction::Point(Team::A)),
        Resolution::Set { winner: Team::A }
    );

    let state = engine.current_state();
    assert_eq!(engine.history_len(), len_before + 1);
    assert_eq!(state.sets, PerTeam::new(1, 0));
    assert!(!state.in_tiebreak);
    assert_eq!(state.tiebreak, PerTeam::splat(0));
    assert_eq!(state.games, PerTeam::splat(0));
    assert_eq!(state.points, PerTeam::splat(0));
    assert_eq!(state.serving_team, serving_before.other());
    assert_eq!(state.server_side, Side::Right);

    engine.undo();
    assert!(engine.current_state().in_tiebreak);
    assert_eq!(engine.current_state().tiebreak, PerTeam::new(6, 5));
}

#[test]
fn undoing_every_point_restores_the_initial_snapshot() {
    let mut engine = MatchEngine::new(
        MatchConfig::builder().golden_point(false).build().unwrap(),
    );
    let initial = *engine.current_state();

    let rallies = [
        Team::A, Team::B, Team::B, Team::A, Team::A, Team::B, Team::A, Team::B, Team::B,
        Team::B, Team::A, Team::A, Team::A, Team::A,
    ];
    for &team in &rallies {
        engine.point(team);
    }
    assert_eq!(engine.history_len(), rallies.len() + 1);

    for _ in &rallies {
        engine.undo();
    }
    assert_eq!(engine.current_state(), &initial);

    engine.undo();
    assert_eq!(engine.current_state(), &initial);
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn long_deuce_game_without_golden_point() {
    let mut engine = MatchEngine::new(
        MatchConfig::builder().golden_point(false).build().unwrap(),
    );

    for _ in 0..3 {
        engine.point(Team::A);
        engine.point(Team::B);
    }
    assert_eq!(engine.game_score_label(), ("40".to_string(), "40".to_string()));

    engine.point(Team::B);
    assert_eq!(engine.game_score_label(), ("40".to_string(), "AD".to_string()));
    engine.point(Team::A);
    assert_eq!(engine.current_state().advantage, None);
    engine.point(Team::A);
    assert_eq!(engine.game_score_label(), ("AD".to_string(), "40".to_string()));
    engine.point(Team::A);

    let state = engine.current_state();
    assert_eq!(state.games, PerTeam::new(1, 0));
    assert_eq!(state.advantage, None);
    assert_eq!(engine.game_score_label(), ("0".to_string(), "0".to_string()));
}

#[test]
fn server_rotation_over_four_games() {
    let config = MatchConfig::builder()
        .players(Team::A, "Ana", "Bea")
        .players(Team::B, "Carla", "Dani")
        .build()
        .unwrap();
    let mut engine = MatchEngine::new(config);

    let mut servers = vec![engine.server_player_name().to_string()];
    for team in [Team::A, Team::B, Team::A, Team::B] {
        win_game(&mut engine, team);
        servers.push(engine.server_player_name().to_string());
    }

    assert_eq!(servers, vec!["Ana", "Dani", "Bea", "Carla", "Ana"]);
}

#[test]
fn corrections_leave_the_score_alone() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    engine.point(Team::A);
    engine.point(Team::B);
    engine.point(Team::B);
    let score_before = *engine.current_state();

    engine.switch_player();
    assert_eq!(engine.current_state().server(), (Team::A, PlayerSlot::Second));
    engine.switch_player();
    assert_eq!(engine.current_state().server(), (Team::A, PlayerSlot::First));
    assert_eq!(engine.current_state().server_side, score_before.server_side);

    engine.flip_side();
    assert_eq!(
        engine.current_state().server_side,
        score_before.server_side.flip()
    );

    engine.switch_team();
    let state = engine.current_state();
    assert_eq!(state.server(), (Team::B, PlayerSlot::Second));
    assert_eq!(state.server_side, Side::Right);
    assert_eq!(state.points, score_before.points);
    assert_eq!(state.games, score_before.games);
    assert_eq!(state.sets, score_before.sets);
    assert_eq!(engine.history_len(), 8);
}

#[test]
fn first_server_on_team_b_is_honoured() {
    let config = MatchConfig::builder()
        .first_server(Team::B, PlayerSlot::Second)
        .start_server_side(Side::Left)
        .build()
        .unwrap();
    let mut engine = MatchEngine::new(config);

    assert_eq!(engine.server_player_name(), "B2");
    assert_eq!(engine.current_state().server_side, Side::Left);

    win_game(&mut engine, Team::B);
    assert_eq!(engine.server_player_name(), "A2");
    assert_eq!(engine.current_state().server_side, Side::Left);

    win_game(&mut engine, Team::A);
    assert_eq!(engine.server_player_name(), "B1");
}
