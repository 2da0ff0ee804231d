use pocket_dice::services::scoring::{is_joker, score, total_score, upper_total};
use pocket_dice::{
    Action, Category, Direction, GameEngine, GameError, Hand, Outcome, Phase, Rejection, ScoreSheet,
};

fn hand(faces: [u8; 5]) -> Hand {
    Hand::new(faces).unwrap()
}

/// Rolls `faces` three times so the turn drops into scoring.
fn roll_out(engine: &mut GameEngine, faces: [u8; 5]) {
    for _ in 0..3 {
        engine.dispatch(Action::RollDice(hand(faces)));
    }
    assert_eq!(engine.state().phase(), Phase::Scoring);
}

/// Moves the cursor with `Next` until it sits on `target`.
fn select(engine: &mut GameEngine, target: Category) {
    for _ in 0..13 {
        if engine.state().selected() == Some(target) {
            return;
        }
        engine.dispatch(Action::SelectCategory(Direction::Next));
    }
    panic!("could not reach {:?}", target);
}

fn play(engine: &mut GameEngine, faces: [u8; 5], target: Category) {
    roll_out(engine, faces);
    select(engine, target);
    assert!(engine.dispatch(Action::ConfirmScore).is_applied());
}

#[test]
fn engine_initialization() {
    let engine = GameEngine::new(120);
    let state = engine.state();
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.high_score(), 120);
    assert_eq!(state.rolls_left(), 3);
    assert_eq!(state.turn(), 1);
    assert_eq!(state.sheet(), &ScoreSheet::new());
}

#[test]
fn yahtzee_then_joker_scenario() {
    let mut engine = GameEngine::new(0);
    engine.dispatch(Action::NewGame);

    let first = hand([3, 3, 3, 3, 3]);
    assert_eq!(score(Category::Yahtzee, &first, false), 50);
    play(&mut engine, [3, 3, 3, 3, 3], Category::Yahtzee);
    assert_eq!(engine.state().sheet().get(Category::Yahtzee), Some(50));

    let second = hand([5, 5, 5, 5, 5]);
    assert!(is_joker(&second, engine.state().sheet()));
    assert_eq!(score(Category::FullHouse, &second, true), 25);
    assert_eq!(score(Category::Chance, &second, true), 25);

    // Fives is open, so the joker is forced there.
    roll_out(&mut engine, [5, 5, 5, 5, 5]);
    assert_eq!(engine.state().selected(), Some(Category::Fives));
    assert_eq!(
        engine.dispatch(Action::SelectCategory(Direction::Next)),
        Outcome::Ignored(Rejection::JokerLocked)
    );
    assert_eq!(engine.state().preview_score(), Some(25));
    engine.dispatch(Action::ConfirmScore);
    assert_eq!(engine.state().sheet().get(Category::Fives), Some(25));
    assert_eq!(engine.state().yahtzee_bonus(), 100);

    // With Fives filled, a third five-of-a-kind may go anywhere; Full House pays 25.
    play(&mut engine, [5, 5, 5, 5, 5], Category::FullHouse);
    assert_eq!(engine.state().sheet().get(Category::FullHouse), Some(25));
    assert_eq!(engine.state().yahtzee_bonus(), 200);
    assert_eq!(engine.state().total_score(), 50 + 25 + 25 + 200);
}

#[test]
fn zeroed_yahtzee_still_makes_jokers_but_no_bonus() {
    let mut engine = GameEngine::new(0);
    engine.dispatch(Action::NewGame);
    play(&mut engine, [1, 2, 3, 4, 6], Category::Yahtzee);
    assert_eq!(engine.state().sheet().get(Category::Yahtzee), Some(0));

    roll_out(&mut engine, [6, 6, 6, 6, 6]);
    assert!(engine.state().is_joker());
    assert_eq!(engine.state().selected(), Some(Category::Sixes));
    engine.dispatch(Action::ConfirmScore);
    assert_eq!(engine.state().sheet().get(Category::Sixes), Some(30));
    assert_eq!(engine.state().yahtzee_bonus(), 0);
}

#[test]
fn straight_scenario() {
    let h = hand([1, 2, 3, 4, 5]);
    assert_eq!(score(Category::LargeStraight, &h, false), 40);
    assert_eq!(score(Category::SmallStraight, &h, false), 30);
}

#[test]
fn upper_bonus_applies_at_63_exactly() {
    let mut engine = GameEngine::new(0);
    engine.dispatch(Action::NewGame);
    // Three of each face: 3 + 6 + 9 + 12 + 15 + 18 = 63
    play(&mut engine, [1, 1, 1, 2, 3], Category::Ones);
    play(&mut engine, [2, 2, 2, 1, 3], Category::Twos);
    play(&mut engine, [3, 3, 3, 1, 2], Category::Threes);
    play(&mut engine, [4, 4, 4, 1, 2], Category::Fours);
    play(&mut engine, [5, 5, 5, 1, 2], Category::Fives);
    play(&mut engine, [6, 6, 6, 1, 2], Category::Sixes);
    let state = engine.state();
    assert_eq!(state.upper_total(), 63);
    assert!(state.has_upper_bonus());
    assert_eq!(state.total_score(), 63 + 35);
}

#[test]
fn upper_bonus_missing_at_62() {
    let mut sheet = ScoreSheet::new();
    sheet.record(Category::Ones, 2);
    sheet.record(Category::Twos, 6);
    sheet.record(Category::Threes, 9);
    sheet.record(Category::Fours, 12);
    sheet.record(Category::Fives, 15);
    sheet.record(Category::Sixes, 18);
    assert_eq!(upper_total(&sheet), 62);
    assert_eq!(total_score(&sheet, 0), 62);
}

#[test]
fn thirteen_confirms_end_the_game() {
    let mut engine = GameEngine::new(10);
    engine.dispatch(Action::NewGame);
    let plays = [
        ([1, 1, 1, 4, 5], Category::Ones),
        ([2, 2, 3, 4, 5], Category::Twos),
        ([3, 3, 3, 3, 5], Category::Threes),
        ([4, 4, 1, 2, 3], Category::Fours),
        ([5, 5, 5, 2, 3], Category::Fives),
        ([6, 6, 6, 6, 1], Category::Sixes),
        ([2, 2, 2, 6, 5], Category::ThreeOfAKind),
        ([4, 4, 4, 4, 2], Category::FourOfAKind),
        ([3, 3, 5, 5, 5], Category::FullHouse),
        ([1, 2, 3, 4, 4], Category::SmallStraight),
        ([2, 3, 4, 5, 6], Category::LargeStraight),
        ([6, 6, 5, 5, 4], Category::Chance),
        ([1, 1, 1, 1, 1], Category::Yahtzee),
    ];
    for (turn, (faces, category)) in plays.iter().enumerate() {
        assert_eq!(engine.state().turn() as usize, turn + 1);
        play(&mut engine, *faces, *category);
    }

    let state = engine.state();
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.turn(), 13);
    assert!(state.sheet().is_complete());
    // Upper: 3 + 4 + 12 + 8 + 15 + 24 = 66, earns the bonus.
    assert_eq!(state.upper_total(), 66);
    let lower = 17 + 18 + 25 + 30 + 40 + 26 + 50;
    assert_eq!(state.total_score(), 66 + 35 + lower);
    assert_eq!(state.high_score(), state.total_score());

    // Nothing but NEW_GAME or TOGGLE_SOUND moves a finished game.
    let before = state.clone();
    for action in [
        Action::RollDice(hand([1, 2, 3, 4, 5])),
        Action::StartScoring,
        Action::ConfirmScore,
        Action::SelectCategory(Direction::Prev),
    ] {
        assert!(!engine.dispatch(action).is_applied());
        assert_eq!(engine.state(), &before);
    }

    engine.dispatch(Action::NewGame);
    assert_eq!(engine.state().phase(), Phase::Playing);
    assert_eq!(engine.state().high_score(), before.total_score());
    assert_eq!(engine.state().total_score(), 0);
}

#[test]
fn boundary_rejects_malformed_input() {
    assert!(matches!(
        Action::roll_dice(&[1, 2, 3, 4, 5, 6]),
        Err(GameError::WrongHandSize { expected: 5, actual: 6 })
    ));
    assert!(matches!(
        Action::roll_dice(&[1, 2, 3, 4, 7]),
        Err(GameError::InvalidDieValue(7))
    ));
    assert!(matches!(Action::toggle_hold(9), Err(GameError::InvalidHoldIndex(9))));
}

#[test]
fn holding_survives_rolls_and_clears_on_confirm() {
    let mut engine = GameEngine::new(0);
    engine.dispatch(Action::NewGame);
    engine.dispatch(Action::RollDice(hand([6, 2, 6, 3, 6])));
    engine.dispatch(Action::toggle_hold(0).unwrap());
    engine.dispatch(Action::toggle_hold(2).unwrap());
    engine.dispatch(Action::RollDice(hand([6, 1, 6, 1, 6])));
    let held = *engine.state().held();
    assert_eq!(held.flags(), &[true, false, true, false, false]);

    engine.dispatch(Action::StartScoring);
    engine.dispatch(Action::ConfirmScore);
    assert!(!engine.state().held().any());
}

#[test]
fn sound_preference_survives_new_game() {
    let mut engine = GameEngine::new(0);
    engine.dispatch(Action::ToggleSound);
    engine.dispatch(Action::NewGame);
    assert!(!engine.state().sound_enabled());
    engine.dispatch(Action::ToggleSound);
    assert!(engine.state().sound_enabled());
}
