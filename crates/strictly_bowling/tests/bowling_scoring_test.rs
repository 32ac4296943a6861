//! Tests for score calculation over whole games.

use strictly_bowling::{FrameScore, Game, ScoreCalculator};

fn play(rolls: &[u8]) -> Game {
    Game::replay(rolls).expect("Legal rolls")
}

#[test]
fn test_all_ones_scores_twenty() {
    let scores = play(&[1; 20]).scores();

    assert_eq!(scores.len(), 10);
    for (index, score) in scores.iter().enumerate() {
        assert_eq!(*score.frame_number() as usize, index + 1);
        assert_eq!(*score.score(), 2);
        assert_eq!(*score.cumulative_score() as usize, 2 * (index + 1));
    }
    assert_eq!(*scores[9].cumulative_score(), 20);
}

#[test]
fn test_perfect_game_scores_three_hundred() {
    let game = play(&[10; 12]);
    let scores = game.scores();

    assert!(game.is_complete());
    assert_eq!(scores.len(), 10);
    assert!(scores.iter().all(|score| *score.score() == 30));
    assert_eq!(*scores[9].cumulative_score(), 300);
    assert_eq!(game.total_score(), 300);
}

#[test]
fn test_spare_bonus() {
    let scores = play(&[5, 5, 3, 4]).scores();
    assert_eq!(
        scores,
        vec![FrameScore::new(1, 13, 13), FrameScore::new(2, 7, 20)]
    );
}

#[test]
fn test_strike_bonus() {
    let scores = play(&[10, 3, 4]).scores();
    assert_eq!(
        scores,
        vec![FrameScore::new(1, 17, 17), FrameScore::new(2, 7, 24)]
    );
}

#[test]
fn test_fresh_game_has_no_scores() {
    assert!(Game::new().scores().is_empty());
}

#[test]
fn test_trailing_strike_omits_itself_and_later_frames() {
    let game = play(&[3, 4, 2, 5, 10]);
    let scores = game.scores();
    assert_eq!(
        scores,
        vec![FrameScore::new(1, 7, 7), FrameScore::new(2, 7, 14)]
    );

    // One bonus roll is not enough for the strike.
    let game = play(&[3, 4, 2, 5, 10, 6]);
    assert_eq!(game.scores().len(), 2);

    // The second bonus roll resolves it retroactively.
    let game = play(&[3, 4, 2, 5, 10, 6, 1]);
    assert_eq!(
        game.scores(),
        vec![
            FrameScore::new(1, 7, 7),
            FrameScore::new(2, 7, 14),
            FrameScore::new(3, 17, 31),
            FrameScore::new(4, 7, 38),
        ]
    );
}

#[test]
fn test_consecutive_strikes_resolve_in_turn() {
    assert!(play(&[10, 10]).scores().is_empty());
    assert_eq!(play(&[10, 10, 10]).scores(), vec![FrameScore::new(1, 30, 30)]);
    assert_eq!(
        play(&[10, 10, 10, 2]).scores(),
        vec![FrameScore::new(1, 30, 30), FrameScore::new(2, 22, 52)]
    );
}

#[test]
fn test_ninth_frame_strike_draws_bonus_from_tenth() {
    let mut rolls = vec![0; 16];
    rolls.extend([10, 10, 3, 5]);
    let scores = play(&rolls).scores();

    assert_eq!(scores.len(), 10);
    assert_eq!(*scores[8].score(), 23);
    assert_eq!(*scores[9].score(), 18);
    assert_eq!(*scores[9].cumulative_score(), 41);
}

#[test]
fn test_mixed_game() {
    // 1/4 4/5 6/4(spare) 5/5(spare) X 0/1 7/3(spare) 6/4(spare) X 2/8/6
    let rolls = [1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6];
    let game = play(&rolls);
    let cumulative: Vec<u16> = game
        .scores()
        .iter()
        .map(|score| *score.cumulative_score())
        .collect();

    assert!(game.is_complete());
    assert_eq!(cumulative, vec![5, 14, 29, 49, 60, 61, 77, 97, 117, 133]);
}

#[test]
fn test_calculator_is_pure() {
    let game = play(&[9, 1, 10, 4]);
    let first = ScoreCalculator::calculate_scores(game.frames());
    let second = ScoreCalculator::calculate_scores(game.frames());
    assert_eq!(first, second);
    assert_eq!(first, vec![FrameScore::new(1, 20, 20)]);
}
