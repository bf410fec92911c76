use tenpin::core::{Game, ScoreCard};
use tenpin::types::Mark;

#[test]
fn score_card_matches_classic_sheet() {
    // X 7/ 9- X -8 8/ -6 X X X81
    let game =
        Game::from_rolls([10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]).unwrap();
    let card = game.scorecard();

    let running: Vec<_> = card.frames.iter().map(|f| f.running_total).collect();
    assert_eq!(
        running,
        [20, 39, 48, 66, 74, 84, 90, 120, 148, 167]
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>()
    );
    assert_eq!(card.final_score(), Some(game.score()));
    assert!(card.complete);

    let marks: Vec<_> = card.frames.iter().map(|f| f.mark).collect();
    assert_eq!(marks[0], Some(Mark::Strike));
    assert_eq!(marks[1], Some(Mark::Spare));
    assert_eq!(marks[2], Some(Mark::Open));

    let sheet: Vec<String> = game.frames().iter().map(ToString::to_string).collect();
    assert_eq!(
        sheet,
        ["X", "7/", "9-", "X", "-8", "8/", "-6", "X", "X", "X81"]
    );
}

#[test]
fn score_card_json_round_trip() {
    let game = Game::from_rolls([4, 6, 10, 3]).unwrap();
    let card = game.scorecard();

    let json = serde_json::to_string(&card).unwrap();
    let back: ScoreCard = serde_json::from_str(&json).unwrap();
    assert_eq!(back, card);
    assert_eq!(back.total, game.score());
}

#[test]
fn final_score_is_none_until_game_resolves() {
    let mut game = Game::new();
    for _ in 0..9 {
        game.roll(0).unwrap();
        game.roll(0).unwrap();
    }
    game.roll(10).unwrap();
    game.roll(10).unwrap();
    assert_eq!(game.scorecard().final_score(), None);

    game.roll(10).unwrap();
    assert_eq!(game.scorecard().final_score(), Some(30));
}
