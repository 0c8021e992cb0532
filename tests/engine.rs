//! End-to-end properties of the move engine, checked over whole games.

use flipstone::bitboard::Bitboard;
use flipstone::{Game, GameStatus, Location, Position, Side};

fn loc(name: &str) -> Location {
    name.parse().unwrap()
}

/// Play one full game, picking uniformly random legal moves.
fn random_playout(rng: &mut fastrand::Rng) -> Game {
    let mut game = Game::default();
    while !game.is_finished() {
        let moves: Vec<Location> = game.legal_moves().collect();
        let mv = moves[rng.usize(..moves.len())];
        game = game.apply_move(mv).unwrap();
    }
    game
}

#[test]
fn playouts_preserve_the_board_invariants() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);

    for _ in 0..50 {
        let mut game = Game::default();
        while !game.is_finished() {
            let moves: Vec<Location> = game.legal_moves().collect();
            let mv = moves[rng.usize(..moves.len())];
            let next = game.apply_move(mv).unwrap();

            let position = next.position();
            // The two sides never share a square.
            assert!((position.pieces(Side::Black) & position.pieces(Side::White)).is_empty());
            // Stones are placed and flipped, never removed.
            assert_eq!(
                position.occupied() & game.position().occupied(),
                game.position().occupied()
            );
            assert_eq!(
                position.occupied().count_occupied(),
                game.position().occupied().count_occupied() + 1
            );

            game = next;
        }
        assert_eq!(game.position().status(), GameStatus::GameOver);
    }
}

#[test]
fn playouts_end_with_a_consistent_score() {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..20 {
        let game = random_playout(&mut rng);
        let total = game.score(Side::Black) as u32 + game.score(Side::White) as u32;
        assert!(total >= 4 && total <= 64);
        assert!(game.legal_moves().is_empty());
    }
}

#[test]
fn the_canonical_opening_moves() {
    let black: Vec<String> = Position::INITIAL
        .legal_moves(Side::Black)
        .map(|mv| mv.to_string())
        .collect();
    assert_eq!(black, vec!["d3", "c4", "f5", "e6"]);

    let white: Vec<String> = Position::INITIAL
        .legal_moves(Side::White)
        .map(|mv| mv.to_string())
        .collect();
    assert_eq!(white, vec!["e3", "f4", "c5", "d6"]);
}

#[test]
fn opening_capture_flips_exactly_one_stone() {
    let position = Position::INITIAL.apply_move(Side::Black, loc("d3"));
    assert_eq!(position.count(Side::Black), 4);
    assert_eq!(position.count(Side::White), 1);
    assert!(position.is_legal_move(Side::White, loc("c3")));
}

#[test]
fn no_capture_across_the_board_seam() {
    // Black on the h file, White on the a file of the next rank: the two
    // are not adjacent on the board, so Black must have no move through
    // that "neighborhood".
    let black: Bitboard = Bitboard::from(loc("h1"));
    let white: Bitboard = loc("a2").into();
    let position = Position::from_bitboards(black, white);
    assert!(position.legal_moves(Side::Black).is_empty());
    assert!(!position.is_legal_move(Side::Black, loc("b2")));
}

#[test]
fn lone_diagonal_pair_has_no_moves() {
    let position =
        Position::from_bitboards(Bitboard::from(loc("b1")), Bitboard::from(loc("a2")));
    assert!(position.legal_moves(Side::Black).is_empty());
    assert!(position.legal_moves(Side::White).is_empty());
    assert_eq!(position.status(), GameStatus::GameOver);
}

#[test]
fn replaying_a_known_game_prefix() {
    // A common opening line; five stones placed, all captures applied.
    let game = Game::replay("f5d6c3d3c4").unwrap();
    assert_eq!(
        game.score(Side::Black) as u32 + game.score(Side::White) as u32,
        9
    );
    assert_eq!(game.to_move(), Side::White);
    assert!(!game.is_finished());
}

#[test]
fn a_replayed_playout_matches_the_original_game() {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut record = String::new();
    let mut game = Game::default();

    while !game.is_finished() {
        let moves: Vec<Location> = game.legal_moves().collect();
        let mv = moves[rng.usize(..moves.len())];
        record.push_str(&mv.to_string());
        game = game.apply_move(mv).unwrap();
    }

    assert_eq!(Game::replay(&record).unwrap(), game);
}
