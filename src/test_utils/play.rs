use crate::{Game, Location, ParseLocationError};

/// Play an interactive Othello game on stdin/stdout.
pub fn play_interactive() {
    use std::io::Write;
    let mut game = Game::default();

    while !game.is_finished() {
        println!("\n{}\n", game);

        print!("Enter a move: ");
        std::io::stdout().flush().unwrap();
        let mut input_line = String::new();
        std::io::stdin().read_line(&mut input_line).unwrap();
        let parsed: Result<Location, ParseLocationError> = input_line.trim_end().parse();

        let loc = match parsed {
            Ok(loc) => loc,
            Err(_) => {
                println!("Cannot parse move.");
                continue;
            }
        };

        match game.apply_move(loc) {
            Ok(next) => game = next,
            Err(_) => {
                println!("Illegal move. Legal moves: {}", game.legal_moves());
            }
        }
    }

    println!("\n{}\n", game);
    if let Some(winner) = game.winner() {
        println!("Winner: {}.", winner);
    } else {
        println!("Draw.")
    }
}
