//! Player commands and the key table the input layer translates through.

use crate::geometry::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Shoot(Direction),
    Quit,
}

/// Key bindings: WASD moves, vim keys shoot, `q` quits.
pub const KEY_TABLE: [(char, Command); 9] = [
    ('a', Command::Move(Direction::Left)),
    ('d', Command::Move(Direction::Right)),
    ('w', Command::Move(Direction::Up)),
    ('s', Command::Move(Direction::Down)),
    ('k', Command::Shoot(Direction::Up)),
    ('j', Command::Shoot(Direction::Down)),
    ('h', Command::Shoot(Direction::Left)),
    ('l', Command::Shoot(Direction::Right)),
    ('q', Command::Quit),
];

pub const HELP_TEXT: &str = "w, s, a, d for move. h, j, k, l for shoot. Fight if you can!";

impl Command {
    pub fn from_key(key: char) -> Option<Command> {
        KEY_TABLE
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, command)| command)
    }

    /// Symbolic name, e.g. `move_up` or `shoot_left`.
    pub fn name(self) -> &'static str {
        match self {
            Command::Move(Direction::Up) => "move_up",
            Command::Move(Direction::Down) => "move_down",
            Command::Move(Direction::Left) => "move_left",
            Command::Move(Direction::Right) => "move_right",
            Command::Shoot(Direction::Up) => "shoot_up",
            Command::Shoot(Direction::Down) => "shoot_down",
            Command::Shoot(Direction::Left) => "shoot_left",
            Command::Shoot(Direction::Right) => "shoot_right",
            Command::Quit => "quit",
        }
    }
}
