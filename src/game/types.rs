use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the two sides. Player A starts on row 0, player B on the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Row delta of one step "forward" for this player.
    pub fn forward(self) -> isize {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "P1")]
    Pawn1,
    #[serde(rename = "P2")]
    Pawn2,
    #[serde(rename = "P3")]
    Pawn3,
    #[serde(rename = "H1")]
    Hero1,
    #[serde(rename = "H2")]
    Hero2,
}

impl PieceKind {
    /// Heroes move two cells and capture everything hostile they pass over.
    pub fn is_hero(self) -> bool {
        matches!(self, PieceKind::Hero1 | PieceKind::Hero2)
    }

    fn code(self) -> &'static str {
        match self {
            PieceKind::Pawn1 => "P1",
            PieceKind::Pawn2 => "P2",
            PieceKind::Pawn3 => "P3",
            PieceKind::Hero1 => "H1",
            PieceKind::Hero2 => "H2",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PieceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P1" => Ok(PieceKind::Pawn1),
            "P2" => Ok(PieceKind::Pawn2),
            "P3" => Ok(PieceKind::Pawn3),
            "H1" => Ok(PieceKind::Hero1),
            "H2" => Ok(PieceKind::Hero2),
            other => Err(format!("unknown piece kind '{}'", other)),
        }
    }
}

/// A uniquely identified piece on the board.
///
/// On the wire a piece is the string `"<owner>-<kind>"`, e.g. `"A-P1"`.
/// That encoding only exists in the serde impls below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.owner, self.kind)
    }
}

impl FromStr for Piece {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, kind) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid piece identity '{}'", s))?;
        let owner = match owner {
            "A" => Player::A,
            "B" => Player::B,
            other => return Err(format!("unknown owner '{}'", other)),
        };
        Ok(Piece::new(owner, kind.parse()?))
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A board cell: empty, or holding exactly one piece.
pub type Cell = Option<Piece>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction token sent by clients.
///
/// Tokens outside the known vocabulary are kept verbatim in `Unknown` so the
/// movement engine can treat them as a no-op and the move log can echo them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Left,
    Right,
    Forward,
    Back,
    ForwardLeft,
    ForwardRight,
    BackLeft,
    BackRight,
    Unknown(String),
}

impl Direction {
    pub fn token(&self) -> &str {
        match self {
            Direction::Left => "L",
            Direction::Right => "R",
            Direction::Forward => "F",
            Direction::Back => "B",
            Direction::ForwardLeft => "FL",
            Direction::ForwardRight => "FR",
            Direction::BackLeft => "BL",
            Direction::BackRight => "BR",
            Direction::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Direction {
    fn from(token: String) -> Self {
        match token.as_str() {
            "L" => Direction::Left,
            "R" => Direction::Right,
            "F" => Direction::Forward,
            "B" => Direction::Back,
            "FL" => Direction::ForwardLeft,
            "FR" => Direction::ForwardRight,
            "BL" => Direction::BackLeft,
            "BR" => Direction::BackRight,
            _ => Direction::Unknown(token),
        }
    }
}

impl From<&str> for Direction {
    fn from(token: &str) -> Self {
        Direction::from(token.to_string())
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.token().to_string()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One applied move, as kept in the game's move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub character: PieceKind,
    pub direction: Direction,
    pub from: Position,
    pub to: Position,
    /// Opposing pieces removed by this move, path captures first.
    pub captured: Vec<Piece>,
}
