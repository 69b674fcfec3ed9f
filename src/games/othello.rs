//! # Othello (Reversi) Game Engine
//!
//! This module implements the rules engine for Othello (also known as Reversi).
//! Players take turns placing discs on an NxN board, with the goal of having
//! the most discs of their color when the board is full or no more moves are possible.
//!
//! ## Rules
//! - Players must place discs that "sandwich" opponent discs between the new disc
//!   and an existing disc of the same color
//! - All sandwiched discs are flipped to the current player's color
//! - If a player has no legal moves, their turn is skipped (a pass)
//! - Game ends when the board is full, when a player loses every disc, or when
//!   neither player can make a move
//! - Winner is determined by who has more discs on the board

use std::fmt;
use std::str::FromStr;

/// Disc value for the first player (dark).
pub const PLAYER_ONE: i32 = 1;

/// Disc value for the second player (light).
pub const PLAYER_TWO: i32 = -1;

/// The 8 directions a capture line can run in: (row delta, column delta).
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

/// Returns the opposing player identity.
///
/// The opponent is always the negation of the player; it is never stored.
pub fn opponent(player: i32) -> i32 {
    -player
}

fn is_recognized(player: i32) -> bool {
    player == PLAYER_ONE || player == PLAYER_TWO
}

/// Errors reported by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// A player identity other than 1 or -1 was supplied
    InvalidPlayer(i32),
}

impl fmt::Display for OthelloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OthelloError::InvalidPlayer(p) => {
                write!(f, "invalid player identity {} (expected 1 or -1)", p)
            }
        }
    }
}

impl std::error::Error for OthelloError {}

/// Represents a move in Othello
///
/// Contains the row and column coordinates where a player wants to place their disc.
/// Both coordinates are 0-based indices.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct OthelloMove(pub usize, pub usize);

impl fmt::Display for OthelloMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

impl FromStr for OthelloMove {
    type Err = String;

    /// Creates an OthelloMove from a string representation
    ///
    /// Expected format is "row,col" where both are 0-based indices.
    ///
    /// # Arguments
    /// * `s` - String in format "r,c" (e.g., "3,4")
    ///
    /// # Returns
    /// Ok(OthelloMove) if parsing succeeds, Err(String) if format is invalid
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use othello::games::othello::OthelloMove;
    /// let mv = OthelloMove::from_str("3,4").unwrap();
    /// assert_eq!(mv.0, 3);
    /// assert_eq!(mv.1, 4);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err("Expected format: r,c".to_string());
        }
        let r = parts[0].parse::<usize>().map_err(|e| e.to_string())?;
        let c = parts[1].parse::<usize>().map_err(|e| e.to_string())?;
        Ok(OthelloMove(r, c))
    }
}

/// Current game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is still in progress
    InProgress,
    /// Game ended with a winner
    Win(i32),
    /// Game ended in a draw
    Draw,
}

impl GameStatus {
    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Live disc counts for both players
///
/// Maintained incrementally on every placement and flip; never recomputed by
/// scanning the board. The counts always sum to the number of non-empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTally {
    player_one: u32,
    player_two: u32,
}

impl ScoreTally {
    /// The tally of the starting position: two discs per player.
    fn new() -> Self {
        ScoreTally {
            player_one: 2,
            player_two: 2,
        }
    }

    /// Disc count for the given player
    ///
    /// # Arguments
    /// * `player` - A recognized player identity (1 or -1)
    pub fn get(&self, player: i32) -> u32 {
        if player == PLAYER_ONE {
            self.player_one
        } else {
            self.player_two
        }
    }

    /// Total number of discs on the board
    pub fn total(&self) -> u32 {
        self.player_one + self.player_two
    }

    fn add(&mut self, player: i32) {
        if player == PLAYER_ONE {
            self.player_one += 1;
        } else {
            self.player_two += 1;
        }
    }

    /// Moves one disc from the opponent's count to the player's count.
    fn flip_to(&mut self, player: i32) {
        if player == PLAYER_ONE {
            self.player_one += 1;
            self.player_two -= 1;
        } else {
            self.player_two += 1;
            self.player_one -= 1;
        }
    }
}

/// Represents the complete state of an Othello game
///
/// Contains the board state and the live disc counts.
/// The board uses 1 for player one discs, -1 for player two discs, and 0 for empty spaces.
#[derive(Debug, Clone)]
pub struct OthelloState {
    /// The game board as a 2D vector
    board: Vec<Vec<i32>>,
    /// Size of the board (NxN)
    board_size: usize,
    /// Disc counts, kept in step with every placement and flip
    scores: ScoreTally,
}

impl OthelloState {
    /// Creates a new Othello game with the standard starting position
    ///
    /// Sets up the board with 4 discs in the center in the traditional pattern:
    /// player one on the anti-diagonal, player two on the main diagonal.
    /// Sizes below 4 are clamped to 4. Odd sizes are kept as given; the 2x2
    /// seed block then sits adjacent to the true center.
    ///
    /// # Arguments
    /// * `board_size` - Size of the board (NxN), typically 8
    ///
    /// # Returns
    /// A new OthelloState ready to play
    pub fn new(board_size: usize) -> Self {
        let board_size = if board_size < 4 { 4 } else { board_size };
        let mut board = vec![vec![0; board_size]; board_size];
        let center = board_size / 2;
        board[center - 1][center - 1] = PLAYER_TWO;
        board[center][center] = PLAYER_TWO;
        board[center - 1][center] = PLAYER_ONE;
        board[center][center - 1] = PLAYER_ONE;
        OthelloState {
            board,
            board_size,
            scores: ScoreTally::new(),
        }
    }

    /// Returns the board size (N for an NxN board)
    pub fn size(&self) -> usize {
        self.board_size
    }

    /// Returns a reference to the board grid
    pub fn board(&self) -> &Vec<Vec<i32>> {
        &self.board
    }

    /// Returns the current disc counts
    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    /// Computes all legal moves for the player, in row-major scan order
    ///
    /// For each empty cell, the 8 directions are tested for a capture line
    /// (an adjacent opponent disc, zero or more further opponent discs, then
    /// an own disc before any empty cell or board edge). A cell qualifies as
    /// soon as any single direction qualifies.
    ///
    /// # Arguments
    /// * `player` - The player to generate moves for (1 or -1)
    ///
    /// # Returns
    /// The legal moves in row-major order (possibly empty), or
    /// `OthelloError::InvalidPlayer` for an unrecognized identity. An empty
    /// list is a valid result meaning the player must pass.
    pub fn valid_moves(&self, player: i32) -> Result<Vec<OthelloMove>, OthelloError> {
        if !is_recognized(player) {
            return Err(OthelloError::InvalidPlayer(player));
        }
        let mut moves = Vec::new();
        for r in 0..self.board_size {
            for c in 0..self.board_size {
                if self.board[r][c] == 0 && self.captures_from(r, c, player) {
                    moves.push(OthelloMove(r, c));
                }
            }
        }
        Ok(moves)
    }

    /// Checks if a move is legal in the current game state
    ///
    /// A move is legal if it's on an empty square within the board and would
    /// flip at least one opponent disc. Callers that do not trust their move
    /// source can use this as a boundary check before [`apply_move`].
    ///
    /// [`apply_move`]: OthelloState::apply_move
    ///
    /// # Arguments
    /// * `mv` - The move to check
    /// * `player` - The player making the move (1 or -1)
    ///
    /// # Returns
    /// Whether the move is legal, or `OthelloError::InvalidPlayer` for an
    /// unrecognized identity
    pub fn is_legal(&self, mv: &OthelloMove, player: i32) -> Result<bool, OthelloError> {
        if !is_recognized(player) {
            return Err(OthelloError::InvalidPlayer(player));
        }
        Ok(mv.0 < self.board_size
            && mv.1 < self.board_size
            && self.board[mv.0][mv.1] == 0
            && self.captures_from(mv.0, mv.1, player))
    }

    /// Places the player's disc at `mv` and flips every captured disc
    ///
    /// The mover's count goes up by one for the placed disc, and each of the
    /// 8 directions is then resolved independently: a contiguous run of
    /// opponent discs closed off by an own disc is flipped, adjusting both
    /// counts once per flipped disc. A direction that reaches an empty cell
    /// or the board edge first flips nothing.
    ///
    /// The caller must guarantee that `mv` is a member of
    /// `valid_moves(player)`; no legality re-validation is performed here, and
    /// applying an illegal move leaves the board and counts unspecified. Use
    /// [`is_legal`] first when the move comes from an untrusted source.
    ///
    /// [`is_legal`]: OthelloState::is_legal
    ///
    /// # Arguments
    /// * `mv` - The move to apply, drawn from `valid_moves(player)`
    /// * `player` - The player making the move (1 or -1)
    pub fn apply_move(&mut self, mv: &OthelloMove, player: i32) {
        self.board[mv.0][mv.1] = player;
        self.scores.add(player);

        for &(dr, dc) in DIRECTIONS.iter() {
            if !self.captures_in_direction(mv.0, mv.1, dr, dc, player) {
                continue;
            }
            // The direction is known to close with an own disc; flip up to it.
            let mut nr = mv.0 as i32 + dr;
            let mut nc = mv.1 as i32 + dc;
            while self.board[nr as usize][nc as usize] != player {
                self.board[nr as usize][nc as usize] = player;
                self.scores.flip_to(player);
                nr += dr;
                nc += dc;
            }
        }
    }

    /// Evaluates whether the game has ended, and with what result
    ///
    /// The rules are checked in order; the first match wins:
    /// 1. The player has no discs left: the opponent wins by wipeout.
    /// 2. The opponent has no discs left: the player wins by wipeout.
    /// 3. The board is full: the higher count wins, equal counts draw.
    /// 4. Neither the player nor the opponent has a legal move: the higher
    ///    count wins, equal counts draw.
    /// 5. Otherwise the game continues.
    ///
    /// Rule 4 checks both sides, so the result is the same whichever player
    /// the status is requested for.
    ///
    /// # Arguments
    /// * `player` - The player to evaluate from (1 or -1)
    ///
    /// # Returns
    /// The game status, or `OthelloError::InvalidPlayer` for an unrecognized
    /// identity
    pub fn game_status(&self, player: i32) -> Result<GameStatus, OthelloError> {
        if !is_recognized(player) {
            return Err(OthelloError::InvalidPlayer(player));
        }
        let opp = opponent(player);
        let own_count = self.scores.get(player);
        let opp_count = self.scores.get(opp);

        if own_count == 0 {
            return Ok(GameStatus::Win(opp));
        }
        if opp_count == 0 {
            return Ok(GameStatus::Win(player));
        }

        let board_full = self.scores.total() as usize == self.board_size * self.board_size;
        let stalled = !board_full
            && self.valid_moves(player)?.is_empty()
            && self.valid_moves(opp)?.is_empty();

        if board_full || stalled {
            return Ok(if own_count > opp_count {
                GameStatus::Win(player)
            } else if opp_count > own_count {
                GameStatus::Win(opp)
            } else {
                GameStatus::Draw
            });
        }
        Ok(GameStatus::InProgress)
    }

    /// Formats the board as text, optionally highlighting legal moves
    ///
    /// Empty cells render as `.`, player one discs as `●`, player two discs
    /// as `○`. When `highlight_moves` is set, cells in `valid_moves(player)`
    /// render as `▵` instead of `.`. Pure presentation; no state is mutated.
    ///
    /// # Arguments
    /// * `player` - The player whose legal moves are highlighted
    /// * `highlight_moves` - Whether to mark the player's legal moves
    ///
    /// # Returns
    /// The rendered grid, one line per row, or `OthelloError::InvalidPlayer`
    /// when highlighting is requested for an unrecognized identity
    pub fn render(&self, player: i32, highlight_moves: bool) -> Result<String, OthelloError> {
        let highlights = if highlight_moves {
            self.valid_moves(player)?
        } else {
            Vec::new()
        };
        let mut out = String::new();
        for r in 0..self.board_size {
            for c in 0..self.board_size {
                let glyph = if highlights.contains(&OthelloMove(r, c)) {
                    "▵"
                } else {
                    match self.board[r][c] {
                        PLAYER_ONE => "●",
                        PLAYER_TWO => "○",
                        _ => ".",
                    }
                };
                out.push_str(glyph);
                out.push(' ');
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// True if placing `player` at (r, c) closes a capture line in any direction.
    fn captures_from(&self, r: usize, c: usize, player: i32) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.captures_in_direction(r, c, dr, dc, player))
    }

    /// Walks outward from (r, c): the line captures iff the adjacent cell
    /// holds the opponent and an own disc appears before any empty cell or
    /// the board edge.
    fn captures_in_direction(&self, r: usize, c: usize, dr: i32, dc: i32, player: i32) -> bool {
        let opp = opponent(player);
        let mut nr = r as i32 + dr;
        let mut nc = c as i32 + dc;
        if !self.in_bounds(nr, nc) || self.board[nr as usize][nc as usize] != opp {
            return false;
        }
        loop {
            nr += dr;
            nc += dc;
            if !self.in_bounds(nr, nc) {
                return false;
            }
            match self.board[nr as usize][nc as usize] {
                0 => return false,
                v if v == player => return true,
                _ => {}
            }
        }
    }

    fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.board_size && (c as usize) < self.board_size
    }
}

impl fmt::Display for OthelloState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.board_size {
            for c in 0..self.board_size {
                let symbol = match self.board[r][c] {
                    PLAYER_ONE => "●",
                    PLAYER_TWO => "○",
                    _ => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
