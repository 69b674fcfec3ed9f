//! # Random Agent
//!
//! A move-selection agent that plays a uniformly random legal move. With a
//! fixed seed, every game it drives is reproducible move-for-move.

use crate::games::othello::{OthelloError, OthelloMove, OthelloState};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Agent which plays a random valid move
///
/// Each agent owns its generator; concurrent games never share RNG state.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: Xoshiro256PlusPlus,
}

impl RandomAgent {
    /// Creates an agent whose move sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Picks a valid move at random
    ///
    /// # Arguments
    /// * `state` - The game to pick a move in
    /// * `player` - The player to move (1 or -1)
    ///
    /// # Returns
    /// `Ok(Some(move))` with a uniformly chosen legal move, `Ok(None)` when
    /// the player has no legal move and must pass, or
    /// `OthelloError::InvalidPlayer` for an unrecognized identity.
    pub fn pick_move(
        &mut self,
        state: &OthelloState,
        player: i32,
    ) -> Result<Option<OthelloMove>, OthelloError> {
        let moves = state.valid_moves(player)?;
        if moves.is_empty() {
            Ok(None)
        } else {
            let idx = self.rng.gen_range(0..moves.len());
            Ok(Some(moves[idx].clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::othello::{opponent, PLAYER_ONE};

    #[test]
    fn test_picked_moves_are_legal() {
        let mut agent = RandomAgent::new(7);
        let game = OthelloState::new(8);
        for _ in 0..20 {
            let mv = agent.pick_move(&game, PLAYER_ONE).unwrap().unwrap();
            assert!(game.is_legal(&mv, PLAYER_ONE).unwrap());
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = RandomAgent::new(1234);
        let mut b = RandomAgent::new(1234);
        let mut game_a = OthelloState::new(8);
        let mut game_b = OthelloState::new(8);
        let mut player = PLAYER_ONE;
        for _ in 0..10 {
            let mv_a = a.pick_move(&game_a, player).unwrap();
            let mv_b = b.pick_move(&game_b, player).unwrap();
            assert_eq!(mv_a, mv_b);
            if let Some(mv) = mv_a {
                game_a.apply_move(&mv, player);
                game_b.apply_move(&mv, player);
            }
            player = opponent(player);
        }
    }

    #[test]
    fn test_invalid_player_propagates() {
        let mut agent = RandomAgent::new(0);
        let game = OthelloState::new(8);
        assert_eq!(
            agent.pick_move(&game, 3),
            Err(OthelloError::InvalidPlayer(3))
        );
    }
}
