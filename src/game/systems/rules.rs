use crate::game::types::{Hazard, Player};

/// Resolve scorpion contact. Any number of scorpions on the player's tile deal
/// at most one hit per invulnerability window. Returns the number of hits taken.
pub fn apply_hazard_contact(player: &mut Player, hazards: &[Hazard]) -> u32 {
    let mut hits = 0;
    for hazard in hazards {
        if hazard.pos == player.pos && player.take_damage() {
            hits += 1;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Position;

    #[test]
    fn test_stacked_hazards_hit_once() {
        let mut player = Player::new(Position::new(3, 3));
        let hazards = vec![Hazard { pos: Position::new(3, 3) }, Hazard { pos: Position::new(3, 3) }];
        assert_eq!(apply_hazard_contact(&mut player, &hazards), 1);
        assert_eq!(player.vitality, 9);
        assert_eq!(player.invulnerable_ticks, 30);
    }

    #[test]
    fn test_distant_hazard_does_nothing() {
        let mut player = Player::new(Position::new(3, 3));
        let hazards = vec![Hazard { pos: Position::new(3, 4) }];
        assert_eq!(apply_hazard_contact(&mut player, &hazards), 0);
        assert_eq!(player.vitality, 10);
    }
}
