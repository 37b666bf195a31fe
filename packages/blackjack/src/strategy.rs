use crate::{Action, Observation};

/// Hit below `stick_at`, stand otherwise.
pub fn threshold_move(observation: &Observation, stick_at: u8) -> Action {
    if observation.player_total < stick_at {
        Action::Hit
    } else {
        Action::Stand
    }
}

/// Hit/stand basic strategy for an infinite deck where the dealer stands on all 17s.
pub fn basic_move(observation: &Observation) -> Action {
    let player_value = observation.player_total;
    // Ace up counts as 11 for the table lookup
    let dealer_value = match observation.dealer_upcard {
        1 => 11,
        v => v,
    };

    if observation.usable_ace {
        // Soft hands
        if player_value >= 19 {
            Action::Stand
        } else if player_value == 18 {
            if dealer_value >= 9 {
                Action::Hit
            } else {
                Action::Stand
            }
        } else {
            Action::Hit
        }
    } else {
        // Hard hands
        if player_value >= 17 {
            Action::Stand
        } else if (13..=16).contains(&player_value) {
            if (2..=6).contains(&dealer_value) {
                Action::Stand
            } else {
                Action::Hit
            }
        } else if player_value == 12 {
            if (4..=6).contains(&dealer_value) {
                Action::Stand
            } else {
                Action::Hit
            }
        } else {
            Action::Hit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_move() {
        assert_eq!(threshold_move(&Observation::new(19, 10, false), 20), Action::Hit);
        assert_eq!(threshold_move(&Observation::new(20, 10, false), 20), Action::Stand);
        assert_eq!(threshold_move(&Observation::new(21, 1, true), 20), Action::Stand);
    }

    #[test]
    fn test_basic_hard_totals() {
        assert_eq!(basic_move(&Observation::new(16, 10, false)), Action::Hit);
        assert_eq!(basic_move(&Observation::new(16, 6, false)), Action::Stand);
        assert_eq!(basic_move(&Observation::new(12, 3, false)), Action::Hit);
        assert_eq!(basic_move(&Observation::new(12, 4, false)), Action::Stand);
        assert_eq!(basic_move(&Observation::new(17, 1, false)), Action::Stand);
    }

    #[test]
    fn test_basic_soft_totals() {
        assert_eq!(basic_move(&Observation::new(17, 6, true)), Action::Hit);
        assert_eq!(basic_move(&Observation::new(18, 8, true)), Action::Stand);
        assert_eq!(basic_move(&Observation::new(18, 1, true)), Action::Hit);
        assert_eq!(basic_move(&Observation::new(19, 10, true)), Action::Stand);
    }
}
