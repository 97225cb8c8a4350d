//! Screen-relative movement
//!
//! Movement keys mean "away from the viewer", "to the viewer's left" and so
//! on. After the camera has orbited in quarter turns, the board direction a
//! key maps to must rotate with it. [`RotationSteps`] counts those quarter
//! turns and [`remap`] turns a [`ScreenDirection`] into the board's
//! [`CompassDirection`] through a fixed four-entry table.

/// Direction of a movement on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompassDirection {
    West,
    North,
    East,
    South,
}

/// Board directions in orbit order. Consecutive entries are a quarter turn
/// apart, so indexing modulo 4 walks the cycle.
const COMPASS_CYCLE: [CompassDirection; 4] = [
    CompassDirection::West,
    CompassDirection::North,
    CompassDirection::East,
    CompassDirection::South,
];

/// Direction of a movement as seen on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenDirection {
    Forward,
    Left,
    Backward,
    Right,
}

impl ScreenDirection {
    pub const ALL: [ScreenDirection; 4] = [
        ScreenDirection::Forward,
        ScreenDirection::Left,
        ScreenDirection::Backward,
        ScreenDirection::Right,
    ];

    /// Position of this direction in the compass cycle when the camera has
    /// not turned
    pub const fn offset(self) -> u8 {
        match self {
            ScreenDirection::Forward => 0,
            ScreenDirection::Left => 1,
            ScreenDirection::Backward => 2,
            ScreenDirection::Right => 3,
        }
    }
}

/// Quarter turns the camera has accumulated, modulo 4
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RotationSteps(u8);

impl RotationSteps {
    pub const fn new(steps: u8) -> Self {
        Self(steps % 4)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Advance by `steps` quarter turns
    #[must_use]
    pub const fn advance(self, steps: u8) -> Self {
        Self((self.0 + steps % 4) % 4)
    }
}

/// Map a screen-relative direction onto the board for the given camera turn
pub fn remap(steps: RotationSteps, logical: ScreenDirection) -> CompassDirection {
    COMPASS_CYCLE[((steps.get() + logical.offset()) % 4) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_camera_mapping() {
        let steps = RotationSteps::default();
        assert_eq!(remap(steps, ScreenDirection::Forward), CompassDirection::West);
        assert_eq!(remap(steps, ScreenDirection::Left), CompassDirection::North);
        assert_eq!(remap(steps, ScreenDirection::Backward), CompassDirection::East);
        assert_eq!(remap(steps, ScreenDirection::Right), CompassDirection::South);
    }

    #[test]
    fn test_steps_wrap() {
        assert_eq!(RotationSteps::new(7).get(), 3);
        assert_eq!(RotationSteps::new(3).advance(3).get(), 2);
        assert_eq!(RotationSteps::new(2).advance(255).get(), 1);
    }

    #[test]
    fn test_opposites_stay_opposite() {
        for s in 0..4 {
            let steps = RotationSteps::new(s);
            let forward = remap(steps, ScreenDirection::Forward);
            let backward = remap(steps, ScreenDirection::Backward);
            let forward_idx = COMPASS_CYCLE.iter().position(|d| *d == forward).unwrap();
            let backward_idx = COMPASS_CYCLE.iter().position(|d| *d == backward).unwrap();
            assert_eq!((forward_idx + 2) % 4, backward_idx);
        }
    }

    #[test]
    fn test_each_turn_rotates_every_direction() {
        for logical in ScreenDirection::ALL {
            let mut seen = Vec::new();
            let mut steps = RotationSteps::default();
            for _ in 0..4 {
                seen.push(remap(steps, logical));
                steps = steps.advance(1);
            }
            seen.sort_by_key(|d| COMPASS_CYCLE.iter().position(|c| c == d));
            assert_eq!(seen, COMPASS_CYCLE.to_vec());
            // Cycle closes after four quarter turns
            assert_eq!(remap(steps, logical), remap(RotationSteps::default(), logical));
        }
    }
}
