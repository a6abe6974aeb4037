//! Face values and pip layouts
//!
//! A face is drawn as a fixed pattern of dots placed at the container
//! center plus or minus a fixed offset. Layout is a pure function of the
//! face and the container size.

use bevy::prelude::*;
use rand::Rng;
use std::fmt;

/// Side length of the die body in logical pixels
pub const DIE_SIZE: f32 = 120.0;

/// Inner padding between the die edge and the pip area
pub const DIE_PADDING: f32 = 16.0;

/// Diameter of a single pip
pub const PIP_DIAMETER: f32 = 12.0;

/// Distance from the container center to an off-center pip, on each axis
pub const PIP_OFFSET: f32 = 24.0;

/// Size of the area pips are laid out in
pub const PIP_AREA: Vec2 = Vec2::splat(DIE_SIZE - 2.0 * DIE_PADDING);

/// The value shown on the top face of a six-sided die
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceValue(u8);

impl FaceValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Draw a face uniformly from 1..=6
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = FaceValue> {
        (Self::MIN..=Self::MAX).map(FaceValue)
    }
}

impl Default for FaceValue {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dot positions for one face, in container-local coordinates
/// (origin at the top-left corner, y growing downward).
#[derive(Clone, Debug, PartialEq)]
pub struct PipLayout {
    pub container: Vec2,
    pub radius: f32,
    pub dots: Vec<Vec2>,
}

impl PipLayout {
    pub fn for_face(face: FaceValue, container: Vec2) -> Self {
        let c = container / 2.0;
        let o = PIP_OFFSET;

        let center = c;
        let top_left = Vec2::new(c.x - o, c.y - o);
        let top_right = Vec2::new(c.x + o, c.y - o);
        let mid_left = Vec2::new(c.x - o, c.y);
        let mid_right = Vec2::new(c.x + o, c.y);
        let bottom_left = Vec2::new(c.x - o, c.y + o);
        let bottom_right = Vec2::new(c.x + o, c.y + o);

        let dots = match face.get() {
            1 => vec![center],
            2 => vec![top_left, bottom_right],
            3 => vec![center, top_left, bottom_right],
            4 => vec![top_left, top_right, bottom_left, bottom_right],
            5 => vec![center, top_left, top_right, bottom_left, bottom_right],
            _ => vec![
                top_left,
                top_right,
                mid_left,
                mid_right,
                bottom_left,
                bottom_right,
            ],
        };

        Self {
            container,
            radius: PIP_DIAMETER / 2.0,
            dots,
        }
    }

    /// Dot positions relative to the container center with y pointing up,
    /// which is what child transforms in a 2D scene expect.
    pub fn centered_dots(&self) -> impl Iterator<Item = Vec2> + '_ {
        let half = self.container / 2.0;
        self.dots
            .iter()
            .map(move |d| Vec2::new(d.x - half.x, half.y - d.y))
    }

    /// Project the layout onto a 3x3 grid of cells, row-major from the top.
    pub fn grid(&self) -> [[bool; 3]; 3] {
        let mut grid = [[false; 3]; 3];
        let half = self.container / 2.0;
        for dot in &self.dots {
            let col = cell_index(dot.x - half.x);
            let row = cell_index(dot.y - half.y);
            grid[row][col] = true;
        }
        grid
    }
}

fn cell_index(delta: f32) -> usize {
    if delta < -PIP_OFFSET / 2.0 {
        0
    } else if delta > PIP_OFFSET / 2.0 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const AREA: Vec2 = Vec2::new(88.0, 88.0);

    #[test]
    fn test_face_value_bounds() {
        assert_eq!(FaceValue::new(0), None);
        assert_eq!(FaceValue::new(7), None);
        assert_eq!(FaceValue::new(1).map(FaceValue::get), Some(1));
        assert_eq!(FaceValue::new(6).map(FaceValue::get), Some(6));
        assert_eq!(FaceValue::default().get(), 1);
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let v = FaceValue::roll(&mut rng).get();
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn test_dot_counts_match_face() {
        for face in FaceValue::all() {
            let layout = PipLayout::for_face(face, AREA);
            assert_eq!(layout.dots.len(), face.get() as usize);
            assert_eq!(layout.radius, 6.0);
        }
    }

    #[test]
    fn test_one_is_single_center_dot() {
        let layout = PipLayout::for_face(FaceValue(1), AREA);
        assert_eq!(layout.dots, vec![Vec2::new(44.0, 44.0)]);
    }

    #[test]
    fn test_centered_dots_flip_y() {
        let layout = PipLayout::for_face(FaceValue(2), AREA);
        let centered: Vec<Vec2> = layout.centered_dots().collect();
        assert_eq!(centered, vec![Vec2::new(-24.0, 24.0), Vec2::new(24.0, -24.0)]);
    }

    #[test]
    fn test_grid_for_six() {
        let layout = PipLayout::for_face(FaceValue(6), AREA);
        assert_eq!(
            layout.grid(),
            [
                [true, false, true],
                [true, false, true],
                [true, false, true]
            ]
        );
    }
}
