//! Tests for face values and pip layouts

use std::collections::HashSet;

use bevy::math::Vec2;
use dicetumble::roller::types::{FaceValue, PipLayout, PIP_OFFSET};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CONTAINER: Vec2 = Vec2::new(88.0, 88.0);
const CENTER: Vec2 = Vec2::new(44.0, 44.0);

fn face(v: u8) -> FaceValue {
    FaceValue::new(v).expect("face in range")
}

fn dot_set(layout: &PipLayout) -> HashSet<(i32, i32)> {
    layout
        .dots
        .iter()
        .map(|d| (d.x.round() as i32, d.y.round() as i32))
        .collect()
}

fn corners() -> HashSet<(i32, i32)> {
    let (c, o) = (CENTER.x as i32, PIP_OFFSET as i32);
    [(c - o, c - o), (c + o, c - o), (c - o, c + o), (c + o, c + o)]
        .into_iter()
        .collect()
}

#[test]
fn test_roll_is_always_one_to_six() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..5000 {
        let v = FaceValue::roll(&mut rng).get();
        assert!((1..=6).contains(&v), "rolled {v}");
    }
}

#[test]
fn test_roll_is_roughly_uniform() {
    let mut rng = StdRng::seed_from_u64(1234);
    let n = 6000;
    let mut counts = [0u32; 6];
    for _ in 0..n {
        counts[(FaceValue::roll(&mut rng).get() - 1) as usize] += 1;
    }
    // Expected 1000 each; 20% slack is far outside sampling noise.
    for (i, count) in counts.iter().enumerate() {
        assert!(
            (800..=1200).contains(count),
            "face {} appeared {} times",
            i + 1,
            count
        );
    }
}

#[test]
fn test_one_is_a_single_center_dot() {
    let layout = PipLayout::for_face(face(1), CONTAINER);
    assert_eq!(layout.dots, vec![CENTER]);
}

#[test]
fn test_four_is_exactly_the_corners() {
    let layout = PipLayout::for_face(face(4), CONTAINER);
    assert_eq!(layout.dots.len(), 4);
    assert_eq!(dot_set(&layout), corners());
}

#[test]
fn test_five_is_corners_plus_center() {
    let layout = PipLayout::for_face(face(5), CONTAINER);
    let mut expected = corners();
    expected.insert((44, 44));
    assert_eq!(dot_set(&layout), expected);
}

#[test]
fn test_six_is_two_columns_of_three() {
    let layout = PipLayout::for_face(face(6), CONTAINER);
    assert_eq!(layout.dots.len(), 6);

    let left: Vec<f32> = layout.dots.iter().filter(|d| d.x == 20.0).map(|d| d.y).collect();
    let right: Vec<f32> = layout.dots.iter().filter(|d| d.x == 68.0).map(|d| d.y).collect();
    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
    for column in [left, right] {
        let rows: HashSet<i32> = column.iter().map(|y| *y as i32).collect();
        assert_eq!(rows, [20, 44, 68].into_iter().collect());
    }
}

#[test]
fn test_two_and_three_share_the_diagonal() {
    let two = dot_set(&PipLayout::for_face(face(2), CONTAINER));
    let three = dot_set(&PipLayout::for_face(face(3), CONTAINER));
    assert_eq!(two, [(20, 20), (68, 68)].into_iter().collect());
    assert!(three.is_superset(&two));
    assert!(three.contains(&(44, 44)));
    assert_eq!(three.len(), 3);
}

#[test]
fn test_layouts_are_pairwise_distinct() {
    let layouts: Vec<HashSet<(i32, i32)>> = FaceValue::all()
        .map(|f| dot_set(&PipLayout::for_face(f, CONTAINER)))
        .collect();
    for i in 0..layouts.len() {
        for j in (i + 1)..layouts.len() {
            assert_ne!(layouts[i], layouts[j], "faces {} and {} match", i + 1, j + 1);
        }
    }
}

#[test]
fn test_layout_is_deterministic() {
    for f in FaceValue::all() {
        assert_eq!(
            PipLayout::for_face(f, CONTAINER),
            PipLayout::for_face(f, CONTAINER)
        );
    }
}

#[test]
fn test_layout_follows_container_center() {
    let layout = PipLayout::for_face(face(1), Vec2::new(200.0, 100.0));
    assert_eq!(layout.dots, vec![Vec2::new(100.0, 50.0)]);
    assert_eq!(layout.radius, 6.0);
}
