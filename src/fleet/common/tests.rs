use super::vec2d::Vec2D;

#[test]
fn test_euclid_distance() {
    let origin = Vec2D::new(0.0, 0.0);
    let target = Vec2D::new(3.0, 4.0);
    assert_eq!(origin.euclid_distance(&target), 5.0);
    assert_eq!(target.euclid_distance(&target), 0.0);
}

#[test]
fn test_to_and_abs() {
    let from = Vec2D::new(1.0, 1.0);
    let to = Vec2D::new(4.0, 5.0);
    let delta = from.to(&to);
    assert_eq!(delta, Vec2D::new(3.0, 4.0));
    assert_eq!(delta.abs(), 5.0);
}

#[test]
fn test_scalar_ops() {
    let v = Vec2D::new(3.0, 4.0);
    assert_eq!(v * 2.0, Vec2D::new(6.0, 8.0));
    assert_eq!(v / 2.0, Vec2D::new(1.5, 2.0));
    assert_eq!(v + Vec2D::new(1.0, -1.0), Vec2D::new(4.0, 3.0));
    assert_eq!(v - Vec2D::new(1.0, 1.0), Vec2D::new(2.0, 3.0));
}

#[test]
fn test_cast() {
    let grid: Vec2D<i32> = Vec2D::new(7, 9);
    let continuous: Vec2D<f64> = grid.cast();
    assert_eq!(continuous, Vec2D::new(7.0, 9.0));
}

#[test]
fn test_stepwise_sum_matches_straight_line() {
    // Five equal increments from (0, 0) to (3, 4) add up to the full vector.
    let start = Vec2D::new(0.0, 0.0);
    let target = Vec2D::new(3.0, 4.0);
    let steps = 5_u64;
    let increment = start.to(&target) / steps as f64;

    let mut pos = start;
    for _ in 0..steps {
        pos = pos + increment;
    }
    assert!((pos.x() - target.x()).abs() < 1e-9);
    assert!((pos.y() - target.y()).abs() < 1e-9);
}
