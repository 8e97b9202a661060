use jiggle::{Point, Vec2};

fn free_point(x: f32, y: f32, radius: f32) -> Point<f32> {
    Point::new(Vec2::new(x, y), radius, 1.0)
}

#[test]
fn free_fall_gravity() {
    let mut p = free_point(0.0, 0.0, 1.0);
    let g = Vec2::new(0.0, 9.81);
    let dt = 1.0 / 60.0;

    for _ in 0..60 {
        p.apply_force(g);
        p.integrate(dt);
    }

    let expected_y = 0.5 * 9.81;
    assert!((p.pos.y - expected_y).abs() < 0.2, "pos.y = {}, expected ~ {}", p.pos.y, expected_y);
}

#[test]
fn fixed_point_never_moves() {
    let start = Vec2::new(-5.0f32, 500.0);
    let mut p = Point::fixed(start, 10.0, 1.0);

    p.apply_force(Vec2::new(1000.0, 1000.0));
    p.integrate(1.0 / 60.0);
    p.adjust_velocity(Vec2::new(50.0, -50.0));
    p.constrain_to_bounds(100.0, 100.0, 0.5);
    p.set_velocity(Vec2::new(3.0, 3.0));
    p.integrate(1.0);

    assert_eq!(p.pos, start);
    assert_eq!(p.velocity(), Vec2::new(0.0, 0.0));
}

#[test]
fn non_positive_mass_becomes_one() {
    assert_eq!(Point::new(Vec2::new(0.0f32, 0.0), 1.0, 0.0).mass(), 1.0);
    assert_eq!(Point::new(Vec2::new(0.0f32, 0.0), 1.0, -4.0).mass(), 1.0);
    assert_eq!(Point::new(Vec2::new(0.0f32, 0.0), 1.0, 2.5).mass(), 2.5);

    let mut p = Point::new(Vec2::new(0.0f64, 0.0), 1.0, 3.0);
    p.set_mass(-1.0);
    assert_eq!(p.mass(), 1.0);
}

#[test]
fn left_wall_clamps_and_reflects() {
    let mut p = free_point(-5.0, 50.0, 2.0);
    p.prev_pos = Vec2::new(-3.0, 50.0);

    p.constrain_to_bounds(100.0, 100.0, 0.5);

    assert_eq!(p.pos.x, 2.0);
    assert_eq!(p.pos.y, 50.0);
    assert_eq!(p.velocity(), Vec2::new(1.0, 0.0));
}

#[test]
fn right_wall_clamps_and_reflects() {
    let mut p = free_point(105.0, 50.0, 2.0);
    p.prev_pos = Vec2::new(101.0, 50.0);

    p.constrain_to_bounds(100.0, 100.0, 0.25);

    assert_eq!(p.pos.x, 98.0);
    assert_eq!(p.velocity(), Vec2::new(-1.0, 0.0));
}

#[test]
fn floor_applies_friction_to_horizontal_velocity() {
    let mut p = free_point(50.0, 120.0, 10.0);
    p.prev_pos = Vec2::new(48.0, 115.0);

    p.constrain_to_bounds(100.0, 100.0, 0.5);

    assert_eq!(p.pos.y, 90.0);
    let v = p.velocity();
    assert!((v.x - 2.0 * 0.98).abs() < 1e-5, "vx = {}", v.x);
    assert!((v.y + 2.5).abs() < 1e-5, "vy = {}", v.y);
}

#[test]
fn inside_bounds_untouched() {
    let mut p = free_point(50.0, 50.0, 5.0);
    p.prev_pos = Vec2::new(47.0, 52.0);

    p.constrain_to_bounds(100.0, 100.0, 0.5);

    assert_eq!(p.pos, Vec2::new(50.0, 50.0));
    assert_eq!(p.prev_pos, Vec2::new(47.0, 52.0));
}

#[test]
fn custom_floor_friction() {
    let mut p = free_point(50.0, 100.0, 0.0);
    p.prev_pos = Vec2::new(46.0, 99.0);

    p.constrain_to_bounds_with(200.0, 100.0, 1.0, 0.5);

    // Resting exactly on the floor is not a clamp, so no friction either.
    assert_eq!(p.velocity(), Vec2::new(4.0, 1.0));

    p.pos.y = 101.0;
    p.constrain_to_bounds_with(200.0, 100.0, 1.0, 0.5);
    assert_eq!(p.pos.y, 100.0);
    assert_eq!(p.velocity().x, 2.0);
}
