use jiggle::vec::Vec as _;
use jiggle::{PhysicsError, System, Vec2};

#[test]
fn chain_points_evenly_spaced() {
    let mut system: System<f32> = System::new(500.0, 500.0);
    let rope = system
        .create_chain(Vec2::new(100.0, 50.0), Vec2::new(200.0, 50.0), 4, 2.0, 1.0, 1.0)
        .unwrap();

    assert_eq!(rope.len(), 5);
    assert_eq!(system.spring_count(), 4);
    for s in system.springs() {
        assert!((s.rest_length - 25.0).abs() < 1e-4);
    }
    assert_eq!(system.point(rope[4]).pos, Vec2::new(200.0, 50.0));
}

#[test]
fn empty_shapes_rejected() {
    let mut system: System<f32> = System::new(500.0, 500.0);
    assert_eq!(
        system.create_chain(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 0, 1.0, 1.0, 1.0),
        Err(PhysicsError::InsufficientSegments { requested: 0, minimum: 1 })
    );
    assert_eq!(
        system.create_ring(Vec2::new(0.0, 0.0), 10.0, 2, 1.0, 1.0, 1.0),
        Err(PhysicsError::InsufficientSegments { requested: 2, minimum: 3 })
    );
    assert_eq!(system.point_count(), 0);
}

#[test]
fn ring_points_lie_on_circle() {
    let mut system: System<f64> = System::new(500.0, 500.0);
    let center = Vec2::new(250.0, 250.0);
    let ring = system.create_ring(center, 40.0, 16, 2.0, 1.0, 1.0).unwrap();

    for &i in &ring {
        let r = system.point(i).pos.distance(center);
        assert!((r - 40.0).abs() < 1e-9);
    }
    let c = system.centroid(&ring).unwrap();
    assert!(c.distance(center) < 1e-9);
}

#[test]
fn dropped_ring_lands_and_keeps_its_shape() {
    let mut system: System<f32> = System::new(400.0, 400.0);
    let ring = system
        .create_ring(Vec2::new(200.0, 100.0), 40.0, 12, 4.0, 1.0, 1.0)
        .unwrap();

    for _ in 0..300 {
        system.update(1.0 / 60.0);
    }

    for &i in &ring {
        let p = system.point(i).pos;
        assert!(p.x >= 4.0 && p.x <= 396.0, "x = {}", p.x);
        assert!(p.y >= 4.0 && p.y <= 396.0, "y = {}", p.y);
    }
    let c = system.centroid(&ring).unwrap();
    assert!(c.y > 300.0, "ring should have fallen, centroid y = {}", c.y);
    for s in system.springs() {
        let stretch = s.length(system.points()) / s.rest_length;
        assert!(stretch > 0.5 && stretch < 1.5, "spring stretched by {}", stretch);
    }
}

#[test]
fn pinned_rope_hangs_below_anchor() {
    let mut system: System<f32> = System::new(400.0, 400.0);
    let rope = system
        .create_chain(Vec2::new(100.0, 50.0), Vec2::new(200.0, 50.0), 10, 0.0, 1.0, 1.0)
        .unwrap();
    system.point_mut(rope[0]).fixed = true;

    for _ in 0..240 {
        system.update(1.0 / 60.0);
    }

    let anchor = Vec2::new(100.0, 50.0);
    assert_eq!(system.point(rope[0]).pos, anchor);
    let c = system.centroid(&rope).unwrap();
    assert!(c.y > anchor.y, "rope should sag below its anchor, centroid y = {}", c.y);
    let reach = system.point(rope[10]).pos.distance(anchor);
    assert!(reach < 150.0, "rope overstretched to {}", reach);
}
