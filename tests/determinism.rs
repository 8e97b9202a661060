use jiggle::{System, Vec2};

fn bouncing_scene() -> Vec<Vec2<f32>> {
    let mut system: System<f32> = System::new(400.0, 300.0);
    system
        .create_ring(Vec2::new(150.0, 80.0), 30.0, 10, 4.0, 1.0, 0.8)
        .unwrap();
    let rope = system
        .create_chain(Vec2::new(250.0, 20.0), Vec2::new(350.0, 20.0), 8, 3.0, 0.5, 1.0)
        .unwrap();
    system.point_mut(rope[0]).fixed = true;
    system.poke(Vec2::new(150.0, 80.0), Vec2::new(4.0, -2.0));

    for _ in 0..180 {
        system.update(1.0 / 60.0);
    }
    system.positions()
}

#[test]
fn identical_systems_stay_identical() {
    let results: Vec<_> = (0..5).map(|_| bouncing_scene()).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn insertion_order_is_part_of_the_result() {
    let build = |flip: bool| {
        let mut system: System<f32> = System::new(200.0, 200.0);
        let mut xs = [96.0, 100.0, 104.0];
        if flip {
            xs.reverse();
        }
        for x in xs {
            system.create_point(Vec2::new(x, 100.0), 5.0, 1.0, jiggle::Color::WHITE, false);
        }
        system.resolve_collisions();
        let mut out = system.positions();
        out.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
        out
    };

    let forward = build(false);
    let backward = build(true);
    assert_ne!(forward, backward);
}
