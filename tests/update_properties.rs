use physics_simulator::{Force, Vec2, WorldCore};

fn world_with(forces: &[(f32, f32)]) -> WorldCore {
    let mut world = WorldCore::new(0.0, 800.0, 600.0).unwrap();
    for (i, (x, y)) in forces.iter().enumerate() {
        world.add_force(Force::new(format!("f{i}"), *x, *y)).unwrap();
    }
    world
}

#[test]
fn no_forces_means_no_motion() {
    let mut world = world_with(&[]);
    world.add_square("a", false, 10.0, 20.0, 5.0, 1.0).unwrap();
    world.add_square("b", false, -3.0, 7.5, 5.0, 2.0).unwrap();

    for now in [0.0, 16.0, 1000.0, 1.0e6] {
        world.update(now);
    }

    let props: Vec<_> = world.square_props().collect();
    assert_eq!(props, vec![(10.0, 20.0, 5.0), (-3.0, 7.5, 5.0)]);
    for sq in world.squares() {
        assert_eq!(sq.velocity(), Vec2::zero());
    }
}

#[test]
fn huge_gap_without_forces_stays_put() {
    let mut world = world_with(&[]);
    world.add_square("a", false, 10.0, 20.0, 5.0, 1.0).unwrap();

    // 1e40 host units does not fit in an f32 step
    world.update(1.0e40);
    world.update(2.0e40);

    let sq = world.square(0).unwrap();
    assert_eq!(sq.position(), Vec2::new(10.0, 20.0));
    assert_eq!(sq.velocity(), Vec2::zero());
    assert_eq!(world.last_update(), 2.0e40);
}

#[test]
fn huge_gap_with_a_force_never_produces_nan() {
    let mut world = world_with(&[(0.0, 1.0)]);
    world.add_square("a", false, 10.0, 20.0, 5.0, 1.0).unwrap();

    world.update(1.0e40);

    let sq = world.square(0).unwrap();
    assert_eq!(sq.position().x, 10.0);
    assert_eq!(sq.velocity().x, 0.0);
    assert!(!sq.position().y.is_nan() && !sq.velocity().y.is_nan());
}

#[test]
fn static_squares_ignore_every_force() {
    let mut world = world_with(&[(3.0, -1.0), (0.5, 9.81)]);
    world.add_square("wall", true, 0.0, 0.0, 10.0, 1.0).unwrap();

    for now in [1.0, 50.0, 1000.0] {
        world.update(now);
        let sq = world.square(0).unwrap();
        assert_eq!(sq.position(), Vec2::zero());
        assert_eq!(sq.velocity(), Vec2::zero());
    }
}

#[test]
fn gravity_scenario_dynamic() {
    let mut world = world_with(&[(0.0, 1.0)]);
    world.add_square("box", false, 0.0, 0.0, 10.0, 1.0).unwrap();

    world.update(1000.0);

    let sq = world.square(0).unwrap();
    assert_eq!(sq.velocity(), Vec2::new(0.0, 1000.0));
    assert_eq!(sq.position(), Vec2::new(0.0, 1_000_000.0));
}

#[test]
fn gravity_scenario_static() {
    let mut world = world_with(&[(0.0, 1.0)]);
    world.add_square("box", true, 0.0, 0.0, 10.0, 1.0).unwrap();

    world.update(1000.0);

    assert_eq!(world.square_props().next(), Some((0.0, 0.0, 10.0)));
}

#[test]
fn repeated_timestamp_is_a_no_op() {
    let mut once = world_with(&[(0.3, 0.7)]);
    let mut twice = world_with(&[(0.3, 0.7)]);
    for world in [&mut once, &mut twice] {
        world.add_square("box", false, 1.0, 1.0, 4.0, 1.0).unwrap();
        world.update(16.0);
    }

    twice.update(33.0);
    once.update(33.0);
    twice.update(33.0);

    assert_eq!(once.squares(), twice.squares());
    assert_eq!(once.last_update(), twice.last_update());
}

#[test]
fn backward_time_moves_nothing() {
    let mut world = world_with(&[(1.0, 1.0)]);
    world.add_square("box", false, 0.0, 0.0, 4.0, 1.0).unwrap();
    world.update(100.0);
    let snapshot: Vec<_> = world.square_props().collect();
    let velocity = world.square(0).unwrap().velocity();

    world.update(40.0);

    assert_eq!(world.square_props().collect::<Vec<_>>(), snapshot);
    assert_eq!(world.square(0).unwrap().velocity(), velocity);
    assert_eq!(world.last_update(), 100.0);
}

#[test]
fn large_gap_is_one_unsubdivided_step() {
    // A backgrounded tab: one 10 s gap is integrated as a single Euler step,
    // which overshoots the analytic 0.5*a*t^2 by a full a*t^2/2.
    let mut world = world_with(&[(0.0, 2.0)]);
    world.add_square("box", false, 0.0, 0.0, 4.0, 1.0).unwrap();

    world.update(10_000.0);

    let y = world.square(0).unwrap().position().y;
    assert_eq!(y, 2.0 * 10_000.0 * 10_000.0);
    assert!(y > 0.5 * 2.0 * 10_000.0 * 10_000.0);
}

#[test]
fn force_edits_apply_from_the_next_update() {
    let mut world = world_with(&[(0.0, 0.0)]);
    world.add_square("box", false, 0.0, 0.0, 4.0, 1.0).unwrap();

    world.update(10.0);
    world.change_force_x(0, "2").unwrap();
    world.update(11.0);

    let sq = world.square(0).unwrap();
    assert_eq!(sq.velocity(), Vec2::new(2.0, 0.0));
    assert_eq!(sq.position(), Vec2::new(2.0, 0.0));
}

#[test]
fn square_props_is_restartable_and_exact_sized() {
    let mut world = world_with(&[]);
    for i in 0..4 {
        world.add_square("s", i % 2 == 0, i as f32, 0.0, 1.0, 1.0).unwrap();
    }

    let props = world.square_props();
    assert_eq!(props.len(), 4);
    let first: Vec<_> = props.clone().collect();
    let second: Vec<_> = world.square_props().collect();
    assert_eq!(first, second);
    assert_eq!(world.square_props_flat().len(), 12);
}
