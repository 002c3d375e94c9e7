use physics_simulator::{Force, MassPolicy, WorldConfig, WorldCore};

fn replay(timestamps: &[f64], mass_policy: MassPolicy) -> Vec<f32> {
    let config = WorldConfig::new(800.0, 600.0)
        .with_mass_policy(mass_policy)
        .with_force(Force::new("gravity".into(), 0.0, 0.0098))
        .with_force(Force::new("wind".into(), 0.0013, -0.0004))
        .with_force(Force::new("drift".into(), -0.0007, 0.0001));
    let mut world = WorldCore::from_config(timestamps[0], config).unwrap();

    world.add_square("a", false, 10.0, 10.0, 20.0, 1.0).unwrap();
    world.add_square("b", true, 200.0, 300.0, 40.0, 5.0).unwrap();
    world.add_square("c", false, 400.0, 50.0, 15.0, 3.5).unwrap();

    for &now in &timestamps[1..] {
        world.update(now);
    }
    world.square_props_flat()
}

fn jittery_frames() -> Vec<f64> {
    // Uneven frame spacing, a duplicate, a regression, and a long stall
    let mut t = 1234.5;
    let mut out = vec![t];
    for i in 0..600u32 {
        t += match i % 7 {
            0 => 16.7,
            1 => 0.0,
            2 => 33.1,
            3 => -4.0,
            4 => 8.3,
            5 => 16.6,
            _ => if i == 300 { 5000.0 } else { 17.0 },
        };
        out.push(t);
    }
    out
}

#[test]
fn replay_is_bit_identical() {
    let frames = jittery_frames();
    for policy in [MassPolicy::Ignore, MassPolicy::Divide] {
        let results: Vec<_> = (0..5).map(|_| replay(&frames, policy)).collect();
        for r in &results[1..] {
            assert_eq!(results[0].len(), r.len());
            for (a, b) in results[0].iter().zip(r.iter()) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }
}

#[test]
fn mass_policy_changes_dynamic_trajectories_only() {
    let frames = jittery_frames();
    let ignore = replay(&frames, MassPolicy::Ignore);
    let divide = replay(&frames, MassPolicy::Divide);

    // "a" has mass 1, so both policies agree on it
    assert_eq!(&ignore[0..3], &divide[0..3]);
    // static "b" never moves
    assert_eq!(&ignore[3..6], &[200.0, 300.0, 40.0]);
    assert_eq!(&divide[3..6], &[200.0, 300.0, 40.0]);
    // "c" is heavier and falls less far when mass divides
    assert!(divide[7] < ignore[7]);
}
