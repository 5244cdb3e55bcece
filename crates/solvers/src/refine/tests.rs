use approx::assert_relative_eq;

use climb_core::{
    Bounds, Interval, Point,
    objective::{self, nearest_minimum},
};

use crate::hill_climb;

use super::{Action, Config, Error, Event, Stage, Status, minimize, minimize_unobserved};

const HARNESS_STARTS: [(f64, f64); 4] = [(2.9, 3.2), (-2.5, 3.2), (4.2, -2.0), (-5.0, -5.0)];

#[test]
fn default_scenario_reaches_a_known_minimum() {
    // (0, 0) with z = 0.10, p = 400, seed = 9999.
    let config = Config::default();
    let solution = minimize_unobserved(Point::new(0.0, 0.0), &config).unwrap();

    assert_eq!(solution.status(), Status::Completed);
    assert_eq!(solution.stages().len(), 3);

    let fine = solution.stage(Stage::Fine).unwrap();
    assert!(fine.value < 1e-6, "f3 = {}", fine.value);
    let minimum = nearest_minimum(&fine.point);
    assert!(fine.point.distance(&minimum) < 1e-3);

    for stage in solution.stages() {
        assert_eq!(stage.solutions_generated % 400, 0);
        assert_eq!(stage.f_calls(), 400 * stage.iters + 1);
    }
}

#[test]
fn default_scenario_matches_the_reference_tables() {
    let solution = minimize_unobserved(Point::new(0.0, 0.0), &Config::default()).unwrap();

    let expected = [
        (Stage::Coarse, (3.001_628_462_551_243_7, 2.000_650_857_226_205), 0.000_126_578_196_613_204_74, 13_600),
        (Stage::Medium, (2.999_947_954_162_424_8, 1.999_969_468_387_915_2), 1.478_501_940_399_759_4e-7, 800),
        (Stage::Fine, (3.000_007_679_788_252, 1.999_984_869_262_800_8), 3.750_157_299_518_655e-9, 800),
    ];
    for (stage, (x, y), value, generated) in expected {
        let result = solution.stage(stage).unwrap();
        assert_eq!(result.point.x.to_bits(), f64::to_bits(x), "{stage} x");
        assert_eq!(result.point.y.to_bits(), f64::to_bits(y), "{stage} y");
        assert_eq!(result.value.to_bits(), f64::to_bits(value), "{stage} value");
        assert_eq!(result.solutions_generated, generated, "{stage} count");
    }
    assert_eq!(solution.f_calls_total(), 15_203);
}

#[test]
fn chain_is_reproducible() {
    let config = Config::new(0.25, 30, 4368 + 30_000 + 250);
    let start = Point::new(2.9, 3.2);

    let first = minimize_unobserved(start, &config).unwrap();
    let second = minimize_unobserved(start, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn stage_values_never_increase() {
    for (i, start) in HARNESS_STARTS.into_iter().map(Point::from).enumerate() {
        for (p, z) in [(30, 0.05), (30, 0.25), (180, 0.05), (180, 0.25)] {
            let config = Config::new(z, p, 4368 + i as i64);
            let solution = minimize_unobserved(start, &config).unwrap();

            let coarse = solution.value(Stage::Coarse).unwrap();
            let medium = solution.value(Stage::Medium).unwrap();
            let fine = solution.value(Stage::Fine).unwrap();
            assert!(coarse <= objective::objective(start));
            assert!(medium <= coarse);
            assert!(fine <= medium);
        }
    }
}

#[test]
fn harness_starts_settle_in_their_nearest_basin() {
    for (i, start) in HARNESS_STARTS.into_iter().map(Point::from).enumerate() {
        let config = Config::new(0.25, 180, 4368 + 180_000 + 250 + i as i64);
        let solution = minimize_unobserved(start, &config).unwrap();

        let best = solution.point(Stage::Fine).unwrap();
        assert_eq!(nearest_minimum(&best), nearest_minimum(&start));
        assert!(solution.value(Stage::Fine).unwrap() < 1e-5);
    }
}

#[test]
fn total_calls_sum_the_stages() {
    let config = Config::new(0.05, 30, 99);
    let solution = minimize_unobserved(Point::new(-2.5, 3.2), &config).unwrap();

    let sum: usize = Stage::ALL
        .into_iter()
        .map(|stage| solution.f_calls(stage).unwrap())
        .sum();
    assert_eq!(solution.f_calls_total(), sum);

    for stage in Stage::ALL {
        assert_eq!(
            solution.f_calls(stage).unwrap(),
            solution.solutions_generated(stage).unwrap() + 1
        );
    }
}

#[test]
fn each_stage_starts_where_the_previous_ended() {
    let config = Config::new(0.25, 30, 13);
    let start = Point::new(4.2, -2.0);
    let solution = minimize_unobserved(start, &config).unwrap();

    // Replaying each stage as a standalone run reproduces the chain exactly.
    let mut point = start;
    for stage in Stage::ALL {
        let stage_config = config.with_step_radius(stage.radius(config.step_radius));
        let standalone = hill_climb::minimize_unobserved(point, &stage_config).unwrap();
        assert_eq!(Some(&standalone), solution.stage(stage));
        point = standalone.point;
    }
}

#[test]
fn observer_sees_shrinking_offsets() {
    let config = Config::new(0.25, 30, 5);
    let mut max_offset = [0.0_f64; 3];
    let observer = |event: &Event| {
        if let Event::Search {
            stage,
            event: hill_climb::Event::Evaluated {
                candidate,
                incumbent,
                ..
            },
        } = event
        {
            let dx = (candidate.point.x - incumbent.point.x).abs();
            let dy = (candidate.point.y - incumbent.point.y).abs();
            let slot = &mut max_offset[stage.index()];
            *slot = slot.max(dx).max(dy);
        }
        None
    };

    minimize(Point::new(2.9, 3.2), &config, observer).unwrap();

    for stage in Stage::ALL {
        let limit = stage.radius(0.25);
        let seen = max_offset[stage.index()];
        assert!(seen <= limit * (1.0 + 1e-9), "{stage}: {seen} > {limit}");
        assert!(seen > limit * 0.5, "{stage}: offsets suspiciously small");
    }
}

#[test]
fn stage_completed_events_carry_the_stage_results() {
    let config = Config::new(0.05, 30, 21);
    let mut completed = Vec::new();
    let observer = |event: &Event| {
        if let Event::StageCompleted { stage, result } = event {
            completed.push((*stage, *result));
        }
        None
    };

    let solution = minimize(Point::new(-5.0, -5.0), &config, observer).unwrap();

    assert_eq!(completed.len(), 3);
    for (stage, result) in completed {
        assert_eq!(Some(&result), solution.stage(stage));
    }
}

#[test]
fn stopping_after_a_stage_skips_the_rest() {
    let config = Config::new(0.25, 30, 3);
    let observer = |event: &Event| match event {
        Event::StageCompleted {
            stage: Stage::Coarse,
            ..
        } => Some(Action::StopEarly),
        _ => None,
    };

    let solution = minimize(Point::new(2.9, 3.2), &config, observer).unwrap();

    assert_eq!(solution.status(), Status::StoppedByObserver);
    assert_eq!(solution.stages().len(), 1);
    assert!(solution.stage(Stage::Medium).is_none());
    assert_eq!(
        solution.f_calls_total(),
        solution.f_calls(Stage::Coarse).unwrap()
    );
}

#[test]
fn stopping_mid_stage_keeps_the_partial_result() {
    let config = Config::new(0.25, 30, 3);
    let mut medium_evals = 0;
    let observer = |event: &Event| {
        if let Event::Search {
            stage: Stage::Medium,
            ..
        } = event
        {
            medium_evals += 1;
            if medium_evals == 10 {
                return Some(Action::StopEarly);
            }
        }
        None
    };

    let solution = minimize(Point::new(2.9, 3.2), &config, observer).unwrap();

    assert_eq!(solution.status(), Status::StoppedByObserver);
    assert_eq!(solution.stages().len(), 2);
    let medium = solution.stage(Stage::Medium).unwrap();
    assert_eq!(medium.status, hill_climb::Status::StoppedByObserver);
    assert_eq!(medium.point, solution.point(Stage::Coarse).unwrap());
}

#[test]
fn containment_holds_on_tight_bounds() {
    let bounds = Bounds::new(Interval::new(-1.0, 1.0), Interval::new(-1.0, 1.0));
    let config = Config::new(0.5, 30, 8).with_bounds(bounds);
    let solution = minimize_unobserved(Point::new(0.0, 0.0), &config).unwrap();

    for stage in solution.stages() {
        assert!(bounds.contains(&stage.point), "{} escaped", stage.point);
    }
    // Inside [-1, 1]² the objective is minimized on the (1, 1) corner.
    let fine = solution.last().unwrap();
    assert_relative_eq!(fine.point.x, 1.0, epsilon = 1e-6);
    assert_relative_eq!(fine.point.y, 1.0, epsilon = 1e-6);
}

#[test]
fn tiny_radii_are_not_floored() {
    // Every stage radius is far below the coordinate resolution; the chain
    // still runs each stage instead of rejecting the shrunken radius.
    let config = Config::new(1e-306, 5, 1);
    let solution = minimize_unobserved(Point::new(1.0, 1.0), &config).unwrap();

    assert_eq!(solution.status(), Status::Completed);
    assert_eq!(solution.stages().len(), 3);
}

#[test]
fn invalid_config_fails_before_any_event() {
    let mut events = 0;
    let result = minimize(Point::new(0.0, 0.0), &Config::new(0.1, 0, 1), |_: &Event| {
        events += 1;
        None
    });

    assert_eq!(result, Err(Error::InvalidSampleCount));
    assert_eq!(events, 0);

    let bounds = Bounds::new(Interval::new(-6.0, 6.0), Interval::new(1.0, 0.0));
    let result = minimize_unobserved(Point::new(0.0, 0.0), &Config::default().with_bounds(bounds));
    assert!(matches!(result, Err(Error::InvalidBounds { .. })));
}
