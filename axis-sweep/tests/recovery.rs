use approx::assert_relative_eq;
use axis_sweep::AxisSweep;
use frame_align_core::{
    nalgebra::{Point3, Vector3},
    CorrespondenceSet, PointCorrespondence, ScenePoint, TrackedPoint,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const ROUNDS: u64 = 200;
const SURVEY_POINTS: usize = 8;
const SCALE_TOLERANCE: f64 = 1e-3;
const OFFSET_TOLERANCE: f64 = 1e-3;
const ERROR_TOLERANCE: f64 = 1e-3;

const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Builds a noiseless synthetic survey: random tracked points with scene points
/// generated as `scene = (signs ⊙ tracked[permutation]) · scale + offset`.
fn synthetic_survey(
    rng: &mut SmallRng,
) -> (CorrespondenceSet, [usize; 3], Vector3<f64>, Vector3<f64>) {
    let permutation = PERMUTATIONS[rng.gen_range(0..6)];
    let signs = Vector3::new(
        if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
    );
    let scale = Vector3::new(
        rng.gen_range(0.5..4.0),
        rng.gen_range(0.5..4.0),
        rng.gen_range(0.5..4.0),
    );
    let offset = Vector3::new(
        rng.gen_range(-20.0..20.0),
        rng.gen_range(-20.0..20.0),
        rng.gen_range(-20.0..20.0),
    );

    let pairs = (0..SURVEY_POINTS)
        .map(|_| {
            let tracked = Vector3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            let induced = Vector3::new(
                signs[0] * tracked[permutation[0]],
                signs[1] * tracked[permutation[1]],
                signs[2] * tracked[permutation[2]],
            );
            let scene = induced.component_mul(&scale) + offset;
            PointCorrespondence(
                TrackedPoint(Point3::from(tracked)),
                ScenePoint(Point3::from(scene)),
            )
        })
        .collect();

    // The effective per-axis multiplier the sweep should recover. Sign flips
    // are redundant with scale sign on points, so the all-positive candidate
    // ties every flipped variant at zero error and wins by enumeration order,
    // absorbing the sign into the fitted scale.
    let signed_scale = signs.component_mul(&scale);
    (
        CorrespondenceSet::new(pairs).unwrap(),
        permutation,
        signed_scale,
        offset,
    )
}

#[test]
fn recovers_known_mappings_exactly() {
    let sweep = AxisSweep::new();
    for round in 0..ROUNDS {
        let mut rng = SmallRng::seed_from_u64(round);
        let (survey, permutation, signed_scale, offset) = synthetic_survey(&mut rng);
        let alignment = sweep.from_correspondences(&survey);

        assert_eq!(alignment.candidate.permutation, permutation);
        assert_eq!(alignment.candidate.signs, [1.0, 1.0, 1.0]);
        assert_relative_eq!(
            alignment.scale_offset.scale,
            signed_scale,
            epsilon = SCALE_TOLERANCE,
            max_relative = SCALE_TOLERANCE
        );
        assert_relative_eq!(
            alignment.scale_offset.offset,
            offset,
            epsilon = OFFSET_TOLERANCE,
            max_relative = OFFSET_TOLERANCE
        );
        assert!(
            alignment.mean_error < ERROR_TOLERANCE,
            "round {}: mean error {} too large",
            round,
            alignment.mean_error
        );
    }
}

#[test]
fn repeated_sweeps_are_bit_identical() {
    let mut rng = SmallRng::seed_from_u64(7);
    let (survey, ..) = synthetic_survey(&mut rng);
    let sweep = AxisSweep::new();

    let first = sweep.from_correspondences(&survey);
    let second = sweep.from_correspondences(&survey);

    assert_eq!(first.candidate_index, second.candidate_index);
    assert_eq!(first.candidate, second.candidate);
    for i in 0..3 {
        assert_eq!(
            first.scale_offset.scale[i].to_bits(),
            second.scale_offset.scale[i].to_bits()
        );
        assert_eq!(
            first.scale_offset.offset[i].to_bits(),
            second.scale_offset.offset[i].to_bits()
        );
    }
    assert_eq!(first.mean_error.to_bits(), second.mean_error.to_bits());
    assert_eq!(first.residuals, second.residuals);
}

#[test]
fn transform_reproduces_survey_within_reported_error() {
    // Noisy survey: the fit is no longer exact, but transforming each surveyed
    // tracked point must reproduce the stored residuals and their mean.
    let mut rng = SmallRng::seed_from_u64(42);
    let (clean, ..) = synthetic_survey(&mut rng);
    let noisy = CorrespondenceSet::new(
        clean
            .iter()
            .map(|&PointCorrespondence(tracked, scene)| {
                let jitter = Vector3::new(
                    rng.gen_range(-0.05..0.05),
                    rng.gen_range(-0.05..0.05),
                    rng.gen_range(-0.05..0.05),
                );
                PointCorrespondence(tracked, ScenePoint(scene.0 + jitter))
            })
            .collect(),
    )
    .unwrap();

    let alignment = AxisSweep::new().from_correspondences(&noisy);
    assert!(alignment.mean_error > 0.0);
    assert_eq!(alignment.residuals.len(), noisy.len());

    let mut total = 0.0;
    for (pair, &residual) in noisy.iter().zip(&alignment.residuals) {
        let &PointCorrespondence(tracked, scene) = pair;
        let predicted = alignment.transform_point(tracked);
        let distance = (predicted.0 - scene.0).norm();
        assert_relative_eq!(distance, residual, epsilon = 1e-12);
        total += distance;
    }
    assert_relative_eq!(
        total / noisy.len() as f64,
        alignment.mean_error,
        epsilon = 1e-12
    );
}
