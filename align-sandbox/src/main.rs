use axis_sweep::{AxisSweep, FrameAligner};
use frame_align_core::{
    nalgebra::{Point3, Quaternion, UnitQuaternion},
    CorrespondenceSet, PointCorrespondence, ScenePoint, TrackedPoint,
};
use log::*;
use serde::Deserialize;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Clone)]
#[structopt(
    name = "align-sandbox",
    about = "A tool for calibrating tracked-to-scene frame alignments and inspecting the fit"
)]
struct Opt {
    /// The JSON file of surveyed correspondences.
    ///
    /// A list of records of the form
    /// `{"tracked": [x, y, z], "scene": [x, y, z]}`.
    #[structopt(short, long, default_value = "correspondences.json")]
    data: PathBuf,
    /// Regularization added to the per-axis regression denominator.
    #[structopt(long, default_value = "0.0001")]
    epsilon: f64,
    /// Optional file to write the fitted alignment to as JSON.
    #[structopt(short, long)]
    output: Option<PathBuf>,
    /// A tracked position to convert after calibration, as `x y z`.
    #[structopt(long, number_of_values = 3, allow_hyphen_values = true)]
    point: Option<Vec<f64>>,
    /// A tracked orientation quaternion to convert after calibration, as `x y z w`.
    #[structopt(long, number_of_values = 4, allow_hyphen_values = true)]
    orientation: Option<Vec<f64>>,
}

/// One surveyed record as authored in the correspondence file.
#[derive(Deserialize)]
struct Record {
    tracked: [f64; 3],
    scene: [f64; 3],
}

fn main() {
    pretty_env_logger::init_timed();
    let opt = Opt::from_args();

    info!("loading correspondences from {}", opt.data.display());
    let file = match std::fs::File::open(&opt.data) {
        Ok(file) => file,
        Err(e) => {
            error!("failed to open {}: {}", opt.data.display(), e);
            std::process::exit(1);
        }
    };
    let records: Vec<Record> = match serde_json::from_reader(file) {
        Ok(records) => records,
        Err(e) => {
            error!("failed to parse {}: {}", opt.data.display(), e);
            std::process::exit(1);
        }
    };
    let pairs = records
        .into_iter()
        .map(|record| {
            PointCorrespondence(
                TrackedPoint(Point3::from(record.tracked)),
                ScenePoint(Point3::from(record.scene)),
            )
        })
        .collect();
    let correspondences = match CorrespondenceSet::new(pairs) {
        Ok(correspondences) => correspondences,
        Err(e) => {
            error!("invalid correspondence file: {}", e);
            std::process::exit(1);
        }
    };
    info!("loaded {} correspondences", correspondences.len());

    let mut aligner =
        FrameAligner::with_sweep(AxisSweep::new().epsilon(opt.epsilon), correspondences);
    let alignment = aligner.calibrate().clone();

    println!("winning candidate: {}", alignment.candidate_index);
    for (slot, axis) in ["x", "y", "z"].iter().enumerate() {
        println!(
            "scene.{} <- {:+.0} * tracked[{}] * {:.4} + {:.4}",
            axis,
            alignment.candidate.signs[slot],
            alignment.candidate.permutation[slot],
            alignment.scale_offset.scale[slot],
            alignment.scale_offset.offset[slot],
        );
    }
    println!("mean error: {:.4}", alignment.mean_error);
    for (index, (pair, residual)) in aligner
        .correspondences()
        .iter()
        .zip(&alignment.residuals)
        .enumerate()
    {
        let &PointCorrespondence(tracked, scene) = pair;
        let predicted = alignment.transform_point(tracked);
        println!(
            "point {}: predicted {:.3?}, surveyed {:.3?}, residual {:.4}",
            index,
            predicted.coords.as_slice(),
            scene.coords.as_slice(),
            residual,
        );
    }

    if let Some(output) = &opt.output {
        match std::fs::File::create(output) {
            Ok(file) => {
                if let Err(e) = serde_json::to_writer_pretty(file, &alignment) {
                    error!("failed to write {}: {}", output.display(), e);
                }
            }
            Err(e) => error!("failed to create {}: {}", output.display(), e),
        }
    }

    if let Some(point) = &opt.point {
        let tracked = TrackedPoint::new(point[0], point[1], point[2]);
        let scene = alignment.transform_point(tracked);
        println!(
            "tracked position {:.3?} -> scene {:.3?}",
            point,
            scene.coords.as_slice()
        );
    }

    if let Some(orientation) = &opt.orientation {
        let tracked = UnitQuaternion::new_normalize(Quaternion::new(
            orientation[3],
            orientation[0],
            orientation[1],
            orientation[2],
        ));
        let scene = alignment.transform_orientation(tracked);
        println!(
            "tracked orientation (xyzw) {:.3?} -> scene {:.3?}",
            orientation,
            scene.coords.as_slice()
        );
    }
}
