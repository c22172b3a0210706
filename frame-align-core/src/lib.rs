//! # Frame Align Core
//!
//! This library provides the shared vocabulary types for aligning two independent
//! 3d coordinate systems: a tracking frame produced by an external localization
//! pipeline (for instance a photogrammetric reconstruction) and a scene frame used
//! for rendering and navigation. The two frames generally disagree on which axis
//! points where, on handedness, on scale, and on origin, so a handful of manually
//! surveyed correspondence points is used to recover a mapping between them.
//!
//! The mapping recovered here is deliberately simple: a reassignment of axes with
//! per-axis sign flips (an [`AxisCandidate`], one of 48 discrete possibilities),
//! followed by an independent scale and offset on each output axis (an
//! [`AxisScaleOffset`]). This is an anisotropic per-axis affine fit rather than a
//! rigid or similarity transform, which keeps the fit closed-form and the search
//! space finite. The winning hypothesis together with its fit and its error
//! diagnostics forms a [`FrameAlignment`], the immutable model queried by the
//! pose-update loop on every tick.
//!
//! The estimation itself lives in the `axis-sweep` crate; this crate only defines
//! the types so that producers and consumers of alignments can interoperate.
//!
//! The crate is designed to work with `#![no_std]` (an allocator is required for
//! the correspondence storage and residual diagnostics).

#![no_std]

extern crate alloc;

mod alignment;
mod candidate;
mod correspondence;
mod error;
mod point;

pub use alignment::*;
pub use candidate::*;
pub use correspondence::*;
pub use error::*;
pub use nalgebra;
pub use point::*;
