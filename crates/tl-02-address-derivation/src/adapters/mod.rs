//! # Adapters

pub mod off_curve;

pub use off_curve::OffCurve;
