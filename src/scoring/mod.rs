//! Normalization, dimension aggregation, and session orchestration.

pub mod aggregator;
pub mod normalizer;
pub mod session;

pub use aggregator::aggregate;
pub use normalizer::normalize;
pub use session::SessionScorer;

/// Round to a fixed number of decimal places. Raw values are stored to
/// 4 places and scores to 2, keeping output stable and readable.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
