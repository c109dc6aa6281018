//! Resume-to-job matching: pairwise scoring plus ranked, paginated
//! recommendation queries in both directions.

pub mod handlers;
pub mod ranking;
pub mod scorer;
