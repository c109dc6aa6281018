//! Resume parsing pipeline: spooled upload -> text normalization -> field
//! extraction -> append-only persistence.

pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod store;
pub mod vocabulary;
