// Docker access layer: client construction, typed projections, queries.

pub mod client;
pub mod container;
pub mod summary;
