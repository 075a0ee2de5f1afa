pub mod color;
pub mod consts;
pub mod detection;
pub mod disjoint_set;
pub mod error;
pub mod io;
pub mod pipeline;
