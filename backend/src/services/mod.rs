pub mod generation;

pub use generation::{ReframeResponse, ReframeService};
