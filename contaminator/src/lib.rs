pub mod contamination;
pub mod entry;
pub mod error;
pub mod extract;
pub mod noise;
pub mod provenance;
pub mod query;
pub mod sampler;
pub mod stats;
pub mod swap;
#[macro_use]
extern crate log;

pub use contamination::{ContaminationConfig, ContaminationReport, CrossContaminate};
pub use error::{ContaminationError, Result};
pub use swap::{ReplaceReceiverSeqs, SwapReport};
