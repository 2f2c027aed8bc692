// Conversion pipeline: single-file unit, batch session, and the format
// converter for the optional second encode stage.

pub mod reencode;
pub mod session;
pub mod types;
pub mod unit;

pub use reencode::{FormatConverter, OutputPlan};
pub use session::{BatchSession, SOURCE_EXTENSION};
pub use types::{Outcome, SessionReport};
pub use unit::ConversionUnit;
