//! The two concrete agents: pro forma calculation and HTML visualization
//!
//! The pro forma agent asks the backend for a JSON pro forma and delegates
//! that JSON to the visualization agent, which turns it into an HTML table.

mod json;
pub mod proforma;
pub mod visualization;

pub use proforma::{ProFormaHandler, DEFAULT_PROFORMA_MODEL, DEFAULT_PROFORMA_PORT};
pub use visualization::{
    VisualizationHandler, DEFAULT_VISUALIZATION_MODEL, DEFAULT_VISUALIZATION_PORT,
    DEFAULT_VISUALIZATION_URL,
};
