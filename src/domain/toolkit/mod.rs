//! Cross-tool state: the Wizard contract and the shared ToolkitState record.

mod state;
mod wizard;

pub use state::{ToolDataSet, ToolkitState};
pub use wizard::Wizard;
