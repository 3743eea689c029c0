//! Quote source implementations.

mod awesome_api;
mod scripted;

pub use awesome_api::{AwesomeApiConfig, AwesomeApiSource};
pub use scripted::{ScriptStep, ScriptedSource};
