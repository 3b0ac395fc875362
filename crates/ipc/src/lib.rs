//! IPC message protocol for CMF material-swap renders
//!
//! Defines the JSON shapes exchanged between the UI layer and the renderer.
//! Image bytes travel as standard base64 with padding.

pub mod error;
pub mod messages;

pub use error::IpcError;
pub use messages::{RenderRequest, RenderResponse};
