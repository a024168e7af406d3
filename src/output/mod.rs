//! Output rendering and delivery.
//!
//! This module handles turning an edit script into something a person reads:
//! - A self-contained HTML document
//! - Sending it to stdout or writing it to a file

pub mod html;
pub mod writer;

// Re-export main functions
pub use html::{render, render_body, RenderOptions};
pub use writer::{emit, validate_output_path, write_output, OutputTarget};
