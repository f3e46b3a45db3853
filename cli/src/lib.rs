//! Static export for the BSOD troubleshooting guide: HTML rendering, content
//! checks and JSON export.

pub mod cli;
pub mod commands;
pub mod html;
pub mod utils;
