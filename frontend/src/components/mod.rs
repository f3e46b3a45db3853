// Reusable components live here.

pub mod cheat_sheet;
pub mod footer;
pub mod hardening;
pub mod hero;
pub mod resources;
pub mod section_header;
pub mod timeline;
