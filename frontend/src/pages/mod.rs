pub mod guide;
pub mod not_found;
