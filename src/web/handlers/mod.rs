//! HTML page handlers.

mod home;
mod preview;
mod shorten;

pub use home::{IndexTemplate, home_handler};
pub use preview::{PreviewTemplate, preview_handler};
pub use shorten::{CreatedTemplate, shorten_form_handler};
