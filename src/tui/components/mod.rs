// Reusable UI components shared by the views

mod formatters;
mod status_bar;
mod title_bar;
mod toast;

pub use formatters::truncate_to_width;
pub use status_bar::render_status;
pub use title_bar::render_title;
pub use toast::Toast;
