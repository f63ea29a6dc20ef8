mod html;
mod templates;

pub use html::{html_fragment, html_page, see_other, see_other_with_cookie};
pub use templates::{names, Templates};
