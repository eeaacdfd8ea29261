pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::html_error_response;
pub use html::{html_response, html_status_response, html_with_cookie, text_response};
pub use redirect::see_other;
