//! Contact form: validation, wire encoding, relay delivery and the section view.

pub mod form;
pub mod relay;
pub mod session;
mod view;

pub use form::{ContactForm, FieldError};
pub use relay::{submit, FormRelay, HttpRelay, RelayReply, SubmitError};
pub use session::ContactSession;
pub use view::ContactSection;
