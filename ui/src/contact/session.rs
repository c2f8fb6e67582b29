use super::form::{ContactForm, FieldError};
use super::relay::SubmitError;

/// Per-visit state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSession {
    pub form: ContactForm,
    /// Whether the form dialog is showing.
    pub open: bool,
    pub sending: bool,
    pub sent: bool,
    /// Relay or transport failure text.
    pub error: Option<String>,
    /// Field the user still has to fix.
    pub invalid: Option<FieldError>,
}

impl ContactSession {
    /// Start a submission. Returns the snapshot to send, or `None` when one is
    /// already in flight or the form does not validate.
    pub fn begin(&mut self) -> Option<ContactForm> {
        if self.sending {
            return None;
        }
        self.error = None;
        self.sent = false;
        if let Err(field) = self.form.validate() {
            self.invalid = Some(field);
            return None;
        }
        self.invalid = None;
        self.sending = true;
        Some(self.form.clone())
    }

    /// Record the outcome. Success empties the fields; failures keep them.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        self.sending = false;
        match outcome {
            Ok(()) => {
                self.sent = true;
                self.form.clear();
            }
            Err(SubmitError::Invalid(field)) => self.invalid = Some(field),
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn open_form(&mut self) {
        self.open = true;
    }

    /// Hide the dialog. Typed fields survive; a finished send does not, so the
    /// next open starts from an empty form.
    pub fn close_form(&mut self) {
        self.open = false;
        if self.sent {
            self.send_another();
        }
    }

    /// Back from the success panel to an empty form.
    pub fn send_another(&mut self) {
        self.sent = false;
        self.error = None;
        self.invalid = None;
    }
}
