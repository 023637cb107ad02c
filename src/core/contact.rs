use std::time::Instant;

use super::timer::{ms, Deadline};

pub const SUBMIT_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Sent,
}

/// The desktop contact window. Sending is simulated: nothing leaves the
/// process, the form only validates after a fixed delay.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    active: ContactField,
    status: FormStatus,
    error: bool,
    settle: Deadline,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn active(&self) -> ContactField {
        self.active
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn focus_field(&mut self, field: ContactField) {
        self.active = field;
    }

    pub fn next_field(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev_field(&mut self) {
        self.active = self.active.prev();
    }

    pub fn input(&mut self, c: char) {
        if self.status != FormStatus::Editing || c.is_control() {
            return;
        }
        let field = self.active;
        self.field_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        if self.status != FormStatus::Editing {
            return;
        }
        let field = self.active;
        self.field_mut(field).pop();
    }

    pub fn submit(&mut self, now: Instant) {
        if self.status != FormStatus::Editing {
            return;
        }
        self.status = FormStatus::Submitting;
        self.settle.arm(now, ms(SUBMIT_DELAY_MS));
    }

    pub fn tick(&mut self, now: Instant) {
        if self.settle.fire(now).is_none() {
            return;
        }
        let complete = [&self.name, &self.email, &self.message]
            .iter()
            .all(|s| !s.trim().is_empty());
        if complete {
            self.status = FormStatus::Sent;
            self.error = false;
            tracing::info!("contact form accepted");
        } else {
            self.status = FormStatus::Editing;
            self.error = true;
        }
    }

    /// "Send another message".
    pub fn reset(&mut self) {
        if self.status == FormStatus::Sent {
            *self = Self::default();
        }
    }
}
