//! Form state for the create/edit user dialog.
//!
//! The dialog owns one of these while it is open. It is re-seeded from the
//! selected user (or empty defaults) every time the dialog opens, and its
//! contents change only through the discrete transitions below: field
//! change, field blur, submit attempt, submit success, submit failure.

use crate::user::{User, UserRole};

/// Maximum accepted length for every free-text field.
pub const FIELD_MAX_LEN: usize = 255;

/// The free-text fields of the form, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    FullName,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Username, Self::FullName, Self::Email, Self::Password];

    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Password => "Password",
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Self::Username => "Username is required",
            Self::FullName => "Full name is required",
            Self::Email => "Email is required",
            Self::Password => "Password is required",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Username => 0,
            Self::FullName => 1,
            Self::Email => 2,
            Self::Password => 3,
        }
    }
}

/// Current field values. Role always holds one of the fixed enumeration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Syntactic email check: one `@` with non-empty sides, a dotted domain,
/// no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return false;
    }
    domain.contains('.')
}

fn validate(field: Field, value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(field.required_message());
    }
    if value.chars().count() > FIELD_MAX_LEN {
        return Some("Must be at most 255 characters");
    }
    if field == Field::Email && !is_valid_email(value) {
        return Some("Must be a valid email");
    }
    None
}

#[derive(Debug, Clone, Default)]
pub struct UserFormState {
    pub values: FormValues,
    /// Seed values, restored on submit success.
    initial: FormValues,
    errors: [Option<&'static str>; Field::ALL.len()],
    touched: [bool; Field::ALL.len()],
    editing_id: Option<String>,
    pub submitting: bool,
    /// Submit-level error from the backend, shown under the fields.
    pub submit_error: Option<String>,
    persisted: bool,
}

impl UserFormState {
    /// Seeds the form from the selected user, or with empty defaults for
    /// create mode.
    pub fn seed(user: Option<&User>) -> Self {
        let values = match user {
            Some(user) => FormValues {
                username: user.username.clone(),
                full_name: user.full_name.clone(),
                email: user.email.clone(),
                password: user.password.clone(),
                role: user.role,
            },
            None => FormValues::default(),
        };

        Self {
            initial: values.clone(),
            values,
            editing_id: user.map(|user| user.id.clone()),
            ..Self::default()
        }
    }

    /// True when the form edits an existing user.
    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Identifier of the user being edited, `None` in create mode.
    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    /// Username cannot change once the user exists.
    pub fn username_editable(&self) -> bool {
        !self.is_edit()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.values.username,
            Field::FullName => &self.values.full_name,
            Field::Email => &self.values.email,
            Field::Password => &self.values.password,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.values.username,
            Field::FullName => &mut self.values.full_name,
            Field::Email => &mut self.values.email,
            Field::Password => &mut self.values.password,
        }
    }

    /// Error shown to the user: only once the field was touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.touched[field.index()] {
            self.errors[field.index()]
        } else {
            None
        }
    }

    pub fn field_changed(&mut self, field: Field) {
        self.errors[field.index()] = validate(field, self.value(field));
    }

    pub fn field_blurred(&mut self, field: Field) {
        self.touched[field.index()] = true;
        self.errors[field.index()] = validate(field, self.value(field));
    }

    /// The submit control stays disabled while a required field is empty or
    /// a submission is in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting && Field::ALL.iter().all(|field| !self.value(*field).is_empty())
    }

    /// Validates everything and, if the form is clean, moves into the
    /// submitting state. Returns whether the caller may issue the request.
    pub fn submit_attempt(&mut self) -> bool {
        for field in Field::ALL {
            self.touched[field.index()] = true;
            self.errors[field.index()] = validate(field, self.value(field));
        }
        if self.errors.iter().any(Option::is_some) {
            return false;
        }
        self.submitting = true;
        self.submit_error = None;
        true
    }

    /// A 200 came back: reset to the seed values and mark the change
    /// persisted so the owner re-fetches on close.
    pub fn submit_success(&mut self) {
        self.values = self.initial.clone();
        self.errors = Default::default();
        self.touched = Default::default();
        self.submitting = false;
        self.submit_error = None;
        self.persisted = true;
    }

    /// Anything else: surface the message and leave the dialog open.
    pub fn submit_failure(&mut self, message: String) {
        self.submitting = false;
        self.submit_error = Some(message);
    }

    /// Records the role-change side effect, which persists on the backend
    /// even if Save is never pressed.
    pub fn mark_persisted(&mut self) {
        self.persisted = true;
    }

    /// Whether any backend-visible change happened while the dialog was
    /// open (full submit success or a role-change side effect).
    pub fn persisted(&self) -> bool {
        self.persisted
    }
}
