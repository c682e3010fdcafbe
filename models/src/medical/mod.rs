// models/src/medical/mod.rs

pub mod attachment;
pub mod incident;
pub mod login;
pub mod patient;
pub mod role;
pub mod user;
pub mod viewer;

pub use attachment::{AttachmentKind, FileAttachment, ImageFormat, MAX_ATTACHMENT_BYTES};
pub use incident::{Incident, IncidentStatus, NewIncident};
pub use login::Login;
pub use patient::{NewPatient, Patient};
pub use role::Role;
pub use user::{NewUser, User};
pub use viewer::Viewer;
