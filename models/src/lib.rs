// models/src/lib.rs

//! Record types shared by the dental practice store: users, patients,
//! appointment incidents and their embedded attachments, together with the
//! submission DTOs and the validation applied before anything is persisted.

pub mod dates;
pub mod errors;
pub mod identifiers;
pub mod medical;

pub use errors::{ValidationError, ValidationResult};
pub use identifiers::{generate_id, validate_id, Record};
pub use medical::{
    AttachmentKind, FileAttachment, ImageFormat, Incident, IncidentStatus, Login, NewIncident,
    NewPatient, NewUser, Patient, Role, User, Viewer, MAX_ATTACHMENT_BYTES,
};
