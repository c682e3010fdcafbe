// lib/src/lib.rs

//! Record store and dashboard aggregation for a dental practice.
//!
//! `RecordStore` keeps users, patients and incidents as JSON collections in a
//! pluggable `StorageEngine` (sled or in-memory). The `engine` module derives
//! role-scoped dashboard statistics, patient histories and calendar views from
//! those collections.

pub mod attachments;
pub mod auth;
pub mod config;
pub mod database;
pub mod engine;
pub mod errors;
pub mod repository;
pub mod seed;
pub mod storage_engine;

pub use crate::attachments::{ingest_file, ingest_files};
pub use crate::auth::{authenticate, login};
pub use crate::config::{load_store_config, CorruptionPolicy, StorageEngineType, StoreConfig};
pub use crate::database::RecordStore;
pub use crate::engine::{
    appointments_on, compute_dashboard_stats, dates_with_appointments, load_dashboard,
    patient_history, patient_name, status_counts, DashboardStats, PatientHistory, PatientSpend,
};
pub use crate::errors::{Result, StoreError};
pub use crate::repository::Repository;
pub use crate::storage_engine::{create_storage, InMemoryStorage, StorageEngine};
#[cfg(feature = "sled-datastore")]
pub use crate::storage_engine::SledStorage;

pub use models::{
    generate_id, FileAttachment, Incident, IncidentStatus, Login, NewIncident, NewPatient, Patient,
    Role, User, Viewer,
};
