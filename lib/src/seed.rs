// lib/src/seed.rs

//! The fixed dataset written on first run.

use chrono::Utc;

use models::dates::parse_birth_date;
use models::{FileAttachment, Incident, IncidentStatus, Patient, Role, User};

use crate::errors::Result;

// Smallest payloads that still identify as their format.
const SEED_PDF: &[u8] = b"%PDF-1.4\n%%EOF\n";
const SEED_PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<User>,
    pub patients: Vec<Patient>,
    pub incidents: Vec<Incident>,
}

/// Builds the seed dataset. Passwords are hashed with `password_hash_cost`.
pub fn seed_data(password_hash_cost: u32) -> Result<SeedData> {
    let now = Utc::now();

    let users = vec![
        User {
            id: "1".to_string(),
            role: Role::Admin,
            email: "admin@entnt.in".to_string(),
            password_hash: User::hash_password("admin123", password_hash_cost)?,
            patient_id: None,
            name: None,
        },
        User {
            id: "2".to_string(),
            role: Role::Patient,
            email: "john@entnt.in".to_string(),
            password_hash: User::hash_password("patient123", password_hash_cost)?,
            patient_id: Some("p1".to_string()),
            name: None,
        },
    ];

    let patients = vec![Patient {
        id: "p1".to_string(),
        name: "John Doe".to_string(),
        dob: parse_birth_date("1990-05-10")?,
        contact: "1234567890".to_string(),
        email: None,
        health_info: "No allergies".to_string(),
        created_at: Some(now),
    }];

    let incidents = vec![Incident {
        id: "i1".to_string(),
        patient_id: "p1".to_string(),
        title: "Toothache".to_string(),
        description: "Upper molar pain".to_string(),
        comments: "Sensitive to cold".to_string(),
        appointment_date: "2025-07-01T10:00:00".to_string(),
        cost: Some(80.0),
        treatment: None,
        status: IncidentStatus::Completed,
        next_date: None,
        files: vec![
            FileAttachment::from_bytes("invoice.pdf", "application/pdf", SEED_PDF)?,
            FileAttachment::from_bytes("xray.png", "image/png", SEED_PNG)?,
        ],
        created_at: Some(now),
    }];

    Ok(SeedData {
        users,
        patients,
        incidents,
    })
}
