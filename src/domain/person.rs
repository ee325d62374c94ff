//! Person Entity
//!
//! Read-only directory record mirroring the remote endpoint's JSON.
//! Never mutated client-side; unknown response fields are ignored.

use serde::{Deserialize, Serialize};

/// Employer sub-record (only the name is used)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// One directory record as served by the remote collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

impl Person {
    /// Case-insensitive substring match over name, email, and company name.
    /// An empty term matches every record.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.company.name.to_lowercase().contains(&term)
    }
}
