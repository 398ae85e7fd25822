//! Invoice aggregate types
//!
//! These mirror the rows the external data store hands over, fully joined.
//! The renderer treats them as read-only, already-validated input: stored
//! amounts are displayed as-is and never re-derived.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an invoice (lowercase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// Invoice header fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Issuing company
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Already-fetched logo bytes (JPEG or PNG); fetching is the caller's job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Vec<u8>>,
}

/// Invoice recipient
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One billable row on an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Stored amount, trusted as-is (expected to equal quantity * unit_price)
    pub amount: f64,
}

/// The fully-joined aggregate: the single input to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub invoice: Invoice,
    pub company: Company,
    pub customer: Customer,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Join the non-empty parts of a city/state/postal triple with ", "
fn join_locality(city: &Option<String>, state: &Option<String>, postal: &Option<String>) -> Option<String> {
    let parts: Vec<&str> = [city, state, postal]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .filter(|p| !p.trim().is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Keep a line only if it has visible content
fn non_blank(line: &Option<String>) -> Option<String> {
    line.as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

impl Company {
    /// Address block lines, empty fields omitted entirely
    pub fn address_lines(&self) -> Vec<String> {
        [
            non_blank(&self.address),
            join_locality(&self.city, &self.state, &self.postal_code),
            non_blank(&self.country),
            non_blank(&self.phone),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Customer {
    /// Address block lines, empty fields omitted entirely
    pub fn address_lines(&self) -> Vec<String> {
        [
            non_blank(&self.address),
            join_locality(&self.city, &self.state, &self.postal_code),
            non_blank(&self.country),
            non_blank(&self.phone),
            non_blank(&self.email),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
