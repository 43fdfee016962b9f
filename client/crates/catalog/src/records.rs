//! Catalog Records
//!
//! The JSON shapes served by the backend API. Field names follow the wire
//! format (camelCase); unknown statuses fail deserialization, which the
//! fetch layer degrades to "no data".

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Subscription billing cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Monthly,
    Quarterly,
    Yearly,
}

/// Standing of a student's subscription payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

/// Outcome of a single payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Completed,
    Pending,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    Cash,
}

/// Delivery channel for owner notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Email,
    Whatsapp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Sent,
    Scheduled,
    Failed,
}

/// A student enrolled at a library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_number: String,
    pub subscription_plan: PlanTier,
    pub payment_status: PaymentStatus,
    pub join_date: NaiveDate,
    pub due_date: NaiveDate,
    pub library_id: String,
}

/// A book in the catalog, with the reader's per-book state folded in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub cover_url: String,
    pub is_wishlisted: bool,
    pub is_completed: bool,
    /// Percentage, 0 to 100
    pub reading_progress: u8,
    pub file_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub total_students: u32,
    pub active_subscriptions: u32,
    pub monthly_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: PaymentOutcome,
    pub plan: String,
    pub method: PaymentMethod,
}

/// A notification the owner has sent out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub channel: ChannelType,
    pub subject: String,
    /// How many students received it
    pub recipients: u32,
    pub sent_date: NaiveDate,
    pub status: NotificationStatus,
}

/// A reusable message template for notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub channel: ChannelType,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub price: f64,
    pub duration: String,
    pub features: Vec<String>,
}

/// The plan catalog, keyed by tier
pub type SubscriptionPlans = BTreeMap<PlanTier, SubscriptionPlan>;

/// The owner's profile with their library summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub library: Option<LibrarySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySummary {
    pub name: String,
    pub address: String,
}

/// One reading statistic shown on a student's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStat {
    pub title: String,
    pub period: String,
    pub value: u32,
}
