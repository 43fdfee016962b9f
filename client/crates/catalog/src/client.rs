//! Catalog Client
//!
//! One method per backend collection. All reads go through the
//! best-effort JSON fetcher, so a missing backend shows up as empty data.

use platform::http::JsonApi;

use crate::records::{
    AdminProfile, Book, Library, Notification, NotificationTemplate, PaymentRecord, ReadingStat,
    Student, SubscriptionPlans,
};

#[derive(Debug, Clone)]
pub struct CatalogClient {
    api: JsonApi,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: JsonApi::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub async fn students(&self) -> Vec<Student> {
        self.api.fetch_list("/api/students").await
    }

    pub async fn books(&self) -> Vec<Book> {
        self.api.fetch_list("/api/books").await
    }

    pub async fn libraries(&self) -> Vec<Library> {
        self.api.fetch_list("/api/libraries").await
    }

    pub async fn payments(&self) -> Vec<PaymentRecord> {
        self.api.fetch_list("/api/payments").await
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.api.fetch_list("/api/notifications").await
    }

    pub async fn notification_templates(&self) -> Vec<NotificationTemplate> {
        self.api.fetch_list("/api/notification-templates").await
    }

    pub async fn subscription_plans(&self) -> SubscriptionPlans {
        self.api
            .fetch_one("/api/subscription-plans")
            .await
            .unwrap_or_default()
    }

    pub async fn admin_profile(&self) -> Option<AdminProfile> {
        self.api.fetch_one("/api/admin/profile").await
    }

    /// Reading statistics for one student's profile view
    pub async fn student_stats(&self, student_id: &str) -> Vec<ReadingStat> {
        self.api
            .fetch_list(&format!("/api/students/{}/stats", student_id))
            .await
    }
}
