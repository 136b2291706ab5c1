use serde::{Deserialize, Serialize};

/// Payload collected by the contact form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewsletterRequest {
    pub email: String,
}
