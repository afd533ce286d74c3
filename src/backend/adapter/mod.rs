// src/backend/adapter/mod.rs
pub mod mailer;

pub use mailer::{HttpMailer, Mailer, NoopMailer};
