// Handlers Module
// This module contains the API endpoint handlers

pub mod clients;
pub mod dashboard;
pub mod health;
pub mod invoices;
pub mod platforms;
pub mod queries;
pub mod transactions;

use std::sync::Arc;

use crate::db::Repositories;

// Type alias for the application state
pub type AppState = Arc<Repositories>;
