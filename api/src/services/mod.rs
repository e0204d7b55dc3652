// Business logic service implementations

pub mod client_service;
pub mod dashboard_service;
pub mod invoice_service;
pub mod platform_service;
pub mod queries_service;
pub mod transaction_service;
