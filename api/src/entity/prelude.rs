//! Prelude module for convenient imports

pub use super::clients::Entity as Clients;
pub use super::invoices::Entity as Invoices;
pub use super::platforms::Entity as Platforms;
pub use super::transactions::Entity as Transactions;
