// Database repository management

pub mod client_repository;
pub mod dashboard_repository;
pub mod invoice_repository;
pub mod platform_repository;
pub mod queries_repository;
pub mod transaction_repository;

pub use client_repository::ClientRepository;
pub use dashboard_repository::DashboardRepository;
pub use invoice_repository::InvoiceRepository;
pub use platform_repository::PlatformRepository;
pub use queries_repository::QueriesRepository;
pub use transaction_repository::TransactionRepository;

use sea_orm::DatabaseConnection;

/// Outcome of a delete that is protected by a referential guard.
/// `Blocked` means dependent rows still reference the target.
#[derive(Debug, PartialEq, Eq)]
pub enum GuardedDelete {
    Deleted,
    Missing,
    Blocked,
}

/// Container for all database repositories
pub struct Repositories {
    pub clients: ClientRepository,
    pub platforms: PlatformRepository,
    pub invoices: InvoiceRepository,
    pub transactions: TransactionRepository,
    pub dashboard: DashboardRepository,
    pub queries: QueriesRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            clients: ClientRepository::new(conn.clone()),
            platforms: PlatformRepository::new(conn.clone()),
            invoices: InvoiceRepository::new(conn.clone()),
            transactions: TransactionRepository::new(conn.clone()),
            dashboard: DashboardRepository::new(conn.clone()),
            queries: QueriesRepository::new(conn),
        }
    }
}
