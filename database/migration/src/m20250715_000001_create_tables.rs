use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Check if tables already exist
        if !manager.has_table("platform").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Platform::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Platform::Id)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Platform::PlatformName).string().not_null())
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("clientes").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Clientes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Clientes::Id)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Clientes::Nombre).string().not_null())
                        .col(ColumnDef::new(Clientes::Direccion).string())
                        .col(ColumnDef::new(Clientes::Correo).string())
                        .col(ColumnDef::new(Clientes::NumeroIdentificacion).string())
                        .col(ColumnDef::new(Clientes::Telefono).string())
                        .col(ColumnDef::new(Clientes::IdPlatform).string())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("clientes_id_platform")
                        .table(Clientes::Table)
                        .col(Clientes::IdPlatform)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("clientes_nombre")
                        .table(Clientes::Table)
                        .col(Clientes::Nombre)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("invoices").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Invoices::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Invoices::InvoiceNumber)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Invoices::IdClient).string().not_null())
                        .col(ColumnDef::new(Invoices::BillingPeriod).string().not_null())
                        .col(
                            ColumnDef::new(Invoices::InvoicedAmount)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Invoices::AmountPaid)
                                .decimal_len(14, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("invoices_id_client")
                        .table(Invoices::Table)
                        .col(Invoices::IdClient)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("invoices_billing_period")
                        .table(Invoices::Table)
                        .col(Invoices::BillingPeriod)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("transactions").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Transactions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Transactions::IdTransaction)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Transactions::IdClient).string().not_null())
                        .col(
                            ColumnDef::new(Transactions::DateTimeTransaction)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::AmountTransaction)
                                .decimal_len(14, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::StatusTransaction)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::TypeTransaction)
                                .string()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("transactions_id_client")
                        .table(Transactions::Table)
                        .col(Transactions::IdClient)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("transactions_date_time")
                        .table(Transactions::Table)
                        .col(Transactions::DateTimeTransaction)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("transactions_status")
                        .table(Transactions::Table)
                        .col(Transactions::StatusTransaction)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("transactions_type")
                        .table(Transactions::Table)
                        .col(Transactions::TypeTransaction)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Clientes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Platform::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Platform table
#[derive(Iden)]
enum Platform {
    Table,
    Id,
    PlatformName,
}

// Clients table
#[derive(Iden)]
enum Clientes {
    Table,
    Id,
    Nombre,
    Direccion,
    Correo,
    NumeroIdentificacion,
    Telefono,
    IdPlatform,
}

// Invoices table
#[derive(Iden)]
enum Invoices {
    Table,
    InvoiceNumber,
    IdClient,
    BillingPeriod,
    InvoicedAmount,
    AmountPaid,
    CreatedAt,
}

// Transactions table
#[derive(Iden)]
enum Transactions {
    Table,
    IdTransaction,
    IdClient,
    DateTimeTransaction,
    AmountTransaction,
    StatusTransaction,
    TypeTransaction,
}
