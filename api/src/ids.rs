// Application-generated identifiers.
//
// Ids are UUID-backed rather than wall-clock-derived so concurrent creates
// cannot collide. Invoices and transactions keep their legacy prefixes,
// which downstream consumers match on.

use uuid::Uuid;

pub fn new_client_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn new_platform_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn new_invoice_number() -> String {
    format!("FAC-{}", Uuid::new_v4().simple())
}

pub fn new_transaction_id() -> String {
    format!("TXN-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entity_ids_carry_their_prefixes() {
        assert!(new_invoice_number().starts_with("FAC-"));
        assert!(new_transaction_id().starts_with("TXN-"));
        assert!(Uuid::parse_str(&new_client_id()).is_ok());
        assert!(Uuid::parse_str(&new_platform_id()).is_ok());
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: HashSet<String> = (0..1000).map(|_| new_transaction_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
