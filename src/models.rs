use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A catalog item as owned by the repository.
///
/// `id` and `created_date` are assigned once at creation; `name` and `price`
/// are only ever replaced together.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub created_date: DateTime<Utc>,
}

impl Item {
    /// Mint a new item with a fresh id, stamped with the current UTC time.
    pub fn new(name: String, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            created_date: Utc::now(),
        }
    }

    /// Whole-object replacement of the mutable fields, keeping identity and creation time.
    pub fn replaced_with(&self, name: String, price: Decimal) -> Self {
        Self {
            id: self.id,
            name,
            price,
            created_date: self.created_date,
        }
    }
}
