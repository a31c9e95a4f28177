use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use fabplan_core::{DomainError, DomainResult, OrderId};

/// Manufacturing order lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProduction,
    QualityCheck,
    Completed,
    Cancelled,
}

/// A manufacturing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Human-facing reference, e.g. "MO-1003".
    pub reference: String,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub status: OrderStatus,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create an order.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub due_date: DateTime<Utc>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    pub customer: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<u32>,
    pub status: Option<OrderStatus>,
    pub due_date: Option<DateTime<Utc>>,
}

/// In-memory order store. Seeded at startup; lock-per-call, last write wins.
#[derive(Debug, Default)]
pub struct OrderStore {
    inner: Mutex<Vec<Order>>,
    next_ref: Mutex<u32>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with demo orders.
    pub fn seeded() -> Self {
        let store = Self::new();
        let customers = ["Acme Fabrication", "Borealis Tooling", "Cobalt Works"];
        let products = ["Gear housing", "Drive shaft", "Valve block"];
        let now = Utc::now();

        for (i, (customer, product)) in customers.iter().zip(products).enumerate() {
            let _ = store.create(NewOrder {
                customer: customer.to_string(),
                product: product.to_string(),
                quantity: 50 * (i as u32 + 1),
                due_date: now + Duration::days(7 * (i as i64 + 1)),
            });
        }
        store
    }

    pub fn list(&self) -> Vec<Order> {
        self.inner.lock().unwrap().clone()
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.inner.lock().unwrap().iter().find(|o| o.id == id).cloned()
    }

    pub fn create(&self, new: NewOrder) -> DomainResult<Order> {
        if new.product.trim().is_empty() {
            return Err(DomainError::validation("product must not be empty"));
        }
        if new.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let mut next_ref = self.next_ref.lock().unwrap();
        *next_ref += 1;
        let order = Order {
            id: OrderId::new(),
            reference: format!("MO-{}", 1000 + *next_ref),
            customer: new.customer,
            product: new.product,
            quantity: new.quantity,
            status: OrderStatus::Pending,
            due_date: new.due_date,
            created_at: Utc::now(),
        };
        self.inner.lock().unwrap().push(order.clone());
        Ok(order)
    }

    pub fn update(&self, id: OrderId, update: OrderUpdate) -> DomainResult<Order> {
        let mut orders = self.inner.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(DomainError::NotFound)?;

        if let Some(quantity) = update.quantity {
            if quantity == 0 {
                return Err(DomainError::validation("quantity must be positive"));
            }
            order.quantity = quantity;
        }
        if let Some(customer) = update.customer {
            order.customer = customer;
        }
        if let Some(product) = update.product {
            order.product = product;
        }
        if let Some(status) = update.status {
            order.status = status;
        }
        if let Some(due_date) = update.due_date {
            order.due_date = due_date;
        }
        Ok(order.clone())
    }

    pub fn delete(&self, id: OrderId) -> DomainResult<()> {
        let mut orders = self.inner.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        if orders.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}
