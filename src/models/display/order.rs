//! Order display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Order;
use crate::output::formatters::format_timestamp;

/// Order row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrderDisplay {
    #[tabled(rename = "ORDER NO")]
    pub order_no: String,

    #[tabled(rename = "COURSE")]
    pub course: String,

    #[tabled(rename = "AMOUNT")]
    pub amount: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Order> for OrderDisplay {
    fn from(order: Order) -> Self {
        Self {
            order_no: order.order_no.unwrap_or(order.id),
            course: order.course_title.unwrap_or(order.course_id),
            amount: order.amount.unwrap_or_else(|| "-".to_string()),
            status: order.status.unwrap_or_else(|| "-".to_string()),
            created: format_timestamp(order.created_at.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_display_falls_back_to_ids() {
        let order = Order {
            id: "o-1".to_string(),
            order_no: None,
            course_id: "c-1".to_string(),
            course_title: None,
            amount: None,
            status: None,
            created_at: None,
        };

        let display = OrderDisplay::from(order);

        assert_eq!(display.order_no, "o-1");
        assert_eq!(display.course, "c-1");
        assert_eq!(display.created, "N/A");
    }
}
