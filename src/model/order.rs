use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::trade::Trade;
use super::types::{OrderSide, OrderStatus, OrderType, PositionEffect};

/// 订单
///
/// 状态机: Open -> {Filled, Cancelled, Rejected}.
/// 撮合器通过 mark_rejected / mark_cancelled / fill 驱动状态流转,
/// 身份字段在创建后不再变更.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub order_book_id: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    /// 限价单委托价, 市价单为 None
    pub price: Option<Decimal>,
    pub position_effect: PositionEffect,
    /// 下单时用于冻结资金的价格
    pub frozen_price: Decimal,
    pub quantity: Decimal,
    pub filled_quantity: Decimal,
    pub status: OrderStatus,
    /// 终态原因 (拒单或撤单)
    pub reason: Option<String>,
}

impl Order {
    /// 创建限价单
    pub fn limit(
        order_book_id: &str,
        side: OrderSide,
        position_effect: PositionEffect,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Order {
            order_id: Uuid::new_v4().to_string(),
            order_book_id: order_book_id.to_string(),
            side,
            order_type: OrderType::Limit,
            price: Some(price),
            position_effect,
            frozen_price: price,
            quantity,
            filled_quantity: Decimal::ZERO,
            status: OrderStatus::Open,
            reason: None,
        }
    }

    /// 创建市价单
    ///
    /// frozen_price 由下单方在冻结资金时另行写入
    pub fn market(
        order_book_id: &str,
        side: OrderSide,
        position_effect: PositionEffect,
        quantity: Decimal,
    ) -> Self {
        Order {
            order_id: Uuid::new_v4().to_string(),
            order_book_id: order_book_id.to_string(),
            side,
            order_type: OrderType::Market,
            price: None,
            position_effect,
            frozen_price: Decimal::ZERO,
            quantity,
            filled_quantity: Decimal::ZERO,
            status: OrderStatus::Open,
            reason: None,
        }
    }

    /// 未成交数量
    pub fn unfilled_quantity(&self) -> Decimal {
        self.quantity - self.filled_quantity
    }

    pub fn is_active(&self) -> bool {
        self.status == OrderStatus::Open
    }

    /// 拒单 (数据缺失或涨跌停触板), 终态
    pub fn mark_rejected(&mut self, reason: String) {
        if self.status == OrderStatus::Open {
            log::info!("{}", reason);
            self.status = OrderStatus::Rejected;
            self.reason = Some(reason);
        }
    }

    /// 撤单 (市价单成交量不足), 终态
    pub fn mark_cancelled(&mut self, reason: String) {
        if self.status == OrderStatus::Open {
            log::info!("{}", reason);
            self.status = OrderStatus::Cancelled;
            self.reason = Some(reason);
        }
    }

    /// 应用一笔成交, 全部成交后转入 Filled
    pub fn fill(&mut self, trade: &Trade) {
        debug_assert!(trade.amount > Decimal::ZERO);
        debug_assert!(trade.amount <= self.unfilled_quantity());
        self.filled_quantity += trade.amount;
        if self.unfilled_quantity().is_zero() {
            self.status = OrderStatus::Filled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_partial_fill_keeps_order_open() {
        let mut order = Order::limit(
            "000001.XSHE",
            OrderSide::Buy,
            PositionEffect::Open,
            Decimal::from(400),
            Decimal::from(10),
        );
        let trade = Trade::from_order(&order, dt(), dt(), Decimal::from(10), Decimal::from(100), Decimal::ZERO);
        order.fill(&trade);

        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.filled_quantity, Decimal::from(100));
        assert_eq!(order.unfilled_quantity(), Decimal::from(300));
    }

    #[test]
    fn test_full_fill_transitions_to_filled() {
        let mut order = Order::limit(
            "000001.XSHE",
            OrderSide::Sell,
            PositionEffect::Close,
            Decimal::from(200),
            Decimal::from(10),
        );
        let trade = Trade::from_order(&order, dt(), dt(), Decimal::from(10), Decimal::from(200), Decimal::ZERO);
        order.fill(&trade);

        assert_eq!(order.status, OrderStatus::Filled);
        assert!(order.unfilled_quantity().is_zero());
    }

    #[test]
    fn test_terminal_transitions_only_from_open() {
        let mut order = Order::market(
            "IF2406",
            OrderSide::Buy,
            PositionEffect::Open,
            Decimal::from(10),
        );
        order.mark_rejected("no market data".to_string());
        assert_eq!(order.status, OrderStatus::Rejected);

        // Already terminal, cancel must not overwrite
        order.mark_cancelled("late cancel".to_string());
        assert_eq!(order.status, OrderStatus::Rejected);
        assert_eq!(order.reason.as_deref(), Some("no market data"));
    }
}
