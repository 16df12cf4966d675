use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::order::Order;
use super::types::{OrderSide, PositionEffect};

/// 成交记录
///
/// 每次成交生成一条, 一张订单可能跨多个时间步产生多条成交.
/// 佣金和税费在撮合器内部计算后写入, 随后不再变更.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: String,
    pub order_id: String,
    pub order_book_id: String,
    /// 自然时间
    pub calendar_dt: NaiveDateTime,
    /// 交易时间 (夜盘归属的交易日时间)
    pub trading_dt: NaiveDateTime,
    /// 成交价 (已含滑点)
    pub price: Decimal,
    /// 成交量
    pub amount: Decimal,
    pub side: OrderSide,
    pub position_effect: PositionEffect,
    /// 下单冻结价
    pub frozen_price: Decimal,
    /// 平今仓数量
    pub close_today_amount: Decimal,
    pub commission: Decimal,
    pub tax: Decimal,
}

impl Trade {
    /// 由订单生成一笔成交, 佣金税费初始为零
    pub fn from_order(
        order: &Order,
        calendar_dt: NaiveDateTime,
        trading_dt: NaiveDateTime,
        price: Decimal,
        amount: Decimal,
        close_today_amount: Decimal,
    ) -> Self {
        Trade {
            trade_id: Uuid::new_v4().to_string(),
            order_id: order.order_id.clone(),
            order_book_id: order.order_book_id.clone(),
            calendar_dt,
            trading_dt,
            price,
            amount,
            side: order.side,
            position_effect: order.position_effect,
            frozen_price: order.frozen_price,
            close_today_amount,
            commission: Decimal::ZERO,
            tax: Decimal::ZERO,
        }
    }

    /// 成交额
    pub fn value(&self) -> Decimal {
        self.price * self.amount
    }

    /// 交易成本合计
    pub fn transaction_cost(&self) -> Decimal {
        self.commission + self.tax
    }
}
