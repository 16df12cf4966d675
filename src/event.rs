use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::account::AccountType;
use crate::model::Trade;

/// 成交事件
///
/// 撮合产生的每笔成交通过事件总线广播, 由宿主 (组合/账户/统计) 消费
#[derive(Debug, Clone)]
pub struct TradeEvent {
    pub order_book_id: String,
    pub account_type: AccountType,
    pub trade: Trade,
}

/// 事件管理器
/// 负责成交事件队列的分发
pub struct EventManager {
    tx: Sender<TradeEvent>,
    rx: Receiver<TradeEvent>,
}

impl EventManager {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        EventManager { tx, rx }
    }

    /// 获取发送端 (用于克隆给上下文)
    pub fn sender(&self) -> Sender<TradeEvent> {
        self.tx.clone()
    }

    /// 尝试接收事件 (非阻塞)
    pub fn try_recv(&self) -> Option<TradeEvent> {
        self.rx.try_recv().ok()
    }

    /// 取出当前队列中的全部事件
    pub fn drain(&self) -> Vec<TradeEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderSide, PositionEffect, Trade};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_drain_returns_events_in_order() {
        let manager = EventManager::new();
        let tx = manager.sender();

        let dt = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let order = Order::market(
            "000001.XSHE",
            OrderSide::Buy,
            PositionEffect::Open,
            Decimal::from(100),
        );

        for amount in [100, 200] {
            let trade = Trade::from_order(
                &order,
                dt,
                dt,
                Decimal::from(10),
                Decimal::from(amount),
                Decimal::ZERO,
            );
            tx.send(TradeEvent {
                order_book_id: order.order_book_id.clone(),
                account_type: AccountType::Stock,
                trade,
            })
            .unwrap();
        }

        let events = manager.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].trade.amount, Decimal::from(100));
        assert_eq!(events[1].trade.amount, Decimal::from(200));
        assert!(manager.try_recv().is_none());
    }
}
