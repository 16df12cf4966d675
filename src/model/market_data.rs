use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// K线
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub order_book_id: String,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl Bar {
    pub fn new(
        order_book_id: &str,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Bar {
            order_book_id: order_book_id.to_string(),
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// 盘口快照
///
/// 任一字段缺失 (如K线驱动时没有盘口档位) 为 None
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    /// 最新成交价
    pub last: Option<Decimal>,
    /// 买一价
    pub bid: Option<Decimal>,
    /// 卖一价
    pub ask: Option<Decimal>,
    /// 涨停价
    pub limit_up: Option<Decimal>,
    /// 跌停价
    pub limit_down: Option<Decimal>,
}

/// 价格板: 各标的的最新盘口快照
///
/// 撮合调用期间只读
#[derive(Debug, Default)]
pub struct PriceBoard {
    quotes: HashMap<String, Quote>,
}

impl PriceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_quote(&mut self, order_book_id: &str, quote: Quote) {
        self.quotes.insert(order_book_id.to_string(), quote);
    }

    /// 只更新最新价, 保留已有的涨跌停与盘口档位
    pub fn set_last_price(&mut self, order_book_id: &str, price: Decimal) {
        self.quotes
            .entry(order_book_id.to_string())
            .or_default()
            .last = Some(price);
    }

    pub fn last_price(&self, order_book_id: &str) -> Option<Decimal> {
        self.quotes.get(order_book_id).and_then(|q| q.last)
    }

    pub fn best_bid(&self, order_book_id: &str) -> Option<Decimal> {
        self.quotes.get(order_book_id).and_then(|q| q.bid)
    }

    pub fn best_ask(&self, order_book_id: &str) -> Option<Decimal> {
        self.quotes.get(order_book_id).and_then(|q| q.ask)
    }

    pub fn limit_up(&self, order_book_id: &str) -> Option<Decimal> {
        self.quotes.get(order_book_id).and_then(|q| q.limit_up)
    }

    pub fn limit_down(&self, order_book_id: &str) -> Option<Decimal> {
        self.quotes.get(order_book_id).and_then(|q| q.limit_down)
    }
}
