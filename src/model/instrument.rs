use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 交易标的
///
/// :ivar order_book_id: 标的代码
/// :ivar listed_date: 上市日期
/// :ivar round_lot: 最小交易单位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    pub order_book_id: String,
    /// 上市日期, 未知时为 None
    pub listed_date: Option<NaiveDate>,
    /// 成交量限制下的成交数量按其向下取整
    pub round_lot: Decimal,
}

impl Instrument {
    pub fn new(order_book_id: &str, round_lot: Decimal) -> Self {
        Instrument {
            order_book_id: order_book_id.to_string(),
            listed_date: None,
            round_lot,
        }
    }

    /// A股股票, 一手 100 股
    pub fn stock(order_book_id: &str) -> Self {
        Self::new(order_book_id, Decimal::from(100))
    }

    /// 期货合约, 一手 1 张
    pub fn future(order_book_id: &str) -> Self {
        Self::new(order_book_id, Decimal::ONE)
    }

    pub fn with_listed_date(mut self, listed_date: NaiveDate) -> Self {
        self.listed_date = Some(listed_date);
        self
    }
}
