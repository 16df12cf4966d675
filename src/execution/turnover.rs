use rust_decimal::Decimal;
use std::collections::HashMap;

/// 成交量跟踪器
///
/// 记录当前时间步内各标的的累计成交量, 用于成交量限制的余量计算.
/// 每个时间步开始时由 Matcher::update 重置, 步内只增不减.
#[derive(Debug, Default)]
pub struct TurnoverTracker {
    filled: HashMap<String, Decimal>,
}

impl TurnoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空上一时间步的累计量
    pub fn reset(&mut self) {
        self.filled.clear();
    }

    pub fn add(&mut self, order_book_id: &str, amount: Decimal) {
        *self
            .filled
            .entry(order_book_id.to_string())
            .or_insert(Decimal::ZERO) += amount;
    }

    /// 本时间步内该标的已成交量, 无记录时为零
    pub fn filled(&self, order_book_id: &str) -> Decimal {
        self.filled
            .get(order_book_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }
}
