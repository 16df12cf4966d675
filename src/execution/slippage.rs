use rust_decimal::Decimal;

use crate::model::OrderSide;

/// 滑点模型特征
pub trait SlippageModel: Send + Sync {
    /// 计算滑点后的成交价
    fn trade_price(&self, side: OrderSide, price: Decimal) -> Decimal;
}

/// 零滑点模型
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroSlippage;

impl SlippageModel for ZeroSlippage {
    fn trade_price(&self, _side: OrderSide, price: Decimal) -> Decimal {
        price
    }
}

/// 固定值滑点模型
#[derive(Debug, Clone, Copy)]
pub struct FixedSlippage {
    pub delta: Decimal,
}

impl SlippageModel for FixedSlippage {
    fn trade_price(&self, side: OrderSide, price: Decimal) -> Decimal {
        match side {
            OrderSide::Buy => price + self.delta,
            OrderSide::Sell => price - self.delta,
        }
    }
}

/// 比例滑点模型 (默认, 比例取自配置 slippage)
#[derive(Debug, Clone, Copy)]
pub struct PriceRatioSlippage {
    pub rate: Decimal,
}

impl SlippageModel for PriceRatioSlippage {
    fn trade_price(&self, side: OrderSide, price: Decimal) -> Decimal {
        match side {
            OrderSide::Buy => price * (Decimal::ONE + self.rate),
            OrderSide::Sell => price * (Decimal::ONE - self.rate),
        }
    }
}
