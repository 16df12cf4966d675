use rust_decimal::Decimal;

use crate::account::AccountType;
use crate::model::{OrderSide, Trade};

/// 税费模型特征
pub trait TaxModel: Send + Sync {
    fn tax(&self, account_type: AccountType, trade: &Trade) -> Decimal;
}

/// 印花税: 股票账户卖出时按成交额收取, 期货不征收
#[derive(Debug, Clone, Copy)]
pub struct StampTax {
    pub rate: Decimal,
}

impl Default for StampTax {
    fn default() -> Self {
        StampTax {
            rate: Decimal::new(1, 3),
        }
    }
}

impl TaxModel for StampTax {
    fn tax(&self, account_type: AccountType, trade: &Trade) -> Decimal {
        if account_type == AccountType::Stock && trade.side == OrderSide::Sell {
            trade.value() * self.rate
        } else {
            Decimal::ZERO
        }
    }
}
