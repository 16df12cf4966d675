use rust_decimal::Decimal;

use crate::account::AccountType;
use crate::model::Trade;

/// 佣金模型特征
pub trait CommissionModel: Send + Sync {
    fn commission(&self, account_type: AccountType, trade: &Trade) -> Decimal;
}

/// 按成交额比例计费的佣金模型
///
/// 股票账户有单笔最低佣金, 期货账户按费率直接计收.
/// 整体结果乘以佣金倍率.
#[derive(Debug, Clone)]
pub struct RatioCommission {
    pub multiplier: Decimal,
    pub stock_rate: Decimal,
    pub futures_rate: Decimal,
    pub min_commission: Decimal,
}

impl Default for RatioCommission {
    fn default() -> Self {
        RatioCommission {
            multiplier: Decimal::ONE,
            stock_rate: Decimal::new(8, 4),
            futures_rate: Decimal::new(8, 4),
            min_commission: Decimal::from(5),
        }
    }
}

impl RatioCommission {
    pub fn with_multiplier(multiplier: Decimal) -> Self {
        RatioCommission {
            multiplier,
            ..Self::default()
        }
    }
}

impl CommissionModel for RatioCommission {
    fn commission(&self, account_type: AccountType, trade: &Trade) -> Decimal {
        let value = trade.value();
        match account_type {
            AccountType::Stock => {
                (value * self.stock_rate).max(self.min_commission) * self.multiplier
            }
            AccountType::Future => value * self.futures_rate * self.multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderSide, PositionEffect, Trade};
    use chrono::NaiveDate;

    fn trade(price: i64, amount: i64) -> Trade {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let order = Order::market(
            "000001.XSHE",
            OrderSide::Buy,
            PositionEffect::Open,
            Decimal::from(amount),
        );
        Trade::from_order(
            &order,
            dt,
            dt,
            Decimal::from(price),
            Decimal::from(amount),
            Decimal::ZERO,
        )
    }

    #[test]
    fn test_minimum_commission_applies_to_stock() {
        let model = RatioCommission::default();
        // 成交额 1000, 按 0.0008 计为 0.8, 低于最低佣金 5
        assert_eq!(
            model.commission(AccountType::Stock, &trade(10, 100)),
            Decimal::from(5)
        );
    }

    #[test]
    fn test_rate_exceeds_minimum() {
        let model = RatioCommission::default();
        // 成交额 100000 * 0.0008 = 80
        assert_eq!(
            model.commission(AccountType::Stock, &trade(100, 1000)),
            Decimal::from(80)
        );
    }

    #[test]
    fn test_futures_has_no_minimum() {
        let model = RatioCommission::default();
        // 成交额 1000 * 0.0008 = 0.8
        assert_eq!(
            model.commission(AccountType::Future, &trade(10, 100)),
            Decimal::new(8, 1)
        );
    }

    #[test]
    fn test_multiplier_scales_result() {
        let model = RatioCommission::with_multiplier(Decimal::from(2));
        assert_eq!(
            model.commission(AccountType::Stock, &trade(100, 1000)),
            Decimal::from(160)
        );
    }
}
