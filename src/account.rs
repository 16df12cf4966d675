use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{OrderSide, PositionEffect, Trade};

/// 账户类型, 决定费用计算口径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Stock,
    Future,
}

/// 单标的持仓, 按多空方向分记今昨仓
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Position {
    pub long_old_quantity: Decimal,
    pub long_today_quantity: Decimal,
    pub short_old_quantity: Decimal,
    pub short_today_quantity: Decimal,
}

impl Position {
    /// 计算本次成交中平今仓的数量
    ///
    /// 平仓优先消耗昨仓, 超出昨仓的部分计为平今; 上限为今仓数量.
    /// 卖出视为平多仓, 买入视为平空仓.
    pub fn close_today_amount(&self, amount: Decimal, side: OrderSide) -> Decimal {
        let (old, today) = match side {
            OrderSide::Sell => (self.long_old_quantity, self.long_today_quantity),
            OrderSide::Buy => (self.short_old_quantity, self.short_today_quantity),
        };
        (amount - old).max(Decimal::ZERO).min(today)
    }

    /// 按成交更新持仓
    pub fn apply_trade(&mut self, trade: &Trade) {
        match trade.position_effect {
            PositionEffect::Open => match trade.side {
                OrderSide::Buy => self.long_today_quantity += trade.amount,
                OrderSide::Sell => self.short_today_quantity += trade.amount,
            },
            PositionEffect::Close => {
                let (old, today) = match trade.side {
                    OrderSide::Sell => {
                        (&mut self.long_old_quantity, &mut self.long_today_quantity)
                    }
                    OrderSide::Buy => {
                        (&mut self.short_old_quantity, &mut self.short_today_quantity)
                    }
                };
                // 先平昨, 再平今
                let from_old = trade.amount.min(*old);
                *old -= from_old;
                *today -= (trade.amount - from_old).min(*today);
            }
            PositionEffect::CloseToday => {
                let today = match trade.side {
                    OrderSide::Sell => &mut self.long_today_quantity,
                    OrderSide::Buy => &mut self.short_today_quantity,
                };
                *today -= trade.amount.min(*today);
            }
        }
    }

    /// 日终结转: 今仓转入昨仓
    pub fn settle_day(&mut self) {
        self.long_old_quantity += self.long_today_quantity;
        self.long_today_quantity = Decimal::ZERO;
        self.short_old_quantity += self.short_today_quantity;
        self.short_today_quantity = Decimal::ZERO;
    }
}

/// 持仓集合 (标的代码 -> 持仓)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Positions {
    map: HashMap<String, Position>,
}

impl Positions {
    pub fn get(&self, order_book_id: &str) -> Option<&Position> {
        self.map.get(order_book_id)
    }

    pub fn get_or_create(&mut self, order_book_id: &str) -> &mut Position {
        self.map.entry(order_book_id.to_string()).or_default()
    }

    /// 无持仓的标的平今量为零
    pub fn close_today_amount(
        &self,
        order_book_id: &str,
        amount: Decimal,
        side: OrderSide,
    ) -> Decimal {
        self.map
            .get(order_book_id)
            .map(|p| p.close_today_amount(amount, side))
            .unwrap_or_default()
    }
}

/// 交易账户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_type: AccountType,
    pub positions: Positions,
}

impl Account {
    pub fn new(account_type: AccountType) -> Self {
        Account {
            account_type,
            positions: Positions::default(),
        }
    }

    /// 计算成交中平今仓的数量, 撮合器在成交构造前调用
    pub fn close_today_amount(
        &self,
        order_book_id: &str,
        amount: Decimal,
        side: OrderSide,
    ) -> Decimal {
        self.positions.close_today_amount(order_book_id, amount, side)
    }

    /// 应用成交事件更新持仓
    pub fn apply_trade(&mut self, trade: &Trade) {
        self.positions
            .get_or_create(&trade.order_book_id)
            .apply_trade(trade);
    }

    /// 日终结转
    pub fn settle_day(&mut self) {
        for position in self.positions.map.values_mut() {
            position.settle_day();
        }
    }
}
