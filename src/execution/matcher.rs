use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::account::Account;
use crate::config::SimulationConfig;
use crate::context::SimulationContext;
use crate::error::SimBrokerError;
use crate::event::TradeEvent;
use crate::model::{Order, OrderSide, OrderType, Trade};

use super::commission::{CommissionModel, RatioCommission};
use super::price::DealPriceDecider;
use super::slippage::{PriceRatioSlippage, SlippageModel};
use super::tax::{StampTax, TaxModel};
use super::turnover::TurnoverTracker;

/// 撮合器
///
/// 由外部模拟时钟逐步驱动: 每个时间步先 update 重置成交量跟踪并记录
/// 时间戳, 再 match_orders 撮合当前批次的未完成订单. 订单之间相互独立,
/// 单张订单的拒单或撤单不影响批次内后续订单.
///
/// 撮合器只持有自己的成交量跟踪器; 订单通过其状态流转接口修改,
/// 账户只读, 新生成的成交经由事件总线广播.
pub struct Matcher {
    deal_price_decider: DealPriceDecider,
    commission_model: Box<dyn CommissionModel>,
    slippage_model: Box<dyn SlippageModel>,
    tax_model: Box<dyn TaxModel>,
    turnover: TurnoverTracker,
    calendar_dt: Option<NaiveDateTime>,
    trading_dt: Option<NaiveDateTime>,
    volume_percent: Decimal,
    price_limit: bool,
    volume_limit: bool,
}

impl Matcher {
    pub fn new(config: &SimulationConfig) -> Result<Self, SimBrokerError> {
        config.validate()?;
        Ok(Matcher {
            deal_price_decider: DealPriceDecider::new(config.matching_type),
            commission_model: Box::new(RatioCommission::with_multiplier(
                config.commission_multiplier,
            )),
            slippage_model: Box::new(PriceRatioSlippage {
                rate: config.slippage,
            }),
            tax_model: Box::new(StampTax::default()),
            turnover: TurnoverTracker::new(),
            calendar_dt: None,
            trading_dt: None,
            volume_percent: config.volume_percent,
            price_limit: config.price_limit,
            volume_limit: config.volume_limit,
        })
    }

    /// 替换佣金模型
    pub fn set_commission_model(&mut self, model: Box<dyn CommissionModel>) {
        self.commission_model = model;
    }

    /// 替换滑点模型
    pub fn set_slippage_model(&mut self, model: Box<dyn SlippageModel>) {
        self.slippage_model = model;
    }

    /// 替换税费模型
    pub fn set_tax_model(&mut self, model: Box<dyn TaxModel>) {
        self.tax_model = model;
    }

    /// 当前时间步的成交量跟踪器
    pub fn turnover(&self) -> &TurnoverTracker {
        &self.turnover
    }

    /// 进入新时间步: 清空成交量累计, 记录本步成交所用的时间戳.
    /// 每次 match_orders 之前必须调用一次.
    pub fn update(&mut self, calendar_dt: NaiveDateTime, trading_dt: NaiveDateTime) {
        self.turnover.reset();
        self.calendar_dt = Some(calendar_dt);
        self.trading_dt = Some(trading_dt);
    }

    /// 撮合一批未完成订单
    ///
    /// 迭代顺序由调用方给定并保持; 未成交的限价单留待宿主在下一时间步
    /// 重新提交, 市价单在本步内终结.
    pub fn match_orders<'a, I>(&mut self, ctx: &SimulationContext, open_orders: I)
    where
        I: IntoIterator<Item = (&'a Account, &'a mut Order)>,
    {
        let (calendar_dt, trading_dt) = match (self.calendar_dt, self.trading_dt) {
            (Some(calendar_dt), Some(trading_dt)) => (calendar_dt, trading_dt),
            _ => {
                log::warn!("match_orders called before update, batch skipped");
                return;
            }
        };

        for (account, order) in open_orders {
            if !order.is_active() {
                continue;
            }
            let order_book_id = order.order_book_id.clone();

            // 行情校验: 无有效最新价时拒单, 区分上市首日与一般缺数据
            if ctx.price_board.last_price(&order_book_id).is_none() {
                let listed_today = ctx
                    .instrument(&order_book_id)
                    .and_then(|i| i.listed_date)
                    .map_or(false, |d| d == trading_dt.date());
                let reason = if listed_today {
                    format!(
                        "Order Rejected: {} can not be traded on its listing date [{}]",
                        order_book_id,
                        trading_dt.date()
                    )
                } else {
                    missing_data_reason(&order_book_id)
                };
                order.mark_rejected(reason);
                continue;
            }

            let deal_price =
                match self
                    .deal_price_decider
                    .deal_price(ctx, &order_book_id, order.side)
                {
                    Some(price) => price,
                    None => {
                        order.mark_rejected(missing_data_reason(&order_book_id));
                        continue;
                    }
                };

            if order.order_type == OrderType::Limit {
                // 限价单价格未穿越参考价时保持等待, 本步无任何状态变化
                if let Some(limit_price) = order.price {
                    if order.side == OrderSide::Buy && limit_price < deal_price {
                        continue;
                    }
                    if order.side == OrderSide::Sell && limit_price > deal_price {
                        continue;
                    }
                }
            } else if self.price_limit {
                // 市价单触板直接拒单, 不会留到下一步重试
                if order.side == OrderSide::Buy
                    && ctx
                        .price_board
                        .limit_up(&order_book_id)
                        .map_or(false, |p| deal_price >= p)
                {
                    order.mark_rejected(format!(
                        "Order Rejected: {} reached the limit_up price",
                        order_book_id
                    ));
                    continue;
                }
                if order.side == OrderSide::Sell
                    && ctx
                        .price_board
                        .limit_down(&order_book_id)
                        .map_or(false, |p| deal_price <= p)
                {
                    order.mark_rejected(format!(
                        "Order Rejected: {} reached the limit_down price",
                        order_book_id
                    ));
                    continue;
                }
            }

            // 触板不成交: 订单原样保留. 限价单依赖此分支跨步等待
            if self.price_limit {
                let banded = match order.side {
                    OrderSide::Buy => ctx
                        .price_board
                        .limit_up(&order_book_id)
                        .map_or(false, |p| deal_price >= p),
                    OrderSide::Sell => ctx
                        .price_board
                        .limit_down(&order_book_id)
                        .map_or(false, |p| deal_price <= p),
                };
                if banded {
                    continue;
                }
            }

            let fill = if self.volume_limit {
                let bar = match ctx.bar(&order_book_id) {
                    Some(bar) => bar,
                    None => {
                        order.mark_rejected(missing_data_reason(&order_book_id));
                        continue;
                    }
                };
                let round_lot = ctx
                    .instrument(&order_book_id)
                    .map(|i| i.round_lot)
                    .filter(|lot| *lot > Decimal::ZERO)
                    .unwrap_or(Decimal::ONE);
                let capacity = (bar.volume * self.volume_percent).round()
                    - self.turnover.filled(&order_book_id);
                let capacity = (capacity / round_lot).floor() * round_lot;
                if capacity <= Decimal::ZERO {
                    if order.order_type == OrderType::Market {
                        order.mark_cancelled(format!(
                            "Order Cancelled: market order {} volume {} due to volume limit",
                            order_book_id, order.quantity
                        ));
                    }
                    continue;
                }
                order.unfilled_quantity().min(capacity)
            } else {
                order.unfilled_quantity()
            };

            let close_today_amount =
                account.close_today_amount(&order_book_id, fill, order.side);
            let price = self.slippage_model.trade_price(order.side, deal_price);

            let mut trade =
                Trade::from_order(order, calendar_dt, trading_dt, price, fill, close_today_amount);
            trade.commission = self.commission_model.commission(account.account_type, &trade);
            trade.tax = self.tax_model.tax(account.account_type, &trade);

            order.fill(&trade);
            self.turnover.add(&order_book_id, fill);

            ctx.publish(TradeEvent {
                order_book_id: order_book_id.clone(),
                account_type: account.account_type,
                trade,
            });

            // 市价单不跨步携带剩余量, 成交量不足的部分立即撤销
            if order.order_type == OrderType::Market && !order.unfilled_quantity().is_zero() {
                order.mark_cancelled(format!(
                    "Order Cancelled: market order {} volume {} exceeded current bar capacity, \
                     filled {} actually",
                    order_book_id, order.quantity, order.filled_quantity
                ));
            }
        }
    }
}

fn missing_data_reason(order_book_id: &str) -> String {
    format!(
        "Order Rejected: no market data for {} in current bar",
        order_book_id
    )
}
