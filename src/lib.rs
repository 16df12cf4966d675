//! 回测撮合核心
//!
//! 将回测中的未完成订单按历史行情 (K线或盘口快照) 转化为成交,
//! 并施加涨跌停, 成交量限制, 滑点, 佣金与税费等微观结构约束.
//! 由外部模拟时钟逐步驱动: 每个时间步先 [`Matcher::update`],
//! 再 [`Matcher::match_orders`]; 订单之间互不撮合, 全部针对
//! 单一参考价成交.

pub mod account;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod execution;
pub mod model;

pub use account::{Account, AccountType, Position, Positions};
pub use config::SimulationConfig;
pub use context::SimulationContext;
pub use error::SimBrokerError;
pub use event::{EventManager, TradeEvent};
pub use execution::{
    CommissionModel, DealPriceDecider, Matcher, SlippageModel, TaxModel, TurnoverTracker,
};
pub use model::{
    Bar, Instrument, MatchingType, Order, OrderSide, OrderStatus, OrderType, PositionEffect,
    PriceBoard, Quote, Trade,
};
