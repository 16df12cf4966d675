use serde::{Deserialize, Serialize};

/// 买卖方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

/// 订单类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// 限价单
    Limit,
    /// 市价单
    Market,
}

/// 开平方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionEffect {
    Open,
    Close,
    CloseToday,
}

/// 订单状态
///
/// Open 是唯一非终态; 只有未完全成交的限价单会跨时间步保持 Open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Open,
    Filled,
    Cancelled,
    Rejected,
}

/// 撮合方式
///
/// 决定订单以哪个行情价格作为参考成交价
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchingType {
    /// 当前K线收盘价
    CurrentBarClose,
    /// 下一K线开盘价 (时间对齐由调用方保证)
    NextBarOpen,
    /// 最新成交价
    NextTickLast,
    /// 本方最优报价: 买单取买一, 卖单取卖一
    NextTickBestOwn,
    /// 对手方最优报价: 买单取卖一, 卖单取买一
    NextTickBestCounterparty,
}
