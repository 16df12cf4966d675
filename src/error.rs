use thiserror::Error;

/// 撮合模块错误
///
/// 业务规则类的失败 (缺数据, 触板, 量不足) 不走 Result,
/// 而是转为订单终态并附带原因; 这里只覆盖构造期的配置错误.
#[derive(Debug, Error)]
pub enum SimBrokerError {
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}
