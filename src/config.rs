use rust_decimal::Decimal;

use crate::error::SimBrokerError;
use crate::model::MatchingType;

/// 撮合配置
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// 参考成交价的选取方式
    pub matching_type: MatchingType,
    /// 佣金倍率
    pub commission_multiplier: Decimal,
    /// 滑点比例 (按比例作用于参考成交价)
    pub slippage: Decimal,
    /// 单根K线最大可成交量占比, (0, 1]
    pub volume_percent: Decimal,
    /// 是否启用涨跌停限制
    pub price_limit: bool,
    /// 是否启用成交量限制
    pub volume_limit: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            matching_type: MatchingType::CurrentBarClose,
            commission_multiplier: Decimal::ONE,
            slippage: Decimal::ZERO,
            volume_percent: Decimal::new(25, 2),
            price_limit: true,
            volume_limit: true,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimBrokerError> {
        if self.volume_percent <= Decimal::ZERO || self.volume_percent > Decimal::ONE {
            return Err(SimBrokerError::ConfigError(format!(
                "volume_percent {} must be in (0, 1]",
                self.volume_percent
            )));
        }
        if self.slippage < Decimal::ZERO {
            return Err(SimBrokerError::ConfigError(format!(
                "slippage {} must be non-negative",
                self.slippage
            )));
        }
        if self.commission_multiplier < Decimal::ZERO {
            return Err(SimBrokerError::ConfigError(format!(
                "commission_multiplier {} must be non-negative",
                self.commission_multiplier
            )));
        }
        Ok(())
    }
}
