use crossbeam_channel::Sender;
use std::collections::HashMap;

use crate::event::TradeEvent;
use crate::model::{Bar, Instrument, PriceBoard};

/// 模拟环境上下文
///
/// 行情快照 (K线 + 价格板) 与标的信息的唯一入口, 由宿主每个时间步
/// 刷新后以只读引用传入撮合器. 不持有任何全局状态.
pub struct SimulationContext {
    pub bars: HashMap<String, Bar>,
    pub price_board: PriceBoard,
    pub instruments: HashMap<String, Instrument>,
    events: Sender<TradeEvent>,
}

impl SimulationContext {
    pub fn new(events: Sender<TradeEvent>) -> Self {
        SimulationContext {
            bars: HashMap::new(),
            price_board: PriceBoard::new(),
            instruments: HashMap::new(),
            events,
        }
    }

    pub fn add_instrument(&mut self, instrument: Instrument) {
        self.instruments
            .insert(instrument.order_book_id.clone(), instrument);
    }

    /// 写入当前K线, 同时以收盘价刷新价格板最新价
    pub fn set_bar(&mut self, bar: Bar) {
        self.price_board
            .set_last_price(&bar.order_book_id, bar.close);
        self.bars.insert(bar.order_book_id.clone(), bar);
    }

    pub fn bar(&self, order_book_id: &str) -> Option<&Bar> {
        self.bars.get(order_book_id)
    }

    pub fn instrument(&self, order_book_id: &str) -> Option<&Instrument> {
        self.instruments.get(order_book_id)
    }

    /// 广播成交事件; 接收端已关闭时仅记录告警
    pub fn publish(&self, event: TradeEvent) {
        if self.events.send(event).is_err() {
            log::warn!("trade event receiver dropped, event discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_set_bar_refreshes_last_price() {
        let manager = crate::event::EventManager::new();
        let mut ctx = SimulationContext::new(manager.sender());

        ctx.set_bar(Bar::new(
            "000001.XSHE",
            Decimal::from(10),
            Decimal::from(11),
            Decimal::from(9),
            Decimal::new(105, 1),
            Decimal::from(10000),
        ));

        assert_eq!(
            ctx.price_board.last_price("000001.XSHE"),
            Some(Decimal::new(105, 1))
        );
        assert!(ctx.bar("000001.XSHE").is_some());
    }
}
