use rust_decimal::Decimal;

use crate::context::SimulationContext;
use crate::model::{MatchingType, OrderSide};

/// 参考成交价决策器
///
/// 构造时选定撮合方式, 之后对每张订单在每个时间步重新求值.
/// 无状态, 无副作用; 行情缺失时返回 None.
#[derive(Debug, Clone, Copy)]
pub struct DealPriceDecider {
    matching_type: MatchingType,
}

impl DealPriceDecider {
    pub fn new(matching_type: MatchingType) -> Self {
        DealPriceDecider { matching_type }
    }

    pub fn deal_price(
        &self,
        ctx: &SimulationContext,
        order_book_id: &str,
        side: OrderSide,
    ) -> Option<Decimal> {
        let board = &ctx.price_board;
        match self.matching_type {
            MatchingType::CurrentBarClose => ctx.bar(order_book_id).map(|b| b.close),
            MatchingType::NextBarOpen => ctx.bar(order_book_id).map(|b| b.open),
            MatchingType::NextTickLast => board.last_price(order_book_id),
            MatchingType::NextTickBestOwn => match side {
                OrderSide::Buy => board.best_bid(order_book_id),
                OrderSide::Sell => board.best_ask(order_book_id),
            },
            MatchingType::NextTickBestCounterparty => match side {
                OrderSide::Buy => board.best_ask(order_book_id),
                OrderSide::Sell => board.best_bid(order_book_id),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventManager;
    use crate::model::{Bar, Quote};

    fn quote_ctx() -> (EventManager, SimulationContext) {
        let manager = EventManager::new();
        let mut ctx = SimulationContext::new(manager.sender());
        ctx.set_bar(Bar::new(
            "000001.XSHE",
            Decimal::from(10),
            Decimal::from(11),
            Decimal::from(9),
            Decimal::new(105, 1),
            Decimal::from(10000),
        ));
        ctx.price_board.set_quote(
            "000001.XSHE",
            Quote {
                last: Some(Decimal::new(103, 1)),
                bid: Some(Decimal::new(102, 1)),
                ask: Some(Decimal::new(104, 1)),
                limit_up: Some(Decimal::from(11)),
                limit_down: Some(Decimal::from(9)),
            },
        );
        (manager, ctx)
    }

    #[test]
    fn test_bar_modes() {
        let (_manager, ctx) = quote_ctx();

        let close = DealPriceDecider::new(MatchingType::CurrentBarClose);
        assert_eq!(
            close.deal_price(&ctx, "000001.XSHE", OrderSide::Buy),
            Some(Decimal::new(105, 1))
        );

        let open = DealPriceDecider::new(MatchingType::NextBarOpen);
        assert_eq!(
            open.deal_price(&ctx, "000001.XSHE", OrderSide::Sell),
            Some(Decimal::from(10))
        );
    }

    #[test]
    fn test_tick_modes_pick_side_dependent_quote() {
        let (_manager, ctx) = quote_ctx();

        let own = DealPriceDecider::new(MatchingType::NextTickBestOwn);
        assert_eq!(
            own.deal_price(&ctx, "000001.XSHE", OrderSide::Buy),
            Some(Decimal::new(102, 1))
        );
        assert_eq!(
            own.deal_price(&ctx, "000001.XSHE", OrderSide::Sell),
            Some(Decimal::new(104, 1))
        );

        let counter = DealPriceDecider::new(MatchingType::NextTickBestCounterparty);
        assert_eq!(
            counter.deal_price(&ctx, "000001.XSHE", OrderSide::Buy),
            Some(Decimal::new(104, 1))
        );
        assert_eq!(
            counter.deal_price(&ctx, "000001.XSHE", OrderSide::Sell),
            Some(Decimal::new(102, 1))
        );
    }

    #[test]
    fn test_deal_price_is_pure() {
        let (_manager, ctx) = quote_ctx();
        let decider = DealPriceDecider::new(MatchingType::NextTickLast);

        let first = decider.deal_price(&ctx, "000001.XSHE", OrderSide::Buy);
        for _ in 0..10 {
            assert_eq!(decider.deal_price(&ctx, "000001.XSHE", OrderSide::Buy), first);
        }
    }

    #[test]
    fn test_missing_data_yields_none() {
        let (_manager, ctx) = quote_ctx();
        let decider = DealPriceDecider::new(MatchingType::CurrentBarClose);
        assert!(decider.deal_price(&ctx, "600000.XSHG", OrderSide::Buy).is_none());
    }
}
