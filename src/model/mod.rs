pub mod instrument;
pub mod market_data;
pub mod order;
pub mod trade;
pub mod types;

pub use instrument::Instrument;
pub use market_data::{Bar, PriceBoard, Quote};
pub use order::Order;
pub use trade::Trade;
pub use types::{MatchingType, OrderSide, OrderStatus, OrderType, PositionEffect};
