pub mod commission;
pub mod matcher;
pub mod price;
pub mod slippage;
pub mod tax;
pub mod turnover;

pub use commission::{CommissionModel, RatioCommission};
pub use matcher::Matcher;
pub use price::DealPriceDecider;
pub use slippage::{FixedSlippage, PriceRatioSlippage, SlippageModel, ZeroSlippage};
pub use tax::{StampTax, TaxModel};
pub use turnover::TurnoverTracker;
