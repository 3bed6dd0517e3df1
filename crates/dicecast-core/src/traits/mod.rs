pub mod forecaster;
pub mod round_feed;

pub use forecaster::IForecaster;
pub use round_feed::IRoundFeed;
