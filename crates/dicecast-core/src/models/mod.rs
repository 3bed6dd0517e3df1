pub mod category;
pub mod forecast;
pub mod ledger_entry;
pub mod predictor_kind;
pub mod round;

pub use category::Category;
pub use forecast::{Fallback, Forecast};
pub use ledger_entry::{LedgerEntry, PredictionRecord, Verdict};
pub use predictor_kind::PredictorKind;
pub use round::{Dice, RawRound, Round, RoundId};
