// Application layer: the wallet service and its read-side reports.
// Every client of the ledger goes through `WalletService`.

pub mod error;
pub mod reporting;
mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
