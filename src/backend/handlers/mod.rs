pub mod assets;
pub mod auth;
pub mod dashboard;
pub mod expenses;
pub mod export;
pub mod ledger;
pub mod tasks;
