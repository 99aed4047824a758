pub mod asset;
pub mod expense;
pub mod income;
pub mod ledger_expense;
pub mod monthly_budget;
pub mod task;

pub use asset::Asset;
pub use expense::Expense;
pub use income::Income;
pub use ledger_expense::LedgerExpense;
pub use monthly_budget::MonthlyBudget;
pub use task::Task;
