pub mod cost_estimator;
pub mod destination_filter;
pub mod expense_splitter;
