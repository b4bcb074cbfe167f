pub mod detect;
pub mod home;
pub mod metrics;
pub mod report;
pub mod test_data;
pub mod transactions;
