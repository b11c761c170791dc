/// CSV export of the metric history.
pub mod export;
