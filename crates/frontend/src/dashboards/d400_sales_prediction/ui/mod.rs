pub mod dashboard;
pub mod multi_select;

pub use dashboard::SalesPredictionDashboard;
pub use multi_select::MultiSelect;
