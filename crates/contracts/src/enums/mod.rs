pub mod day_of_week;
pub mod product_category;

pub use day_of_week::DayOfWeek;
pub use product_category::ProductCategory;
