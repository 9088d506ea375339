//! Tabular view of a [`PredictionRequest`].
//!
//! Multi-valued fields become rows, single values broadcast to every row.
//! The model reads features of the first row.

use contracts::dashboards::d400_sales_prediction::PredictionRequest;
use contracts::enums::ProductCategory;

use super::error::ModelError;

/// A feature column the model artifact may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    StoreNbr,
    /// Ordinal of the category in the dropdown list
    Product,
    /// 1.0 when the record's category equals the given one
    ProductIs(ProductCategory),
    OnPromotion,
    Cluster,
    DayOfWeek,
    SalesLag1,
    SalesLag2,
    RollingMean,
    RollingStd,
}

impl Column {
    /// Parse a feature name of the artifact.
    /// `Product=<CODE>` selects the one-hot encoding of a category.
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(code) = name.strip_prefix("Product=") {
            return ProductCategory::from_code(code).map(Column::ProductIs);
        }
        match name {
            "store_nbr" => Some(Column::StoreNbr),
            "Product" => Some(Column::Product),
            "onpromotion" => Some(Column::OnPromotion),
            "cluster" => Some(Column::Cluster),
            "day_of_week" => Some(Column::DayOfWeek),
            "sales_lag_1" => Some(Column::SalesLag1),
            "sales_lag_2" => Some(Column::SalesLag2),
            "rolling_mean" => Some(Column::RollingMean),
            "rolling_std" => Some(Column::RollingStd),
            _ => None,
        }
    }
}

/// Record laid out as named columns of equal (or broadcastable) length
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    request: &'a PredictionRequest,
}

impl<'a> Frame<'a> {
    pub fn new(request: &'a PredictionRequest) -> Result<Self, ModelError> {
        let lengths = [
            ("store_nbr", request.store_ids.len()),
            ("Product", 1),
            ("onpromotion", 1),
            ("cluster", request.cluster_ids.len()),
            ("day_of_week", request.days_of_week.len()),
            ("sales_lag_1", 1),
            ("sales_lag_2", 1),
            ("rolling_mean", 1),
            ("rolling_std", 1),
        ];

        if let Some((column, _)) = lengths.iter().find(|(_, len)| *len == 0) {
            return Err(ModelError::EmptyFrame { column: *column });
        }

        let rows = lengths.iter().map(|(_, len)| *len).max().unwrap_or(1);
        for (column, len) in lengths {
            if len != 1 && len != rows {
                return Err(ModelError::ShapeMismatch { column, len, rows });
            }
        }

        Ok(Self { request })
    }

    /// Feature vector of row `row` in the order of `columns`
    pub fn row(&self, row: usize, columns: &[Column]) -> Vec<f64> {
        columns.iter().map(|c| self.value(row, *c)).collect()
    }

    fn value(&self, row: usize, column: Column) -> f64 {
        let r = self.request;
        match column {
            Column::StoreNbr => pick(r.store_ids.iter().map(|v| *v as f64), row),
            Column::Product => r.product_category.ordinal() as f64,
            Column::ProductIs(category) => {
                if r.product_category == category {
                    1.0
                } else {
                    0.0
                }
            }
            Column::OnPromotion => r.promotion_count as f64,
            Column::Cluster => pick(r.cluster_ids.iter().map(|v| *v as f64), row),
            Column::DayOfWeek => pick(r.days_of_week.iter().map(|v| *v as f64), row),
            Column::SalesLag1 => r.sales_lag_1,
            Column::SalesLag2 => r.sales_lag_2,
            Column::RollingMean => r.rolling_mean,
            Column::RollingStd => r.rolling_std,
        }
    }
}

/// Broadcast single values, index multi-valued ones
fn pick(mut values: impl ExactSizeIterator<Item = f64>, row: usize) -> f64 {
    let index = if values.len() == 1 { 0 } else { row };
    values.nth(index).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PredictionRequest {
        PredictionRequest {
            store_ids: vec![1, 3],
            product_category: ProductCategory::Dairy,
            promotion_count: 50,
            cluster_ids: vec![2],
            days_of_week: vec![1, 2],
            sales_lag_1: 2.5,
            sales_lag_2: 3.1,
            rolling_mean: 1.0,
            rolling_std: 0.5,
        }
    }

    #[test]
    fn test_parse_feature_names() {
        assert_eq!(Column::parse("store_nbr"), Some(Column::StoreNbr));
        assert_eq!(
            Column::parse("Product=GROCERY I"),
            Some(Column::ProductIs(ProductCategory::GroceryI))
        );
        assert_eq!(Column::parse("Product=TOYS"), None);
        assert_eq!(Column::parse("date"), None);
    }

    #[test]
    fn test_rows_broadcast_single_values() {
        let request = request();
        let frame = Frame::new(&request).unwrap();

        let columns = [
            Column::StoreNbr,
            Column::Cluster,
            Column::DayOfWeek,
            Column::OnPromotion,
            Column::ProductIs(ProductCategory::Dairy),
            Column::Product,
            Column::SalesLag2,
        ];
        assert_eq!(frame.row(0, &columns), vec![1.0, 2.0, 1.0, 50.0, 1.0, 8.0, 3.1]);
        assert_eq!(frame.row(1, &columns), vec![3.0, 2.0, 2.0, 50.0, 1.0, 8.0, 3.1]);
    }

    #[test]
    fn test_first_row_follows_selection_order() {
        let mut request = request();
        request.store_ids = vec![54, 1];
        request.days_of_week = vec![7, 3];
        let frame = Frame::new(&request).unwrap();

        let columns = [Column::StoreNbr, Column::DayOfWeek];
        assert_eq!(frame.row(0, &columns), vec![54.0, 7.0]);
        assert_eq!(frame.row(1, &columns), vec![1.0, 3.0]);
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let mut request = request();
        request.cluster_ids.clear();
        let err = Frame::new(&request).unwrap_err();
        assert_eq!(err, ModelError::EmptyFrame { column: "cluster" });
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let mut request = request();
        request.days_of_week = vec![1, 2, 3];
        let err = Frame::new(&request).unwrap_err();
        assert_eq!(
            err,
            ModelError::ShapeMismatch {
                column: "store_nbr",
                len: 2,
                rows: 3
            }
        );
    }
}
