use super::dto::{PredictionInputs, PredictionRequest, SessionRandoms};

/// Merge the form state with the session's cached randoms into one record.
///
/// Total: empty multi-selects become empty lists and are left for the model to
/// accept or reject. Repeated selections are dropped, the order is kept.
pub fn assemble(inputs: &PredictionInputs, randoms: &SessionRandoms) -> PredictionRequest {
    PredictionRequest {
        store_ids: unique_in_order(inputs.store_ids.iter().copied()),
        product_category: inputs.product_category,
        promotion_count: inputs.promotion_count,
        cluster_ids: unique_in_order(inputs.cluster_ids.iter().copied()),
        days_of_week: unique_in_order(inputs.days_of_week.iter().map(|d| d.number())),
        sales_lag_1: randoms.sales_lag_1,
        sales_lag_2: randoms.sales_lag_2,
        rolling_mean: randoms.rolling_mean,
        rolling_std: randoms.rolling_std,
    }
}

fn unique_in_order<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut unique = Vec::new();
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}
