//! The compiled-in sales dataset every preprocessing run starts from.

use crate::dataset::{Dataset, Record};
use crate::fields;

/// Store locations appearing in the baseline, in first-seen order.
pub const LOCATIONS: [&str; 5] = ["New York", "Chicago", "San Francisco", "Miami", "Boston"];

/// Product category domain. The first seven appear in the baseline in this
/// first-seen order; `Jewelry` belongs to the domain but has no baseline rows.
pub const CATEGORIES: [&str; 8] = [
    "Electronics",
    "Groceries",
    "Apparel",
    "Home Goods",
    "Books",
    "Toys",
    "Tools",
    "Jewelry",
];

struct Sale {
    id: i64,
    location: &'static str,
    parent_name: &'static str,
    cost: f64,
    units_sold: i64,
    gross_profit: f64,
    margin_above_median: i64,
}

const fn sale(
    id: i64,
    location: &'static str,
    parent_name: &'static str,
    cost: f64,
    units_sold: i64,
    gross_profit: f64,
    margin_above_median: i64,
) -> Sale {
    Sale {
        id,
        location,
        parent_name,
        cost,
        units_sold,
        gross_profit,
        margin_above_median,
    }
}

const SALES: [Sale; 12] = [
    sale(1, "New York", "Electronics", 120.50, 10, 79.50, 1),
    sale(2, "Chicago", "Groceries", 35.10, 50, 15.40, 0),
    sale(3, "San Francisco", "Apparel", 75.00, 15, 45.00, 1),
    sale(4, "New York", "Home Goods", 210.00, 5, 90.00, 1),
    sale(5, "Chicago", "Electronics", 85.75, 20, 44.25, 1),
    sale(6, "Miami", "Groceries", 42.80, 40, 18.20, 0),
    sale(7, "Boston", "Books", 15.99, 30, 9.01, 0),
    sale(8, "San Francisco", "Electronics", 150.25, 8, 69.75, 1),
    sale(9, "New York", "Apparel", 55.50, 25, 34.50, 1),
    sale(10, "Miami", "Toys", 25.00, 60, 15.00, 0),
    sale(11, "Boston", "Tools", 65.00, 12, 25.00, 0),
    sale(12, "Chicago", "Home Goods", 180.00, 7, 80.00, 1),
];

impl Sale {
    fn to_record(&self) -> Record {
        Record::new()
            .with(fields::ID, self.id)
            .with(fields::LOCATION, self.location)
            .with(fields::PARENT_NAME, self.parent_name)
            .with(fields::COST, self.cost)
            .with(fields::UNITS_SOLD, self.units_sold)
            .with(fields::GROSS_PROFIT, self.gross_profit)
            .with(fields::MARGIN_ABOVE_MEDIAN, self.margin_above_median)
    }
}

/// The 12-record baseline, seven fields per record.
pub fn baseline_dataset() -> Dataset {
    SALES.iter().map(Sale::to_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn baseline_shape() {
        let dataset = baseline_dataset();
        assert_eq!(dataset.len(), 12);
        assert!(dataset.iter().all(|record| record.len() == 7));
        let first = dataset.first().expect("non-empty baseline");
        assert_eq!(
            first.field_names().collect::<Vec<_>>(),
            [
                "id",
                "location",
                "parent_name",
                "cost",
                "units_sold",
                "gross_profit",
                "margin_above_median"
            ]
        );
    }

    #[test]
    fn baseline_domains_match_constants() {
        let dataset = baseline_dataset();
        for record in &dataset {
            let location = record.get(fields::LOCATION).and_then(Value::as_str);
            assert!(location.is_some_and(|l| LOCATIONS.contains(&l)));
            let category = record.get(fields::PARENT_NAME).and_then(Value::as_str);
            assert!(category.is_some_and(|c| CATEGORIES.contains(&c)));
        }
    }
}
