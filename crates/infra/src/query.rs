//! Translation of specification expressions into parameterized SQL.
//!
//! Expressions become `WHERE` fragments with Postgres-style `$n` placeholders;
//! operand values never appear in the SQL text, they travel in `params`.

use carrental_car_ads::{AvailableCarAdSpecification, CarAd, CarAdField};
use carrental_core::specification::included_expressions;
use carrental_core::{Expression, Operand, Specification};
use serde::Serialize;

use crate::config::ListingLimit;

/// Maps an entity field to the column that stores it.
pub trait SqlColumn: Copy {
    fn column(self) -> &'static str;
}

impl SqlColumn for CarAdField {
    fn column(self) -> &'static str {
        match self {
            CarAdField::ManufacturerName => "m.name",
            CarAdField::Model => "c.model",
            CarAdField::CategoryName => "cat.name",
            CarAdField::PricePerDay => "c.price_per_day",
            CarAdField::IsAvailable => "c.is_available",
            CarAdField::HasClimateControl => "c.has_climate_control",
            CarAdField::NumberOfSeats => "c.number_of_seats",
            CarAdField::TransmissionType => "c.transmission_type",
        }
    }
}

/// A `WHERE` fragment and the values bound to its placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlCondition {
    pub clause: String,
    pub params: Vec<Operand>,
}

/// A complete statement ready to be executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<Operand>,
}

/// Render one expression with placeholders starting at `$1`.
pub fn to_sql_condition<F: SqlColumn>(expression: &Expression<F>) -> SqlCondition {
    let mut params = Vec::new();
    let clause = render(expression, &mut params);
    SqlCondition { clause, params }
}

fn render<F: SqlColumn>(expression: &Expression<F>, params: &mut Vec<Operand>) -> String {
    match expression {
        Expression::Compare {
            field,
            comparison,
            operand,
        } => {
            let placeholder = bind(params, operand.clone());
            format!("{} {} {placeholder}", field.column(), comparison.symbol())
        }
        Expression::ContainsIgnoreCase { field, needle } => {
            let placeholder = bind(params, Operand::Text(needle.clone()));
            format!("POSITION(LOWER({placeholder}) IN LOWER({})) > 0", field.column())
        }
        Expression::And(left, right) => {
            let left = render(left, params);
            let right = render(right, params);
            format!("({left} AND {right})")
        }
        Expression::Or(left, right) => {
            let left = render(left, params);
            let right = render(right, params);
            format!("({left} OR {right})")
        }
        Expression::Not(inner) => format!("NOT ({})", render(inner, params)),
    }
}

fn bind(params: &mut Vec<Operand>, operand: Operand) -> String {
    params.push(operand);
    format!("${}", params.len())
}

const LISTING_SELECT: &str = "SELECT c.id, m.name AS manufacturer, c.model, c.image_url, \
cat.name AS category, c.price_per_day \
FROM car_ads c \
JOIN manufacturers m ON m.id = c.manufacturer_id \
JOIN categories cat ON cat.id = c.category_id";

/// Listing statement: available ads, narrowed by every included specification
/// in the order given. `LIMIT` is emitted only when `limit` is set.
pub fn car_ad_listing_query(
    specifications: &[&dyn Specification<CarAd>],
    limit: ListingLimit,
) -> SqlQuery {
    let mut params = Vec::new();
    let mut conditions = vec![render(
        &AvailableCarAdSpecification.to_expression(),
        &mut params,
    )];

    for expression in included_expressions(specifications) {
        conditions.push(render(&expression, &mut params));
    }

    let mut sql = format!("{LISTING_SELECT} WHERE {}", conditions.join(" AND "));
    if let Some(limit) = limit.get() {
        sql.push_str(&format!(" LIMIT {limit}"));
    }

    SqlQuery { sql, params }
}

/// Count of every available ad, whatever filters a search applies.
pub fn car_ad_total_query() -> SqlQuery {
    let condition = to_sql_condition(&AvailableCarAdSpecification.to_expression());

    SqlQuery {
        sql: format!("SELECT COUNT(*) FROM car_ads c WHERE {}", condition.clause),
        params: condition.params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carrental_car_ads::{CarAdByManufacturerSpecification, CarAdByPricePerDaySpecification};
    use carrental_core::Comparison;

    #[test]
    fn comparison_binds_its_operand() {
        let condition = to_sql_condition(&Expression::compare(
            CarAdField::NumberOfSeats,
            Comparison::Ge,
            4,
        ));

        assert_eq!(condition.clause, "c.number_of_seats >= $1");
        assert_eq!(condition.params, vec![Operand::Int(4)]);
    }

    #[test]
    fn nested_expressions_number_placeholders_left_to_right() {
        let expression = Expression::equals(CarAdField::HasClimateControl, true)
            .or(Expression::contains_ignore_case(CarAdField::Model, "golf").negate());

        let condition = to_sql_condition(&expression);

        assert_eq!(
            condition.clause,
            "(c.has_climate_control = $1 OR NOT (POSITION(LOWER($2) IN LOWER(c.model)) > 0))"
        );
        assert_eq!(
            condition.params,
            vec![Operand::Bool(true), Operand::Text("golf".into())]
        );
    }

    #[test]
    fn listing_query_starts_from_availability() {
        let by_manufacturer = CarAdByManufacturerSpecification::new(Some("Audi".into()));
        let by_price = CarAdByPricePerDaySpecification::new(Some(50), Some(150));

        let query = car_ad_listing_query(&[&by_manufacturer, &by_price], ListingLimit::new(Some(10)));

        assert!(query.sql.starts_with("SELECT c.id, m.name AS manufacturer"));
        assert!(query.sql.ends_with(
            "WHERE c.is_available = $1 \
             AND POSITION(LOWER($2) IN LOWER(m.name)) > 0 \
             AND (c.price_per_day > $3 AND c.price_per_day < $4) LIMIT 10"
        ));
        assert_eq!(
            query.params,
            vec![
                Operand::Bool(true),
                Operand::Text("Audi".into()),
                Operand::Int(50),
                Operand::Int(150),
            ]
        );
    }

    #[test]
    fn excluded_specifications_add_no_condition() {
        let by_manufacturer = CarAdByManufacturerSpecification::new(None);

        let query = car_ad_listing_query(&[&by_manufacturer], ListingLimit::default());

        assert!(query.sql.ends_with("WHERE c.is_available = $1"));
        assert!(!query.sql.contains("LIMIT"));
        assert_eq!(query.params, vec![Operand::Bool(true)]);
    }

    #[test]
    fn total_query_ignores_search_filters() {
        let query = car_ad_total_query();

        assert_eq!(query.sql, "SELECT COUNT(*) FROM car_ads c WHERE c.is_available = $1");
        assert_eq!(query.params, vec![Operand::Bool(true)]);
    }
}
