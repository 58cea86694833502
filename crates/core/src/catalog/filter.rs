use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Optional, independently combinable product filters. Absent fields impose
/// no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilterCriteria {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub category: Option<String>,
    pub keyword: Option<String>,
}

impl ProductFilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.category.is_none()
            && self.keyword.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if product.category.as_str() != category {
                return false;
            }
        }

        if let Some(keyword) = &self.keyword {
            let needle = keyword.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            if !in_name && !product.description.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }
}

/// Single pass over `products`, keeping catalog order.
pub fn filter_products<'a>(
    products: &'a [Product],
    criteria: &ProductFilterCriteria,
) -> Vec<&'a Product> {
    products.iter().filter(|product| criteria.matches(product)).collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{filter_products, ProductFilterCriteria};
    use crate::catalog::seed::seed_products;
    use crate::domain::product::Product;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|product| product.id.0).collect()
    }

    fn price(units: i64) -> Decimal {
        Decimal::new(units, 0)
    }

    #[test]
    fn empty_criteria_return_every_product_in_order() {
        let products = seed_products();
        let matched = filter_products(&products, &ProductFilterCriteria::default());

        assert_eq!(ids(&matched), (1..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let criteria = ProductFilterCriteria {
            keyword: Some("anything".to_string()),
            ..ProductFilterCriteria::default()
        };

        assert!(filter_products(&[], &criteria).is_empty());
        assert!(filter_products(&[], &ProductFilterCriteria::default()).is_empty());
    }

    #[test]
    fn min_price_is_inclusive_lower_bound() {
        let products = seed_products();
        let criteria =
            ProductFilterCriteria { min_price: Some(price(100)), ..ProductFilterCriteria::default() };

        let matched = filter_products(&products, &criteria);
        assert_eq!(ids(&matched), vec![4, 5, 6, 19, 24]);

        let exact = ProductFilterCriteria {
            min_price: Some(Decimal::new(49999, 2)),
            ..ProductFilterCriteria::default()
        };
        assert_eq!(ids(&filter_products(&products, &exact)), vec![24]);
    }

    #[test]
    fn max_price_is_inclusive_upper_bound() {
        let products = seed_products();
        let criteria =
            ProductFilterCriteria { max_price: Some(price(20)), ..ProductFilterCriteria::default() };

        assert_eq!(ids(&filter_products(&products, &criteria)), vec![7, 29]);

        let exact = ProductFilterCriteria {
            max_price: Some(Decimal::new(1699, 2)),
            ..ProductFilterCriteria::default()
        };
        assert_eq!(ids(&filter_products(&products, &exact)), vec![29]);
    }

    #[test]
    fn category_selects_exact_matches_only() {
        let products = seed_products();
        let electronics = ProductFilterCriteria {
            category: Some("electronics".to_string()),
            ..ProductFilterCriteria::default()
        };
        assert_eq!(ids(&filter_products(&products, &electronics)), (1..=8).collect::<Vec<u32>>());

        let miscased = ProductFilterCriteria {
            category: Some("Electronics".to_string()),
            ..ProductFilterCriteria::default()
        };
        assert!(filter_products(&products, &miscased).is_empty());
    }

    #[test]
    fn keyword_matches_name_or_description_ignoring_case() {
        let products = seed_products();

        for keyword in ["wireless", "WIRELESS", "WiReLeSs"] {
            let criteria = ProductFilterCriteria {
                keyword: Some(keyword.to_string()),
                ..ProductFilterCriteria::default()
            };
            let matched = filter_products(&products, &criteria);

            assert_eq!(ids(&matched), vec![1, 4, 8]);
            assert!(matched.iter().all(|product| {
                product.name.to_lowercase().contains("wireless")
                    || product.description.to_lowercase().contains("wireless")
            }));
        }

        let description_only = ProductFilterCriteria {
            keyword: Some("kangaroo".to_string()),
            ..ProductFilterCriteria::default()
        };
        assert_eq!(ids(&filter_products(&products, &description_only)), vec![11]);
    }

    #[test]
    fn combined_criteria_intersect_single_filters() {
        let products = seed_products();
        let by_category = ProductFilterCriteria {
            category: Some("electronics".to_string()),
            ..ProductFilterCriteria::default()
        };
        let by_price =
            ProductFilterCriteria { max_price: Some(price(50)), ..ProductFilterCriteria::default() };
        let combined = ProductFilterCriteria {
            category: by_category.category.clone(),
            max_price: by_price.max_price,
            ..ProductFilterCriteria::default()
        };

        let category_ids = ids(&filter_products(&products, &by_category));
        let price_ids = ids(&filter_products(&products, &by_price));
        let expected: Vec<u32> =
            category_ids.into_iter().filter(|id| price_ids.contains(id)).collect();

        assert_eq!(ids(&filter_products(&products, &combined)), expected);
        assert_eq!(expected, vec![1, 3, 7, 8]);
    }

    #[test]
    fn excluded_products_violate_some_criterion() {
        let products = seed_products();
        let criteria = ProductFilterCriteria {
            min_price: Some(price(25)),
            max_price: Some(price(50)),
            category: Some("home".to_string()),
            keyword: Some("set".to_string()),
        };

        let matched = filter_products(&products, &criteria);
        assert_eq!(ids(&matched), vec![20]);

        for product in &products {
            let included = matched.iter().any(|candidate| candidate.id == product.id);
            assert_eq!(included, criteria.matches(product));
        }
    }

    #[test]
    fn repeated_filtering_is_idempotent() {
        let products = seed_products();
        let criteria = ProductFilterCriteria {
            keyword: Some("cotton".to_string()),
            ..ProductFilterCriteria::default()
        };

        let first = ids(&filter_products(&products, &criteria));
        let second = ids(&filter_products(&products, &criteria));
        assert_eq!(first, second);
        assert_eq!(first, vec![9, 22]);
    }

    #[test]
    fn is_empty_reflects_any_active_filter() {
        assert!(ProductFilterCriteria::default().is_empty());
        assert!(!ProductFilterCriteria {
            keyword: Some(String::new()),
            ..ProductFilterCriteria::default()
        }
        .is_empty());
    }
}
