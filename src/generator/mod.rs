//! Synthetic dataset generator
//!
//! Builds the demo dataset the dashboard runs against: a fixed reference set
//! of dealers and products, generated customers bound round-robin to the
//! dealers, and a transaction table where each customer buys a handful of
//! products across a few categories. Dates are weighted toward recent
//! quarters; a slice of Q4 2025 data deliberately falls outside the trailing
//! twelve-month window.
//!
//! Generation is seeded, so a fixed seed always reproduces the same store.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{
    Category, Customer, CustomerId, Dealer, DealerId, Money, Product, ProductId, ReportPeriod,
    Transaction,
};
use crate::store::SalesStore;

/// Default RNG seed for the demo dataset
pub const DEFAULT_SEED: u64 = 42;

/// Number of generated customers (spread evenly across the dealers)
const CUSTOMER_COUNT: u32 = 30;

/// Quarter weights for transaction dates: (quarter, year, percent)
const QUARTER_WEIGHTS: [(u8, i32, u32); 5] = [
    (4, 2024, 10),
    (1, 2025, 20),
    (2, 2025, 30),
    (3, 2025, 30),
    (4, 2025, 10),
];

/// Sale amounts are uniform between $100.00 and $50,000.00
const MIN_AMOUNT_CENTS: i64 = 10_000;
const MAX_AMOUNT_CENTS: i64 = 5_000_000;

const NAME_PREFIXES: [&str; 12] = [
    "Prairie", "Cedar", "Willow", "Summit", "Harvest", "Meadow", "Redline", "Northfork",
    "Bluestem", "Granite", "Heartland", "Riverbend",
];

const NAME_MIDDLES: [&str; 8] = [
    "Valley", "Ridge", "Creek", "Plains", "Grove", "Field", "Acres", "Crossing",
];

const NAME_SUFFIXES: [&str; 7] = [
    "Farms", "Ag Services", "Cooperative", "Growers", "Agronomy", "Seed Co", "Partners",
];

/// The fixed dealer reference set
pub fn reference_dealers() -> Vec<Dealer> {
    vec![
        Dealer::new(DealerId::new(1), "Barrett"),
        Dealer::new(DealerId::new(2), "Landus"),
        Dealer::new(DealerId::new(3), "Big Yield"),
    ]
}

/// The fixed product catalog, grouped by category
pub fn reference_products() -> Vec<Product> {
    vec![
        // Adjuvants
        Product::new(ProductId::new(1), "Silwet Gold", Category::Adjuvants),
        // Biologicals
        Product::new(ProductId::new(2), "Brus", Category::Biologicals),
        Product::new(ProductId::new(3), "Extrasol", Category::Biologicals),
        Product::new(ProductId::new(4), "Clover Inoculant", Category::Biologicals),
        // Fungicide
        Product::new(ProductId::new(5), "Bluestone", Category::Fungicide),
        Product::new(ProductId::new(6), "Aroxy 250 SC", Category::Fungicide),
        Product::new(ProductId::new(7), "Benomyl", Category::Fungicide),
        Product::new(ProductId::new(8), "Brilliant SL", Category::Fungicide),
        Product::new(ProductId::new(9), "Evito C", Category::Fungicide),
        // Herbicide
        Product::new(ProductId::new(10), "Alachlore", Category::Herbicide),
        Product::new(ProductId::new(11), "Apmlify", Category::Herbicide),
        Product::new(ProductId::new(12), "Armour", Category::Herbicide),
        Product::new(ProductId::new(13), "Baseline 960", Category::Herbicide),
        Product::new(ProductId::new(14), "Cheetah 600", Category::Herbicide),
        // Insecticide
        Product::new(ProductId::new(15), "Akito", Category::Insecticide),
        Product::new(ProductId::new(16), "Swat 150 SC", Category::Insecticide),
        Product::new(ProductId::new(17), "Oxadate", Category::Insecticide),
        Product::new(ProductId::new(18), "Desta 100 EC", Category::Insecticide),
        // Micronutrients
        Product::new(ProductId::new(19), "Biozyme", Category::Micronutrients),
        Product::new(ProductId::new(20), "Zincflo Plus", Category::Micronutrients),
    ]
}

/// Generate the full demo store from a seed
pub fn generate(seed: u64) -> SalesStore {
    let mut rng = StdRng::seed_from_u64(seed);

    let dealers = reference_dealers();
    let products = reference_products();
    let customers = generate_customers(&mut rng, &dealers);

    let mut transactions = Vec::new();

    for customer in &customers {
        // Each customer buys from 1-4 categories
        let category_count = rng.gen_range(1..=4usize);
        let selected_categories: Vec<Category> = Category::ALL
            .choose_multiple(&mut rng, category_count)
            .copied()
            .collect();

        for category in selected_categories {
            let category_products: Vec<&Product> =
                products.iter().filter(|p| p.category == category).collect();
            if category_products.is_empty() {
                continue;
            }

            // 1-3 products per category for this customer
            let product_count = rng.gen_range(1..=3usize).min(category_products.len());
            let selected_products: Vec<&&Product> = category_products
                .choose_multiple(&mut rng, product_count)
                .collect();

            for product in selected_products {
                // 1-5 transactions per product
                let txn_count = rng.gen_range(1..=5usize);
                for _ in 0..txn_count {
                    transactions.push(Transaction::new(
                        random_amount(&mut rng),
                        category,
                        Some(product.id),
                        customer.id,
                        customer.dealer_id,
                        random_date(&mut rng),
                    ));
                }
            }
        }
    }

    // Every product must be purchased at least once so breakdown reports
    // have data behind each catalog entry
    for product in &products {
        if !transactions.iter().any(|t| t.product_id == Some(product.id)) {
            let customer = customers
                .choose(&mut rng)
                .expect("customer table is never empty");
            transactions.push(Transaction::new(
                random_amount(&mut rng),
                product.category,
                Some(product.id),
                customer.id,
                customer.dealer_id,
                random_date(&mut rng),
            ));
        }
    }

    SalesStore::new(dealers, customers, products, transactions)
}

/// Generate customers with company-style names, bound to dealers round-robin
/// so each dealer gets an equal share
fn generate_customers(rng: &mut StdRng, dealers: &[Dealer]) -> Vec<Customer> {
    let mut names = std::collections::HashSet::new();
    let mut customers = Vec::with_capacity(CUSTOMER_COUNT as usize);

    for index in 0..CUSTOMER_COUNT {
        let name = loop {
            let candidate = format!(
                "{} {} {}",
                NAME_PREFIXES.choose(rng).unwrap(),
                NAME_MIDDLES.choose(rng).unwrap(),
                NAME_SUFFIXES.choose(rng).unwrap(),
            );
            if names.insert(candidate.clone()) {
                break candidate;
            }
        };

        let dealer = &dealers[index as usize % dealers.len()];
        customers.push(Customer::new(CustomerId::new(index + 1), name, dealer.id));
    }

    customers
}

fn random_amount(rng: &mut StdRng) -> Money {
    Money::from_cents(rng.gen_range(MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS))
}

/// Pick a quarter by weight, then a uniform date within it
fn random_date(rng: &mut StdRng) -> NaiveDate {
    let roll = rng.gen_range(0..100u32);
    let mut cumulative = 0;
    let mut chosen = QUARTER_WEIGHTS[QUARTER_WEIGHTS.len() - 1];
    for entry in QUARTER_WEIGHTS {
        cumulative += entry.2;
        if roll < cumulative {
            chosen = entry;
            break;
        }
    }

    let period = ReportPeriod::Quarter {
        quarter: chosen.0,
        year: chosen.1,
    };
    let start = period.start_date();
    let span = (period.end_date() - start).num_days();
    start + Duration::days(rng.gen_range(0..=span))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate(DEFAULT_SEED);
        let b = generate(DEFAULT_SEED);
        assert_eq!(a.transactions(), b.transactions());
        assert_eq!(a.customers(), b.customers());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(1);
        let b = generate(2);
        assert_ne!(a.transactions(), b.transactions());
    }

    #[test]
    fn test_generated_store_is_valid() {
        generate(DEFAULT_SEED).validate().unwrap();
    }

    #[test]
    fn test_reference_tables() {
        let store = generate(DEFAULT_SEED);
        assert_eq!(store.dealers().len(), 3);
        assert_eq!(store.products().len(), 20);
        assert_eq!(store.customers().len(), 30);

        // Customers split evenly across dealers
        for dealer in store.dealers() {
            let count = store
                .customers()
                .iter()
                .filter(|c| c.dealer_id == dealer.id)
                .count();
            assert_eq!(count, 10);
        }
    }

    #[test]
    fn test_every_product_has_sales() {
        let store = generate(DEFAULT_SEED);
        for product in store.products() {
            assert!(
                store
                    .transactions()
                    .iter()
                    .any(|t| t.product_id == Some(product.id)),
                "product {} has no transactions",
                product.name
            );
        }
    }

    #[test]
    fn test_dates_and_amounts_in_range() {
        let store = generate(DEFAULT_SEED);
        let earliest = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        let latest = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        for txn in store.transactions() {
            assert!(txn.date >= earliest && txn.date <= latest);
            assert!(txn.amount.cents() >= MIN_AMOUNT_CENTS);
            assert!(txn.amount.cents() <= MAX_AMOUNT_CENTS);
        }
    }
}
