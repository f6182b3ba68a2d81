//! Rolling-window share aggregation over monthly generation.

use crate::energy::extract::{FuelTechValues, MonthlyEnergy};
use crate::types::fuel_tech::{FuelCategory, FuelTechCategories};
use crate::types::period::Month;
use log::{info, warn};

/// Generation totals over some span, split by category.
///
/// `total` covers every technology present (storage discharge, imports and
/// the rest included), not just the two categorized buckets.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CategoryTotals {
    pub fossil: f64,
    pub renewable: f64,
    pub total: f64,
}

impl CategoryTotals {
    /// Folds one period's per-technology values into the totals.
    pub fn add_period(&mut self, values: &FuelTechValues, categories: &FuelTechCategories) {
        for (fuel_tech, value) in values {
            self.total += value;
            match categories.category(fuel_tech) {
                FuelCategory::Fossil => self.fossil += value,
                FuelCategory::Renewable => self.renewable += value,
                FuelCategory::Other => {}
            }
        }
    }

    /// Percentage shares of total generation, or `None` when there was no
    /// generation to take a share of.
    pub fn shares(&self) -> Option<CategoryShares> {
        if self.total > 0.0 {
            Some(CategoryShares {
                fossil: 100.0 * self.fossil / self.total,
                renewable: 100.0 * self.renewable / self.total,
            })
        } else {
            None
        }
    }
}

/// Fossil and renewable percentages of total generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShares {
    pub fossil: f64,
    pub renewable: f64,
}

/// One rolling-window result: the window's last month and its shares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingShare {
    pub month: Month,
    pub shares: CategoryShares,
}

/// Computes trailing `window_size`-month shares for every full window.
///
/// Windows slide positionally over the months present in `energy`, ascending;
/// each result is labeled with its window's last month. Fewer months than
/// `window_size` yields an empty list. A window with zero total generation
/// produces no result and is logged as a data-quality warning; the output
/// length is the contract downstream consumers rely on, so nothing is
/// substituted in its place.
pub fn rolling_shares(
    energy: &MonthlyEnergy,
    window_size: usize,
    categories: &FuelTechCategories,
) -> Vec<RollingShare> {
    if window_size == 0 {
        return Vec::new();
    }
    let months: Vec<(&Month, &FuelTechValues)> = energy.iter().collect();
    if months.len() < window_size {
        warn!(
            "Not enough monthly data for a {window_size}-month window, found {} months",
            months.len()
        );
        return Vec::new();
    }
    if let (Some(&(first, _)), Some(&(last, _))) = (months.first(), months.last()) {
        info!("Found energy data for {} months from {first} to {last}", months.len());
    }

    let mut shares = Vec::new();
    for window in months.windows(window_size) {
        let Some(&(month, _)) = window.last() else {
            continue;
        };
        let mut totals = CategoryTotals::default();
        for &(_, values) in window {
            totals.add_period(values, categories);
        }
        match totals.shares() {
            Some(window_shares) => shares.push(RollingShare {
                month: *month,
                shares: window_shares,
            }),
            None => warn!("No generation recorded in the {window_size} months to {month}, skipping"),
        }
    }
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn energy_from(rows: &[(Month, &[(&str, f64)])]) -> MonthlyEnergy {
        let mut energy = MonthlyEnergy::new();
        for (month, values) in rows {
            let entry = energy.entry(*month).or_default();
            for (fuel_tech, value) in *values {
                entry.insert(fuel_tech.to_string(), *value);
            }
        }
        energy
    }

    #[test]
    fn test_share_arithmetic_over_one_window() {
        let energy = energy_from(&[
            (
                Month::new(1, 2023),
                &[("coal_black", 60.0), ("wind", 30.0), ("battery_discharging", 10.0)],
            ),
            (
                Month::new(2, 2023),
                &[("coal_black", 60.0), ("wind", 30.0), ("battery_discharging", 10.0)],
            ),
        ]);

        let shares = rolling_shares(&energy, 2, &FuelTechCategories::default());
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].month, Month::new(2, 2023));
        assert!((shares[0].shares.fossil - 60.0).abs() < 1e-9);
        assert!((shares[0].shares.renewable - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_result_per_full_window() {
        let rows: Vec<(Month, &[(&str, f64)])> = (0..15)
            .map(|i| (Month::new(1, 2020).months_after(i), [("wind", 10.0)].as_slice()))
            .collect();
        let energy = energy_from(&rows);

        let shares = rolling_shares(&energy, 12, &FuelTechCategories::default());
        assert_eq!(shares.len(), 4);
        let labels: Vec<Month> = shares.iter().map(|s| s.month).collect();
        assert_eq!(
            labels,
            vec![
                Month::new(12, 2020),
                Month::new(1, 2021),
                Month::new(2, 2021),
                Month::new(3, 2021)
            ]
        );
    }

    #[test]
    fn test_too_few_months_yields_empty_result() {
        let rows: Vec<(Month, &[(&str, f64)])> = (0..11)
            .map(|i| (Month::new(1, 2020).months_after(i), [("wind", 10.0)].as_slice()))
            .collect();
        let energy = energy_from(&rows);

        assert!(rolling_shares(&energy, 12, &FuelTechCategories::default()).is_empty());
        assert!(rolling_shares(&MonthlyEnergy::new(), 12, &FuelTechCategories::default()).is_empty());
    }

    #[test]
    fn test_zero_total_window_is_skipped() {
        let energy = energy_from(&[
            (Month::new(1, 2023), &[("wind", 10.0)]),
            (Month::new(2, 2023), &[("wind", 0.0)]),
            (Month::new(3, 2023), &[("wind", 10.0)]),
        ]);

        let shares = rolling_shares(&energy, 1, &FuelTechCategories::default());
        let labels: Vec<Month> = shares.iter().map(|s| s.month).collect();
        assert_eq!(labels, vec![Month::new(1, 2023), Month::new(3, 2023)]);
    }

    #[test]
    fn test_shares_sum_to_at_most_one_hundred() {
        let with_other = energy_from(&[(
            Month::new(1, 2023),
            &[("coal_black", 50.0), ("wind", 30.0), ("imports", 20.0)],
        )]);
        let shares = rolling_shares(&with_other, 1, &FuelTechCategories::default());
        let sum = shares[0].shares.fossil + shares[0].shares.renewable;
        assert!(sum < 100.0);
        assert!((sum - 80.0).abs() < 1e-9);

        let categorized_only = energy_from(&[(
            Month::new(1, 2023),
            &[("coal_black", 50.0), ("wind", 30.0)],
        )]);
        let shares = rolling_shares(&categorized_only, 1, &FuelTechCategories::default());
        let sum = shares[0].shares.fossil + shares[0].shares.renewable;
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_uncategorized_tech_counts_toward_total_only() {
        let mut totals = CategoryTotals::default();
        let mut values = FuelTechValues::new();
        values.insert("exports".to_string(), 40.0);
        totals.add_period(&values, &FuelTechCategories::default());

        assert_eq!(totals.total, 40.0);
        assert_eq!(totals.fossil, 0.0);
        assert_eq!(totals.renewable, 0.0);
    }

    #[test]
    fn test_no_shares_without_generation() {
        assert!(CategoryTotals::default().shares().is_none());
    }
}
