//! Variant identifiers and the parameters they stand for.
//!
//! A generated graph is named by a small integer "variant". A
//! [`VariantLookup`] turns that identifier into four integers: the first
//! seeds the generator, the last fixes the vertex count (`10 + p[3]`), and
//! the middle ones weight the scale coefficients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Base vertex count added to the last variant parameter.
pub const BASE_ORDER: i64 = 10;

/// The four integers derived from a variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantParams(pub [i64; 4]);

impl VariantParams {
    /// Seed for the deterministic generator (parameter 0).
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn seed(&self) -> u64 {
        self.0[0] as u64
    }

    /// Vertex count: `10 + parameter[3]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidOrder`] when the result is below one.
    pub fn order(&self) -> Result<usize, GraphError> {
        let order = BASE_ORDER.saturating_add(self.0[3]);
        usize::try_from(order)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or(GraphError::InvalidOrder(order))
    }

    /// Scalar multiplier `c[0] + Σ c[i] · p[i]` for `i ≥ 1`.
    ///
    /// Coefficients beyond the fourth are ignored; missing trailing
    /// coefficients contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingCoefficients`] when `coefficients` is
    /// empty and [`GraphError::InvalidScale`] when the result is negative,
    /// NaN or infinite.
    #[allow(clippy::cast_precision_loss)]
    pub fn scale(&self, coefficients: &[f64]) -> Result<f64, GraphError> {
        let (&base, weights) = coefficients
            .split_first()
            .ok_or(GraphError::MissingCoefficients)?;
        let mut k = base;
        for (c, &p) in weights.iter().zip(&self.0[1..]) {
            k = c.mul_add(p as f64, k);
        }
        if k.is_finite() && k >= 0.0 {
            Ok(k)
        } else {
            Err(GraphError::InvalidScale {
                scale: k.to_string(),
            })
        }
    }
}

/// Maps a variant identifier to its generation parameters.
pub trait VariantLookup {
    /// Parameters for `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVariant`] when the identifier is not
    /// recognized.
    fn params(&self, variant: u32) -> Result<VariantParams, GraphError>;
}

/// Default lookup for four-digit identifiers.
///
/// `abcd` maps to `[abcd, b, c, d]`: the whole identifier seeds the
/// generator and the trailing digits feed order and scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitVariants;

impl VariantLookup for DigitVariants {
    fn params(&self, variant: u32) -> Result<VariantParams, GraphError> {
        if !(1000..=9999).contains(&variant) {
            return Err(GraphError::UnknownVariant(variant));
        }
        let digit = |place: u32| i64::from(variant / place % 10);
        Ok(VariantParams([
            i64::from(variant),
            digit(100),
            digit(10),
            digit(1),
        ]))
    }
}

/// Explicit table of variants, usually loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantTable {
    entries: BTreeMap<u32, VariantParams>,
}

impl VariantTable {
    /// Build a table from `(identifier, parameters)` pairs.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (u32, [i64; 4])>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, params)| (id, VariantParams(params)))
                .collect(),
        }
    }

    /// Number of known variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no variants are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VariantLookup for VariantTable {
    fn params(&self, variant: u32) -> Result<VariantParams, GraphError> {
        self.entries
            .get(&variant)
            .copied()
            .ok_or(GraphError::UnknownVariant(variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_variants_split_identifier() {
        let params = DigitVariants.params(3213).expect("four digits");
        assert_eq!(params, VariantParams([3213, 2, 1, 3]));
        assert_eq!(params.seed(), 3213);
        assert_eq!(params.order().expect("positive"), 13);
    }

    #[test]
    fn digit_variants_reject_other_widths() {
        assert_eq!(DigitVariants.params(999), Err(GraphError::UnknownVariant(999)));
        assert_eq!(
            DigitVariants.params(10_000),
            Err(GraphError::UnknownVariant(10_000))
        );
    }

    #[test]
    fn order_must_be_positive() {
        assert_eq!(VariantParams([1, 0, 0, -10]).order(), Err(GraphError::InvalidOrder(0)));
        assert_eq!(VariantParams([1, 0, 0, -9]).order(), Ok(1));
    }

    #[test]
    fn scale_sums_weighted_parameters() {
        let params = VariantParams([3213, 2, 1, 3]);
        let k = params.scale(&[1.0, 0.5, -0.25, 2.0]).expect("coefficients");
        // 1.0 + 0.5*2 - 0.25*1 + 2.0*3
        assert!((k - 7.75).abs() < 1e-12, "k = {k}");
    }

    #[test]
    fn scale_tolerates_short_and_long_coefficient_lists() {
        let params = VariantParams([3213, 2, 1, 3]);
        assert!((params.scale(&[0.7]).expect("base only") - 0.7).abs() < 1e-12);
        let long = params
            .scale(&[0.0, 1.0, 1.0, 1.0, 100.0])
            .expect("extra coefficient ignored");
        assert!((long - 6.0).abs() < 1e-12);
    }

    #[test]
    fn scale_requires_base_coefficient() {
        assert_eq!(
            VariantParams([1, 1, 1, 1]).scale(&[]),
            Err(GraphError::MissingCoefficients)
        );
    }

    #[test]
    fn negative_scale_is_rejected() {
        let params = VariantParams([7, 0, 0, -8]);
        assert_eq!(
            params.scale(&[-1.0]),
            Err(GraphError::InvalidScale {
                scale: "-1".to_string()
            })
        );
        // c0 alone is fine, the weighted digits push it below zero.
        let digits = VariantParams([3213, 2, 1, 3]);
        assert!(digits.scale(&[0.5]).is_ok());
        assert!(digits.scale(&[0.5, -1.0]).is_err());
    }

    #[test]
    fn non_finite_scale_is_rejected() {
        let params = VariantParams([1, 1, 1, 1]);
        assert!(params.scale(&[f64::NAN]).is_err());
        assert!(params.scale(&[f64::INFINITY]).is_err());
        assert!(params.scale(&[0.0]).is_ok(), "zero scale gives an empty graph");
    }

    #[test]
    fn table_lookup() {
        let table = VariantTable::new([(7, [42, 1, 2, 0])]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.params(7), Ok(VariantParams([42, 1, 2, 0])));
        assert_eq!(table.params(8), Err(GraphError::UnknownVariant(8)));
    }
}
