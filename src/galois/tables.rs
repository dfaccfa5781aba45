//! Discrete-log lookup tables for fast multiplication and division

use super::field::FieldInner;
use crate::config::FieldConfig;
use crate::error::{GfError, Result};
use log::{debug, trace, warn};
use rayon::prelude::*;

/// Below this order the primitive search is always sequential
const PARALLEL_SEARCH_THRESHOLD: u64 = 1 << 12;

/// Log/antilog tables keyed by canonical element index
///
/// `antilog[i]` is the index of `α^i` for `i` in `[0, q-2]`; `log` maps an
/// index back to its exponent. `log[0]` holds a sentinel and is never read.
pub(crate) struct LogTables {
    log: Vec<u32>,
    antilog: Vec<u32>,
    primitive: u64,
}

impl LogTables {
    /// Tabulate the powers of the configured primitive element, or of the
    /// first one in canonical order when none is configured
    pub(crate) fn build(field: &FieldInner, config: &FieldConfig) -> Result<Self> {
        let order = field.order();
        let primitive = match &config.primitive_element {
            Some(coefs) => checked_primitive(field, coefs)?,
            None => find_primitive(field, config)
                .ok_or(GfError::NoPrimitiveElementFound { order })?,
        };

        debug!(
            "Primitive element of GF({}^{}) has index {}",
            field.characteristic(),
            field.degree(),
            primitive
        );

        let count = (order - 1) as usize;
        let mut log = vec![u32::MAX; order as usize];
        let mut antilog = Vec::with_capacity(count);

        let alpha = field.coefficients_of(primitive);
        let mut power = field.one();
        for l in 0..count {
            let index = field.index_of(&power);
            log[index as usize] = l as u32;
            antilog.push(index as u32);
            power = field.mul_direct(&power, &alpha);
        }

        Ok(Self {
            log,
            antilog,
            primitive,
        })
    }

    #[inline]
    pub(crate) fn primitive_index(&self) -> u64 {
        self.primitive
    }

    #[inline]
    fn limit(&self) -> usize {
        self.antilog.len()
    }

    #[inline]
    pub(crate) fn log_of(&self, index: u64) -> u64 {
        self.log[index as usize] as u64
    }

    #[inline]
    pub(crate) fn antilog_index(&self, exponent: u64) -> u64 {
        self.antilog[(exponent % self.limit() as u64) as usize] as u64
    }

    /// Index of `a·b` for nonzero `a`, `b`
    #[inline]
    pub(crate) fn mul_index(&self, a: u64, b: u64) -> u64 {
        let log_sum = (self.log[a as usize] as usize + self.log[b as usize] as usize) % self.limit();
        self.antilog[log_sum] as u64
    }

    /// Index of `a/b` for nonzero `a`, `b`
    #[inline]
    pub(crate) fn div_index(&self, a: u64, b: u64) -> u64 {
        let log_diff =
            (self.log[a as usize] as usize + self.limit() - self.log[b as usize] as usize)
                % self.limit();
        self.antilog[log_diff] as u64
    }

    /// Index of `a^exp` for nonzero `a`
    #[inline]
    pub(crate) fn pow_index(&self, a: u64, exp: u64) -> u64 {
        let log_result =
            (self.log[a as usize] as u128 * exp as u128) % self.limit() as u128;
        self.antilog[log_result as usize] as u64
    }
}

/// Canonical index of a caller-supplied generator
fn checked_primitive(field: &FieldInner, coefs: &[u32]) -> Result<u64> {
    let p = field.characteristic();
    if coefs.len() > field.degree() {
        return Err(GfError::TooManyCoefficients {
            got: coefs.len(),
            degree: field.degree(),
        });
    }
    if let Some(&c) = coefs.iter().find(|&&c| c >= p) {
        return Err(GfError::OutOfRangeCoefficient {
            coefficient: c as i64,
            characteristic: p,
        });
    }

    let mut alpha = field.zero();
    alpha[..coefs.len()].copy_from_slice(coefs);
    match field.multiplicative_order(&alpha) {
        Some(order) if order == field.order() - 1 => Ok(field.index_of(&alpha)),
        order => Err(GfError::InvalidFieldParameters(format!(
            "{:?} is not primitive: multiplicative order {:?}, expected {}",
            coefs,
            order,
            field.order() - 1
        ))),
    }
}

fn is_primitive(field: &FieldInner, index: u64) -> bool {
    let order = field.multiplicative_order(&field.coefficients_of(index));
    trace!("Candidate {} has multiplicative order {:?}", index, order);
    order == Some(field.order() - 1)
}

/// First index in `1..q` whose element generates the multiplicative group.
///
/// The parallel search uses `find_first`, so it picks the same element as the
/// sequential one.
fn find_primitive(field: &FieldInner, config: &FieldConfig) -> Option<u64> {
    let order = field.order();

    if !config.parallel || order < PARALLEL_SEARCH_THRESHOLD {
        return (1..order).find(|&i| is_primitive(field, i));
    }

    let search = || {
        (1..order)
            .into_par_iter()
            .find_first(|&i| is_primitive(field, i))
    };

    if config.threads == 0 {
        return search();
    }

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_threads())
        .build()
    {
        Ok(pool) => pool.install(search),
        Err(e) => {
            warn!(
                "Could not build a pool of {} threads ({}), using default",
                config.threads, e
            );
            search()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::FieldConfig;
    use crate::galois::Field;

    #[test]
    fn test_tables_are_mutual_inverses() {
        let field = Field::new(7, 2, Some(&[1, 0, 1]), true).unwrap();
        for elem in field.elements().skip(1) {
            let l = field.log(&elem).unwrap();
            assert!(l < field.order() - 1);
            assert_eq!(field.from_log(l).unwrap(), elem);
        }
    }

    #[test]
    fn test_prime_field_primitive_is_smallest_generator() {
        // 2 is the smallest generator of GF(11)*, 3 of GF(7)*
        let f11 = Field::prime(11).unwrap();
        assert_eq!(f11.primitive_element().unwrap(), f11.from_int(2));
        let f7 = Field::prime(7).unwrap();
        assert_eq!(f7.primitive_element().unwrap(), f7.from_int(3));
    }

    #[test]
    fn test_parallel_search_matches_sequential() {
        // Large enough to take the parallel path
        let parallel = FieldConfig {
            threads: 2,
            ..FieldConfig::default()
        };
        let a = Field::with_config(2, 13, Some(&[1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1]), &parallel)
            .unwrap();
        let b = Field::with_config(
            2,
            13,
            Some(&[1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
            &FieldConfig::sequential(),
        )
        .unwrap();
        assert_eq!(
            a.primitive_element().unwrap().index(),
            b.primitive_element().unwrap().index()
        );
    }

    #[test]
    fn test_reducible_poly_has_no_primitive() {
        // x^2 + 1 = (x + 1)^2 over GF(2)
        assert!(matches!(
            Field::new(2, 2, Some(&[1, 0, 1]), true),
            Err(crate::GfError::NoPrimitiveElementFound { order: 4 })
        ));
    }

    #[test]
    fn test_supplied_primitive_replaces_search() {
        // 6 generates GF(11)* but the search would pick 2
        let config = FieldConfig {
            primitive_element: Some(vec![6]),
            ..FieldConfig::default()
        };
        let f11 = Field::with_config(11, 1, None, &config).unwrap();
        assert_eq!(f11.primitive_element().unwrap(), f11.from_int(6));
        assert_eq!(f11.log(&f11.from_int(6)).unwrap(), 1);
        assert_eq!(f11.from_log(2).unwrap(), f11.from_int(3));
        for elem in f11.elements().skip(1) {
            assert_eq!(f11.from_log(f11.log(&elem).unwrap()).unwrap(), elem);
        }
    }

    #[test]
    fn test_supplied_primitive_is_checked() {
        // 3^5 = 1 in GF(11)
        let config = FieldConfig {
            primitive_element: Some(vec![3]),
            ..FieldConfig::default()
        };
        assert!(matches!(
            Field::with_config(11, 1, None, &config),
            Err(crate::GfError::InvalidFieldParameters(_))
        ));

        let config = FieldConfig {
            primitive_element: Some(vec![0]),
            ..FieldConfig::default()
        };
        assert!(Field::with_config(11, 1, None, &config).is_err());

        let config = FieldConfig {
            primitive_element: Some(vec![11]),
            ..FieldConfig::default()
        };
        assert!(matches!(
            Field::with_config(11, 1, None, &config),
            Err(crate::GfError::OutOfRangeCoefficient {
                coefficient: 11,
                characteristic: 11
            })
        ));
    }

    #[test]
    fn test_gf2_trivial_group() {
        let f2 = Field::prime(2).unwrap();
        assert_eq!(f2.primitive_element().unwrap(), f2.one());
        assert_eq!(f2.from_log(5).unwrap(), f2.one());
    }
}
