use super::error::ValidationError;
use super::outcome::Outcome;
use crate::Arbitrary;
use crate::Probability;
use crate::support::Support;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::Hash;

/// A normalized discrete distribution over outcomes of type `T`.
///
/// Masses are validated and normalized on construction: they are
/// non-negative, finite, and sum to 1.0. A mapping whose total mass is
/// zero collapses to the empty distribution. Instances are never
/// mutated afterwards; [`convolve`](Self::convolve) and
/// [`map`](Self::map) always build a fresh distribution.
#[derive(Clone, PartialEq)]
pub struct Distribution<T: Support> {
    masses: BTreeMap<T, Probability>,
}

impl<T: Support> Distribution<T> {
    /// The empty distribution.
    pub fn new() -> Self {
        Self {
            masses: BTreeMap::new(),
        }
    }
    /// Equal mass on every distinct outcome yielded.
    pub fn uniform(outcomes: impl IntoIterator<Item = T>) -> Self {
        Self::normalize(outcomes.into_iter().map(|x| (x, 1.)).collect())
    }
    /// All mass on a single outcome.
    pub fn point(outcome: T) -> Self {
        Self {
            masses: BTreeMap::from([(outcome, 1.)]),
        }
    }

    /// rejects negative and non-finite masses,
    /// then normalizes what remains.
    fn validated(masses: BTreeMap<T, Probability>) -> Result<Self, ValidationError> {
        masses.iter().try_for_each(|(x, &p)| Self::check(x, p))?;
        Ok(Self::normalize(masses))
    }
    fn check(x: &T, p: Probability) -> Result<(), ValidationError> {
        if p < 0. {
            Err(ValidationError::negative(x, p))
        } else if !p.is_finite() {
            Err(ValidationError::non_finite(x, p))
        } else {
            Ok(())
        }
    }
    /// masses must already be finite and non-negative.
    fn normalize(mut masses: BTreeMap<T, Probability>) -> Self {
        let mut total = masses.values().sum::<Probability>();
        if total.is_infinite() {
            let max = Self::largest(masses.values().copied());
            masses.values_mut().for_each(|p| *p /= max);
            total = masses.values().sum();
        }
        if total > 0. {
            masses.values_mut().for_each(|p| *p /= total);
            Self { masses }
        } else {
            if !masses.is_empty() {
                log::warn!(
                    "total mass of {} outcomes is zero, collapsing to empty distribution",
                    masses.len()
                );
            }
            Self::new()
        }
    }
    /// finite masses can still overflow when summed.
    /// dividing through by the largest keeps every ratio and caps the sum at the count.
    fn largest(masses: impl Iterator<Item = Probability>) -> Probability {
        masses.fold(0., Probability::max)
    }
    /// sums masses of colliding outcomes.
    /// the first key inserted is the one kept.
    fn accumulate(
        mut acc: BTreeMap<T, Probability>,
        (x, p): (T, Probability),
    ) -> BTreeMap<T, Probability> {
        *acc.entry(x).or_insert(0.) += p;
        acc
    }

    /// Distribution of `combine(a, b)` for independent `a ~ self`, `b ~ other`.
    ///
    /// Every pair of outcomes contributes the product of their masses to
    /// the combined outcome; pairs that combine to the same outcome have
    /// their masses summed. The result is normalized independently.
    pub fn convolve<U, V, F>(&self, other: &Distribution<U>, combine: F) -> Distribution<V>
    where
        U: Support,
        V: Support,
        F: Fn(&T, &U) -> V,
    {
        log::debug!(
            "convolving {} x {} outcomes",
            self.masses.len(),
            other.masses.len()
        );
        let ref combine = combine;
        let masses = self
            .masses
            .iter()
            .flat_map(|(a, p)| {
                other
                    .masses
                    .iter()
                    .map(move |(b, q)| (combine(a, b), p * q))
            })
            .fold(BTreeMap::new(), Distribution::accumulate);
        Distribution::normalize(masses)
    }

    /// Distribution of `transform(a)` for `a ~ self`.
    ///
    /// Outcomes that become equal under `transform` merge their masses.
    pub fn map<U, F>(&self, transform: F) -> Distribution<U>
    where
        U: Support,
        F: Fn(&T) -> U,
    {
        log::trace!("mapping {} outcomes", self.masses.len());
        let masses = self
            .masses
            .iter()
            .map(|(a, p)| (transform(a), *p))
            .fold(BTreeMap::new(), Distribution::accumulate);
        Distribution::normalize(masses)
    }

    /// Asserts the distribution is non-empty, non-negative, and sums to 1
    /// within [`crate::ENSURE_TOLERANCE`].
    pub fn ensure(&self) -> Result<(), ValidationError> {
        if self.masses.is_empty() {
            return Err(ValidationError::Empty);
        }
        if let Some((x, &p)) = self.masses.iter().find(|&(_, &p)| p < 0.) {
            return Err(ValidationError::negative(x, p));
        }
        let total = self.total();
        if (total - 1.).abs() > crate::ENSURE_TOLERANCE {
            return Err(ValidationError::Unnormalized { total });
        }
        Ok(())
    }

    /// mass at `x`, 0 if `x` is not an outcome.
    pub fn density(&self, x: &T) -> Probability {
        self.masses.get(x).copied().unwrap_or(0.)
    }
    /// outcomes in ascending order.
    pub fn support(&self) -> impl Iterator<Item = &T> {
        self.masses.keys()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&T, Probability)> {
        self.masses.iter().map(|(x, p)| (x, *p))
    }
    pub fn total(&self) -> Probability {
        self.masses.values().sum()
    }
    pub fn len(&self) -> usize {
        self.masses.len()
    }
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

impl<T: Support> Default for Distribution<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Support> TryFrom<BTreeMap<T, Probability>> for Distribution<T> {
    type Error = ValidationError;
    fn try_from(masses: BTreeMap<T, Probability>) -> Result<Self, Self::Error> {
        Self::validated(masses)
    }
}

impl<T: Support + Hash> TryFrom<HashMap<T, Probability>> for Distribution<T> {
    type Error = ValidationError;
    fn try_from(masses: HashMap<T, Probability>) -> Result<Self, Self::Error> {
        Self::validated(masses.into_iter().collect())
    }
}

/// association lists may repeat an outcome; repeated masses are summed.
impl<T: Support> TryFrom<Vec<(T, Probability)>> for Distribution<T> {
    type Error = ValidationError;
    fn try_from(pairs: Vec<(T, Probability)>) -> Result<Self, Self::Error> {
        pairs.iter().try_for_each(|(x, p)| Self::check(x, *p))?;
        let scale = match pairs.iter().map(|(_, p)| p).sum::<Probability>() {
            total if total.is_infinite() => Self::largest(pairs.iter().map(|(_, p)| *p)),
            _ => 1.,
        };
        Ok(Self::normalize(
            pairs
                .into_iter()
                .map(|(x, p)| (x, p / scale))
                .fold(BTreeMap::new(), Self::accumulate),
        ))
    }
}

impl<'a, T: Support> IntoIterator for &'a Distribution<T> {
    type Item = (&'a T, &'a Probability);
    type IntoIter = std::collections::btree_map::Iter<'a, T, Probability>;
    fn into_iter(self) -> Self::IntoIter {
        self.masses.iter()
    }
}

impl Arbitrary for Distribution<Outcome> {
    fn random() -> Self {
        let n = rand::random_range(1..=8);
        Self::normalize(
            (0..n)
                .map(|_| Outcome::Int(rand::random_range(-10..=10)))
                .map(|x| (x, rand::random_range(0.01..1.)))
                .fold(BTreeMap::new(), Self::accumulate),
        )
    }
}

impl<T: Support + std::fmt::Display> std::fmt::Display for Distribution<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Distribution(")?;
        for (i, (x, p)) in self.masses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:.*}", x, crate::DISPLAY_PRECISION, p)?;
        }
        write!(f, ")")
    }
}

impl<T: Support> std::fmt::Debug for Distribution<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Distribution({:?})", self.masses)
    }
}
