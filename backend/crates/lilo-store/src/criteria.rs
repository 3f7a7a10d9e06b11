/// A compiled, conjunctive filter evaluated against each candidate entity
/// during a store scan.
pub trait Criteria<T>: Send + Sync {
    fn matches(&self, entity: &T) -> bool;
}

/// Matches every entity
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl<T> Criteria<T> for NoFilter {
    fn matches(&self, _entity: &T) -> bool {
        true
    }
}

/// Equality on an optional scalar criterion
pub(crate) fn eq_or_any<V: PartialEq + ?Sized>(wanted: Option<&V>, actual: &V) -> bool {
    wanted.is_none_or(|w| w == actual)
}

/// Membership of an optional criterion in a multi-valued attribute
pub(crate) fn contains_or_any(wanted: Option<&str>, actual: &[String]) -> bool {
    wanted.is_none_or(|w| actual.iter().any(|a| a == w))
}
