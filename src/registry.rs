//! Conversion registry seam
//!
//! Real conversion logic lives outside this crate, behind [`ConvertRegistry`].
//! The adapter only ever asks two questions: can you convert this, and if so,
//! do it. Callers must guard `convert` with `supports`; calling `convert` for
//! an unsupported pair is outside the contract and implementations are free
//! to panic or return garbage.

use crate::output::{DisplayValue, OutputKind};

// =============================================================================
// ConvertRegistry
// =============================================================================

/// Pluggable value-to-output conversion.
pub trait ConvertRegistry {
    /// Whether a converter is registered for `value` to `kind`.
    fn supports(&self, value: &DisplayValue, kind: OutputKind) -> bool;

    /// Convert `value` to `kind`.
    ///
    /// Only defined when [`supports`](ConvertRegistry::supports) returned
    /// true for the same pair.
    fn convert(&self, value: DisplayValue, kind: OutputKind) -> DisplayValue;
}

// Registries are typically shared behind a reference.
impl<R: ConvertRegistry + ?Sized> ConvertRegistry for &R {
    fn supports(&self, value: &DisplayValue, kind: OutputKind) -> bool {
        (**self).supports(value, kind)
    }

    fn convert(&self, value: DisplayValue, kind: OutputKind) -> DisplayValue {
        (**self).convert(value, kind)
    }
}

// =============================================================================
// NoopRegistry
// =============================================================================

/// Registry with no converters registered.
///
/// Every `supports` query answers false, so the adapter's pass-through
/// fallback always applies. Useful as a default and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRegistry;

impl ConvertRegistry for NoopRegistry {
    fn supports(&self, _value: &DisplayValue, _kind: OutputKind) -> bool {
        false
    }

    fn convert(&self, value: DisplayValue, _kind: OutputKind) -> DisplayValue {
        value
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_supports_nothing() {
        let registry = NoopRegistry;
        let value = DisplayValue::text("x");
        assert!(!registry.supports(&value, OutputKind::Html));
        assert!(!registry.supports(&value, OutputKind::Notebook));
    }

    #[test]
    fn test_registry_by_reference() {
        fn takes_registry<R: ConvertRegistry>(r: R) -> bool {
            r.supports(&DisplayValue::text("x"), OutputKind::Html)
        }
        let registry = NoopRegistry;
        assert!(!takes_registry(&registry));
    }
}
