//! The adapter contract and the generic conversion built on it.

use qlingua_token::CanonicalCircuit;
use tracing::debug;

use crate::error::ConvertResult;

/// A bidirectional mapping between one toolkit's circuit object and the
/// canonical form.
///
/// An adapter knows only its own toolkit. Conversions between two toolkits
/// always pass through [`CanonicalCircuit`]; see [`convert`].
///
/// Implementations must:
/// - keep gate order (application order, front to back),
/// - drop measurements silently,
/// - fail with [`ConvertError::UnsupportedGate`](crate::ConvertError::UnsupportedGate)
///   on any native construct outside the canonical vocabulary.
pub trait Adapter {
    /// The toolkit's circuit type.
    type Native;

    /// Short name used in errors and logs.
    const NAME: &'static str;

    /// Convert a native circuit to canonical tokens.
    fn to_canonical(native: &Self::Native) -> ConvertResult<CanonicalCircuit>;

    /// Build a native circuit from canonical tokens.
    fn from_canonical(circuit: &CanonicalCircuit) -> ConvertResult<Self::Native>;
}

/// Convert a circuit from adapter `A`'s toolkit to adapter `B`'s.
///
/// Equivalent to `B::from_canonical(&A::to_canonical(native)?)`.
pub fn convert<A: Adapter, B: Adapter>(native: &A::Native) -> ConvertResult<B::Native> {
    let canonical = A::to_canonical(native)?;
    debug!(
        from = A::NAME,
        to = B::NAME,
        gates = canonical.len(),
        "converting through canonical form"
    );
    B::from_canonical(&canonical)
}

/// Derived conversions available on every adapter.
///
/// This trait is blanket-implemented for all [`Adapter`]s, so adapters cannot
/// override it: every derived conversion is exactly the composition through
/// the canonical form.
pub trait Conversions: Adapter {
    /// Build this toolkit's circuit from another adapter's circuit.
    fn from_adapter<S: Adapter>(native: &S::Native) -> ConvertResult<Self::Native>;

    /// Convert this toolkit's circuit into another adapter's circuit.
    fn to_adapter<T: Adapter>(native: &Self::Native) -> ConvertResult<T::Native>;
}

impl<A: Adapter> Conversions for A {
    fn from_adapter<S: Adapter>(native: &S::Native) -> ConvertResult<Self::Native> {
        convert::<S, A>(native)
    }

    fn to_adapter<T: Adapter>(native: &Self::Native) -> ConvertResult<T::Native> {
        convert::<A, T>(native)
    }
}

/// The identity adapter: its native type is the canonical circuit itself.
///
/// Both directions validate every token, so a conversion through
/// `Canonical` reports grammar errors the same way a toolkit adapter does.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonical;

impl Adapter for Canonical {
    type Native = CanonicalCircuit;
    const NAME: &'static str = "canonical";

    fn to_canonical(native: &CanonicalCircuit) -> ConvertResult<CanonicalCircuit> {
        native.validate()?;
        Ok(native.clone())
    }

    fn from_canonical(circuit: &CanonicalCircuit) -> ConvertResult<CanonicalCircuit> {
        circuit.validate()?;
        Ok(circuit.clone())
    }
}
