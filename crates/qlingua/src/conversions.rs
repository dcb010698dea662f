//! Named conversions between the supported toolkits.

use qlingua_adapter_moment::{MomentAdapter, MomentCircuit};
use qlingua_adapter_register::{RegisterAdapter, RegisterCircuit};
use qlingua_adapter_timed::{TimedAdapter, TimedCircuit};
use qlingua_convert::{Adapter, ConvertResult, convert};

/// Conversions from and to every bundled toolkit, available on any adapter.
///
/// Blanket-implemented for all [`Adapter`]s; each method is the composition
/// through the canonical form.
pub trait ToolkitConversions: Adapter {
    fn from_moment(native: &MomentCircuit) -> ConvertResult<Self::Native>;
    fn to_moment(native: &Self::Native) -> ConvertResult<MomentCircuit>;
    fn from_register(native: &RegisterCircuit) -> ConvertResult<Self::Native>;
    fn to_register(native: &Self::Native) -> ConvertResult<RegisterCircuit>;
    fn from_timed(native: &TimedCircuit) -> ConvertResult<Self::Native>;
    fn to_timed(native: &Self::Native) -> ConvertResult<TimedCircuit>;
}

impl<A: Adapter> ToolkitConversions for A {
    fn from_moment(native: &MomentCircuit) -> ConvertResult<Self::Native> {
        convert::<MomentAdapter, A>(native)
    }

    fn to_moment(native: &Self::Native) -> ConvertResult<MomentCircuit> {
        convert::<A, MomentAdapter>(native)
    }

    fn from_register(native: &RegisterCircuit) -> ConvertResult<Self::Native> {
        convert::<RegisterAdapter, A>(native)
    }

    fn to_register(native: &Self::Native) -> ConvertResult<RegisterCircuit> {
        convert::<A, RegisterAdapter>(native)
    }

    fn from_timed(native: &TimedCircuit) -> ConvertResult<Self::Native> {
        convert::<TimedAdapter, A>(native)
    }

    fn to_timed(native: &Self::Native) -> ConvertResult<TimedCircuit> {
        convert::<A, TimedAdapter>(native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlingua_convert::Canonical;
    use qlingua_token::CanonicalCircuit;

    #[test]
    fn test_register_to_moment() {
        let mut register = RegisterCircuit::new(2);
        register.h(1).unwrap();
        register.cx(1, 0).unwrap();

        let moment = MomentAdapter::from_register(&register).unwrap();
        let canonical = Canonical::from_moment(&moment).unwrap();
        assert_eq!(canonical.tokens(), ["H(0)", "CX(0, 1)"]);
        assert_eq!(RegisterAdapter::from_moment(&moment).unwrap(), register);
    }

    #[test]
    fn test_timed_angles_survive_register() {
        let canonical = CanonicalCircuit::from_tokens(["RY(0.5)(0)"]);
        let timed = Canonical::to_timed(&canonical).unwrap();
        let register = TimedAdapter::to_register(&timed).unwrap();
        assert_eq!(
            register.instructions()[0].gate,
            qlingua_adapter_register::RegisterGate::Ry { theta: 0.5 }
        );
    }
}
