//! Cross-toolkit translation tests.
//!
//! Gates and phases may differ between representations of the same circuit,
//! but every representation must produce the same probability distribution.

use std::f64::consts::PI;

use qlingua::moment::MomentGate;
use qlingua::register::RegisterGate;
use qlingua::sim::{Simulate, same_distribution};
use qlingua::timed::{TimedGate, TimedGateName};
use qlingua::{
    Adapter, CanonicalCircuit, MomentAdapter, MomentCircuit, RegisterAdapter, RegisterCircuit,
    TimedAdapter, TimedCircuit, ToolkitConversions,
};

const TOLERANCE: f64 = 1e-10;

fn assert_same(a: &impl Simulate, b: &impl Simulate) {
    let pa = a.probabilities().expect("simulation failed");
    let pb = b.probabilities().expect("simulation failed");
    assert!(
        same_distribution(&pa, &pb, TOLERANCE),
        "distributions differ:\n{pa:?}\n{pb:?}"
    );
}

/// Every pairing of representations, directly and through each conversion.
fn check_all(
    canonical: &CanonicalCircuit,
    moment: &MomentCircuit,
    register: &RegisterCircuit,
    timed: &TimedCircuit,
) {
    // native vs canonical, and native round trips
    assert_same(moment, &MomentAdapter::from_canonical(canonical).unwrap());
    assert_same(moment, &MomentAdapter::from_canonical(&MomentAdapter::to_canonical(moment).unwrap()).unwrap());
    assert_same(register, &RegisterAdapter::from_canonical(canonical).unwrap());
    assert_same(register, &RegisterAdapter::from_canonical(&RegisterAdapter::to_canonical(register).unwrap()).unwrap());
    assert_same(timed, &TimedAdapter::from_canonical(canonical).unwrap());
    assert_same(timed, &TimedAdapter::from_canonical(&TimedAdapter::to_canonical(timed).unwrap()).unwrap());

    // natives against each other
    assert_same(moment, register);
    assert_same(moment, timed);
    assert_same(register, timed);

    // moment <-> register
    assert_same(moment, &RegisterAdapter::to_moment(register).unwrap());
    assert_same(moment, &MomentAdapter::from_register(register).unwrap());
    assert_same(&RegisterAdapter::from_moment(moment).unwrap(), register);
    assert_same(&MomentAdapter::to_register(moment).unwrap(), register);
    assert_same(register, &RegisterAdapter::from_moment(&RegisterAdapter::to_moment(register).unwrap()).unwrap());
    assert_same(moment, &MomentAdapter::from_register(&MomentAdapter::to_register(moment).unwrap()).unwrap());

    // moment <-> timed
    assert_same(moment, &TimedAdapter::to_moment(timed).unwrap());
    assert_same(moment, &MomentAdapter::from_timed(timed).unwrap());
    assert_same(&TimedAdapter::from_moment(moment).unwrap(), timed);
    assert_same(&MomentAdapter::to_timed(moment).unwrap(), timed);
    assert_same(timed, &TimedAdapter::from_moment(&TimedAdapter::to_moment(timed).unwrap()).unwrap());
    assert_same(moment, &MomentAdapter::from_timed(&MomentAdapter::to_timed(moment).unwrap()).unwrap());

    // register <-> timed
    assert_same(register, &TimedAdapter::to_register(timed).unwrap());
    assert_same(register, &RegisterAdapter::from_timed(timed).unwrap());
    assert_same(&TimedAdapter::from_register(register).unwrap(), timed);
    assert_same(&RegisterAdapter::to_timed(register).unwrap(), timed);
    assert_same(timed, &TimedAdapter::from_register(&TimedAdapter::to_register(timed).unwrap()).unwrap());
    assert_same(register, &RegisterAdapter::from_timed(&RegisterAdapter::to_timed(register).unwrap()).unwrap());
}

#[test]
fn test_mixed_vocabulary_circuit() {
    let canonical = CanonicalCircuit::from_tokens([
        "H(0)", "H(1)", "CX(0, 1)", "CX(1, 0)", "CZ(2, 0)",
        "I(1)", "SWAP(0, 3)", "RY(PI)(1)", "X(2)", "S(0)",
        "Z(2)", "Y(3)", "RX(0.4*PI)(0)", "T(2)", "RZ(-0.3*PI)(2)",
        "CCX(0, 1, 2)",
    ]);

    let mut moment = MomentCircuit::new();
    moment.push(MomentGate::H, [0]).unwrap();
    moment.push(MomentGate::H, [1]).unwrap();
    moment.push(MomentGate::Cnot, [0, 1]).unwrap();
    moment.push(MomentGate::Cnot, [1, 0]).unwrap();
    moment.push(MomentGate::Cz, [2, 0]).unwrap();
    moment.push(MomentGate::I, [1]).unwrap();
    moment.push(MomentGate::Swap, [0, 3]).unwrap();
    moment.push(MomentGate::ry(PI), [1]).unwrap();
    moment.push(MomentGate::X, [2]).unwrap();
    moment.push(MomentGate::S, [0]).unwrap();
    moment.push(MomentGate::Z, [2]).unwrap();
    moment.push(MomentGate::Y, [3]).unwrap();
    moment.push(MomentGate::rx(0.4 * PI), [0]).unwrap();
    moment.push(MomentGate::T, [2]).unwrap();
    moment.push(MomentGate::rz(-0.3 * PI), [2]).unwrap();
    moment.push(MomentGate::Toffoli, [0, 1, 2]).unwrap();

    // the register toolkit numbers qubits from the other end
    let mut register = RegisterCircuit::new(4);
    register.h(3).unwrap();
    register.h(2).unwrap();
    register.cx(3, 2).unwrap();
    register.cx(2, 3).unwrap();
    register.append(RegisterGate::Cz, [1, 3]).unwrap();
    register.append(RegisterGate::Id, [2]).unwrap();
    register.append(RegisterGate::Swap, [3, 0]).unwrap();
    register.append(RegisterGate::Ry { theta: PI }, [2]).unwrap();
    register.x(1).unwrap();
    register.append(RegisterGate::S, [3]).unwrap();
    register.append(RegisterGate::Z, [1]).unwrap();
    register.append(RegisterGate::Y, [0]).unwrap();
    register.rx(0.4 * PI, 3).unwrap();
    register.append(RegisterGate::T, [1]).unwrap();
    register.append(RegisterGate::Rz { theta: -0.3 * PI }, [1]).unwrap();
    register.ccx(3, 2, 1).unwrap();

    // the timed toolkit halves rotation angles
    let mut timed = TimedCircuit::new();
    timed.h(0).unwrap();
    timed.h(1).unwrap();
    timed.cx(0, 1).unwrap();
    timed.cx(1, 0).unwrap();
    timed.add_gate(TimedGate::new(TimedGateName::CZ), [2, 0]).unwrap();
    timed.add_gate(TimedGate::new(TimedGateName::I), [1]).unwrap();
    timed.add_gate(TimedGate::new(TimedGateName::SWAP), [0, 3]).unwrap();
    timed.ry(1, PI / 2.0).unwrap();
    timed.add_gate(TimedGate::new(TimedGateName::X), [2]).unwrap();
    timed.add_gate(TimedGate::new(TimedGateName::S), [0]).unwrap();
    timed.add_gate(TimedGate::new(TimedGateName::Z), [2]).unwrap();
    timed.add_gate(TimedGate::new(TimedGateName::Y), [3]).unwrap();
    timed.rx(0, 0.2 * PI).unwrap();
    timed.add_gate(TimedGate::new(TimedGateName::T), [2]).unwrap();
    timed.rz(2, -0.15 * PI).unwrap();
    timed.add_gate(TimedGate::new(TimedGateName::CCX), [0, 1, 2]).unwrap();

    assert_same(&canonical, &moment);
    check_all(&canonical, &moment, &register, &timed);
}

#[test]
fn test_register_u_gates() {
    let mut register = RegisterCircuit::new(4);
    register.h(0).unwrap();
    register.h(2).unwrap();
    register.u1(PI / 6.0, 1).unwrap();
    register.u2(1.0, 2.0, 0).unwrap();
    register.ccx(1, 0, 3).unwrap();
    register.ccx(0, 1, 2).unwrap();
    register.u3(1.0, 2.0, 3.0, 1).unwrap();
    register.rx(PI / 3.0, 1).unwrap();
    register.u3(1.56, 1.24, 1.69, 2).unwrap();
    register.u2(1.2, 5.1, 1).unwrap();
    register.u1(6.542, 0).unwrap();

    let canonical = RegisterAdapter::to_canonical(&register).unwrap();
    let moment = MomentAdapter::from_canonical(&canonical).unwrap();
    let timed = TimedAdapter::from_canonical(&canonical).unwrap();

    check_all(&canonical, &moment, &register, &timed);
}

#[test]
fn test_measurements_are_ignored() {
    let canonical = CanonicalCircuit::from_tokens(["H(0)"]);

    let mut moment = MomentCircuit::new();
    moment.push(MomentGate::H, [0]).unwrap();
    moment.push(MomentGate::measure("m"), [0]).unwrap();
    assert_eq!(MomentAdapter::to_canonical(&moment).unwrap(), canonical);
    let moment = MomentAdapter::from_canonical(&MomentAdapter::to_canonical(&moment).unwrap()).unwrap();

    let mut register = RegisterCircuit::with_clbits(1, 1);
    register.h(0).unwrap();
    register.measure(0, 0).unwrap();
    assert_eq!(RegisterAdapter::to_canonical(&register).unwrap(), canonical);
    let register =
        RegisterAdapter::from_canonical(&RegisterAdapter::to_canonical(&register).unwrap()).unwrap();

    let mut timed = TimedCircuit::new();
    timed.h(0).unwrap();

    check_all(&canonical, &moment, &register, &timed);
}

#[test]
fn test_unknown_gate_aborts_every_adapter() {
    let canonical = CanonicalCircuit::from_tokens(["H(0)", "a(1, 2)"]);
    assert!(MomentAdapter::from_canonical(&canonical).unwrap_err().is_unknown_gate());
    assert!(RegisterAdapter::from_canonical(&canonical).unwrap_err().is_unknown_gate());
    assert!(TimedAdapter::from_canonical(&canonical).unwrap_err().is_unknown_gate());
}

#[test]
fn test_qubit_reversal_example() {
    let canonical = CanonicalCircuit::from_tokens(["H(0)", "CX(0, 1)"]);
    let register = RegisterAdapter::from_canonical(&canonical).unwrap();
    let instructions = register.instructions();
    assert_eq!(instructions[0].gate, RegisterGate::H);
    assert_eq!(instructions[0].qubits, vec![1]);
    assert_eq!(instructions[1].gate, RegisterGate::Cx);
    assert_eq!(instructions[1].qubits, vec![1, 0]);
}

#[test]
fn test_register_round_trip_shrinks_to_used_qubits() {
    let mut register = RegisterCircuit::new(5);
    register.h(3).unwrap();
    let canonical = RegisterAdapter::to_canonical(&register).unwrap();
    assert_eq!(canonical.tokens(), ["H(1)"]);
    let back = RegisterAdapter::from_canonical(&canonical).unwrap();
    assert_eq!(back.num_qubits(), 2);
    assert_eq!(back.instructions()[0].qubits, vec![0]);
}

#[test]
fn test_large_angles_survive_every_adapter() {
    for angle in [1e20, -3.5e25, 1.8446744073709552e19] {
        let canonical = CanonicalCircuit::from_tokens([format!("RX({angle:e})(0)")]);
        let trips = [
            MomentAdapter::to_canonical(&MomentAdapter::from_canonical(&canonical).unwrap()),
            RegisterAdapter::to_canonical(&RegisterAdapter::from_canonical(&canonical).unwrap()),
            TimedAdapter::to_canonical(&TimedAdapter::from_canonical(&canonical).unwrap()),
        ];
        for back in trips {
            let back = back.unwrap();
            let records = back.gates().expect("emitted tokens must parse");
            let relative = (records[0].params[0] - angle).abs() / angle.abs();
            assert!(relative < 1e-15, "{:?} vs {angle}", back.tokens());
        }
    }
}
