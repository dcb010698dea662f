//! Statevector simulation engine.

use num_complex::Complex64;
use std::fmt;

use crate::error::{SimError, SimResult};

/// Largest register the engine will allocate.
pub const MAX_QUBITS: usize = 24;

/// An elementary operation on bit positions of the state index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    I,
    X,
    Y,
    Z,
    H,
    /// `diag(1, e^{iθ})`.
    Phase(f64),
    Rx(f64),
    Ry(f64),
    Rz(f64),
    /// `U(θ, φ, λ)` in the usual three-angle convention.
    U(f64, f64, f64),
    /// Control first, then target.
    Cx,
    Cz,
    Swap,
    ISwap,
    /// Two controls, then target.
    Ccx,
}

impl Op {
    /// Number of bits the operation acts on.
    pub fn arity(self) -> usize {
        match self {
            Op::I
            | Op::X
            | Op::Y
            | Op::Z
            | Op::H
            | Op::Phase(_)
            | Op::Rx(_)
            | Op::Ry(_)
            | Op::Rz(_)
            | Op::U(..) => 1,
            Op::Cx | Op::Cz | Op::Swap | Op::ISwap => 2,
            Op::Ccx => 3,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::I => write!(f, "i"),
            Op::X => write!(f, "x"),
            Op::Y => write!(f, "y"),
            Op::Z => write!(f, "z"),
            Op::H => write!(f, "h"),
            Op::Phase(t) => write!(f, "p({t})"),
            Op::Rx(t) => write!(f, "rx({t})"),
            Op::Ry(t) => write!(f, "ry({t})"),
            Op::Rz(t) => write!(f, "rz({t})"),
            Op::U(t, p, l) => write!(f, "u({t}, {p}, {l})"),
            Op::Cx => write!(f, "cx"),
            Op::Cz => write!(f, "cz"),
            Op::Swap => write!(f, "swap"),
            Op::ISwap => write!(f, "iswap"),
            Op::Ccx => write!(f, "ccx"),
        }
    }
}

/// A statevector representing a quantum state.
///
/// Amplitude index bit `b` is the value of bit position `b`. How toolkit
/// qubits map to bit positions is the caller's choice; see
/// [`BitOrder`](crate::BitOrder).
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The raw amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurement probabilities, indexed like the amplitudes.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// `|⟨self|other⟩|²`: 1 when the states agree up to global phase.
    pub fn fidelity(&self, other: &Statevector) -> f64 {
        if self.num_qubits != other.num_qubits {
            return 0.0;
        }
        self.amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum::<Complex64>()
            .norm_sqr()
    }

    /// Apply an operation to the given bit positions.
    pub fn apply(&mut self, op: Op, bits: &[usize]) -> SimResult<()> {
        if bits.len() != op.arity() {
            return Err(SimError::ArityMismatch {
                op: op.to_string(),
                expected: op.arity(),
                got: bits.len(),
            });
        }
        for (i, &bit) in bits.iter().enumerate() {
            if bit >= self.num_qubits {
                return Err(SimError::QubitOutOfRange {
                    qubit: bit,
                    num_qubits: self.num_qubits,
                });
            }
            if bits[..i].contains(&bit) {
                return Err(SimError::DuplicateQubit {
                    op: op.to_string(),
                    qubit: bit,
                });
            }
        }

        match op {
            Op::I => {}
            Op::X => self.apply_x(bits[0]),
            Op::Y => self.apply_y(bits[0]),
            Op::Z => self.apply_z(bits[0]),
            Op::H => self.apply_h(bits[0]),
            Op::Phase(t) => self.apply_phase(bits[0], t),
            Op::Rx(t) => self.apply_rx(bits[0], t),
            Op::Ry(t) => self.apply_ry(bits[0], t),
            Op::Rz(t) => self.apply_rz(bits[0], t),
            Op::U(t, p, l) => self.apply_u(bits[0], t, p, l),
            Op::Cx => self.apply_cx(bits[0], bits[1]),
            Op::Cz => self.apply_cz(bits[0], bits[1]),
            Op::Swap => self.apply_swap(bits[0], bits[1]),
            Op::ISwap => self.apply_iswap(bits[0], bits[1]),
            Op::Ccx => self.apply_ccx(bits[0], bits[1], bits[2]),
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit kernels
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp = -*amp;
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == 0 {
                *amp *= phase_0;
            } else {
                *amp *= phase_1;
            }
        }
    }

    fn apply_u(&mut self, qubit: usize, theta: f64, phi: f64, lambda: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let e_il = Complex64::from_polar(1.0, lambda);
        let e_ip = Complex64::from_polar(1.0, phi);
        let e_ipl = Complex64::from_polar(1.0, phi + lambda);

        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - e_il * s * b;
                self.amplitudes[j] = e_ip * s * a + e_ipl * c * b;
            }
        }
    }

    // =========================================================================
    // Multi-qubit kernels
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let both = (1 << control) | (1 << target);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & both == both {
                *amp = -*amp;
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_iswap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_ccx(&mut self, c1: usize, c2: usize, target: usize) {
        let ctrl = (1 << c1) | (1 << c2);
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl == ctrl) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2).unwrap();
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
        assert!(sv.amplitudes()[1..].iter().all(|a| approx_eq(*a, Complex64::new(0.0, 0.0))));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2).unwrap();
        sv.apply(Op::H, &[0]).unwrap();
        sv.apply(Op::Cx, &[0, 1]).unwrap();

        let amps = sv.amplitudes();
        assert!(approx_eq(amps[0], Complex64::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(amps[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(amps[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(amps[3], Complex64::new(FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_toffoli_needs_both_controls() {
        let mut sv = Statevector::new(3).unwrap();
        sv.apply(Op::X, &[0]).unwrap();
        sv.apply(Op::Ccx, &[0, 1, 2]).unwrap();
        assert!((sv.probabilities()[0b001] - 1.0).abs() < 1e-12);

        sv.apply(Op::X, &[1]).unwrap();
        sv.apply(Op::Ccx, &[0, 1, 2]).unwrap();
        assert!((sv.probabilities()[0b111] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rx_pi_is_x_up_to_phase() {
        let mut a = Statevector::new(1).unwrap();
        a.apply(Op::Rx(PI), &[0]).unwrap();
        let mut b = Statevector::new(1).unwrap();
        b.apply(Op::X, &[0]).unwrap();
        assert!((a.fidelity(&b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_u_matches_rz_ry_rz() {
        let (theta, phi, lambda) = (0.7, -1.3, 2.1);
        let mut a = Statevector::new(1).unwrap();
        a.apply(Op::H, &[0]).unwrap();
        a.apply(Op::U(theta, phi, lambda), &[0]).unwrap();

        let mut b = Statevector::new(1).unwrap();
        b.apply(Op::H, &[0]).unwrap();
        b.apply(Op::Rz(lambda), &[0]).unwrap();
        b.apply(Op::Ry(theta), &[0]).unwrap();
        b.apply(Op::Rz(phi), &[0]).unwrap();
        assert!((a.fidelity(&b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_iswap_and_swap_move_population() {
        for op in [Op::Swap, Op::ISwap] {
            let mut sv = Statevector::new(2).unwrap();
            sv.apply(Op::X, &[0]).unwrap();
            sv.apply(op, &[0, 1]).unwrap();
            assert!((sv.probabilities()[0b10] - 1.0).abs() < 1e-12, "{op}");
        }
    }

    #[test]
    fn test_apply_rejects_bad_bits() {
        let mut sv = Statevector::new(2).unwrap();
        assert!(matches!(
            sv.apply(Op::X, &[2]),
            Err(SimError::QubitOutOfRange { qubit: 2, .. })
        ));
        assert!(matches!(
            sv.apply(Op::Cx, &[1, 1]),
            Err(SimError::DuplicateQubit { .. })
        ));
        assert!(matches!(
            sv.apply(Op::Cx, &[1]),
            Err(SimError::ArityMismatch { expected: 2, got: 1, .. })
        ));
        assert!(matches!(
            Statevector::new(MAX_QUBITS + 1),
            Err(SimError::TooManyQubits { .. })
        ));
    }
}
