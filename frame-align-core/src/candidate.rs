use arrayvec::ArrayVec;
use nalgebra::Vector3;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The six bijections of `{0, 1, 2}`, in their fixed enumeration order.
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Per-slot signs, positive enumerated before negative.
const SIGNS: [f64; 2] = [1.0, -1.0];

/// The number of distinct axis candidates: 6 permutations × 2³ sign vectors.
pub const CANDIDATE_COUNT: usize = 48;

/// One discrete axis-reassignment hypothesis: a permutation choosing which
/// tracked axis feeds each output slot, and a sign flip per output slot.
///
/// The 48 candidates cover every way two right- or left-handed axis-aligned
/// frames can be wired together. The continuous part of the mapping (per-axis
/// scale and offset) is fit separately for each candidate; see
/// [`AxisScaleOffset`](crate::AxisScaleOffset).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AxisCandidate {
    /// Which tracked axis feeds each output slot.
    pub permutation: [usize; 3],
    /// The sign applied to each output slot, `+1.0` or `-1.0`.
    pub signs: [f64; 3],
}

impl AxisCandidate {
    /// All 48 candidates as a precomputed, indexable list.
    ///
    /// The order is fixed and reproducible: permutation outermost (identity
    /// first), then the `x`, `y`, and `z` signs from outermost to innermost with
    /// positive before negative. Candidate selection breaks ties by keeping the
    /// earliest candidate, so this order is load-bearing and must not change.
    pub fn all() -> ArrayVec<AxisCandidate, CANDIDATE_COUNT> {
        let mut candidates = ArrayVec::new();
        for permutation in PERMUTATIONS {
            for sx in SIGNS {
                for sy in SIGNS {
                    for sz in SIGNS {
                        candidates.push(AxisCandidate {
                            permutation,
                            signs: [sx, sy, sz],
                        });
                    }
                }
            }
        }
        candidates
    }

    /// Applies the permutation and sign flips to raw components, producing the
    /// candidate-induced value: `output[i] = signs[i] * source[permutation[i]]`.
    ///
    /// This is used both for positions and for the imaginary components of
    /// orientation quaternions.
    pub fn induce(&self, source: Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.signs[0] * source[self.permutation[0]],
            self.signs[1] * source[self.permutation[1]],
            self.signs[2] * source[self.permutation[2]],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_is_stable() {
        let candidates = AxisCandidate::all();
        assert_eq!(candidates.len(), CANDIDATE_COUNT);
        // The first candidate is the identity wiring.
        assert_eq!(candidates[0].permutation, [0, 1, 2]);
        assert_eq!(candidates[0].signs, [1.0, 1.0, 1.0]);
        // The innermost loop is the z sign.
        assert_eq!(candidates[1].signs, [1.0, 1.0, -1.0]);
        // Eight sign vectors per permutation.
        assert_eq!(candidates[8].permutation, [0, 2, 1]);
        assert_eq!(candidates[8].signs, [1.0, 1.0, 1.0]);
        assert_eq!(candidates[47].permutation, [2, 1, 0]);
        assert_eq!(candidates[47].signs, [-1.0, -1.0, -1.0]);
    }

    #[test]
    fn enumeration_is_distinct() {
        let candidates = AxisCandidate::all();
        for (i, a) in candidates.iter().enumerate() {
            for b in candidates.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn induce_rewires_components() {
        let candidate = AxisCandidate {
            permutation: [2, 0, 1],
            signs: [1.0, -1.0, 1.0],
        };
        let induced = candidate.induce(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(induced, Vector3::new(3.0, -1.0, 2.0));
    }
}
