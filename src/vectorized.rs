//! Elementwise evaluation of the model relations over arrays
//!
//! Every argument may be either a scalar or a reference to an nalgebra
//! matrix (vectors included). Arguments are broadcast against each other the
//! numpy way: along each of the two axes, lengths must either agree or be 1,
//! and a length of 1 is stretched to the other one. A scalar behaves as a
//! 1x1 array. Crossing a column vector of branching ratios with a row vector
//! of widths thus yields the full grid of couplings. Each output element is
//! exactly what the scalar function returns for the corresponding inputs.
//!
//! Incompatible shapes are reported as errors since they are caller bugs.
//! Non finite elements are not: they carry the usual NaN semantics of the
//! scalar relations, and are only mentioned in a debug trace.

use crate::{inverse, numeric::Float, phase_space, widths, Result};

use eyre::ensure;
use nalgebra::{storage::RawStorage, DMatrix, Dim, Matrix};

/// Argument of a vectorized relation
pub trait Operand: Sync {
    /// Number of rows and columns, (1, 1) for a scalar
    fn shape(&self) -> (usize, usize);

    /// Value at a given position, which must lie within `shape()`
    fn at(&self, row: usize, col: usize) -> Float;
}
//
impl Operand for Float {
    fn shape(&self) -> (usize, usize) {
        (1, 1)
    }

    fn at(&self, _row: usize, _col: usize) -> Float {
        *self
    }
}
//
impl<'a, R, C, S> Operand for &'a Matrix<Float, R, C, S>
where
    R: Dim,
    C: Dim,
    S: RawStorage<Float, R, C>,
    Matrix<Float, R, C, S>: Sync,
{
    fn shape(&self) -> (usize, usize) {
        (**self).shape()
    }

    fn at(&self, row: usize, col: usize) -> Float {
        (**self)[(row, col)]
    }
}

/// Broadcast length of one axis, if the two lengths are compatible
fn broadcast_len(a: usize, b: usize) -> Option<usize> {
    match (a, b) {
        (a, b) if a == b => Some(a),
        (1, b) => Some(b),
        (a, 1) => Some(a),
        _ => None,
    }
}

/// Shape that a set of operand shapes broadcasts to
fn broadcast_shape(shapes: &[(usize, usize)]) -> Result<(usize, usize)> {
    let mut common = (1, 1);
    for &(rows, cols) in shapes {
        let merged = broadcast_len(common.0, rows).zip(broadcast_len(common.1, cols));
        ensure!(
            merged.is_some(),
            "Cannot broadcast a {}x{} array against a {}x{} array",
            rows,
            cols,
            common.0,
            common.1
        );
        common = merged.unwrap_or(common);
    }
    Ok(common)
}

/// Read an operand at a position of the broadcast shape
fn fetch(op: &impl Operand, row: usize, col: usize) -> Float {
    let (rows, cols) = op.shape();
    op.at(
        if rows == 1 { 0 } else { row },
        if cols == 1 { 0 } else { col },
    )
}

/// Evaluate `element` at every (row, column) position of the broadcast shape
fn evaluate(
    name: &'static str,
    shapes: &[(usize, usize)],
    element: impl Fn(usize, usize) -> Float + Send + Sync,
) -> Result<DMatrix<Float>> {
    let (nrows, ncols) = broadcast_shape(shapes)?;
    let len = nrows * ncols;

    // Storage is column-major, so the linear index walks down columns
    let at_index = |k: usize| element(k % nrows, k / nrows);
    #[cfg(not(feature = "multi-threading"))]
    let values: Vec<Float> = (0..len).map(at_index).collect();
    #[cfg(feature = "multi-threading")]
    let values: Vec<Float> = {
        use rayon::prelude::*;
        (0..len).into_par_iter().map(at_index).collect()
    };

    let non_finite = values.iter().filter(|x| !x.is_finite()).count();
    if non_finite > 0 {
        tracing::debug!(
            relation = name,
            non_finite,
            len,
            "Vectorized evaluation produced non-finite elements"
        );
    }

    Ok(DMatrix::from_vec(nrows, ncols, values))
}

/// Array form of [`phase_space::phi_inv`]
#[doc(alias = "PhiInv")]
pub fn phi_inv(m_dm: impl Operand, m_v: impl Operand) -> Result<DMatrix<Float>> {
    evaluate("phi_inv", &[m_dm.shape(), m_v.shape()], |i, j| {
        phase_space::phi_inv(fetch(&m_dm, i, j), fetch(&m_v, i, j))
    })
}

/// Array form of [`phase_space::phi_vis`]
#[doc(alias = "PhiVis")]
pub fn phi_vis(mt: impl Operand, m_v: impl Operand) -> Result<DMatrix<Float>> {
    evaluate("phi_vis", &[mt.shape(), m_v.shape()], |i, j| {
        phase_space::phi_vis(fetch(&mt, i, j), fetch(&m_v, i, j))
    })
}

/// Array form of [`widths::width_vis`]
#[doc(alias = "get_width_vis")]
pub fn width_vis(g_sm: impl Operand, m_v: impl Operand) -> Result<DMatrix<Float>> {
    evaluate("width_vis", &[g_sm.shape(), m_v.shape()], |i, j| {
        widths::width_vis(fetch(&g_sm, i, j), fetch(&m_v, i, j))
    })
}

/// Array form of [`widths::width_inv`]
#[doc(alias = "get_width_inv")]
pub fn width_inv(
    g_dm: impl Operand,
    m_v: impl Operand,
    m_dm: impl Operand,
) -> Result<DMatrix<Float>> {
    evaluate(
        "width_inv",
        &[g_dm.shape(), m_v.shape(), m_dm.shape()],
        |i, j| widths::width_inv(fetch(&g_dm, i, j), fetch(&m_v, i, j), fetch(&m_dm, i, j)),
    )
}

/// Array form of [`widths::total_width`]
#[doc(alias = "get_total_width")]
pub fn total_width(
    g_sm: impl Operand,
    g_dm: impl Operand,
    m_v: impl Operand,
    m_dm: impl Operand,
) -> Result<DMatrix<Float>> {
    evaluate(
        "total_width",
        &[g_sm.shape(), g_dm.shape(), m_v.shape(), m_dm.shape()],
        |i, j| {
            widths::total_width(
                fetch(&g_sm, i, j),
                fetch(&g_dm, i, j),
                fetch(&m_v, i, j),
                fetch(&m_dm, i, j),
            )
        },
    )
}

/// Array form of [`widths::branching_ratio`]
#[doc(alias = "get_BR")]
pub fn branching_ratio(
    g_sm: impl Operand,
    g_dm: impl Operand,
    m_v: impl Operand,
    m_dm: impl Operand,
) -> Result<DMatrix<Float>> {
    evaluate(
        "branching_ratio",
        &[g_sm.shape(), g_dm.shape(), m_v.shape(), m_dm.shape()],
        |i, j| {
            widths::branching_ratio(
                fetch(&g_sm, i, j),
                fetch(&g_dm, i, j),
                fetch(&m_v, i, j),
                fetch(&m_dm, i, j),
            )
        },
    )
}

/// Array form of [`inverse::g_sm_from_br_width`]
#[doc(alias = "get_gSM_from_BRwidth")]
pub fn g_sm_from_br_width(
    br: impl Operand,
    width: impl Operand,
    m_v: impl Operand,
    m_dm: impl Operand,
) -> Result<DMatrix<Float>> {
    evaluate(
        "g_sm_from_br_width",
        &[br.shape(), width.shape(), m_v.shape(), m_dm.shape()],
        |i, j| {
            inverse::g_sm_from_br_width(
                fetch(&br, i, j),
                fetch(&width, i, j),
                fetch(&m_v, i, j),
                fetch(&m_dm, i, j),
            )
        },
    )
}

/// Array form of [`inverse::g_dm_from_br_width`]
#[doc(alias = "get_gDM_from_BRwidth")]
pub fn g_dm_from_br_width(
    br: impl Operand,
    width: impl Operand,
    m_v: impl Operand,
    m_dm: impl Operand,
) -> Result<DMatrix<Float>> {
    evaluate(
        "g_dm_from_br_width",
        &[br.shape(), width.shape(), m_v.shape(), m_dm.shape()],
        |i, j| {
            inverse::g_dm_from_br_width(
                fetch(&br, i, j),
                fetch(&width, i, j),
                fetch(&m_v, i, j),
                fetch(&m_dm, i, j),
            )
        },
    )
}
