//! Top-philic dark matter mediator: widths, branching ratio and couplings
//!
//!
//! # Introduction (for the physicist)
//!
//! This small library explores the phenomenology of the non-resonant dark
//! matter model coupled to top quarks of arXiv:1407.7529 (JHEP01 (2015) 017).
//! A vector mediator V couples to the Standard Model through a flavour
//! changing top-up current (Lagrangian of eq. 2.25 with aL = 0 and aR = gSM)
//! and to a dark matter pair with gχL = gχR = gDM. The partial widths into
//! the visible (tū) and invisible (χχ̄) channels are given by eq. 3.1.
//!
//! The question it answers is how the total width and the invisible branching
//! ratio of the mediator change with the couplings, and conversely which
//! couplings a measured width and/or branching ratio calls for.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Everything is closed form. Kinematically forbidden configurations are not
//! errors: they produce NaN or infinities through plain IEEE-754 arithmetic,
//! which keeps mass scans going and lets the caller decide what a hole in a
//! grid means.
//!
//!
//! # Introduction (for the computer guy)
//!
//! The relations are pure functions of floating-point numbers, found in the
//! [`phase_space`], [`widths`] and [`inverse`] modules and re-exported here.
//! The [`vectorized`] module maps them over nalgebra arrays. On top of that,
//! [`Configuration`] parses a model point from text and [`ModelPoint`]
//! bundles one with its observables.

#![warn(missing_docs)]

pub mod config;
pub mod coupling;
pub mod inverse;
pub mod numeric;
pub mod phase_space;
pub mod vectorized;
pub mod widths;

pub use crate::{
    config::Configuration,
    coupling::ModelPoint,
    inverse::{g_dm_from_br, g_dm_from_br_width, g_dm_from_width, g_sm_from_br_width},
    numeric::Float,
    phase_space::{phi_inv, phi_vis, MT},
    widths::{branching_ratio, total_width, width_inv, width_vis},
};

/// We'll use eyre's type-erased result type throughout the library
pub type Result<T> = eyre::Result<T>;
