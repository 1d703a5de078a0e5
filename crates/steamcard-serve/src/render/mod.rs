//! Card rendering.
//!
//! Two surfaces share the same derived data: [`card`] renders the page with
//! maud markup and inline CSS, [`svg`] lays the card out with fixed geometry
//! for the PNG and PDF exports. [`qr`] encodes the profile link for both.

pub mod card;
pub mod components;
pub mod qr;
pub mod svg;
