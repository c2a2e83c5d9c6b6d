#![doc = include_str!("../README.md")]

#![warn(
    future_incompatible,
    rust_2018_compatibility,
    missing_docs,
    clippy::cargo,
    clippy::pedantic,
)]
#![allow(
    clippy::must_use_candidate,
    clippy::needless_lifetimes,
)]
#![deny(
    unused_must_use,
)]
#![cfg_attr(feature = "better-docs",
    feature(doc_cfg),
)]

#![cfg_attr(not(feature = "std"),
    no_std,
)]

#[cfg(feature = "alloc")]
extern crate alloc;

// So that `#[derive(Label)]` expansions resolve within this crate too.
extern crate self as resumable;

#[path = "public_prelude.rs"]
pub
mod prelude;

#[macro_use]
mod utils;

pub
mod body;

pub
mod counter;

pub
mod driver;

pub
mod error;

pub
mod iter;

pub use self::generator::*;
mod generator;

pub use self::label::Label;
mod label;

pub use self::position::{Position, Suspension};
mod position;

pub use self::{
    body::{Body, Step},
    driver::Driver,
    error::ResumeError,
};

#[doc(hidden)] pub use ::core;
pub use ::resumable_proc_macros::Label;
