//! The crate prelude: reexport the most essential utilities so that blob
//! `use`-ing them should enable the most straight-forward usage.

pub use crate::{
    body::{
        Body,
        Step,
    },
    driver::Driver,
    error::ResumeError,
    gen_iter,
    generator::{
        Generator,
        GeneratorExt as _,
        GeneratorState,
        YieldOutcome,
    },
    Label, // both the trait and the derive
    position::Position,
};
