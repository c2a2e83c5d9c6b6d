pub(in crate)
use {
    ::core::{
        cmp::Ordering,
        fmt,
    },
    crate::{
        body::{
            Body,
            Step,
        },
        error::{
            ResumeError,
            Result,
        },
        generator::{
            Generator,
            GeneratorState,
            YieldOutcome,
        },
        label::Label,
        position::{
            Position,
            Suspension,
        },
    },
};
