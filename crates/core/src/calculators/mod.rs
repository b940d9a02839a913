//! Financial calculators for savings planning.

mod compound_interest;

pub use compound_interest::{
    project_compound_interest, CompoundInterestInput, CompoundInterestProjection,
    CompoundingFrequency, YearlyProjection,
};
