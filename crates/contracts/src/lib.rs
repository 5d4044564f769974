//! Wire types shared between the dues dashboard frontend and its backend.

pub mod usecases;
