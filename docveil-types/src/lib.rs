//! Core type definitions for DocVeil.
//!
//! This crate defines the fundamental, engine-agnostic types shared by the
//! two annotation layers:
//! - Category tags and the confidence / severity / risk scales
//! - `Annotation` (redaction ledger record) and `Flag` (content-concern record)
//! - Summary and outcome shapes returned by the engine entry points
//!
//! Pattern definitions, validators, and the scanning/merging machinery live
//! in `docveil-engine`, not here.

mod annotation;
mod category;
mod flag;
mod outcome;

pub use annotation::Annotation;
pub use category::{Category, Confidence, RiskLevel, Severity};
pub use flag::Flag;
pub use outcome::{FlagSummary, FlaggingOutcome, RedactionOutcome, RedactionSummary};
