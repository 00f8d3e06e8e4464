//! # tcg-core — Foundational Types for the TCG Stack
//!
//! Shared domain types for the test case generation and compliance
//! scoring pipeline. Everything downstream (the generator, the scorer,
//! the exporters, the ALM clients, the API surface) consumes these
//! records read-only; none of them is mutated after creation.
//!
//! ## Contents
//!
//! | Module         | Domain                                        |
//! |----------------|-----------------------------------------------|
//! | [`identity`]   | UUID-backed identifier newtypes               |
//! | [`testcase`]   | [`TestCase`], [`TestStep`], enumerations      |
//! | [`report`]     | [`ComplianceReport`] and coverage records     |
//! | [`standard`]   | [`ComplianceStandard`] enumeration            |

pub mod identity;
pub mod report;
pub mod standard;
pub mod testcase;

pub use identity::{ProcessingId, TestCaseId};
pub use report::{ComplianceReport, CoverageStatus, RequirementCoverage, Severity};
pub use standard::ComplianceStandard;
pub use testcase::{Priority, TestCase, TestCaseType, TestStep};
