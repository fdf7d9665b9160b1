#![doc = "worklog-core: core logic library for worklog-sync."]

//! This crate contains the whole worklog pipeline: parsing a time-tracking
//! CSV export, validating the resulting entries, asking for confirmation and
//! submitting them through a [`contract::Submitter`].
//! Transport and terminal details live in the `worklog-sync` crate.

pub mod config;
pub mod confirm;
pub mod contract;
pub mod error;
pub mod issue;
pub mod parse;
pub mod synchronise;
pub mod validate;
