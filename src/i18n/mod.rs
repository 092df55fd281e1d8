// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by embedded Fluent bundles.

pub mod fluent;

pub use fluent::I18n;
