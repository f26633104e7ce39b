// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens shown by the application, in startup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Portfolio,
}
