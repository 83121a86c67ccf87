// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the toast core and its ambient
//! layers (configuration, diagnostics).
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`toast`]: Toast value objects ([`Position`](toast::Position),
//!   [`ShowDuration`](toast::ShowDuration), [`RemovalDelay`](toast::RemovalDelay))

pub mod diagnostics;
pub mod toast;
