// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for heater status fragments.
//!
//! Both the status endpoint and the setpoint endpoint answer with the same
//! small XML fragment. Only two elements matter, so the body is scanned for
//! those tags instead of being parsed as a document.

mod status;

pub use status::StatusResponse;
