// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! Shared fixtures (a pinned clock, a test user, draft factories) and
//! assertion helpers used by the workflow tests.

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_event_matches_draft, assert_sorted_by_start};
#[allow(unused_imports)]
pub use fixtures::{TEST_OWNER, naive, test_controller, test_draft, test_now, test_user};
