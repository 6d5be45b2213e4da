// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    interactive_recorded     = { RequestContext::interactive(true),  true },
    interactive_not_recorded = { RequestContext::interactive(false), false },
    bulk_recorded            = { RequestContext::bulk(true),         false },
    bulk_not_recorded        = { RequestContext::bulk(false),        false },
)]
fn candidacy(ctx: RequestContext, expected: bool) {
    assert_eq!(is_candidate(&ctx), expected);
}
