// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod memory_tests;

use crate::{CobblerConnection, Distro, InMemoryCobbler, ProvisioningBackend};
use std::collections::BTreeMap;

/// Connects to a fresh backend as `test`.
pub fn create_test_backend() -> (InMemoryCobbler, CobblerConnection) {
    let backend = InMemoryCobbler::new();
    let conn = backend.connect("test").unwrap();
    (backend, conn)
}

pub fn create_test_distro(backend: &InMemoryCobbler, conn: &CobblerConnection) -> Distro {
    Distro::builder()
        .name("test-distro")
        .kernel("test-kernel")
        .initrd("test-initrd")
        .ks_meta(BTreeMap::new())
        .build(backend, conn)
        .unwrap()
}
