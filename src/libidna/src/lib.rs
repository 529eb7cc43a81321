// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! Internationalized domain names (UTS #46 and RFC 3492).

pub mod punycode;
mod tables;
mod uts46;

pub use uts46::{to_ascii, to_unicode, IdnaErrors, IdnaInfo, IdnaOptions};
