// Copyright (c) 2026, intl-rs developers
//
// Licensed under the Apache License, Version 2.0 (see LICENSE.Apache in the
// root directory) or MIT license (see LICENSE.MIT in the root directory),
// at your option. This file may be copied, distributed, and modified only
// in accordance with the terms specified by the chosen license.

//! IDNA property tables, generated offline from the Unicode Character
//! Database and the IDNA Mapping Table.

mod bidi_classes;
mod codepoint_classes;
mod joining_types;
mod scripts;
mod uts46_mappings;

pub use bidi_classes::{bidi_class, BidiClass};
pub use codepoint_classes::{codepoint_class, is_combining_mark, CodepointClass};
pub use joining_types::{joining_type, JoiningType};
pub use scripts::{script, Script};
pub use uts46_mappings::{uts46_status, Status};
