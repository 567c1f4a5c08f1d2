// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens, icons, styles, and the page shell.

pub mod design_tokens;
pub mod icons;
pub mod shell;
pub mod styles;
pub mod theme;
