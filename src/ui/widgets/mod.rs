// SPDX-License-Identifier: MPL-2.0
pub mod locked_scrollable;

pub use locked_scrollable::locked_scrollable;
