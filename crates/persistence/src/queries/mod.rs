// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic read queries.
//!
//! All queries use Diesel DSL and are written once, then monomorphized for
//! both backends by the `backend_fn!` macro in the crate root.
//!
//! - `roster` — roster day and shift lookups
//! - `employees` — employee directory reads and the membership count
//! - `accounts` — account and session lookups, password verification

pub mod accounts;
pub mod employees;
pub mod roster;
