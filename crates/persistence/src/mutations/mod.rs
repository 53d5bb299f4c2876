// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `bills` - Bill insert, full replacement and deletion

pub mod bills;

pub use bills::{current_timestamp, delete_bill, insert_bill, update_bill};
