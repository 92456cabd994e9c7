/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod auth;
pub mod client;
pub mod errors;
pub mod groups;
mod macros;
mod parsers;
pub mod people;
pub mod photos;
pub mod photosets;
pub mod properties;
pub mod request;
pub mod response;
pub mod signer;
pub mod transport;
pub mod upload;

pub use auth::*;
pub use client::*;
pub use errors::*;
pub use groups::*;
pub use people::GetPhotosOptions;
pub use photos::*;
pub use photosets::*;
pub use properties::*;
pub use request::*;
pub use response::*;
pub use signer::ApiParams;
pub use transport::*;
pub use upload::*;
