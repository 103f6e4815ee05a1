//! Authentication adapters.
//!
//! Implementations of the `TokenCodec` port:
//!
//! - `jwt_codec` - HS256 JWT credentials signed with the access-token secret

mod jwt_codec;

pub use jwt_codec::JwtTokenCodec;
