//! Request routing and verb dispatch.
//!
//! A [`Router`] holds an ordered chain of [`Route`]s; the first route that
//! resolves a request to a [`Resource`] wins. The [`Dispatcher`] then maps
//! the request's verb onto the resource's capability handlers, computing
//! the OPTIONS/405 `Allow` set by probing the same capabilities.

pub mod dispatch;
pub mod resource;
pub mod router;

pub use dispatch::{Dispatcher, Method};
pub use resource::{
    DeleteHandler, GetHandler, HeadHandler, PatchHandler, PostHandler, PutHandler, Resource,
};
pub use router::{Route, Router};
