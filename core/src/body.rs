// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};
use std::io;
use std::mem;
use std::pin::Pin;

use bytes::{Bytes, BytesMut};
use futures::{Stream, TryStreamExt};

use crate::{Error, Result};

/// Stream of body chunks.
pub type BodyStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send + Sync>>;

/// Body of an outgoing request.
///
/// A body is either absent, fully buffered or a one-shot stream. Buffered
/// bodies can be read any number of times: every read returns a cheap
/// clone of the same bytes.
#[derive(Default)]
pub struct Body {
    inner: BodyInner,
}

#[derive(Default)]
enum BodyInner {
    /// No body at all.
    #[default]
    None,
    /// Buffered content.
    Bytes(Bytes),
    /// Streaming data, can only be consumed once.
    Stream(BodyStream),
}

impl Body {
    /// Create a body that carries nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a body from a stream of chunks.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + Sync + 'static,
    {
        Self {
            inner: BodyInner::Stream(Box::pin(stream)),
        }
    }

    /// Returns true if there is no body at all.
    ///
    /// A buffered body of zero length is still a body.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, BodyInner::None)
    }

    /// Returns true if the body is a stream that has not been buffered yet.
    pub fn is_stream(&self) -> bool {
        matches!(self.inner, BodyInner::Stream(_))
    }

    /// Get the buffered content, `None` if the body is absent or still a stream.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.inner {
            BodyInner::Bytes(bs) => Some(bs),
            _ => None,
        }
    }

    /// Read the whole body into memory.
    ///
    /// After this call the body is buffered and can be read again. An absent
    /// body reads as empty bytes and stays absent.
    pub async fn buffer(&mut self) -> Result<Bytes> {
        match mem::take(&mut self.inner) {
            BodyInner::None => Ok(Bytes::new()),
            BodyInner::Bytes(bs) => {
                self.inner = BodyInner::Bytes(bs.clone());
                Ok(bs)
            }
            BodyInner::Stream(mut stream) => {
                let mut buf = BytesMut::new();
                while let Some(chunk) = stream.try_next().await.map_err(|err| {
                    Error::body_read("failed to read request body").with_source(err)
                })? {
                    buf.extend_from_slice(&chunk);
                }

                let bs = buf.freeze();
                self.inner = BodyInner::Bytes(bs.clone());
                Ok(bs)
            }
        }
    }

    /// Take the body out for sending.
    ///
    /// Buffered content is cloned so the caller keeps it, a stream is moved
    /// out and leaves an absent body behind.
    pub fn take_for_send(&mut self) -> Body {
        if let BodyInner::Bytes(bs) = &self.inner {
            return Body::from(bs.clone());
        }

        mem::take(self)
    }

    /// Consume the body into its parts, used by transports.
    pub fn into_inner(self) -> BodyKind {
        match self.inner {
            BodyInner::None => BodyKind::None,
            BodyInner::Bytes(bs) => BodyKind::Bytes(bs),
            BodyInner::Stream(s) => BodyKind::Stream(s),
        }
    }
}

/// The shape of a consumed [`Body`].
pub enum BodyKind {
    /// No body.
    None,
    /// Buffered content.
    Bytes(Bytes),
    /// Streaming content.
    Stream(BodyStream),
}

impl Debug for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            BodyInner::None => f.write_str("Body::None"),
            BodyInner::Bytes(bs) => write!(f, "Body::Bytes({} bytes)", bs.len()),
            BodyInner::Stream(_) => f.write_str("Body::Stream"),
        }
    }
}

macro_rules! body_from_bytes {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Body {
                fn from(value: $type) -> Self {
                    Body {
                        inner: BodyInner::Bytes(Bytes::from(value)),
                    }
                }
            }
        )*
    };
}

body_from_bytes! {
    Bytes, String, Vec<u8>, &'static str, &'static [u8]
}
