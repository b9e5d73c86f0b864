/*
Copyright (c) 2021 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Error types.
//!
//! Everything the target side rejects carries the gRPC canonical code the
//! P4Runtime specification assigns to the failure, so the same value can be
//! turned into an `RpcStatus`, a `StreamError`, or a per-update `p4.v1.Error`.

use grpcio::{RpcStatus, RpcStatusCode};

use thiserror::Error;

/// A rejected P4Runtime operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct P4Error {
    pub code: RpcStatusCode,
    pub message: String,
}

impl P4Error {
    pub fn new<S: Into<String>>(code: RpcStatusCode, message: S) -> Self {
        P4Error {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::new(RpcStatusCode::INVALID_ARGUMENT, message)
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::new(RpcStatusCode::NOT_FOUND, message)
    }

    pub fn failed_precondition<S: Into<String>>(message: S) -> Self {
        Self::new(RpcStatusCode::FAILED_PRECONDITION, message)
    }
}

impl From<P4Error> for RpcStatus {
    fn from(e: P4Error) -> Self {
        RpcStatus::with_message(e.code, e.message)
    }
}

/// Failure of a Write RPC.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WriteError {
    /// The whole request was refused before any update was looked at.
    #[error("write rejected ({0})")]
    Rejected(#[from] P4Error),

    /// One status per update, in request order.  Updates that succeeded
    /// report `OK`.
    #[error("write failed, per-update status {0:?}")]
    Updates(Vec<RpcStatusCode>),
}

/// Errors seen by a P4Runtime client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("RPC failed: {0}")]
    Rpc(#[from] grpcio::Error),

    /// The server closed the stream channel.
    #[error("stream channel terminated ({code}: {message})")]
    StreamTerminated { code: RpcStatusCode, message: String },

    #[error("write failed ({code}): per-update status {updates:?}")]
    Write {
        code: RpcStatusCode,
        updates: Vec<RpcStatusCode>,
    },

    #[error("no stream channel is open")]
    NoStream,

    #[error("timed out waiting for {0}")]
    Timeout(&'static str),

    #[error("unexpected message: {0}")]
    Unexpected(String),
}

impl ClientError {
    /// The status code the server answered with, if the error came from the
    /// server at all.
    pub fn code(&self) -> Option<RpcStatusCode> {
        match self {
            ClientError::Rpc(grpcio::Error::RpcFailure(status)) => Some(status.code()),
            ClientError::StreamTerminated { code, .. } => Some(*code),
            ClientError::Write { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Per-update codes for a failed batch write.
    pub fn update_codes(&self) -> Vec<RpcStatusCode> {
        match self {
            ClientError::Write { updates, .. } => updates.clone(),
            _ => Vec::new(),
        }
    }
}
