// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for forkmirror.
//!
//! This crate provides:
//! - A pre-configured HTTP client builder with the forkmirror User-Agent
//! - A bounded retry loop for operations that fail transiently

mod client;
mod retry;

pub use client::{builder, user_agent};
pub use retry::{retry, RetryConfig, RetryableError};
