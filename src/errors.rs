// Copyright (C) 2025 The phone-number-helper Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::num::ParseIntError;

use thiserror::Error;

/// Failure to turn a text representation into a structured phone number.
#[derive(Debug, PartialEq, Error)]
pub enum ParseNumberError {
    #[error("Empty phone number")]
    EmptyNumber,
    #[error("Failed to parse phone number {number:?}: {reason}")]
    Unparseable { number: String, reason: String },
    #[error("Phone number parser panicked on {0:?}")]
    ParserPanicked(String),
}

/// Errors raised while reading a prefix file (`<prefix>|<description>` lines).
#[derive(Debug, Error)]
pub enum PrefixFileError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Failed to parse prefix '{prefix}': {source}")]
    PrefixParseError {
        prefix: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("Invalid locale tag: {0:?}")]
pub struct InvalidLocaleError(pub String);
