//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::fmt::{self, Display, Formatter};
use std::{error, io};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Image(image::ImageError),
    /// Missing or invalid render style
    Style(String),
    Config(String),
}

impl From<io::Error> for Error {
    fn from(v: io::Error) -> Self {
        Error::Io(v)
    }
}

impl From<image::ImageError> for Error {
    fn from(v: image::ImageError) -> Self {
        Error::Image(v)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => e.fmt(f),
            Error::Image(e) => e.fmt(f),
            Error::Style(msg) => write!(f, "Style error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Image(e) => Some(e),
            Error::Style(_) => None,
            Error::Config(_) => None,
        }
    }
}
