//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::io;

pub trait Store {
    fn info(&self) -> String;
    /// Write object, replacing existing content
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), io::Error>;
}

/// Discards all tiles
#[derive(Clone)]
pub struct Nostore;

impl Store for Nostore {
    fn info(&self) -> String {
        "No tile store".to_string()
    }
    fn write(&self, _path: &str, _obj: &[u8]) -> Result<(), io::Error> {
        Ok(())
    }
}
