//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::store::store::Store;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Tiles stored as `<basepath>/<z>/<x>/<y>.png`
#[derive(Clone)]
pub struct Filestore {
    pub basepath: String,
}

impl Filestore {
    fn fullpath(&self, path: &str) -> String {
        format!("{}/{}", self.basepath, path)
    }
}

impl Store for Filestore {
    fn info(&self) -> String {
        format!("Tile directory: {}", self.basepath)
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), io::Error> {
        let fullpath = self.fullpath(path);
        debug!("Filestore.write {}", fullpath);
        if let Some(dir) = Path::new(&fullpath).parent() {
            fs::create_dir_all(dir)?;
        }
        let mut f = File::create(&fullpath)?;
        f.write_all(obj)
    }
}
