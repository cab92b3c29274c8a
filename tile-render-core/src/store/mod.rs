//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod filestore;
pub mod store;


pub use self::filestore::Filestore;
pub use self::store::Nostore;
pub use self::store::Store;
use crate::core::ApplicationCfg;
use crate::core::Config;
use std::io;

#[derive(Clone)]
pub enum Tilestore {
    Nostore(Nostore),
    Filestore(Filestore),
}

impl Tilestore {
    /// Relative path of a tile
    pub fn tile_path(zoom: u8, xtile: i64, ytile: i64) -> String {
        format!("{}/{}/{}.png", zoom, xtile, ytile)
    }
}

impl Store for Tilestore {
    fn info(&self) -> String {
        match self {
            &Tilestore::Nostore(ref store) => store.info(),
            &Tilestore::Filestore(ref store) => store.info(),
        }
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), io::Error> {
        match self {
            &Tilestore::Nostore(ref store) => store.write(path, obj),
            &Tilestore::Filestore(ref store) => store.write(path, obj),
        }
    }
}

impl<'a> Config<'a, ApplicationCfg> for Tilestore {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let store = match config.store.as_ref().and_then(|store| store.file.as_ref()) {
            Some(file_store_cfg) => Tilestore::Filestore(Filestore {
                basepath: file_store_cfg.base.clone(),
            }),
            None => Tilestore::Nostore(Nostore),
        };
        Ok(store)
    }
    fn gen_config() -> String {
        let toml = r#"
[store.file]
base = "./tiles"
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        match self {
            &Tilestore::Nostore(_) => "\n#[store.file]\n#base = \"./tiles\"\n".to_string(),
            &Tilestore::Filestore(ref store) => {
                let base = toml::Value::String(store.basepath.clone());
                format!("\n[store.file]\nbase = {}\n", base)
            }
        }
    }
}
