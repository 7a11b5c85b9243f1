/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

/// the datum registry.
/// Registries are built (built-in datums plus optional configured ones) and then frozen into the
/// process wide registry, which is never mutated afterwards. If nothing was installed explicitly the
/// first access freezes the built-in table

use std::{path::Path, sync::{Arc, OnceLock}};
use hashbrown::HashMap;
use tracing::{debug, info};

use crate::adapter::CoordinateAdapter;
use crate::config::{DatumConfig, load_config};
use crate::datum::{Datum, PIVOT_DATUM, builtin_datums};
use crate::errors::{OdinDatumError, Result, unknown_datum};

#[derive(Debug,Clone)]
pub struct DatumRegistry {
    datums: HashMap<String,Arc<Datum>>,
    aliases: HashMap<String,String>, // lower case name or alias -> name
}

impl DatumRegistry {
    /// a registry with our built-in datums
    pub fn new () -> Self {
        let mut reg = DatumRegistry { datums: HashMap::new(), aliases: HashMap::new() };
        for (datum, aliases) in builtin_datums() {
            let name = datum.name.clone();
            reg.aliases.insert( name.to_lowercase(), name.clone());
            for alias in aliases {
                reg.aliases.insert( alias.to_lowercase(), name.clone());
            }
            reg.datums.insert( name, Arc::new(datum));
        }
        reg
    }

    /// built-in datums plus the ones from a RON `DatumConfig` file
    pub fn from_config_file (path: impl AsRef<Path>) -> Result<Self> {
        let config: DatumConfig = load_config( path)?;
        let mut reg = DatumRegistry::new();
        reg.add_config( &config)?;
        Ok(reg)
    }

    pub fn add_config (&mut self, config: &DatumConfig) -> Result<()> {
        for spec in &config.datums {
            self.register( spec.to_datum()?)?;
            for alias in &spec.aliases {
                self.register_alias( alias, &spec.name)?;
            }
        }
        Ok(())
    }

    /// add a new datum. Names (and aliases) have to be unique, ignoring case
    pub fn register (&mut self, datum: Datum) -> Result<Arc<Datum>> {
        let key = datum.name.to_lowercase();
        if self.datums.contains_key( &datum.name) || self.aliases.contains_key( &key) {
            return Err( OdinDatumError::DuplicateDatum( datum.name))
        }

        debug!("registering datum {}", datum.name);
        let datum = Arc::new(datum);
        self.aliases.insert( key, datum.name.clone());
        self.datums.insert( datum.name.clone(), datum.clone());
        Ok(datum)
    }

    pub fn register_alias (&mut self, alias: &str, name: &str) -> Result<()> {
        if !self.datums.contains_key( name) { return Err( unknown_datum(name)) }

        let key = alias.to_lowercase();
        if self.aliases.contains_key( &key) { return Err( OdinDatumError::DuplicateDatum( alias.to_string())) }

        self.aliases.insert( key, name.to_string());
        Ok(())
    }

    /// look up datum by exact name, falling back to case insensitive names and aliases
    pub fn lookup (&self, name: &str) -> Result<Arc<Datum>> {
        if let Some(datum) = self.datums.get( name) {
            return Ok( datum.clone())
        }

        self.aliases.get( &name.to_lowercase())
            .and_then( |n| self.datums.get(n))
            .cloned()
            .ok_or_else( || unknown_datum(name))
    }

    pub fn contains (&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }

    pub fn pivot (&self) -> Result<Arc<Datum>> {
        self.lookup( PIVOT_DATUM)
    }

    /// sorted datum names
    pub fn names (&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.datums.keys().map( |k| k.as_str()).collect();
        names.sort();
        names
    }

    pub fn len (&self) -> usize { self.datums.len() }

    pub fn is_empty (&self) -> bool { self.datums.is_empty() }

    /// the adapter for two registered datums. Unknown names are reported as `UnsupportedDatum`
    pub fn adapter (&self, source: &str, destination: &str) -> Result<CoordinateAdapter> {
        let src = self.lookup( source).map_err( |_| OdinDatumError::UnsupportedDatum( source.to_string()))?;
        let dst = self.lookup( destination).map_err( |_| OdinDatumError::UnsupportedDatum( destination.to_string()))?;
        Ok( CoordinateAdapter::new( src, dst) )
    }
}

impl Default for DatumRegistry {
    fn default () -> Self { DatumRegistry::new() }
}

/* #region global registry *******************************************************************************/

static REGISTRY: OnceLock<DatumRegistry> = OnceLock::new();

/// freeze the provided registry as the process wide one. This has to happen before the first
/// `registry()` access, otherwise we return a `RegistryInitialized` error
pub fn init_registry (reg: DatumRegistry) -> Result<&'static DatumRegistry> {
    let n = reg.len();
    match REGISTRY.set( reg) {
        Ok(()) => {
            info!("datum registry initialized with {} datums", n);
            Ok( registry())
        }
        Err(_) => Err( OdinDatumError::RegistryInitialized)
    }
}

/// the process wide registry
pub fn registry () -> &'static DatumRegistry {
    REGISTRY.get_or_init( || {
        debug!("initializing datum registry with built-in datums");
        DatumRegistry::new()
    })
}

pub fn lookup_datum (name: &str) -> Result<Arc<Datum>> {
    registry().lookup( name)
}

/* #endregion global registry */
