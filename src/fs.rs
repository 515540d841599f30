use std::error::Error;
use std::fs;
use std::path::Path;

use log::debug;

use crate::config::Format;
use crate::level::Level;
use crate::parser;
use crate::LoadLevel;

fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    Ok(fs::read_to_string(path)?)
}

impl<P: AsRef<Path> + ?Sized> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        debug!("Loading {}", self.as_ref().display());
        let level = parser::parse(&read_file(self)?)?;
        Ok(level)
    }

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>> {
        debug!("Loading {} as {:?}", self.as_ref().display(), format);
        let level = parser::parse_format(&read_file(self)?, format)?;
        Ok(level)
    }
}
