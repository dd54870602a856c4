use std::path::Path;

use crate::{error::LoadError, graph::RoadGraph};

pub trait NetworkParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<RoadGraph, LoadError>;
}
