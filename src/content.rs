//! Resource content reading.
//!
//! Reads resolved locators back as bytes or text. Only `file:` and
//! `classpath:` locators are readable here; fetching remote locators
//! belongs to the network collaborators around this crate.

use std::fs::{self, File};
use std::io::{self, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::ResolveError;
use crate::lookup::{Location, LocationResolver};
use crate::resource::ResourceRef;

/// Read a resolved resource as raw bytes.
///
/// `classpath:` locators are looked up through `lookup`, searching
/// directories and archive containers in resolution order.
pub fn read(resource: &ResourceRef, lookup: &dyn LocationResolver) -> Result<Vec<u8>, ResolveError> {
    let locator = resource.as_str();
    if let Some(path) = locator.strip_prefix("file:") {
        return fs::read(path).map_err(|cause| ResolveError::io(path, cause));
    }
    if let Some(entry) = locator.strip_prefix("classpath:") {
        return read_classpath(entry, lookup);
    }
    Err(ResolveError::invalid_expression(
        locator,
        "only file: and classpath: locators are readable",
    ))
}

/// Read a resolved resource as UTF-8 text.
pub fn read_to_string(
    resource: &ResourceRef,
    lookup: &dyn LocationResolver,
) -> Result<String, ResolveError> {
    let bytes = read(resource, lookup)?;
    String::from_utf8(bytes).map_err(|cause| {
        ResolveError::io(
            resource.as_str(),
            io::Error::new(io::ErrorKind::InvalidData, cause),
        )
    })
}

fn read_classpath(entry: &str, lookup: &dyn LocationResolver) -> Result<Vec<u8>, ResolveError> {
    let entry = entry.trim_start_matches('/');
    let (root, name) = entry.rsplit_once('/').map_or(("", entry), |(root, name)| (root, name));

    for location in lookup.resolve(root)? {
        match location {
            Location::Directory(dir) => {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return fs::read(&candidate)
                        .map_err(|cause| ResolveError::io(candidate.clone(), cause));
                }
            }
            Location::Archive(container) => {
                let file =
                    File::open(&container).map_err(|cause| ResolveError::io(&container, cause))?;
                let mut archive = ZipArchive::new(file)
                    .map_err(|cause| ResolveError::io(&container, cause.into()))?;
                match archive.by_name(entry) {
                    Ok(mut zipped) => {
                        let mut bytes = Vec::new();
                        zipped
                            .read_to_end(&mut bytes)
                            .map_err(|cause| ResolveError::io(&container, cause))?;
                        return Ok(bytes);
                    }
                    Err(ZipError::FileNotFound) => {}
                    Err(cause) => return Err(ResolveError::io(&container, cause.into())),
                };
            }
        }
    }

    Err(ResolveError::not_found(entry))
}

// ============================================================================
// Tests
// ============================================================================
