//! Manifest construction and serialization.
//!
//! The manifest is the single JSON object the downstream segment-annotator
//! consumes: the label list plus one image URL and one annotation URL per
//! tile, in the partitioner's emission order. URLs always use forward slashes
//! so the serialized manifest is byte-identical across platforms.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MosaicPrepError;
use crate::grid::Region;

/// The serialized structure consumed by the downstream annotation tool.
///
/// Invariant: `image_urls` and `annotation_urls` have one entry per region,
/// in region emission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub labels: Vec<String>,
    #[serde(rename = "imageURLs")]
    pub image_urls: Vec<String>,
    #[serde(rename = "annotationURLs")]
    pub annotation_urls: Vec<String>,
}

/// File name for the tile at `index`: zero-padded to three digits, PNG.
pub fn tile_file_name(index: usize) -> String {
    format!("{:03}.png", index)
}

/// Builds the manifest for a tiling run.
///
/// Pure function: labels pass through verbatim, and each region at index `i`
/// is paired with `<image_base>/<i>.png` and `<annotation_base>/<i>.png`.
/// The annotation URLs are recorded for the downstream tool but nothing is
/// written at them here.
pub fn build_manifest(
    labels: Vec<String>,
    regions: &[Region],
    image_base: &str,
    annotation_base: &str,
) -> Manifest {
    let mut image_urls = Vec::with_capacity(regions.len());
    let mut annotation_urls = Vec::with_capacity(regions.len());

    for index in 0..regions.len() {
        let file_name = tile_file_name(index);
        image_urls.push(format!("{}/{}", image_base, file_name));
        annotation_urls.push(format!("{}/{}", annotation_base, file_name));
    }

    Manifest {
        labels,
        image_urls,
        annotation_urls,
    }
}

/// Writes the manifest to a JSON file, pretty-printed with 4-space indents.
///
/// Call this only after every tile write succeeded; a failed run must never
/// leave a manifest behind.
///
/// # Errors
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), MosaicPrepError> {
    let file = File::create(path).map_err(MosaicPrepError::Io)?;
    let writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    manifest
        .serialize(&mut serializer)
        .map_err(|source| MosaicPrepError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })?;

    // Flush explicitly so buffered-write failures surface instead of being
    // swallowed on drop
    serializer
        .into_inner()
        .flush()
        .map_err(MosaicPrepError::Io)?;

    Ok(())
}

/// Serializes a manifest to a 4-space-indented JSON string.
///
/// Useful for testing without file I/O.
pub fn to_manifest_string(manifest: &Manifest) -> Result<String, serde_json::Error> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut serializer)?;
    // PrettyFormatter only ever emits the UTF-8 the Serialize impls produce
    Ok(String::from_utf8(buf).expect("manifest JSON is valid UTF-8"))
}

/// Reads a manifest from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_manifest_str(json: &str) -> Result<Manifest, serde_json::Error> {
    serde_json::from_str(json)
}
