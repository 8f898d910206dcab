//! Page concatenation on top of lopdf.
//!
//! The first registered document is the base. Each following document is
//! renumbered past the running object id and its objects are moved into the
//! base. The page tree roots of all documents then become the kids of a fresh
//! top-level `Pages` node. Whole subtrees are kept intact, so attributes
//! inherited from `Pages` nodes (MediaBox, Resources, Rotate) stay attached
//! to the pages of their own document.

use lopdf::{Document, Object, ObjectId, dictionary};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::MergeCapability;
use crate::config::CompressionLevel;
use crate::error::{PdfMergeError, Result};
use crate::io::{LoadedPdf, PdfReader, PdfSource, PdfWriter};

/// Statistics about a completed merge.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of documents merged.
    pub files_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Total size of the input files.
    pub input_size: u64,

    /// Size of the written output.
    pub output_size: u64,

    /// Wall time from first parse to finished write.
    pub merge_time: Duration,

    /// Where the merged document was written.
    pub destination: PathBuf,
}

impl MergeStatistics {
    /// Format output size as human-readable string.
    pub fn format_output_size(&self) -> String {
        crate::utils::format_file_size(self.output_size)
    }
}

/// lopdf-backed [`MergeCapability`].
///
/// Registration opens each file and holds the handle; nothing is parsed
/// until [`merge_all`](MergeCapability::merge_all).
#[derive(Debug)]
pub struct LopdfMerger {
    reader: PdfReader,
    writer: PdfWriter,
    sources: Vec<PdfSource>,
}

impl LopdfMerger {
    /// Create a merger with standard compression.
    pub fn new() -> Self {
        Self::with_compression(CompressionLevel::Standard)
    }

    /// Create a merger writing with the given compression level.
    pub fn with_compression(compression: CompressionLevel) -> Self {
        Self {
            reader: PdfReader::new(),
            writer: PdfWriter::with_compression(compression),
            sources: Vec::new(),
        }
    }

    /// Paths registered so far, in merge order.
    pub fn registered(&self) -> impl Iterator<Item = &Path> {
        self.sources.iter().map(|s| s.path.as_path())
    }

    /// Combine loaded documents into one, in order.
    fn merge_documents(loaded: Vec<LoadedPdf>) -> Result<Document> {
        let mut documents = loaded.into_iter();
        let first = documents.next().ok_or(PdfMergeError::NoSourcesRegistered)?;

        let mut merged = first.document;
        let mut subtrees = vec![pages_root(&merged)?];
        let mut total_pages = first.page_count;
        let mut max_id = merged.max_id;

        for loaded in documents {
            let mut doc = loaded.document;

            doc.renumber_objects_with(max_id + 1);
            max_id = doc.max_id;

            subtrees.push(pages_root(&doc)?);
            total_pages += loaded.page_count;
            log::debug!(
                "Appending {} pages from {}",
                loaded.page_count,
                loaded.path.display()
            );

            merged.objects.extend(doc.objects);
        }

        merged.max_id = max_id;
        if subtrees.len() > 1 {
            join_page_trees(&mut merged, &subtrees, total_pages)?;
        }
        // Catalogs of the appended documents are now unreachable.
        merged.prune_objects();
        merged.renumber_objects();

        Ok(merged)
    }
}

impl Default for LopdfMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeCapability for LopdfMerger {
    fn register(&mut self, path: &Path) -> Result<()> {
        let source = self.reader.open(path)?;
        self.sources.push(source);
        Ok(())
    }

    fn merge_all(self, destination: &Path) -> Result<MergeStatistics> {
        let start = Instant::now();
        let Self {
            reader,
            writer,
            sources,
        } = self;

        if sources.is_empty() {
            return Err(PdfMergeError::NoSourcesRegistered);
        }

        let loaded = sources
            .into_iter()
            .map(|source| reader.load(source))
            .collect::<Result<Vec<_>>>()?;

        let files_merged = loaded.len();
        let input_size = loaded.iter().map(|l| l.file_size).sum();

        let document = Self::merge_documents(loaded)?;
        let total_pages = document.get_pages().len();

        let write_stats = writer.save(document, destination)?;

        Ok(MergeStatistics {
            files_merged,
            total_pages,
            input_size,
            output_size: write_stats.file_size,
            merge_time: start.elapsed(),
            destination: write_stats.output_path,
        })
    }
}

/// Object id of the document's root `Pages` node.
fn pages_root(doc: &Document) -> Result<ObjectId> {
    doc.catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| PdfMergeError::merge_failed(format!("Failed to get pages reference: {e}")))
}

/// Put every document's page tree under a new, attribute-free `Pages` root.
///
/// Each subtree keeps its own inheritable attributes (MediaBox, Rotate,
/// Resources), and none of them leak into the pages of another document.
fn join_page_trees(merged: &mut Document, subtrees: &[ObjectId], page_count: usize) -> Result<()> {
    let root_id = merged.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => subtrees.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
        "Count" => Object::Integer(page_count as i64),
    });

    for &subtree_id in subtrees {
        match merged.get_object_mut(subtree_id) {
            Ok(Object::Dictionary(subtree)) => {
                subtree.set("Parent", Object::Reference(root_id));
            }
            _ => {
                return Err(PdfMergeError::merge_failed(
                    "Pages object is not a dictionary",
                ));
            }
        }
    }

    let catalog_id = merged
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|e| PdfMergeError::merge_failed(format!("Failed to get catalog: {e}")))?;

    match merged.get_object_mut(catalog_id) {
        Ok(Object::Dictionary(catalog)) => {
            catalog.set("Pages", Object::Reference(root_id));
            Ok(())
        }
        _ => Err(PdfMergeError::merge_failed("Catalog is not a dictionary")),
    }
}
