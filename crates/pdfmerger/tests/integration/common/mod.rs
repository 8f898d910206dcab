//! Shared helpers for the integration tests.
//!
//! Fixture PDFs are generated on the fly with lopdf. Every page carries its
//! own MediaBox whose width identifies it, so page order can be checked in
//! the merged output without text extraction.

#![allow(dead_code)]

use lopdf::{Document, Object, dictionary};
use pdfmerger::picker::{FilePicker, Notifier};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Write a PDF with one page per entry of `widths` to `dir/name`.
pub fn write_pdf(dir: &Path, name: &str, widths: &[i64]) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = widths
        .iter()
        .map(|&width| {
            let content_id = doc.add_object(lopdf::Stream::new(
                lopdf::Dictionary::new(),
                format!("0 0 {width} 10 re f").into_bytes(),
            ));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
                "Contents" => content_id,
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => widths.len() as i64,
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).expect("Failed to write fixture PDF");
    path
}

/// Write a PDF whose pages inherit their MediaBox from an intermediate
/// `Pages` node instead of declaring it themselves.
pub fn write_nested_pdf(dir: &Path, name: &str, width: i64, pages: usize) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let root_id = doc.new_object_id();
    let inner_id = doc.new_object_id();

    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => inner_id,
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        inner_id,
        dictionary! {
            "Type" => "Pages",
            "Parent" => root_id,
            "Kids" => kids,
            "Count" => pages as i64,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
        }
        .into(),
    );
    doc.objects.insert(
        root_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => vec![inner_id.into()],
            "Count" => pages as i64,
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => root_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).expect("Failed to write fixture PDF");
    path
}

/// Write a one-page-per-width PDF whose root `Pages` node sets `/Rotate`.
/// The pages themselves carry no rotation and inherit it.
pub fn write_rotated_pdf(dir: &Path, name: &str, widths: &[i64], rotate: i64) -> PathBuf {
    let path = write_pdf(dir, name, widths);

    let mut doc = Document::load(&path).expect("Failed to reload fixture PDF");
    let root_id = doc
        .catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .expect("Fixture has no page tree");
    doc.get_dictionary_mut(root_id)
        .expect("Page tree root is not a dictionary")
        .set("Rotate", Object::Integer(rotate));
    doc.save(&path).expect("Failed to write fixture PDF");
    path
}

/// Effective `/Rotate` of every page of `path`, 0 when none is inherited.
pub fn page_rotations(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("Failed to load merged PDF");
    doc.get_pages()
        .values()
        .map(|&page_id| inherited_rotation(&doc, page_id))
        .collect()
}

fn inherited_rotation(doc: &Document, mut node_id: lopdf::ObjectId) -> i64 {
    loop {
        let node = doc
            .get_dictionary(node_id)
            .expect("Page tree node is not a dictionary");
        if let Ok(rotate) = node.get(b"Rotate").and_then(Object::as_i64) {
            return rotate;
        }
        match node.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent) => node_id = parent,
            Err(_) => return 0,
        }
    }
}

/// Page widths of `path` in page order, following inherited MediaBoxes.
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("Failed to load merged PDF");
    doc.get_pages()
        .values()
        .map(|&page_id| media_box_width(&doc, page_id))
        .collect()
}

fn media_box_width(doc: &Document, mut node_id: lopdf::ObjectId) -> i64 {
    loop {
        let node = doc
            .get_dictionary(node_id)
            .expect("Page tree node is not a dictionary");
        if let Ok(media_box) = node.get(b"MediaBox").and_then(Object::as_array) {
            return media_box[2].as_i64().expect("MediaBox width is not an integer");
        }
        node_id = node
            .get(b"Parent")
            .and_then(Object::as_reference)
            .expect("Page has no MediaBox in its ancestry");
    }
}

/// Picker that replays scripted answers and counts save prompts.
#[derive(Default)]
pub struct ScriptedPicker {
    pub opens: VecDeque<Option<PathBuf>>,
    pub saves: VecDeque<Option<PathBuf>>,
    pub save_prompts: usize,
}

impl ScriptedPicker {
    pub fn opening<I: IntoIterator<Item = PathBuf>>(paths: I) -> Self {
        Self {
            opens: paths.into_iter().map(Some).collect(),
            ..Default::default()
        }
    }

    pub fn saving_to(mut self, destination: Option<PathBuf>) -> Self {
        self.saves.push_back(destination);
        self
    }
}

impl FilePicker for ScriptedPicker {
    fn choose_open(&mut self) -> Option<PathBuf> {
        self.opens.pop_front().flatten()
    }

    fn choose_save(&mut self) -> Option<PathBuf> {
        self.save_prompts += 1;
        self.saves.pop_front().flatten()
    }
}

/// Notifier that keeps every alert.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
