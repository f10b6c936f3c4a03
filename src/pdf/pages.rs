//! Page cloning between `lopdf` documents.
//!
//! Copying a page from one document to another means deep-cloning the page
//! dictionary and everything it transitively references (content streams,
//! fonts, images, annotations), then splicing the clone into the target's
//! page tree. A visited map keeps the clone cycle-safe: annotation `/P`
//! entries and other back-references into already-cloned objects resolve to
//! the target id allocated on first visit, and shared resources are cloned
//! once per page rather than once per reference.
//!
//! Errors are plain messages; the caller attaches the file path.

use std::collections::HashMap;

use lopdf::{dictionary, Document, Object, ObjectId};

/// A new document with an empty page tree (/Root -> /Pages with zero kids).
pub fn empty_document() -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => 0,
            "Kids" => Object::Array(vec![]),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Clone the page `page_id` of `source` into `target`, appending it as the
/// last page of the target's page tree.
pub fn clone_page_into(
    source: &Document,
    target: &mut Document,
    page_id: ObjectId,
) -> Result<(), String> {
    let page_object = source
        .get_object(page_id)
        .map_err(|err| format!("cannot read page object {page_id:?}: {err}"))?;

    // Allocate the cloned page's id up front and seed the visited map with
    // it, so references back to the page (annotation /P entries) land on the
    // clone instead of re-cloning the page.
    let cloned_id = target.new_object_id();
    let mut visited = HashMap::from([(page_id, cloned_id)]);
    let cloned = clone_object(source, target, page_object, &mut visited);
    target.objects.insert(cloned_id, cloned);

    let pages_id = page_tree_root(target)?;

    // Append the cloned page to /Kids and bump /Count.
    if let Ok(Object::Dictionary(pages_dict)) = target.get_object_mut(pages_id) {
        if let Ok(Object::Array(kids)) = pages_dict.get_mut(b"Kids") {
            kids.push(Object::Reference(cloned_id));
        }
        if let Ok(Object::Integer(count)) = pages_dict.get_mut(b"Count") {
            *count += 1;
        }
    }

    // Point the clone's /Parent at the target's page tree.
    if let Ok(Object::Dictionary(page_dict)) = target.get_object_mut(cloned_id) {
        page_dict.set("Parent", Object::Reference(pages_id));
    }

    Ok(())
}

/// Resolve the target document's /Pages node from its catalog.
fn page_tree_root(target: &Document) -> Result<ObjectId, String> {
    let catalog = target
        .catalog()
        .map_err(|err| format!("document has no catalog: {err}"))?;
    match catalog.get(b"Pages") {
        Ok(Object::Reference(id)) => Ok(*id),
        Ok(_) => Err("/Pages is not a reference".to_string()),
        Err(err) => Err(format!("catalog has no /Pages: {err}")),
    }
}

/// Deep-clone an object graph from `source` into `target`.
///
/// `visited` maps source ids to their cloned target ids. Each referenced
/// source object is cloned exactly once: the target id is allocated and
/// recorded before recursing, so cyclic references resolve to the id already
/// on record. /Parent entries are skipped; the page tree back-reference is
/// patched by the caller, and the source page tree must not be pulled in.
fn clone_object(
    source: &Document,
    target: &mut Document,
    object: &Object,
    visited: &mut HashMap<ObjectId, ObjectId>,
) -> Object {
    match object {
        Object::Dictionary(dict) => {
            let mut new_dict = lopdf::Dictionary::new();
            for (key, value) in dict.iter() {
                if key == b"Parent" {
                    continue;
                }
                let cloned = clone_object(source, target, value, visited);
                new_dict.set(key.clone(), cloned);
            }
            Object::Dictionary(new_dict)
        }
        Object::Array(items) => Object::Array(
            items
                .iter()
                .map(|item| clone_object(source, target, item, visited))
                .collect(),
        ),
        Object::Reference(ref_id) => {
            if let Some(mapped) = visited.get(ref_id) {
                return Object::Reference(*mapped);
            }
            match source.get_object(*ref_id) {
                Ok(referenced) => {
                    let new_id = target.new_object_id();
                    visited.insert(*ref_id, new_id);
                    let cloned = clone_object(source, target, referenced, visited);
                    target.objects.insert(new_id, cloned);
                    Object::Reference(new_id)
                }
                // Dangling references become Null rather than failing the
                // whole clone; viewers tolerate this.
                Err(_) => Object::Null,
            }
        }
        Object::Stream(stream) => {
            let mut new_dict = lopdf::Dictionary::new();
            for (key, value) in stream.dict.iter() {
                if key == b"Parent" {
                    continue;
                }
                let cloned = clone_object(source, target, value, visited);
                new_dict.set(key.clone(), cloned);
            }
            Object::Stream(lopdf::Stream::new(new_dict, stream.content.clone()))
        }
        other => other.clone(),
    }
}
