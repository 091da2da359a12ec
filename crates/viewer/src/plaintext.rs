use dom::dom_utils::{
    append_child, class_attr, get_attr, has_class, insert_child, remove_attr, remove_child,
    set_class,
};
use dom::text::{replace_nbsp_with_space, strip_nbsp, text_content_string};
use dom::traverse::for_each_element;
use dom::{Id, Node};

use crate::index::{EMPTY_TEXT_CLASS, PLAIN_ROOT_CLASS, REAL_TEXT_CLASS};
use crate::page::PageState;

/// The detached rich subtree held while the plain view is active, together
/// with what is needed to put the page back exactly as it was. Dropped as
/// soon as the restore succeeds.
pub(crate) struct SavedRich {
    subtree: Node,
    child_pos: usize,
    body_class: Option<String>,
    plain_root: Id,
}

/// Plain-text form of one line cell: real-text spans keep their text with
/// non-breaking spaces softened to ordinary spaces; empty-text spans are
/// whitespace padding and contribute nothing visible.
fn line_plain_text(cell: &Node, out: &mut String) {
    for_each_element(cell, &mut |el| {
        if has_class(el, REAL_TEXT_CLASS) {
            out.push_str(&replace_nbsp_with_space(&text_content_string(el)));
        } else if has_class(el, EMPTY_TEXT_CLASS) {
            out.push_str(&strip_nbsp(&text_content_string(el)));
        }
    });
}

impl PageState {
    /// The whole listing as plain text, one `\n`-terminated line per
    /// indexed line (the last included).
    pub fn assemble_plain_text(&self) -> String {
        let mut out = String::new();
        for table in &self.index.tables {
            for handle in &table.lines {
                if let Some(cell) = self.element(handle.content) {
                    line_plain_text(cell, &mut out);
                }
                out.push('\n');
            }
        }
        out
    }

    /// Swap between the rich listing and its plain-text rendering. The two
    /// subtrees are mutually exclusive; toggling back restores the prior
    /// markup exactly and releases the held copy.
    pub fn toggle_plain_text(&mut self) {
        if self.saved_rich.is_some() {
            self.restore_rich();
        } else {
            self.enter_plain();
        }
    }

    fn enter_plain(&mut self) {
        let Some(rich_root) = self.index.rich_root else {
            log::warn!(target: "viewer.plaintext", "page has no rich listing root");
            return;
        };

        let text = self.assemble_plain_text();

        let body = self.index.body;
        let body_class = self
            .element(body)
            .and_then(|el| get_attr(el, "class"))
            .map(str::to_string);

        let Some((subtree, child_pos)) = remove_child(&mut self.dom, body, rich_root) else {
            log::warn!(target: "viewer.plaintext", "rich listing root is not a body child");
            return;
        };

        let plain_root = self.ids.alloc();
        let text_id = self.ids.alloc();
        let plain = Node::Element {
            id: plain_root,
            name: "pre".to_string(),
            attributes: vec![("class".to_string(), Some(PLAIN_ROOT_CLASS.to_string()))],
            style: Vec::new(),
            children: vec![Node::Text { id: text_id, text }],
        };
        append_child(&mut self.dom, body, plain);

        if let Some(el) = self.element_mut(body) {
            set_class(el, PLAIN_ROOT_CLASS);
        }

        log::debug!(target: "viewer.plaintext", "switched to plain text view");
        self.saved_rich = Some(SavedRich {
            subtree,
            child_pos,
            body_class,
            plain_root,
        });
    }

    fn restore_rich(&mut self) {
        // Take the holder first so it is released even if the page was
        // mutated out from under us.
        let Some(saved) = self.saved_rich.take() else {
            return;
        };
        let body = self.index.body;

        let _ = remove_child(&mut self.dom, body, saved.plain_root);
        insert_child(&mut self.dom, body, saved.child_pos, saved.subtree);

        if let Some(el) = self.element_mut(body) {
            match saved.body_class.as_deref() {
                Some(class) => set_class(el, class),
                None => remove_attr(el, "class"),
            }
        }
        log::debug!(target: "viewer.plaintext", "restored rich view");
    }

    /// Mode class currently on the body, for hosts mirroring it elsewhere.
    pub fn body_mode_class(&self) -> String {
        self.element(self.index.body)
            .map(|el| class_attr(el).to_string())
            .unwrap_or_default()
    }
}
