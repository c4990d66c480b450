//! Minimal SVG document tree: parse, inspect and modify attributes, serialize.

mod attrs;
mod namespace;
mod xml;

pub use attrs::AttrMap;
pub use namespace::SVG_NAMESPACE;
pub use xml::RawXmlEvent;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, stored in its escaped (as-written) form.
    Text(String),
    Comment(String),
    CData(String),
    /// Other markup (processing instructions, DOCTYPE, entity references)
    /// retained verbatim for output.
    Other(RawXmlEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attrs: AttrMap,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: AttrMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attrs(name: impl Into<String>, attrs: AttrMap) -> Self {
        Self {
            name: name.into(),
            attrs,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attrs.insert(key, value);
    }

    pub fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut AttrMap {
        &mut self.attrs
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Iterator over the direct child elements, ignoring text etc.
    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> + '_ {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Apply `f` to this element and every descendant element, pre-order.
    pub fn visit_mut(&mut self, mut f: impl FnMut(&mut Element, usize)) {
        let mut stack: Vec<(&mut Element, usize)> = vec![(self, 0)];
        while let Some((el, depth)) = stack.pop() {
            f(el, depth);
            // reversed so children are visited in document order
            for child in el.children.iter_mut().rev() {
                if let Node::Element(child) = child {
                    stack.push((child, depth + 1));
                }
            }
        }
    }
}

/// A parsed document: the root element plus any markup before and after it.
///
/// The input's XML declaration is not retained; a fresh declaration is
/// always written on output.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) prolog: Vec<Node>,
    pub(crate) root: Element,
    pub(crate) epilog: Vec<Node>,
}

impl Document {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}
